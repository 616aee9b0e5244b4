#![deny(unsafe_code)]
//! Core types and traits for drift, a grid particle-advection toy.
//!
//! Provides the `Engine` trait, the `Field` scalar grid, separable Gaussian
//! blur, the `Xorshift64` random source, `Palette`/`Srgb` for rasterizing,
//! `RunConfig`, and JSON parameter helpers.

pub mod blur;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod palette;
pub mod params;
pub mod prng;

pub use color::Srgb;
pub use config::RunConfig;
pub use engine::Engine;
pub use error::EngineError;
pub use field::Field;
pub use palette::Palette;
pub use prng::{RandomSource, Xorshift64};
