#![deny(unsafe_code)]
//! CLI binary for drift, the grid particle advection renderer.
//!
//! With no subcommand it renders a frame sequence using the flags below
//! (all optional). Subcommands:
//! - `list` prints available engines and palettes

mod error;

use clap::{Args, Parser, Subcommand};
use drift_core::config::{DEFAULT_BOUNDS, DEFAULT_FRAMES, DEFAULT_OUTPUT_DIR};
use drift_core::{Engine, Palette, RunConfig, Xorshift64};
use drift_engines::frames::{render_frames, write_manifest};
use drift_engines::EngineKind;
use error::CliError;
use log::info;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "drift", about = "Particle advection through a smoothed random force field")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    render: RenderArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct RenderArgs {
    /// Engine name.
    #[arg(long, default_value = "advection")]
    engine: String,

    /// Grid side length in cells.
    #[arg(short, long, default_value_t = DEFAULT_BOUNDS)]
    bounds: usize,

    /// Force field smoothing sigma; overrides `sigma` in --params.
    #[arg(long)]
    sigma: Option<f64>,

    /// Number of frames to render.
    #[arg(short, long, default_value_t = DEFAULT_FRAMES)]
    frames: usize,

    /// PRNG seed; derived from the clock when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Palette name (viridis, monochrome, ocean, fire).
    #[arg(short, long, default_value = "viridis")]
    palette: String,

    /// Output directory for frames and run.json.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Engine parameters as a JSON object.
    #[arg(long, default_value = "{}")]
    params: String,
}

#[derive(Subcommand)]
enum Command {
    /// List available engines and palettes.
    List,
}

/// Turns the flags into a validated [`RunConfig`] and the palette it names.
fn build_config(args: RenderArgs) -> Result<(RunConfig, Palette), CliError> {
    let mut params: serde_json::Value =
        serde_json::from_str(&args.params).map_err(|e| CliError::Params(e.to_string()))?;
    let Some(obj) = params.as_object_mut() else {
        return Err(CliError::Params("expected a JSON object".to_string()));
    };
    if let Some(sigma) = args.sigma {
        obj.insert("sigma".to_string(), serde_json::json!(sigma));
    }

    let palette = Palette::from_name(&args.palette).map_err(CliError::Palette)?;

    let seed = args.seed.unwrap_or_else(Xorshift64::clock_seed);
    let mut config = RunConfig::new(&args.engine, args.bounds, seed);
    config.frames = args.frames;
    config.params = params;
    config.palette = args.palette;
    config.output_dir = args.output;
    config.validate()?;
    Ok((config, palette))
}

fn render(mut config: RunConfig, palette: &Palette, json: bool) -> Result<(), CliError> {
    let mut eng = EngineKind::from_name(&config.engine, config.bounds, config.seed, &config.params)?;

    // record the effective params, defaults included
    config.params = eng.params();
    let manifest = write_manifest(&config).map_err(|source| CliError::Manifest {
        dir: config.output_dir.clone(),
        source,
    })?;
    info!(
        "Rendering {} frames of {} ({}x{}, seed {}) into {}",
        config.frames,
        config.engine,
        config.bounds,
        config.bounds,
        config.seed,
        config.output_dir.display()
    );

    let written = render_frames(&mut eng, config.frames, palette, &config.output_dir)
        .map_err(|e| CliError::frames(config.output_dir.clone(), e))?;

    if json {
        let info = serde_json::json!({
            "engine": config.engine,
            "bounds": config.bounds,
            "frames": written.len(),
            "seed": config.seed,
            "params": config.params,
            "output": config.output_dir.display().to_string(),
            "manifest": manifest.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        eprintln!(
            "rendered {} ({}x{}, {} frames, seed {}) -> {}",
            config.engine,
            config.bounds,
            config.bounds,
            written.len(),
            config.seed,
            config.output_dir.display()
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Some(Command::List) => {
            let engines = EngineKind::list_engines();
            let palettes = Palette::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "engines": engines,
                    "palettes": palettes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Engines:");
                for name in engines {
                    println!("  {name}");
                }
                println!("Palettes:");
                println!("  {}", palettes.join(", "));
            }
            Ok(())
        }
        None => {
            let (config, palette) = build_config(cli.render)?;
            render(config, &palette, cli.json)
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
