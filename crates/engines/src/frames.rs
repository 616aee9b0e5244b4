//! Frame loop: step an engine and persist one PNG per frame.
//!
//! Frames are written as `Frame-<index>.png` into the output directory,
//! which is created if absent. Any write failure aborts the run; frames
//! already on disk are left in place.

use drift_core::config::RunConfig;
use drift_core::error::EngineError;
use drift_core::palette::Palette;
use drift_core::Engine;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::snapshot::write_png;

/// Path of frame `index` inside `dir`.
pub fn frame_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("Frame-{index}.png"))
}

/// Creates `dir` and any missing parents.
pub fn ensure_output_dir(dir: &Path) -> Result<(), EngineError> {
    fs::create_dir_all(dir)
        .map_err(|e| EngineError::Io(format!("cannot create {}: {e}", dir.display())))
}

/// Runs `frames` steps of `engine`, writing each finished frame through `palette`.
///
/// Frame files are numbered by the engine's own frame counter, so a resumed
/// engine continues the sequence. Returns the written paths in order.
pub fn render_frames(
    engine: &mut dyn Engine,
    frames: usize,
    palette: &Palette,
    dir: &Path,
) -> Result<Vec<PathBuf>, EngineError> {
    ensure_output_dir(dir)?;
    let mut written = Vec::with_capacity(frames);
    for _ in 0..frames {
        let index = engine.frames_done();
        engine.step()?;
        let path = frame_path(dir, index);
        write_png(engine.field(), palette, &path)?;
        info!("Done with frame {index} -> {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Writes `config` as pretty JSON to its manifest path, creating the output directory.
pub fn write_manifest(config: &RunConfig) -> Result<PathBuf, EngineError> {
    ensure_output_dir(&config.output_dir)?;
    let path = config.manifest_path();
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| EngineError::Io(format!("cannot serialize run config: {e}")))?;
    fs::write(&path, json)
        .map_err(|e| EngineError::Io(format!("cannot write {}: {e}", path.display())))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineKind;
    use serde_json::json;

    fn engine(seed: u64) -> EngineKind {
        EngineKind::from_name("advection", 12, seed, &json!({"sigma": 1.5})).unwrap()
    }

    #[test]
    fn render_frames_writes_numbered_pngs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("Export");
        let mut eng = engine(4);

        let paths = render_frames(&mut eng, 3, &Palette::default(), &out).unwrap();

        assert_eq!(paths.len(), 3);
        for (i, p) in paths.iter().enumerate() {
            assert_eq!(p, &out.join(format!("Frame-{i}.png")));
            let img = image::open(p).unwrap();
            assert_eq!((img.width(), img.height()), (12, 12));
        }
        assert_eq!(eng.frames_done(), 3);
    }

    #[test]
    fn render_frames_continues_numbering() {
        let dir = tempfile::tempdir().unwrap();
        let mut eng = engine(4);
        render_frames(&mut eng, 2, &Palette::default(), dir.path()).unwrap();
        let more = render_frames(&mut eng, 1, &Palette::default(), dir.path()).unwrap();
        assert_eq!(more, vec![dir.path().join("Frame-2.png")]);
    }

    #[test]
    fn zero_frames_only_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty");
        let paths = render_frames(&mut engine(1), 0, &Palette::default(), &out).unwrap();
        assert!(paths.is_empty());
        assert!(out.is_dir());
    }

    #[test]
    fn unwritable_output_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // a regular file where the directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();
        let err = render_frames(&mut engine(1), 1, &Palette::default(), &blocker).unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }

    #[test]
    fn manifest_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = RunConfig::new("advection", 12, 5);
        config.output_dir = dir.path().join("run");
        let path = write_manifest(&config).unwrap();
        let restored: RunConfig =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(restored, config);
    }
}
