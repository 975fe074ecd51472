//! Persisted window geometry.
//!
//! Only the position and size of the last visible screen survive a restart.
//! The file is read once at startup and written once at shutdown.

use anyhow::{Context, Result};
use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_WIDTH: u16 = 36;
pub const DEFAULT_HEIGHT: u16 = 20;
pub const MIN_WIDTH: u16 = 30;
pub const MIN_HEIGHT: u16 = 16;

/// Window position and size in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPlacement {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl WindowPlacement {
    /// A default-sized window centered in `viewport`.
    pub fn centered(viewport: Rect) -> Self {
        let width = DEFAULT_WIDTH.min(viewport.width);
        let height = DEFAULT_HEIGHT.min(viewport.height);
        Self {
            x: viewport.x + viewport.width.saturating_sub(width) / 2,
            y: viewport.y + viewport.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    /// The on-screen rectangle: size shrunk to fit, then position pulled
    /// back so the whole window is visible.
    pub fn fit_within(&self, viewport: Rect) -> Rect {
        let width = self.width.max(MIN_WIDTH).min(viewport.width);
        let height = self.height.max(MIN_HEIGHT).min(viewport.height);
        let max_x = viewport.right().saturating_sub(width);
        let max_y = viewport.bottom().saturating_sub(height);
        Rect::new(
            self.x.clamp(viewport.x, max_x.max(viewport.x)),
            self.y.clamp(viewport.y, max_y.max(viewport.y)),
            width,
            height,
        )
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PlacementFile {
    window: WindowPlacement,
}

fn placement_path() -> PathBuf {
    super::config_dir().join("placement.toml")
}

/// Read the saved placement. Missing or unreadable files yield `None`.
pub fn load_placement() -> Option<WindowPlacement> {
    let path = placement_path();
    match load_placement_from(&path) {
        Ok(placement) => placement,
        Err(e) => {
            warn!(path = %path.display(), "ignoring saved placement: {:#}", e);
            None
        }
    }
}

pub fn load_placement_from(path: &Path) -> Result<Option<WindowPlacement>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read placement from {}", path.display()))?;
    let file: PlacementFile =
        toml::from_str(&contents).with_context(|| "Failed to parse placement file")?;
    Ok(Some(file.window))
}

pub fn save_placement(placement: &WindowPlacement) -> Result<()> {
    save_placement_to(&placement_path(), placement)
}

pub fn save_placement_to(path: &Path, placement: &WindowPlacement) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let file = PlacementFile { window: *placement };
    let contents =
        toml::to_string_pretty(&file).with_context(|| "Failed to serialize placement")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write placement to {}", path.display()))?;
    Ok(())
}
