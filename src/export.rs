//! Projecting a layout into Hyprland monitor configuration.
//!
//! The projector normalizes all logical bounds to a non-negative origin,
//! scales editor units back to device pixels, and renders one
//! `monitor = ...` line per monitor in canonical order:
//!
//! ```text
//! monitor = DP-1,1920x1080,0x0,1,transform,0
//! monitor = HDMI-A-1,1920x1080,1900x0,1,transform,3
//! ```
//!
//! The config file is replaced wholesale on every export (written to a
//! temporary sibling and renamed into place, so a failed write never leaves
//! a partial file).  A `source=` directive pointing at the config file is
//! appended once to the main Hyprland config if — and only if — that file
//! already exists.

use crate::geometry::{logical_bounds, SCALE};
use crate::layout::Layout;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Errors from writing the monitor configuration.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes a [`Layout`] out as Hyprland monitor configuration.
pub struct LayoutExporter {
    /// The monitor config file this exporter owns and fully rewrites.
    monitors_conf: PathBuf,
    /// The user's main Hyprland config, which should `source` ours.
    hyprland_conf: PathBuf,
    /// The exact directive line to ensure in `hyprland_conf`.
    source_line: String,
}

impl LayoutExporter {
    /// Create an exporter for the given paths.
    ///
    /// `source_line` is matched and appended verbatim, so it should use the
    /// same path spelling (`~/...`) the user would write by hand.
    pub fn new(
        monitors_conf: impl Into<PathBuf>,
        hyprland_conf: impl Into<PathBuf>,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            monitors_conf: monitors_conf.into(),
            hyprland_conf: hyprland_conf.into(),
            source_line: source_line.into(),
        }
    }

    /// The monitor config file path.
    pub fn monitors_conf(&self) -> &Path {
        &self.monitors_conf
    }

    /// Render one `monitor = ...` line per monitor, canonical order.
    ///
    /// Offsets are the monitor's logical bounds relative to the layout's
    /// top-left corner, re-scaled to device pixels: non-negative, with at
    /// least one `0` on each axis.  Resolution is the *native* one — the
    /// editor-scaled size never leaks into the config.
    pub fn render_lines(&self, layout: &Layout) -> Vec<String> {
        let min_x = layout
            .monitors()
            .iter()
            .map(|m| logical_bounds(m).min_x())
            .fold(f64::INFINITY, f64::min);
        let min_y = layout
            .monitors()
            .iter()
            .map(|m| logical_bounds(m).min_y())
            .fold(f64::INFINITY, f64::min);

        layout
            .monitors()
            .iter()
            .map(|m| {
                let bounds = logical_bounds(m);
                let config_x = ((bounds.min_x() - min_x) * SCALE).round() as i64;
                let config_y = ((bounds.min_y() - min_y) * SCALE).round() as i64;
                format!(
                    "monitor = {},{}x{},{}x{},1,transform,{}",
                    m.name(),
                    m.native_width(),
                    m.native_height(),
                    config_x,
                    config_y,
                    m.transform()
                )
            })
            .collect()
    }

    /// Write the monitor config file, replacing any previous content.
    ///
    /// Parent directories are created as needed.  The content is written to
    /// a temporary file next to the target and renamed into place.
    pub fn write_config(&self, layout: &Layout) -> Result<(), ExportError> {
        if let Some(parent) = self.monitors_conf.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut contents = self.render_lines(layout).join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }

        let tmp = self.monitors_conf.with_extension("conf.new");
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, &self.monitors_conf)?;
        info!(
            "wrote {} monitor(s) to {}",
            layout.len(),
            self.monitors_conf.display()
        );
        Ok(())
    }

    /// Append the `source=` directive to the main Hyprland config, once.
    ///
    /// Skipped silently when the main config does not exist — this crate
    /// never creates or restructures the user's own config file.
    pub fn ensure_source_directive(&self) -> Result<(), ExportError> {
        if !self.hyprland_conf.exists() {
            debug!(
                "{} does not exist, not adding source directive",
                self.hyprland_conf.display()
            );
            return Ok(());
        }
        let contents = std::fs::read_to_string(&self.hyprland_conf)?;
        if contents.contains(&self.source_line) {
            return Ok(());
        }
        let mut updated = contents;
        updated.push('\n');
        updated.push_str(&self.source_line);
        updated.push('\n');
        std::fs::write(&self.hyprland_conf, updated)?;
        info!(
            "added source directive to {}",
            self.hyprland_conf.display()
        );
        Ok(())
    }

    /// Full export: write the config file, then ensure the directive.
    pub fn export(&self, layout: &Layout) -> Result<(), ExportError> {
        self.write_config(layout)?;
        self.ensure_source_directive()
    }
}

//  Tests
