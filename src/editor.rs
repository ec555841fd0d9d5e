//! The main orchestrator that ties the layout, exporter, and command
//! sources together.
//!
//! [`LayoutEditor`] owns the [`Layout`] and reacts to [`EditorCommand`]s by
//! driving the engine's operations: the drag ladder during `UpdateMove`,
//! the snap on `EndMove`, and the enforce-then-export pipeline on `Apply`.
//! Any front end — desktop GUI, web canvas, terminal UI — drives it through
//! the same command vocabulary.

use crate::command::EditorCommand;
use crate::export::{ExportError, LayoutExporter};
use crate::layout::Layout;
use log::{debug, info};

/// Possible errors from the editor.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// A command addressed a monitor that is not in the layout.
    #[error("unknown monitor: {0}")]
    UnknownMonitor(String),

    /// Writing the configuration failed.
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

/// Drives a [`Layout`] from [`EditorCommand`]s.
///
/// # Typical usage
///
/// ```ignore
/// let layout = Layout::from_records(&source.snapshot()?);
/// let mut editor = LayoutEditor::new(layout, exporter);
/// editor.handle(EditorCommand::BeginMove { name: "DP-1".into() })?;
/// editor.handle(EditorCommand::UpdateMove { name: "DP-1".into(), x: 40, y: 0 })?;
/// editor.handle(EditorCommand::EndMove { name: "DP-1".into() })?;
/// editor.handle(EditorCommand::Apply)?;
/// ```
pub struct LayoutEditor {
    layout: Layout,
    exporter: LayoutExporter,
}

impl LayoutEditor {
    /// Create an editor over `layout`, exporting through `exporter`.
    pub fn new(layout: Layout, exporter: LayoutExporter) -> Self {
        Self { layout, exporter }
    }

    /// Shared access to the layout, e.g. for rendering.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Handle one command.
    pub fn handle(&mut self, command: EditorCommand) -> Result<(), EditorError> {
        match command {
            EditorCommand::BeginMove { name } => {
                let idx = self.resolve(&name)?;
                debug!("begin move: {}", name);
                self.layout.begin_move(idx);
            }
            EditorCommand::UpdateMove { name, x, y } => {
                let idx = self.resolve(&name)?;
                self.layout.move_to(idx, x, y);
            }
            EditorCommand::EndMove { name } => {
                let idx = self.resolve(&name)?;
                if self.layout.snap_to_neighbors(idx) {
                    let m = &self.layout.monitors()[idx];
                    debug!("{} snapped to ({}, {})", name, m.x(), m.y());
                }
            }
            EditorCommand::ToggleRotate { name } => {
                let idx = self.resolve(&name)?;
                self.layout.toggle_rotate(idx);
                debug!(
                    "{} transform is now {}",
                    name,
                    self.layout.monitors()[idx].transform()
                );
            }
            EditorCommand::Apply => {
                self.layout.enforce_connected();
                self.exporter.export(&self.layout)?;
                info!("layout applied");
            }
        }
        Ok(())
    }

    fn resolve(&self, name: &str) -> Result<usize, EditorError> {
        self.layout
            .index_of(name)
            .ok_or_else(|| EditorError::UnknownMonitor(name.to_string()))
    }
}

//  Tests
