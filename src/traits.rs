//! Core traits that decouple the layout engine from any specific
//! compositor or transport mechanism.
//!
//! Every concrete backend (Hyprland IPC, a Unix-socket listener, a test
//! harness, …) implements one of these traits.  The
//! [`LayoutEditor`](crate::editor::LayoutEditor) and the engine in
//! [`crate::layout`] only ever see the abstractions.

use crate::command::{EditorCommand, MonitorRecord};
use std::sync::mpsc;

/// A source of detection snapshots: "what monitors are attached, where,
/// and at what resolution".
///
/// Called once per session; the result is handed to the engine as a value.
/// The engine itself has no knowledge of sockets, subprocesses, or any
/// other discovery mechanism.
pub trait MonitorSource {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Produce a snapshot of the currently attached monitors.
    ///
    /// Individual malformed records must be skipped by the implementation,
    /// not surfaced as errors; `Err` means the source as a whole is
    /// unavailable, which callers treat as "no monitors detected".
    fn snapshot(&self) -> Result<Vec<MonitorRecord>, Self::Error>;
}

/// A source of [`EditorCommand`]s.
///
/// Implementations listen on some transport — a Unix socket, an in-memory
/// channel, a test harness — and forward parsed commands into the provided
/// [`mpsc::Sender`].
///
/// # Contract
///
/// * [`run`](CommandSource::run) **blocks** until the source is exhausted
///   or an unrecoverable error occurs.
/// * Each received command must be sent through `sink` exactly once.
/// * Implementations must be [`Send`] so they can run on a dedicated
///   thread.
pub trait CommandSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Start listening and forward every incoming [`EditorCommand`] into
    /// `sink`.
    ///
    /// This method blocks the calling thread.  To run multiple sources
    /// concurrently, spawn each one on its own thread.
    fn run(&mut self, sink: mpsc::Sender<EditorCommand>) -> Result<(), Self::Error>;
}
