//! [`MonitorSource`] implementation backed by Hyprland IPC.
//!
//! Communicates directly with Hyprland through its Unix socket at
//! `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket.sock`,
//! avoiding any shell command invocation or third-party crate for socket
//! discovery.

use crate::command::MonitorRecord;
use crate::traits::MonitorSource;
use log::warn;
use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

/// Hyprland-backed monitor source.
///
/// All communication happens over Hyprland's IPC socket
/// (`$XDG_RUNTIME_DIR/hypr/<instance>/.socket.sock`).  No child processes
/// are spawned.
pub struct HyprlandMonitors;

/// Errors that can occur when talking to Hyprland.
#[derive(Debug, thiserror::Error)]
#[error("hyprland IPC error: {0}")]
pub struct HyprlandIpcError(String);

impl Default for HyprlandMonitors {
    fn default() -> Self {
        Self
    }
}

impl HyprlandMonitors {
    /// Create a new handle.
    ///
    /// No connection is opened eagerly; each snapshot opens a short-lived
    /// IPC request.
    pub fn new() -> Self {
        Self
    }
}

//  Direct Hyprland IPC helpers

/// Resolve the Hyprland command socket path.
///
/// Hyprland ≥ 0.40 stores its sockets at
/// `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket.sock`.
fn socket_path() -> Result<PathBuf, HyprlandIpcError> {
    let runtime_dir = std::env::var("XDG_RUNTIME_DIR")
        .map_err(|_| HyprlandIpcError("XDG_RUNTIME_DIR not set".into()))?;
    let his = std::env::var("HYPRLAND_INSTANCE_SIGNATURE")
        .map_err(|_| HyprlandIpcError("HYPRLAND_INSTANCE_SIGNATURE not set".into()))?;
    Ok(PathBuf::from(format!(
        "{}/hypr/{}/.socket.sock",
        runtime_dir, his
    )))
}

/// Send a raw command to the Hyprland command socket and return the
/// response as a string.
fn ipc_request(command: &str) -> Result<String, HyprlandIpcError> {
    let path = socket_path()?;
    let mut stream = UnixStream::connect(&path)
        .map_err(|e| HyprlandIpcError(format!("connect to {}: {}", path.display(), e)))?;

    stream
        .write_all(command.as_bytes())
        .map_err(|e| HyprlandIpcError(format!("write: {}", e)))?;

    let mut response = Vec::new();
    stream
        .read_to_end(&mut response)
        .map_err(|e| HyprlandIpcError(format!("read: {}", e)))?;

    String::from_utf8(response).map_err(|e| HyprlandIpcError(format!("utf-8: {}", e)))
}

/// Send a JSON data query (`j/<command>`) and return the raw JSON string.
fn ipc_json(data_command: &str) -> Result<String, HyprlandIpcError> {
    ipc_request(&format!("j/{}", data_command))
}

/// Decode a `j/monitors` response into records, skipping malformed
/// entries individually.
///
/// Hyprland's output carries many more fields than [`MonitorRecord`];
/// anything extra is ignored.  An entry missing a required field, or with
/// an empty name, is dropped with a warning and the rest of the snapshot
/// survives.
fn parse_snapshot(json: &str) -> Result<Vec<MonitorRecord>, HyprlandIpcError> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| HyprlandIpcError(format!("parse: {}", e)))?;

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<MonitorRecord>(entry) {
            Ok(record) if record.name.is_empty() => {
                warn!("skipping monitor record with empty name");
            }
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("skipping malformed monitor record: {}", e);
            }
        }
    }
    Ok(records)
}

//  MonitorSource implementation

impl MonitorSource for HyprlandMonitors {
    type Error = HyprlandIpcError;

    fn snapshot(&self) -> Result<Vec<MonitorRecord>, Self::Error> {
        let json = ipc_json("monitors")?;
        parse_snapshot(&json)
    }
}

//  Tests
