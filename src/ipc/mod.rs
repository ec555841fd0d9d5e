//! IPC listener that accepts editor commands over a Unix socket.
//!
//! Front ends (a GUI shell, scripts, key-bind helpers, etc.) connect to
//! the socket and send newline-delimited JSON commands.

pub mod listener;
