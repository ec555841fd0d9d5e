//! Hyprland-specific implementations.
//!
//! This module provides the concrete
//! [`MonitorSource`](crate::traits::MonitorSource) backend, powered by
//! Hyprland's IPC socket.
//!
//! Nothing outside this module should reference Hyprland directly.

pub mod source;
