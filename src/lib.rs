//! **hyprmon** — a visual monitor layout editor engine for Hyprland.
//!
//! Monitors are dragged around a scaled-down editor canvas and the
//! resulting arrangement is written out as `monitor = ...` configuration
//! lines.  The engine guarantees the exported layout is a single connected,
//! overlap-free cluster: drags degrade gracefully along a fallback ladder,
//! releases snap flush against the nearest neighbor, and a final
//! enforcement pass repairs whatever the user left disconnected.
//!
//! # Architecture
//!
//! The crate is organised around two core traits:
//!
//! * [`traits::MonitorSource`] — abstracts hardware discovery so the
//!   engine is not coupled to any specific compositor; a snapshot of
//!   monitor records is handed in as a value, once per session.
//! * [`traits::CommandSource`] — abstracts the transport that delivers
//!   user intent (a Unix socket, a GUI event loop, a test harness, …) so
//!   the editor is not coupled to any specific front end.
//!
//! Concrete implementations live in [`hyprland`] (Hyprland IPC) and
//! [`ipc`] (Unix-socket command listener).  The geometric core —
//! [`geometry`], [`layout`] — is pure and synchronous: every operation
//! completes before returning and always leaves the layout in a defined,
//! non-overlapping-or-reverted state.

pub mod command;
pub mod config;
pub mod editor;
pub mod export;
pub mod geometry;
pub mod hyprland;
pub mod ipc;
pub mod layout;
pub mod monitor;
pub mod traits;
