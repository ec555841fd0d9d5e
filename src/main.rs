//! Entry point for the **hyprmon** daemon.
//!
//! Queries the monitor snapshot once, then processes editor commands from
//! the Unix socket on the main thread until all sources close.  With
//! `--apply`, skips the command loop entirely: enforce a connected layout
//! and write the config in one shot.

use hyprmon::command::EditorCommand;
use hyprmon::config::Config;
use hyprmon::editor::LayoutEditor;
use hyprmon::export::LayoutExporter;
use hyprmon::hyprland::source::HyprlandMonitors;
use hyprmon::ipc::listener::UnixSocketListener;
use hyprmon::layout::Layout;
use hyprmon::traits::{CommandSource, MonitorSource};
use log::{error, info};
use std::sync::mpsc;

/// Default socket path for the command listener.
fn default_socket_path() -> String {
    let runtime = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".into());
    format!("{}/hyprmon.sock", runtime)
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/hyprmon`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("hyprmon")
}

/// Try to load the config from `$XDG_CONFIG_HOME/hyprmon/config.json`,
/// falling back to compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

/// Build the editor: one detection snapshot, one layout, one exporter.
fn build_editor(config: &Config) -> LayoutEditor {
    let source = HyprlandMonitors::new();
    let records = match source.snapshot() {
        Ok(records) => {
            info!("found {} monitor(s)", records.len());
            records
        }
        Err(e) => {
            error!("failed to query monitors: {} — starting empty", e);
            Vec::new()
        }
    };

    let exporter = LayoutExporter::new(
        &config.monitors_conf,
        &config.hyprland_conf,
        &config.source_line,
    );
    LayoutEditor::new(Layout::from_records(&records), exporter)
}

fn main() {
    env_logger::init();

    let config = load_config();
    let mut editor = build_editor(&config);

    if std::env::args().any(|a| a == "--apply") {
        // One-shot batch mode: no front end, just repair and write.
        if let Err(e) = editor.handle(EditorCommand::Apply) {
            error!("apply failed: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let socket_path = config
        .socket_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(default_socket_path);

    let (cmd_tx, cmd_rx) = mpsc::channel::<EditorCommand>();
    std::thread::spawn(move || {
        let mut source = UnixSocketListener::new(&socket_path);
        if let Err(e) = source.run(cmd_tx) {
            error!("socket listener error: {}", e);
        }
    });

    info!("hyprmon running");
    for cmd in cmd_rx {
        if let Err(e) = editor.handle(cmd) {
            error!("command error: {}", e);
        }
    }
    info!("all command sources closed, exiting");
}
