//! Commands and wire types shared across the crate.
//!
//! [`EditorCommand`] is the vocabulary a front end uses to drive the layout
//! engine: the drag lifecycle (`BeginMove` / `UpdateMove` / `EndMove`), the
//! rotate click, and the final `Apply`.  [`MonitorRecord`] is the shape of
//! one entry in the detection snapshot handed in by a
//! [`MonitorSource`](crate::traits::MonitorSource).

use serde::{Deserialize, Serialize};

/// One entry in a detection snapshot, in device pixels.
///
/// `transform` is optional on the wire and defaults to 0.  All other fields
/// are required; a snapshot entry missing one of them is skipped by the
/// source rather than failing the whole snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorRecord {
    /// Unique name the compositor uses for this monitor (e.g. `"DP-1"`).
    pub name: String,
    /// Horizontal resolution in device pixels.
    pub width: u32,
    /// Vertical resolution in device pixels.
    pub height: u32,
    /// X position on the virtual desktop (device pixels).
    pub x: i32,
    /// Y position on the virtual desktop (device pixels).
    pub y: i32,
    /// Rotation in 90° steps.
    #[serde(default)]
    pub transform: u8,
}

/// Every action a front end can perform on the layout.
///
/// Commands are produced by [`CommandSource`](crate::traits::CommandSource)
/// implementations and consumed by the
/// [`LayoutEditor`](crate::editor::LayoutEditor).  Monitors are addressed
/// by name; a command naming an unknown monitor is an error, not a panic.
///
/// The drag lifecycle is `BeginMove` → any number of `UpdateMove` →
/// `EndMove`.  Positions in `UpdateMove` are in editor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorCommand {
    /// A drag has started on the named monitor.  Re-records its current
    /// position as the last known good one.
    BeginMove { name: String },

    /// The pointer moved during a drag.  The engine applies its fallback
    /// ladder, so the monitor may land on a partially applied or reverted
    /// position rather than exactly `(x, y)`.
    UpdateMove { name: String, x: i32, y: i32 },

    /// The drag ended.  The monitor snaps to the nearest valid
    /// flush-aligned position against a neighbor, if one exists.
    EndMove { name: String },

    /// Rotate the named monitor one 90° step.  Reverted if the rotated
    /// monitor would overlap a neighbor.
    ToggleRotate { name: String },

    /// Enforce one connected, overlap-free cluster and write the monitor
    /// configuration out.
    ///
    /// On the wire this is encoded as the JSON string `"Apply"`.
    Apply,
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monitor_record_transform_defaults_to_zero() {
        let json = r#"{"name":"DP-1","width":1920,"height":1080,"x":0,"y":0}"#;
        let r: MonitorRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.transform, 0);
    }

    #[test]
    fn monitor_record_missing_field_is_an_error() {
        let json = r#"{"name":"DP-1","width":1920,"height":1080,"x":0}"#;
        assert!(serde_json::from_str::<MonitorRecord>(json).is_err());
    }

    #[test]
    fn monitor_record_ignores_unknown_fields() {
        // Real `hyprctl -j monitors` output carries many more fields.
        let json = r#"{
            "name": "DP-1", "width": 1920, "height": 1080,
            "x": 0, "y": 0, "transform": 1,
            "refreshRate": 143.99, "focused": true
        }"#;
        let r: MonitorRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.name, "DP-1");
        assert_eq!(r.transform, 1);
    }

    #[test]
    fn commands_round_trip_through_json() {
        let cmds = vec![
            EditorCommand::BeginMove { name: "DP-1".into() },
            EditorCommand::UpdateMove {
                name: "DP-1".into(),
                x: 42,
                y: -7,
            },
            EditorCommand::EndMove { name: "DP-1".into() },
            EditorCommand::ToggleRotate { name: "DP-1".into() },
            EditorCommand::Apply,
        ];
        for cmd in cmds {
            let text = serde_json::to_string(&cmd).unwrap();
            let back: EditorCommand = serde_json::from_str(&text).unwrap();
            assert_eq!(back, cmd);
        }
    }

    #[test]
    fn apply_is_a_plain_string_on_the_wire() {
        let cmd: EditorCommand = serde_json::from_str(r#""Apply""#).unwrap();
        assert_eq!(cmd, EditorCommand::Apply);
    }

    #[test]
    fn update_move_wire_shape() {
        let cmd: EditorCommand =
            serde_json::from_str(r#"{"UpdateMove":{"name":"DP-2","x":10,"y":20}}"#).unwrap();
        assert_eq!(
            cmd,
            EditorCommand::UpdateMove {
                name: "DP-2".into(),
                x: 10,
                y: 20
            }
        );
    }
}
