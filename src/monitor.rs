//! The monitor entity: one physical display under editing.
//!
//! A [`Monitor`] is constructed once from a detection snapshot record and
//! then mutated through the layout operations in [`crate::layout`].  It
//! carries its own *last good position* — the most recent position known to
//! be overlap-free — which the move ladder and snap engine fall back to.

use crate::command::MonitorRecord;
use crate::geometry::SCALE;

/// Smallest editor-unit dimension a monitor can have.  Keeps tiny or
/// degenerate native modes draggable.
pub const MIN_EDITOR_SIZE: i32 = 10;

/// One physical display in the editor.
///
/// `width`/`height` are in editor units (native pixels divided by
/// [`SCALE`], floored at [`MIN_EDITOR_SIZE`]); `native_width` /
/// `native_height` keep the original device pixel dimensions for export.
/// `transform` counts 90° rotation steps and is always in `0..4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    name: String,
    native_width: u32,
    native_height: u32,
    width: i32,
    height: i32,
    x: i32,
    y: i32,
    transform: u8,
    last_good: (i32, i32),
}

impl Monitor {
    /// Build a monitor from a detection snapshot record.
    ///
    /// Native dimensions are scaled down to editor units; the detected
    /// position is scaled the same way and becomes the initial last-good
    /// position.
    pub fn from_record(record: &MonitorRecord) -> Self {
        let x = (record.x as f64 / SCALE) as i32;
        let y = (record.y as f64 / SCALE) as i32;
        Self {
            name: record.name.clone(),
            native_width: record.width,
            native_height: record.height,
            width: ((record.width as f64 / SCALE) as i32).max(MIN_EDITOR_SIZE),
            height: ((record.height as f64 / SCALE) as i32).max(MIN_EDITOR_SIZE),
            x,
            y,
            transform: record.transform % 4,
            last_good: (x, y),
        }
    }

    //  Accessors

    /// Stable identity — the compositor's name for this display.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Original horizontal resolution in device pixels.
    pub fn native_width(&self) -> u32 {
        self.native_width
    }

    /// Original vertical resolution in device pixels.
    pub fn native_height(&self) -> u32 {
        self.native_height
    }

    /// Width in editor units.  Always ≥ [`MIN_EDITOR_SIZE`].
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in editor units.  Always ≥ [`MIN_EDITOR_SIZE`].
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Current top-left X in editor units.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Current top-left Y in editor units.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Rotation in 90° steps, always in `0..4`.
    pub fn transform(&self) -> u8 {
        self.transform
    }

    /// The most recent position known to be overlap-free.
    pub fn last_good(&self) -> (i32, i32) {
        self.last_good
    }

    //  Mutators

    /// Move the monitor.  Does not validate overlap — the layout operations
    /// in [`crate::layout`] are responsible for that.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Set the rotation, reduced modulo 4.  Rotation is orientation
    /// metadata only; it never swaps the editor footprint.
    pub fn set_transform(&mut self, transform: u8) {
        self.transform = transform % 4;
    }

    /// Record the current position as the last known good one.
    pub fn commit_position(&mut self) {
        self.last_good = (self.x, self.y);
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MonitorRecord {
        MonitorRecord {
            name: "DP-1".into(),
            width: 2560,
            height: 1440,
            x: 1920,
            y: 0,
            transform: 0,
        }
    }

    #[test]
    fn from_record_scales_to_editor_units() {
        let m = Monitor::from_record(&record());
        assert_eq!(m.width(), 256);
        assert_eq!(m.height(), 144);
        assert_eq!(m.x(), 192);
        assert_eq!(m.y(), 0);
        assert_eq!(m.native_width(), 2560);
        assert_eq!(m.native_height(), 1440);
    }

    #[test]
    fn tiny_native_mode_is_floored() {
        let m = Monitor::from_record(&MonitorRecord {
            name: "X".into(),
            width: 64,
            height: 48,
            x: 0,
            y: 0,
            transform: 0,
        });
        assert_eq!(m.width(), MIN_EDITOR_SIZE);
        assert_eq!(m.height(), MIN_EDITOR_SIZE);
    }

    #[test]
    fn initial_last_good_is_detected_position() {
        let m = Monitor::from_record(&record());
        assert_eq!(m.last_good(), (m.x(), m.y()));
    }

    #[test]
    fn set_transform_reduces_modulo_four() {
        let mut m = Monitor::from_record(&record());
        m.set_transform(5);
        assert_eq!(m.transform(), 1);
        m.set_transform(4);
        assert_eq!(m.transform(), 0);
    }

    #[test]
    fn out_of_range_snapshot_transform_is_reduced() {
        let m = Monitor::from_record(&MonitorRecord {
            transform: 7,
            ..record()
        });
        assert_eq!(m.transform(), 3);
    }

    #[test]
    fn commit_position_updates_last_good() {
        let mut m = Monitor::from_record(&record());
        m.set_position(10, 20);
        assert_ne!(m.last_good(), (10, 20));
        m.commit_position();
        assert_eq!(m.last_good(), (10, 20));
    }
}
