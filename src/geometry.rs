//! Pure rectangle geometry used by the layout engine.
//!
//! All overlap and adjacency math operates on a monitor's *logical bounds*:
//! its raw editor rectangle inset by [`EDGE_INSET`] on every side, so that
//! the visual border a front end draws around a monitor never counts as
//! overlap.  The overlap test additionally shrinks both rectangles by
//! [`OVERLAP_EPSILON`] per side, which makes exactly edge-to-edge monitors
//! *not* overlapping — the tolerance every snap and adjacency decision in
//! this crate relies on.

use crate::monitor::Monitor;

/// Native device pixels per editor unit.
pub const SCALE: f64 = 10.0;

/// Inset applied to a monitor's raw rectangle to obtain its logical bounds.
pub const EDGE_INSET: f64 = 1.0;

/// Extra per-side shrink applied during the overlap test so touching edges
/// never register as overlap.
pub const OVERLAP_EPSILON: f64 = 0.1;

/// An axis-aligned rectangle in editor units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Left edge.
    pub fn min_x(&self) -> f64 {
        self.x
    }

    /// Top edge.
    pub fn min_y(&self) -> f64 {
        self.y
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// A copy of this rectangle shrunk by `inset` on every side.
    pub fn shrink(&self, inset: f64) -> Rect {
        Rect {
            x: self.x + inset,
            y: self.y + inset,
            width: self.width - 2.0 * inset,
            height: self.height - 2.0 * inset,
        }
    }

    /// Whether this rectangle and `other` intersect with positive area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }
}

/// A monitor's logical bounds: its raw editor rectangle inset by
/// [`EDGE_INSET`] on all sides.
pub fn logical_bounds(monitor: &Monitor) -> Rect {
    Rect {
        x: monitor.x() as f64,
        y: monitor.y() as f64,
        width: monitor.width() as f64,
        height: monitor.height() as f64,
    }
    .shrink(EDGE_INSET)
}

/// Whether the logical bounds of `a` and `b` overlap.
///
/// Both rectangles are shrunk by [`OVERLAP_EPSILON`] per side before the
/// test, so monitors whose logical bounds merely touch are not overlapping.
pub fn overlaps(a: &Monitor, b: &Monitor) -> bool {
    logical_bounds(a)
        .shrink(OVERLAP_EPSILON)
        .intersects(&logical_bounds(b).shrink(OVERLAP_EPSILON))
}

/// Minimal shift along one axis that brings interval A into overlap with
/// interval B.
///
/// Returns `0.0` when the intervals already overlap, the (negative) distance
/// from A's start to B's start when A lies entirely after B, and the
/// (positive) distance from A's end to B's end when A lies entirely before
/// B.  Used to line rectangles up on the cross axis while snapping — e.g.
/// aligning tops when snapping left/right.
pub fn align_offset(start_a: f64, len_a: f64, start_b: f64, len_b: f64) -> f64 {
    if start_a > start_b + len_b {
        return start_b - start_a;
    }
    if start_a + len_a < start_b {
        return (start_b + len_b) - (start_a + len_a);
    }
    0.0
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::MonitorRecord;

    fn monitor(name: &str, x: i32, y: i32) -> Monitor {
        let mut m = Monitor::from_record(&MonitorRecord {
            name: name.into(),
            width: 1920,
            height: 1080,
            x: 0,
            y: 0,
            transform: 0,
        });
        m.set_position(x, y);
        m
    }

    #[test]
    fn logical_bounds_are_inset() {
        let m = monitor("DP-1", 0, 0);
        let b = logical_bounds(&m);
        assert_eq!(b.min_x(), 1.0);
        assert_eq!(b.min_y(), 1.0);
        assert_eq!(b.max_x(), 191.0);
        assert_eq!(b.max_y(), 107.0);
    }

    #[test]
    fn identical_monitors_overlap() {
        let a = monitor("DP-1", 0, 0);
        let b = monitor("DP-2", 0, 0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn distant_monitors_do_not_overlap() {
        let a = monitor("DP-1", 0, 0);
        let b = monitor("DP-2", 500, 500);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn raw_edge_to_edge_does_not_overlap() {
        // B's raw left edge on A's raw right edge.
        let a = monitor("DP-1", 0, 0);
        let b = monitor("DP-2", 192, 0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn logical_edge_to_edge_does_not_overlap() {
        // B's logical left edge on A's logical right edge: raw rectangles
        // intrude by twice the edge inset, logical bounds merely touch.
        let a = monitor("DP-1", 0, 0);
        let b = monitor("DP-2", 190, 0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn deeper_intrusion_overlaps() {
        let a = monitor("DP-1", 0, 0);
        let b = monitor("DP-2", 188, 0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = monitor("DP-1", 0, 0);
        let b = monitor("DP-2", 100, 50);
        assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn align_offset_zero_when_overlapping() {
        assert_eq!(align_offset(0.0, 100.0, 50.0, 100.0), 0.0);
        assert_eq!(align_offset(50.0, 100.0, 0.0, 100.0), 0.0);
        assert_eq!(align_offset(0.0, 100.0, 0.0, 100.0), 0.0);
    }

    #[test]
    fn align_offset_when_entirely_after() {
        // A starts at 300, B spans [0, 100]: shift A's start back to B's.
        assert_eq!(align_offset(300.0, 50.0, 0.0, 100.0), -300.0);
    }

    #[test]
    fn align_offset_when_entirely_before() {
        // A spans [0, 50], B spans [200, 300]: shift A's end up to B's.
        assert_eq!(align_offset(0.0, 50.0, 200.0, 100.0), 250.0);
    }

    #[test]
    fn shrink_moves_all_edges_inward() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 50.0,
        };
        let s = r.shrink(2.0);
        assert_eq!(s.min_x(), 12.0);
        assert_eq!(s.min_y(), 22.0);
        assert_eq!(s.max_x(), 108.0);
        assert_eq!(s.max_y(), 68.0);
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        let b = Rect {
            x: 10.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        assert!(!a.intersects(&b));
    }
}
