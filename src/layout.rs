//! The layout engine: move ladder, snap engine, and connectivity enforcer.
//!
//! [`Layout`] owns the ordered monitor collection (order = detection order,
//! which is semantically meaningful: enforcement and export iterate in this
//! order) and is the only mutation path to it.  Every operation is total —
//! move, snap and rotate always terminate with the layout in a defined,
//! overlap-free-or-reverted state.

use crate::command::MonitorRecord;
use crate::geometry::{align_offset, logical_bounds, overlaps};
use crate::monitor::Monitor;
use log::debug;

/// An ordered collection of monitors and the operations that mutate it.
///
/// Monitors are created once from a detection snapshot and never removed;
/// operations address them by index (stable for the whole session).  Use
/// [`index_of`](Layout::index_of) to resolve a monitor name.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    monitors: Vec<Monitor>,
}

impl Layout {
    /// Build a layout from a detection snapshot, preserving record order.
    pub fn from_records(records: &[MonitorRecord]) -> Self {
        Self {
            monitors: records.iter().map(Monitor::from_record).collect(),
        }
    }

    //  Accessors

    /// The monitors in canonical (detection) order.
    pub fn monitors(&self) -> &[Monitor] {
        &self.monitors
    }

    /// Number of monitors.
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Whether the layout has no monitors.
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    /// Monitor at `idx`.
    pub fn get(&self, idx: usize) -> Option<&Monitor> {
        self.monitors.get(idx)
    }

    /// Index of the monitor named `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.monitors.iter().position(|m| m.name() == name)
    }

    /// Whether any two distinct monitors overlap.
    pub fn has_overlap(&self) -> bool {
        for a in 0..self.monitors.len() {
            for b in (a + 1)..self.monitors.len() {
                if overlaps(&self.monitors[a], &self.monitors[b]) {
                    return true;
                }
            }
        }
        false
    }

    //  Drag

    /// A drag has started on monitor `idx`: re-record its current position
    /// as the last known good one.
    pub fn begin_move(&mut self, idx: usize) {
        self.monitors[idx].commit_position();
    }

    /// Move monitor `idx` towards `(proposed_x, proposed_y)`.
    ///
    /// Fallback ladder, in contract order: the proposed position, then
    /// X-free with the last-good Y, then Y-free with the last-good X, then
    /// a full revert.  This lets a monitor keep sliding along one free axis
    /// while the other is blocked instead of freezing entirely.  Whatever
    /// position sticks is committed as the new last-good one if it is
    /// overlap-free.
    pub fn move_to(&mut self, idx: usize, proposed_x: i32, proposed_y: i32) {
        let (last_x, last_y) = self.monitors[idx].last_good();

        self.monitors[idx].set_position(proposed_x, proposed_y);
        if self.overlaps_others(idx) {
            self.monitors[idx].set_position(proposed_x, last_y);
            if self.overlaps_others(idx) {
                self.monitors[idx].set_position(last_x, proposed_y);
                if self.overlaps_others(idx) {
                    self.monitors[idx].set_position(last_x, last_y);
                }
            }
        }
        if !self.overlaps_others(idx) {
            self.monitors[idx].commit_position();
        }
    }

    /// Snap monitor `idx` flush against the closest neighbor, considering
    /// every other monitor both as a snap target and as an obstacle.
    ///
    /// Returns `true` if a snap was applied.  Called on drag release.
    pub fn snap_to_neighbors(&mut self, idx: usize) -> bool {
        let all: Vec<usize> = (0..self.monitors.len()).collect();
        self.snap(idx, &all, &all)
    }

    /// Rotate monitor `idx` one 90° step, reverting if the rotated monitor
    /// overlaps any other.  Net effect: committed or a complete no-op.
    pub fn toggle_rotate(&mut self, idx: usize) {
        let next = (self.monitors[idx].transform() + 1) % 4;
        self.monitors[idx].set_transform(next);
        if self.overlaps_others(idx) {
            self.monitors[idx].set_transform((next + 3) % 4);
        }
    }

    //  Enforcement

    /// Repair the layout into a single connected, overlap-free cluster.
    ///
    /// Greedy single pass in canonical order: the first monitor anchors the
    /// cluster; each subsequent monitor snaps against the anchored set, or —
    /// if no flush position against the anchored set exists — is
    /// force-placed immediately to the right of the first anchor (logical
    /// left edge on the anchor's logical right edge, raw Y at the anchor's
    /// logical top), which cannot overlap the anchor by construction.
    ///
    /// Order-dependent and not area-optimal, but idempotent: a monitor
    /// already touching the anchored set snaps onto itself at distance zero.
    pub fn enforce_connected(&mut self) {
        if self.monitors.len() <= 1 {
            return;
        }
        let mut anchored: Vec<usize> = vec![0];
        for idx in 1..self.monitors.len() {
            if !self.snap(idx, &anchored, &anchored) {
                let anchor = logical_bounds(&self.monitors[0]);
                let bounds = logical_bounds(&self.monitors[idx]);
                let new_x = self.monitors[idx].x() as f64 + (anchor.max_x() - bounds.min_x());
                debug!(
                    "no snap position for {}, placing right of anchor",
                    self.monitors[idx].name()
                );
                self.monitors[idx]
                    .set_position(new_x.round() as i32, anchor.min_y().round() as i32);
            }
            anchored.push(idx);
        }
    }

    //  Internal

    /// Whether monitor `idx` overlaps any other monitor in the layout.
    fn overlaps_others(&self, idx: usize) -> bool {
        self.overlaps_any(idx, 0..self.monitors.len())
    }

    fn overlaps_any(&self, idx: usize, obstacles: impl IntoIterator<Item = usize>) -> bool {
        obstacles
            .into_iter()
            .any(|o| o != idx && overlaps(&self.monitors[idx], &self.monitors[o]))
    }

    /// Snap monitor `idx` against `neighbors`, rejecting candidate
    /// positions that overlap anything in `obstacles`.
    ///
    /// For every neighbor, four flush-alignment candidates are tried —
    /// right-edge-to-left-edge, left-edge-to-right-edge,
    /// bottom-edge-to-top-edge, top-edge-to-bottom-edge — each combined
    /// with the perpendicular [`align_offset`] so the rectangles also line
    /// up on the cross axis.  The valid candidate closest (Euclidean) to
    /// the pre-snap position wins; ties keep the earlier candidate in
    /// enumeration order.  Without a valid candidate the monitor stays
    /// where it was and `false` is returned.
    fn snap(&mut self, idx: usize, neighbors: &[usize], obstacles: &[usize]) -> bool {
        let bounds = logical_bounds(&self.monitors[idx]);
        let current_x = self.monitors[idx].x() as f64;
        let current_y = self.monitors[idx].y() as f64;

        let mut best: Option<(f64, f64)> = None;
        let mut min_distance = f64::MAX;

        for &n in neighbors {
            if n == idx {
                continue;
            }
            let nb = logical_bounds(&self.monitors[n]);

            let right_to_left = nb.min_x() - bounds.max_x();
            let left_to_right = nb.max_x() - bounds.min_x();
            let bottom_to_top = nb.min_y() - bounds.max_y();
            let top_to_bottom = nb.max_y() - bounds.min_y();
            let align_y = align_offset(bounds.min_y(), bounds.height, nb.min_y(), nb.height);
            let align_x = align_offset(bounds.min_x(), bounds.width, nb.min_x(), nb.width);

            let candidates = [
                (current_x + right_to_left, current_y + align_y),
                (current_x + left_to_right, current_y + align_y),
                (current_x + align_x, current_y + bottom_to_top),
                (current_x + align_x, current_y + top_to_bottom),
            ];

            for (cand_x, cand_y) in candidates {
                self.monitors[idx].set_position(cand_x.round() as i32, cand_y.round() as i32);
                if self.overlaps_any(idx, obstacles.iter().copied()) {
                    continue;
                }
                let distance = (cand_x - current_x).hypot(cand_y - current_y);
                if distance < min_distance {
                    min_distance = distance;
                    best = Some((cand_x, cand_y));
                }
            }
        }

        match best {
            Some((best_x, best_y)) => {
                self.monitors[idx].set_position(best_x.round() as i32, best_y.round() as i32);
                self.monitors[idx].commit_position();
                true
            }
            None => {
                self.monitors[idx].set_position(current_x as i32, current_y as i32);
                false
            }
        }
    }
}

//  Tests
