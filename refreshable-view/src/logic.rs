//! Refresh gesture logic
//!
//! Turns marker frame batches into a scroll offset, an indicator rotation
//! and the refresh trigger decision. Everything here is plain data, so the
//! whole lifecycle is unit-testable without a DOM.

use crate::geometry::Rect;
use crate::markers::{MarkerFrame, MarkerKind};

/// Vertical distance between the moving and fixed markers.
///
/// A marker that has not reported yet counts as the zero rect, never as an
/// error. When a batch carries duplicate reports for a kind, the first one
/// is used.
pub fn scroll_offset(frames: &[MarkerFrame]) -> f64 {
    let bounds = |kind: MarkerKind| {
        frames
            .iter()
            .find(|frame| frame.kind == kind)
            .map(|frame| frame.bounds)
            .unwrap_or(Rect::ZERO)
    };

    bounds(MarkerKind::Moving).min_y() - bounds(MarkerKind::Fixed).min_y()
}

/// Indicator rotation for a pull offset, in degrees within [0, 180].
///
/// Rotation only begins after 60% of the way to the threshold and
/// saturates at 180 exactly at the threshold.
pub fn symbol_rotation(offset: f64, threshold: f64) -> f64 {
    if offset < threshold * 0.60 {
        0.0
    } else {
        let v = (offset - threshold * 0.60).clamp(0.0, threshold * 0.40);
        180.0 * v / (threshold * 0.40)
    }
}

/// Trigger state for one mounted refreshable container.
///
/// `previous_offset` always holds the offset from the prior evaluation,
/// which is what makes the threshold check edge-triggered: a single
/// continuous pull fires the action exactly once, on the batch that
/// crosses the threshold upward.
#[derive(Debug)]
pub struct RefreshCore {
    threshold: f64,
    previous_offset: f64,
    current_offset: f64,
    rotation: f64,
    refreshing: bool,
}

impl RefreshCore {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            previous_offset: 0.0,
            current_offset: 0.0,
            rotation: 0.0,
            refreshing: false,
        }
    }

    /// Process one measurement batch.
    ///
    /// Recomputes the offset and rotation, then returns true when this
    /// batch crossed the threshold upward and the host action should run.
    /// Never fires while a refresh is already in progress.
    pub fn evaluate(&mut self, frames: &[MarkerFrame]) -> bool {
        self.current_offset = scroll_offset(frames);
        self.rotation = symbol_rotation(self.current_offset, self.threshold);

        // Crossing the threshold on the way down starts the refresh
        let fired = !self.refreshing
            && self.current_offset > self.threshold
            && self.previous_offset <= self.threshold;

        if fired {
            self.refreshing = true;
        }

        self.previous_offset = self.current_offset;
        fired
    }

    /// Mirror the host-owned refresh flag.
    ///
    /// The host ends a cycle by clearing its binding; the container writes
    /// the binding value back here before each evaluation. The core never
    /// clears the flag on its own.
    pub fn sync_refreshing(&mut self, refreshing: bool) {
        self.refreshing = refreshing;
    }

    pub fn offset(&self) -> f64 {
        self.current_offset
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::FrameCollector;

    /// Batch with the moving marker pulled `offset` below the fixed one
    fn batch(offset: f64) -> Vec<MarkerFrame> {
        let mut collector = FrameCollector::new();
        collector.report(MarkerKind::Moving, Rect::new(0.0, offset, 0.0, 0.0));
        collector.report(MarkerKind::Fixed, Rect::new(0.0, 0.0, 375.0, 667.0));
        collector.take()
    }

    #[test]
    fn test_rotation_zero_before_sixty_percent() {
        for threshold in [10.0, 80.0, 250.0] {
            assert_eq!(symbol_rotation(0.0, threshold), 0.0);
            assert_eq!(symbol_rotation(threshold * 0.59, threshold), 0.0);
        }
    }

    #[test]
    fn test_rotation_ignores_negative_offsets() {
        assert_eq!(symbol_rotation(-40.0, 80.0), 0.0);
        assert_eq!(symbol_rotation(f64::MIN, 80.0), 0.0);
    }

    #[test]
    fn test_rotation_saturates_at_threshold() {
        assert_eq!(symbol_rotation(80.0, 80.0), 180.0);
        assert_eq!(symbol_rotation(10.0, 10.0), 180.0);
        // Overshoot stays clamped
        assert_eq!(symbol_rotation(500.0, 80.0), 180.0);
    }

    #[test]
    fn test_rotation_halfway_through_final_approach() {
        // 64 is 80% of an 80 threshold, half of the 60%..100% window
        assert_eq!(symbol_rotation(64.0, 80.0), 90.0);
    }

    #[test]
    fn test_rotation_monotonic_in_final_approach() {
        let threshold = 80.0;
        let mut previous = symbol_rotation(threshold * 0.60, threshold);
        let mut offset = threshold * 0.60;

        while offset <= threshold {
            let rotation = symbol_rotation(offset, threshold);
            assert!(rotation >= previous, "rotation decreased at offset {}", offset);
            previous = rotation;
            offset += 0.5;
        }
    }

    #[test]
    fn test_offset_with_missing_fixed_marker() {
        let mut collector = FrameCollector::new();
        collector.report(MarkerKind::Moving, Rect::new(0.0, 100.0, 0.0, 0.0));

        assert_eq!(scroll_offset(&collector.take()), 100.0);
    }

    #[test]
    fn test_offset_with_no_reports_at_all() {
        assert_eq!(scroll_offset(&[]), 0.0);
    }

    #[test]
    fn test_offset_uses_first_report_of_a_kind() {
        let mut collector = FrameCollector::new();
        collector.report(MarkerKind::Moving, Rect::new(0.0, 10.0, 0.0, 0.0));
        collector.report(MarkerKind::Moving, Rect::new(0.0, 99.0, 0.0, 0.0));
        collector.report(MarkerKind::Fixed, Rect::ZERO);

        assert_eq!(scroll_offset(&collector.take()), 10.0);
    }

    #[test]
    fn test_rising_edge_fires_exactly_once() {
        let mut core = RefreshCore::new(80.0);

        assert!(!core.evaluate(&batch(50.0)));
        assert!(!core.is_refreshing());

        assert!(core.evaluate(&batch(90.0)));
        assert!(core.is_refreshing());

        // Same side of the threshold, no new edge
        assert!(!core.evaluate(&batch(95.0)));
    }

    #[test]
    fn test_no_refire_while_refreshing() {
        let mut core = RefreshCore::new(80.0);
        assert!(core.evaluate(&batch(90.0)));

        // Oscillate across the threshold during the running refresh
        assert!(!core.evaluate(&batch(40.0)));
        assert!(!core.evaluate(&batch(100.0)));
        assert!(!core.evaluate(&batch(10.0)));
        assert!(!core.evaluate(&batch(120.0)));
        assert!(core.is_refreshing());
    }

    #[test]
    fn test_host_reset_rearms_the_trigger() {
        let mut core = RefreshCore::new(80.0);
        assert!(core.evaluate(&batch(90.0)));

        // Host finished its reload and cleared the flag
        core.sync_refreshing(false);
        assert!(!core.is_refreshing());

        assert!(!core.evaluate(&batch(30.0)));
        assert!(core.evaluate(&batch(85.0)));
        assert!(core.is_refreshing());
    }

    #[test]
    fn test_offsets_keep_updating_while_refreshing() {
        let mut core = RefreshCore::new(80.0);
        assert!(core.evaluate(&batch(90.0)));

        core.evaluate(&batch(40.0));
        assert_eq!(core.offset(), 40.0);
        assert_eq!(core.rotation(), 0.0);
    }

    #[test]
    fn test_full_pull_sequence() {
        let mut core = RefreshCore::new(80.0);
        let offsets = [0.0, 20.0, 50.0, 81.0, 81.0, 40.0, 0.0];
        let expected_rotations = [0.0, 0.0, 0.0, 180.0, 180.0, 0.0, 0.0];

        let mut fires = 0;
        for (offset, expected) in offsets.iter().zip(expected_rotations) {
            if core.evaluate(&batch(*offset)) {
                fires += 1;
            }
            assert_eq!(core.rotation(), expected, "at offset {}", offset);
        }

        assert_eq!(fires, 1);
        assert!(core.is_refreshing());
    }
}
