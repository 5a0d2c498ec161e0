//! Passive frame reporting from the scroll markers
//!
//! The container watches two reference elements: one that translates with
//! the scrolled content and one anchored to the container itself. Both
//! report their frames into a [`FrameCollector`], which the container
//! drains once per render pass and hands to the refresh logic.

use crate::geometry::Rect;

/// Which reference marker produced a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Translates with the scrolled content
    Moving,
    /// Anchored to the container
    Fixed,
}

/// One reported marker frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerFrame {
    pub kind: MarkerKind,
    pub bounds: Rect,
}

/// Accumulates marker frames reported during a render pass.
///
/// Reports merge by list append; order of arrival is preserved.
#[derive(Debug, Default)]
pub struct FrameCollector {
    frames: Vec<MarkerFrame>,
}

impl FrameCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a marker frame to the current batch
    pub fn report(&mut self, kind: MarkerKind, bounds: Rect) {
        self.frames.push(MarkerFrame { kind, bounds });
    }

    /// Drain everything reported since the last call
    pub fn take(&mut self) -> Vec<MarkerFrame> {
        std::mem::take(&mut self.frames)
    }
}
