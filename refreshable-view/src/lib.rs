//! Pull-to-refresh scroll container for Yew
//!
//! Touch-driven refreshable scroll area with a rotating pull indicator
//! and a circular loading spinner. The host owns the refresh flag: the
//! container sets it to true when a pull crosses the threshold and fires
//! the action once; the host clears the flag when its reload completes.

pub mod geometry;
pub mod logic;
pub mod markers;
pub mod scroll_view;
pub mod spinner;
pub mod symbol;

pub use geometry::Rect;
pub use logic::{scroll_offset, symbol_rotation, RefreshCore};
pub use markers::{FrameCollector, MarkerFrame, MarkerKind};
pub use scroll_view::{RefreshableScroll, RefreshableScrollProps, ScrollKind};
pub use spinner::{CircleArc, CircleSpinner};
pub use symbol::{default_pull_view, IndicatorPhase, PullViewArgs, RefreshSymbol};
