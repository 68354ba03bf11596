//! Shared gesture constants for consistent touch/pointer handling.
//!
//! All values are density-independent and are converted to pixels with the
//! host's density when a [`DragHelper`](crate::DragHelper) is created.

/// Drag threshold in dp.
///
/// A pointer that moves further than this from its press position is
/// dragging; anything shorter is a tap.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Width in dp of the strip along each container edge that counts as an
/// edge touch.
pub const EDGE_SIZE: f32 = 20.0;

/// Maximum fling velocity in dp per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Minimum fling velocity in dp per second; slower releases count as zero.
pub const MIN_FLING_VELOCITY: f32 = 400.0;

/// Settle duration for a full-range move without velocity.
pub const BASE_SETTLE_DURATION_MS: u64 = 256;

/// Upper bound for any settle animation.
pub const MAX_SETTLE_DURATION_MS: u64 = 600;
