use drawer_ui_graphics::Point;

pub type PointerId = u64;

/// What happened to the pointer that an event describes.
///
/// `Down`/`Up` start and end a gesture; `PointerDown`/`PointerUp` are
/// additional pointers joining or leaving a gesture already in progress.
/// The host classifies events before dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    PointerDown,
    Move,
    PointerUp,
    Up,
    Cancel,
}

/// Pointer event in container-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Milliseconds on the host's monotonic clock.
    pub uptime_millis: u64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_millis: u64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            uptime_millis,
        }
    }

    /// A cancel event at the origin, used to abort touches already
    /// delivered to other views.
    pub fn cancel(uptime_millis: u64) -> Self {
        Self::new(PointerEventKind::Cancel, Point::ZERO, uptime_millis)
    }

    /// Set the pointer id for this event
    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }
}
