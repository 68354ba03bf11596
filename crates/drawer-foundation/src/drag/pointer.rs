//! Per-pointer motion history kept by the drag helper.

use drawer_ui_graphics::Point;
use smallvec::SmallVec;

use super::EdgeFlags;
use crate::input::PointerId;
use crate::velocity_tracker::VelocityTracker;

#[derive(Clone, Debug)]
pub(crate) struct PointerHistory {
    pub id: PointerId,
    pub initial: Point,
    pub last: Point,
    pub initial_edges_touched: EdgeFlags,
    pub edge_drags_in_progress: EdgeFlags,
    pub edge_drags_locked: EdgeFlags,
    velocity: VelocityTracker,
}

impl PointerHistory {
    fn new(id: PointerId, position: Point, edges: EdgeFlags) -> Self {
        Self {
            id,
            initial: position,
            last: position,
            initial_edges_touched: edges,
            edge_drags_in_progress: EdgeFlags::NONE,
            edge_drags_locked: EdgeFlags::NONE,
            velocity: VelocityTracker::new(),
        }
    }

    /// Displacement of the last recorded position from the initial one.
    pub fn last_delta(&self) -> (f32, f32) {
        (self.last.x - self.initial.x, self.last.y - self.initial.y)
    }

    /// Velocity in px/s, each axis capped to `max`.
    pub fn velocity(&self, max: f32) -> (f32, f32) {
        self.velocity.velocity(max)
    }
}

/// Pointers currently down, usually one or two.
#[derive(Clone, Debug, Default)]
pub(crate) struct PointerTracker {
    pointers: SmallVec<[PointerHistory; 2]>,
}

impl PointerTracker {
    pub fn clear(&mut self) {
        self.pointers.clear();
    }

    pub fn get(&self, id: PointerId) -> Option<&PointerHistory> {
        self.pointers.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PointerId) -> Option<&mut PointerHistory> {
        self.pointers.iter_mut().find(|p| p.id == id)
    }

    pub fn is_down(&self, id: PointerId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointerHistory> {
        self.pointers.iter()
    }

    pub fn ids(&self) -> SmallVec<[PointerId; 2]> {
        self.pointers.iter().map(|p| p.id).collect()
    }

    /// Starts (or restarts) the history of `id` at `position`.
    pub fn save_initial(&mut self, id: PointerId, position: Point, edges: EdgeFlags) {
        self.remove(id);
        self.pointers.push(PointerHistory::new(id, position, edges));
    }

    pub fn save_last(&mut self, id: PointerId, position: Point) {
        if let Some(history) = self.get_mut(id) {
            history.last = position;
        }
    }

    pub fn add_movement(&mut self, id: PointerId, time_ms: u64, position: Point) {
        if let Some(history) = self.get_mut(id) {
            history.velocity.add_position(time_ms, position);
        }
    }

    pub fn remove(&mut self, id: PointerId) {
        self.pointers.retain(|p| p.id != id);
    }
}
