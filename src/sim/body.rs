//! Boundable bodies: position, velocity, box, liveness.

use bevy::math::Vec2;

/// Whether a body currently takes part in the simulation.
///
/// Dead bodies are inert: they never overlap anything and are free for reuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Liveness {
    #[default]
    Alive,
    Dead,
}

/// Axis-aligned body. `position` is the box centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub half_extents: Vec2,
    pub liveness: Liveness,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            half_extents: size * 0.5,
            liveness: Liveness::Alive,
        }
    }

    /// A body that starts out of play, like the shell before the first shot.
    pub fn dead(position: Vec2, size: Vec2) -> Self {
        Self { liveness: Liveness::Dead, ..Self::new(position, size) }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.liveness == Liveness::Alive
    }

    /// Alive -> Dead. Returns `false` if the body was already dead.
    pub fn kill(&mut self) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.liveness = Liveness::Dead;
        self.velocity = Vec2::ZERO;
        true
    }

    /// Bring the body back into play at `position` with zero velocity.
    pub fn revive_at(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.liveness = Liveness::Alive;
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y + self.half_extents.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y - self.half_extents.y
    }

    #[inline]
    pub fn top_centre(&self) -> Vec2 {
        Vec2::new(self.position.x, self.top())
    }

    /// Strict AABB overlap; touching edges do not count. Dead bodies never overlap.
    pub fn overlaps(&self, other: &Body) -> bool {
        if !self.is_alive() || !other.is_alive() {
            return false;
        }
        let d = (self.position - other.position).abs();
        let reach = self.half_extents + other.half_extents;
        d.x < reach.x && d.y < reach.y
    }

    /// True when the whole box lies outside `half_arena` (arena centred on the origin).
    pub fn is_outside(&self, half_arena: Vec2) -> bool {
        let d = self.position.abs() - self.half_extents;
        d.x > half_arena.x || d.y > half_arena.y
    }
}
