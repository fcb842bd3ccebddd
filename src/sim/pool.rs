//! Enemy pool: reuse registry pairing each enemy body with its effect emitter.
//!
//! Slots live in one `Vec` in allocation order and are never removed, so an `EnemyId`
//! (the slot index) stays valid for the lifetime of the pool. Dead slots are reused
//! first-come: `acquire` scans from the front and takes the first dead slot it finds.
//!
//! ```text
//!   acquire ──► first Dead slot? ──yes──► reset body + re-enable emitter
//!                      │
//!                      no ──► below cap? ──yes──► push new (body, make_emitter())
//!                                   │
//!                                   no ──► Err(PoolExhausted)
//! ```

use bevy::math::Vec2;

use super::body::Body;
use super::error::SimError;

/// Anything the pool can switch on/off and move along with its enemy.
pub trait Emitter {
    fn set_emitting(&mut self, on: bool);
    fn track(&mut self, at: Vec2);
}

/// Stable handle of a pool slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(pub usize);

#[derive(Debug, Clone)]
pub struct Slot<E> {
    pub body: Body,
    pub emitter: E,
}

#[derive(Debug, Clone)]
pub struct Pool<E> {
    slots: Vec<Slot<E>>,
    enemy_size: Vec2,
    cap: Option<usize>,
}

impl<E: Emitter> Pool<E> {
    pub fn new(enemy_size: Vec2, cap: Option<usize>) -> Self {
        Self {
            slots: Vec::new(),
            enemy_size,
            cap,
        }
    }

    /// Hand out an alive enemy at `at`, reusing the first dead slot if there is one.
    ///
    /// `make_emitter` only runs when a new slot is allocated.
    pub fn acquire(
        &mut self,
        at: Vec2,
        make_emitter: impl FnOnce() -> E,
    ) -> Result<EnemyId, SimError> {
        if let Some(index) = self.slots.iter().position(|s| !s.body.is_alive()) {
            let slot = &mut self.slots[index];
            slot.body.revive_at(at);
            slot.emitter.track(at);
            slot.emitter.set_emitting(true);
            return Ok(EnemyId(index));
        }

        if let Some(capacity) = self.capacity() {
            if self.slots.len() >= capacity {
                return Err(SimError::PoolExhausted { capacity });
            }
        }

        let mut emitter = make_emitter();
        emitter.track(at);
        emitter.set_emitting(true);
        self.slots.push(Slot {
            body: Body::new(at, self.enemy_size),
            emitter,
        });
        Ok(EnemyId(self.slots.len() - 1))
    }

    /// Kill the enemy and switch its emitter off. `false` if it was not alive.
    pub fn release(&mut self, id: EnemyId) -> bool {
        let Some(slot) = self.slots.get_mut(id.0) else {
            return false;
        };
        if !slot.body.kill() {
            return false;
        }
        slot.emitter.set_emitting(false);
        true
    }
}

impl<E> Pool<E> {
    #[inline]
    pub fn get(&self, id: EnemyId) -> Option<&Slot<E>> {
        self.slots.get(id.0)
    }

    #[inline]
    pub fn get_mut(&mut self, id: EnemyId) -> Option<&mut Slot<E>> {
        self.slots.get_mut(id.0)
    }

    /// Number of slots ever allocated.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot cap, `None` when unbounded.
    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.cap
    }

    pub fn alive_count(&self) -> usize {
        self.slots.iter().filter(|s| s.body.is_alive()).count()
    }

    /// Alive slots in allocation order (snapshot; safe to mutate the pool afterwards).
    pub fn alive_ids(&self) -> Vec<EnemyId> {
        self.iter()
            .filter(|(_, s)| s.body.is_alive())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EnemyId, &Slot<E>)> {
        self.slots.iter().enumerate().map(|(i, s)| (EnemyId(i), s))
    }
}
