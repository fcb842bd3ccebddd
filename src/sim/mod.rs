//! Simulation core: entity lifecycle and collision resolution.
//!
//! Pure data + functions over [`GameWorld`]. Nothing in here touches the ECS; the plugins
//! mirror this state into entities, feed physics results back in, and render the effect
//! requests it queues.
//!
//! ```text
//!   tick(world, intent)
//!     ├─ collision: shell vs bricks ──► lifecycle: spawn_enemy (FixedArc, 1/2 chance)
//!     ├─ collision: enemy vs shell  ──► lifecycle: kill_enemy ──► pool.release
//!     ├─ collision: enemy vs turret ──► lifecycle: kill_enemy + hit_turret
//!     ├─ turret steering
//!     └─ firing
//!   every transition may queue FxRequests ──► GameWorld::drain_fx
//! ```

pub mod body;
pub mod collision;
pub mod error;
pub mod fx;
pub mod lifecycle;
pub mod pool;
pub mod targeting;
pub mod tick;
pub mod world;

pub use body::{Body, Liveness};
pub use error::SimError;
pub use fx::{FxKind, FxRequest, TrailEmitter};
pub use lifecycle::{Lives, SpawnMode, TurretState};
pub use pool::{Emitter, EnemyId, Pool, Slot};
pub use tick::{PlayerIntent, tick};
pub use world::{Brick, GameWorld};
