//! Round plugin: owns the simulation and drives it once per fixed step.
//!
//! ```text
//! FixedUpdate (InGame only)
//!   RoundSystems::Pull  avian Transform/LinearVelocity -> GameWorld bodies
//!   RoundSystems::Step  sim::tick + drain FxRequest into Messages
//!   RoundSystems::Push  GameWorld -> Transform/LinearVelocity/Visibility/CollisionLayers
//! FixedPostUpdate
//!   avian steps the bodies Push just wrote
//! ```
//!
//! Every other gameplay plugin only mirrors `Round`; none of them decides anything.

use avian2d::prelude::LinearVelocity;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::sim::{self, Body, FxRequest, GameWorld, PlayerIntent};

// -----------------------------------------------------------------------------
// Resources
// -----------------------------------------------------------------------------

/// The running round: the only gameplay truth in the app.
///
/// Plugins read it in `Push` and write body positions into it in `Pull`. Everything else
/// goes through the sim operations on `GameWorld`.
#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct Round(pub GameWorld);

/// Intent sampled by the turret plugin, consumed by [`step_round`].
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayerInput {
    pub intent: PlayerIntent,
}

/// Fixed-step ordering around one `sim::tick`. Chained, and skipped outside `InGame`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundSystems {
    Pull,
    Step,
    Push,
}

// -----------------------------------------------------------------------------
// Plugin
// -----------------------------------------------------------------------------

/// Advance FX message buffers (double-buffered).
///
/// A request written in a fixed step survives until the next frame's `Update` readers.
fn update_fx_messages(mut msgs: ResMut<Messages<FxRequest>>) {
    msgs.update();
}

pub fn plugin(app: &mut App) {
    let tunables = app.world().resource::<Tunables>().clone();
    app.insert_resource(Round(GameWorld::new(tunables)))
        .init_resource::<PlayerInput>();

    app.init_resource::<Messages<FxRequest>>();
    app.add_systems(PostUpdate, update_fx_messages);

    app.configure_sets(
        FixedUpdate,
        (RoundSystems::Pull, RoundSystems::Step, RoundSystems::Push)
            .chain()
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(OnEnter(GameState::InGame), start_round);
    app.add_systems(FixedUpdate, step_round.in_set(RoundSystems::Step));
}

// -----------------------------------------------------------------------------
// Systems
// -----------------------------------------------------------------------------

/// Fresh wall, full lives, one chaser. Mirror spawners run `.after` this.
pub fn start_round(tunables: Res<Tunables>, mut round: ResMut<Round>) {
    round.0 = GameWorld::new(tunables.clone());
    round.spawn_opening_wave();
}

/// One tick with this frame's intent. FX requests leave the round as messages, in order.
pub fn step_round(
    mut round: ResMut<Round>,
    input: Res<PlayerInput>,
    mut fx_out: MessageWriter<FxRequest>,
) {
    sim::tick(&mut round, input.intent);
    fx_out.write_batch(round.drain_fx());
}

/// Write a pooled body's transform, velocity and visibility. Dead bodies are parked.
pub(crate) fn mirror_body(
    body: &Body,
    tf: &mut Transform,
    vel: &mut LinearVelocity,
    vis: &mut Visibility,
) {
    tf.translation.x = body.position.x;
    tf.translation.y = body.position.y;
    if body.is_alive() {
        vel.0 = body.velocity;
        *vis = Visibility::Inherited;
    } else {
        vel.0 = Vec2::ZERO;
        *vis = Visibility::Hidden;
    }
}
