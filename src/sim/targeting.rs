//! Velocity-vector targeting.

use bevy::math::Vec2;
use rand::Rng;

/// Velocity of magnitude `speed` pointing from `from` to `to`.
///
/// Coincident points have no direction; the result is then `Vec2::ZERO`.
pub fn aim_velocity(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    let offset = to - from;
    let distance = offset.length();
    if distance == 0.0 {
        return Vec2::ZERO;
    }
    offset * (speed / distance)
}

/// Complete a horizontal speed `vx` into an upward launch of total magnitude `speed`.
///
/// `None` when `|vx| > speed`, since no real vertical component exists.
pub fn arc_velocity(vx: f32, speed: f32) -> Option<Vec2> {
    if vx.abs() > speed {
        return None;
    }
    let vy = (speed * speed - vx * vx).max(0.0).sqrt();
    Some(Vec2::new(vx, vy))
}

/// Fixed-arc launch: horizontal speed drawn from `[speed/2, speed*0.8]`.
///
/// A non-finite or negative `speed` launches nothing.
pub fn random_arc_velocity<R: Rng + ?Sized>(rng: &mut R, speed: f32) -> Vec2 {
    if !speed.is_finite() || speed <= 0.0 {
        return Vec2::ZERO;
    }
    let vx = rng.gen_range(speed * 0.5..=speed * 0.8);
    arc_velocity(vx, speed).unwrap_or(Vec2::new(0.0, speed))
}
