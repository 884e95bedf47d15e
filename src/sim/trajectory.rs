//! Projectile paths between hands
//!
//! Horizontal motion is uniform from hand to hand. Vertical motion is a
//! ballistic arc on top of the straight line joining the two hands:
//!
//! ```text
//! y(τ) = lerp(y_from, y_to, τ/T) + g/2 · τ · (T - τ)
//! ```
//!
//! where `τ` is time since launch and `T` the flight duration, both in beats.
//! The arc term is zero at both ends, so the object leaves and reaches each
//! hand exactly, and peaks at `τ = T/2` when the hands are level.

use glam::Vec2;

use super::hand::{Hand, HandLayout};
use super::registry::Flight;
use crate::error::{SimError, SimResult};
use crate::lerp;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryModel {
    pub layout: HandLayout,
    /// Downward acceleration in simulation units per beat²
    pub gravity: f32,
}

impl TrajectoryModel {
    pub fn new(layout: HandLayout, gravity: f32) -> Self {
        Self { layout, gravity }
    }

    /// Position at time `t` of an object thrown from `from` at `launch_beat`
    /// and caught by `to` at `arrival_beat`. `t` is clamped to the flight.
    pub fn position(
        &self,
        from: Hand,
        to: Hand,
        launch_beat: i64,
        arrival_beat: i64,
        t: f64,
    ) -> SimResult<Vec2> {
        if arrival_beat <= launch_beat {
            return Err(SimError::InvalidFlight {
                launch: launch_beat,
                arrival: arrival_beat,
            });
        }

        let start = self.layout.position(from);
        let end = self.layout.position(to);

        let duration = (arrival_beat - launch_beat) as f64;
        let elapsed = (t - launch_beat as f64).clamp(0.0, duration);
        let progress = (elapsed / duration) as f32;

        let rise = 0.5 * self.gravity as f64 * elapsed * (duration - elapsed);

        Ok(Vec2::new(
            lerp(start.x, end.x, progress),
            lerp(start.y, end.y, progress) + rise as f32,
        ))
    }

    pub fn flight_position(&self, flight: &Flight, t: f64) -> SimResult<Vec2> {
        self.position(
            flight.from,
            flight.to,
            flight.launch_beat,
            flight.arrival_beat,
            t,
        )
    }

    /// Apex above the hand line for a flight of `duration` beats
    pub fn peak_height(&self, duration: u32) -> f32 {
        let d = duration as f32;
        self.gravity * d * d / 8.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> TrajectoryModel {
        let layout = HandLayout::new(
            Vec2::new(250.0, 100.0),
            Vec2::new(650.0, 100.0),
            Vec2::new(20.0, 10.0),
        );
        TrajectoryModel::new(layout, 19.62)
    }

    #[test]
    fn test_endpoints_match_hands() {
        let m = model();
        let start = m.position(Hand::Left, Hand::Right, 4, 7, 4.0).unwrap();
        let end = m.position(Hand::Left, Hand::Right, 4, 7, 7.0).unwrap();
        assert!((start - Vec2::new(250.0, 100.0)).length() < 1e-4);
        assert!((end - Vec2::new(650.0, 100.0)).length() < 1e-4);
    }

    #[test]
    fn test_peak_at_midpoint() {
        let m = model();
        let mid = m.position(Hand::Left, Hand::Right, 0, 3, 1.5).unwrap();
        assert!((mid.x - 450.0).abs() < 1e-3);
        assert!((mid.y - (100.0 + m.peak_height(3))).abs() < 1e-3);

        let before = m.position(Hand::Left, Hand::Right, 0, 3, 1.4).unwrap();
        let after = m.position(Hand::Left, Hand::Right, 0, 3, 1.6).unwrap();
        assert!(before.y < mid.y);
        assert!(after.y < mid.y);
        assert!((before.y - after.y).abs() < 1e-3);
    }

    #[test]
    fn test_self_throw_stays_over_hand() {
        let m = model();
        let p = m.position(Hand::Right, Hand::Right, 2, 6, 3.3).unwrap();
        assert!((p.x - 650.0).abs() < 1e-4);
        assert!(p.y > 100.0);
    }

    #[test]
    fn test_uneven_hands() {
        let layout = HandLayout::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 50.0), Vec2::ONE);
        let m = TrajectoryModel::new(layout, 10.0);
        let end = m.position(Hand::Left, Hand::Right, 0, 5, 5.0).unwrap();
        assert!((end - Vec2::new(100.0, 50.0)).length() < 1e-4);
    }

    #[test]
    fn test_time_is_clamped() {
        let m = model();
        let late = m.position(Hand::Left, Hand::Right, 0, 3, 3.7).unwrap();
        assert!((late - Vec2::new(650.0, 100.0)).length() < 1e-4);
    }

    #[test]
    fn test_invalid_flight() {
        let m = model();
        assert!(matches!(
            m.position(Hand::Left, Hand::Left, 3, 3, 3.0),
            Err(SimError::InvalidFlight { launch: 3, arrival: 3 })
        ));
        assert!(matches!(
            m.position(Hand::Left, Hand::Left, 5, 2, 3.0),
            Err(SimError::InvalidFlight { .. })
        ));
    }
}
