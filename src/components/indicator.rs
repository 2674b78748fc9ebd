//! Bouncing arrow indicator components.
//!
//! An indicator is made of two parts:
//! - an [`IndicatorState`] holding the oscillation (stored in the
//!   [`IndicatorArena`](crate::resources::indicatorarena::IndicatorArena),
//!   one per target entity)
//! - an arrow entity tagged with [`ArrowIndicator`], spawned as a child of
//!   the target, whose two [`ArrowPart`] children carry the shaft and tip
//!   geometry
//!
//! The oscillation is a ping-pong over a normalized phase in [0, 1]. The
//! vertical offset is `sin(phase * PI) * amplitude`, so it is zero at both
//! ends of the phase range and peaks at `phase = 0.5`.
//!
//! See [`crate::systems::indicator`] for the per-frame update and
//! [`crate::systems::indicatorlifecycle`] for attach/detach.

use bevy_ecs::prelude::{Component, Entity};

/// Phase units advanced per second.
pub const BOUNCE_SPEED: f32 = 0.8;
/// Maximum bounce offset above `base_offset`.
pub const DEFAULT_AMPLITUDE: f32 = 0.02;
/// Resting height of the arrow above its target.
pub const DEFAULT_BASE_OFFSET: f32 = 0.4;

pub const SHAFT_HEIGHT: f32 = 0.1;
pub const SHAFT_RADIUS: f32 = 0.005;
pub const TIP_HEIGHT: f32 = 0.03;
pub const TIP_RADIUS: f32 = 0.01;

/// Direction the phase is currently moving in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BounceDirection {
    /// Phase increasing (+1).
    Up,
    /// Phase decreasing (-1).
    Down,
}

impl BounceDirection {
    pub fn sign(self) -> f32 {
        match self {
            BounceDirection::Up => 1.0,
            BounceDirection::Down => -1.0,
        }
    }
}

/// Oscillation state of a single indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorState {
    /// Normalized oscillation progress, always within [0, 1].
    pub phase: f32,
    pub direction: BounceDirection,
    /// Maximum bounce offset.
    pub amplitude: f32,
    /// Resting height above the target.
    pub base_offset: f32,
}

impl IndicatorState {
    pub fn new(base_offset: f32) -> Self {
        Self {
            phase: 0.0,
            direction: BounceDirection::Up,
            amplitude: DEFAULT_AMPLITUDE,
            base_offset,
        }
    }

    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Advance the phase by `dt` seconds, reflecting at the bounds.
    ///
    /// Overshooting either bound clamps the phase to the bound and flips the
    /// direction; the overshoot is discarded.
    pub fn advance(&mut self, dt: f32) {
        self.phase += BOUNCE_SPEED * self.direction.sign() * dt;

        if self.phase > 1.0 {
            self.direction = BounceDirection::Down;
            self.phase = 1.0;
        } else if self.phase < 0.0 {
            self.direction = BounceDirection::Up;
            self.phase = 0.0;
        }
    }

    /// Current bounce offset above `base_offset`.
    pub fn bounce_offset(&self) -> f32 {
        bounce_offset(self.phase, self.amplitude)
    }

    /// Local height of the arrow above its target.
    pub fn height(&self) -> f32 {
        self.base_offset + self.bounce_offset()
    }
}

impl Default for IndicatorState {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_OFFSET)
    }
}

/// `sin(phase * PI) * amplitude`.
pub fn bounce_offset(phase: f32, amplitude: f32) -> f32 {
    (phase * std::f32::consts::PI).sin() * amplitude
}

/// Marker for the arrow root entity. `target` is the entity it points at.
#[derive(Component, Clone, Copy, Debug)]
pub struct ArrowIndicator {
    pub target: Entity,
}

/// Geometry piece of an arrow.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowPart {
    Shaft,
    Tip,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_defaults() {
        let s = IndicatorState::new(0.4);
        assert!(approx_eq(s.phase, 0.0));
        assert_eq!(s.direction, BounceDirection::Up);
        assert!(approx_eq(s.amplitude, 0.02));
        assert!(approx_eq(s.base_offset, 0.4));
    }

    #[test]
    fn test_default_uses_default_base_offset() {
        let s = IndicatorState::default();
        assert!(approx_eq(s.base_offset, DEFAULT_BASE_OFFSET));
    }

    #[test]
    fn test_direction_sign() {
        assert!(approx_eq(BounceDirection::Up.sign(), 1.0));
        assert!(approx_eq(BounceDirection::Down.sign(), -1.0));
    }

    #[test]
    fn test_advance_single_step() {
        let mut s = IndicatorState::new(0.4);
        s.advance(0.1);
        assert!(approx_eq(s.phase, 0.08));
        assert_eq!(s.direction, BounceDirection::Up);
    }

    #[test]
    fn test_advance_reflects_at_upper_bound() {
        let mut s = IndicatorState::new(0.4);
        s.phase = 0.95;
        s.advance(0.1); // 0.95 + 0.08 overshoots
        assert!(approx_eq(s.phase, 1.0));
        assert_eq!(s.direction, BounceDirection::Down);

        s.advance(0.1);
        assert!(approx_eq(s.phase, 0.92));
        assert_eq!(s.direction, BounceDirection::Down);
    }

    #[test]
    fn test_advance_reflects_at_lower_bound() {
        let mut s = IndicatorState::new(0.4);
        s.phase = 0.05;
        s.direction = BounceDirection::Down;
        s.advance(0.1);
        assert!(approx_eq(s.phase, 0.0));
        assert_eq!(s.direction, BounceDirection::Up);
    }

    #[test]
    fn test_advance_exactly_one_does_not_flip() {
        let mut s = IndicatorState::new(0.4);
        s.phase = 0.5;
        s.advance(0.625); // 0.5 + 0.8 * 0.625 = 1.0 exactly
        assert!(approx_eq(s.phase, 1.0));
        assert_eq!(s.direction, BounceDirection::Up);
    }

    #[test]
    fn test_advance_huge_dt_stays_in_bounds() {
        let mut s = IndicatorState::new(0.4);
        s.advance(100.0);
        assert!(approx_eq(s.phase, 1.0));
        assert_eq!(s.direction, BounceDirection::Down);
        s.advance(100.0);
        assert!(approx_eq(s.phase, 0.0));
        assert_eq!(s.direction, BounceDirection::Up);
    }

    #[test]
    fn test_phase_bounds_over_many_ticks() {
        let mut s = IndicatorState::new(0.4);
        let mut prev_direction = s.direction;
        for i in 0..10_000 {
            let dt = 0.001 + (i % 37) as f32 * 0.003;
            s.advance(dt);
            assert!((0.0..=1.0).contains(&s.phase), "phase {} out of bounds", s.phase);
            if s.direction != prev_direction {
                // Flips only happen on a bound.
                assert!(approx_eq(s.phase, 0.0) || approx_eq(s.phase, 1.0));
                prev_direction = s.direction;
            }
        }
    }

    #[test]
    fn test_bounce_offset_endpoints_and_peak() {
        assert!(approx_eq(bounce_offset(0.0, 0.02), 0.0));
        assert!(bounce_offset(1.0, 0.02).abs() < 1e-7);
        assert!(approx_eq(bounce_offset(0.5, 0.02), 0.02));
    }

    #[test]
    fn test_bounce_offset_symmetric() {
        for i in 0..=50 {
            let p = i as f32 / 100.0;
            assert!(approx_eq(bounce_offset(p, 0.02), bounce_offset(1.0 - p, 0.02)));
        }
    }

    #[test]
    fn test_height_after_one_tick() {
        let mut s = IndicatorState::new(0.4);
        s.advance(0.1);
        let expected_offset = (0.08 * std::f32::consts::PI).sin() * 0.02;
        assert!(approx_eq(s.bounce_offset(), expected_offset));
        assert!(approx_eq(s.height(), 0.4 + expected_offset));
        assert!((s.height() - 0.40497).abs() < 1e-4);
    }

    #[test]
    fn test_with_amplitude() {
        let s = IndicatorState::new(1.0).with_amplitude(0.5);
        assert!(approx_eq(s.amplitude, 0.5));
        assert!(approx_eq(s.base_offset, 1.0));
    }
}
