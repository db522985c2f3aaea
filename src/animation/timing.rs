//! Easing curves for the ripple animation.
//!
//! The effect uses exactly two shapes: a decelerating curve for the enter
//! run (fast start, slow finish) and an accelerating curve for the exit run
//! (slow start, fast finish). Both take a factor controlling how sharp the
//! curve is; factor 1.0 is quadratic, factor 2.0 quartic.

/// Monotonic mapping from linear progress to eased progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Starts fast, ends slow: `1 - (1 - t)^(2 * factor)`
    Decelerate(f32),
    /// Starts slow, ends fast: `t^(2 * factor)`
    Accelerate(f32),
}

impl Easing {
    /// Evaluate the curve at time t (0.0 to 1.0).
    pub fn evaluate(&self, t: f32) -> f32 {
        match *self {
            Easing::Decelerate(factor) => 1.0 - (1.0 - t).powf(2.0 * factor),
            Easing::Accelerate(factor) => t.powf(2.0 * factor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [Easing::Decelerate(2.0), Easing::Accelerate(2.0)] {
            assert!((easing.evaluate(0.0) - 0.0).abs() < 1e-6);
            assert!((easing.evaluate(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_decelerate_is_above_diagonal() {
        let result = Easing::Decelerate(2.0).evaluate(0.5);
        assert!(result > 0.5); // Should be faster at start
    }

    #[test]
    fn test_accelerate_is_below_diagonal() {
        let result = Easing::Accelerate(2.0).evaluate(0.5);
        assert!(result < 0.5); // Should be slower at start
    }

    #[test]
    fn test_monotonic() {
        for easing in [Easing::Decelerate(2.0), Easing::Accelerate(2.0)] {
            let mut previous = easing.evaluate(0.0);
            for step in 1..=100 {
                let value = easing.evaluate(step as f32 / 100.0);
                assert!(value >= previous, "{:?} decreased at step {}", easing, step);
                previous = value;
            }
        }
    }
}
