//! Easing curves applied to normalized segment progress.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic ease-in.
    EaseIn,
    /// Quadratic ease-out.
    EaseOut,
    /// Symmetric quadratic ease-in-out.
    EaseInOut,
    /// Four-segment piecewise quadratic bounce.
    Bounce,
    /// Damped exponential sine. Overshoots above 1.
    Elastic,
}

impl Easing {
    pub const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Bounce,
        Easing::Elastic,
    ];

    /// Map progress `t` to eased progress. Results are not clamped.
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(2),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::Bounce => bounce(t),
            Easing::Elastic => elastic(t),
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Bounce => "bounce",
            Easing::Elastic => "elastic",
        }
    }
}

const BOUNCE_N: f64 = 7.5625;
const BOUNCE_D: f64 = 2.75;

#[inline]
fn bounce(t: f64) -> f64 {
    if t < 1.0 / BOUNCE_D {
        BOUNCE_N * t * t
    } else if t < 2.0 / BOUNCE_D {
        let t = t - 1.5 / BOUNCE_D;
        BOUNCE_N * t * t + 0.75
    } else if t < 2.5 / BOUNCE_D {
        let t = t - 2.25 / BOUNCE_D;
        BOUNCE_N * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_D;
        BOUNCE_N * t * t + 0.984375
    }
}

#[inline]
fn elastic(t: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    2f64.powf(-10.0 * t) * ((t - 0.1) * (2.0 * PI) / 0.4).sin() + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-9, "left={a} right={b}");
    }

    #[test]
    fn endpoints_are_fixed() {
        for e in Easing::ALL {
            approx(e.apply(0.0), 0.0);
            approx(e.apply(1.0), 1.0);
        }
    }

    #[test]
    fn quadratic_midpoints() {
        approx(Easing::EaseIn.apply(0.5), 0.25);
        approx(Easing::EaseOut.apply(0.5), 0.75);
        approx(Easing::EaseInOut.apply(0.5), 0.5);
        approx(Easing::EaseInOut.apply(0.25), 0.125);
    }

    #[test]
    fn bounce_segments_join() {
        approx(Easing::Bounce.apply(1.0 / 2.75), 1.0);
        approx(Easing::Bounce.apply(2.0 / 2.75), 1.0);
    }

    #[test]
    fn elastic_overshoots_without_clamping() {
        let peak = (1..100)
            .map(|i| Easing::Elastic.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }
}
