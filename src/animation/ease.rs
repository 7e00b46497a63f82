/// Easing curve applied over the normalized progress of one animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Sine, accelerating.
    SineEaseIn,
    /// Sine, decelerating.
    SineEaseOut,
    /// Sine, both ends.
    SineEaseInOut,
    /// Quadratic, accelerating.
    QuadraticEaseIn,
    /// Quadratic, decelerating.
    QuadraticEaseOut,
    /// Quadratic, both ends.
    QuadraticEaseInOut,
    /// Cubic, accelerating.
    CubicEaseIn,
    /// Cubic, decelerating.
    CubicEaseOut,
    /// Cubic, both ends.
    CubicEaseInOut,
    /// Circular, accelerating.
    CircleEaseIn,
    /// Circular, decelerating.
    CircleEaseOut,
    /// Circular, both ends.
    CircleEaseInOut,
}

impl Easing {
    /// Every easing, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Linear,
        Self::SineEaseIn,
        Self::SineEaseOut,
        Self::SineEaseInOut,
        Self::QuadraticEaseIn,
        Self::QuadraticEaseOut,
        Self::QuadraticEaseInOut,
        Self::CubicEaseIn,
        Self::CubicEaseOut,
        Self::CubicEaseInOut,
        Self::CircleEaseIn,
        Self::CircleEaseOut,
        Self::CircleEaseInOut,
    ];

    /// Map linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        use std::f64::consts::PI;

        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SineEaseIn => 1.0 - (t * PI / 2.0).cos(),
            Self::SineEaseOut => (t * PI / 2.0).sin(),
            Self::SineEaseInOut => -((PI * t).cos() - 1.0) / 2.0,
            Self::QuadraticEaseIn => t * t,
            Self::QuadraticEaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::QuadraticEaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::CubicEaseIn => t * t * t,
            Self::CubicEaseOut => 1.0 - (1.0 - t).powi(3),
            Self::CubicEaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::CircleEaseIn => 1.0 - (1.0 - t * t).sqrt(),
            Self::CircleEaseOut => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Self::CircleEaseInOut => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
