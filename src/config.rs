//! Tunables for the spring point field.

use crate::error::FieldError;
use crate::float::Float;

/// Stiffness at or above this makes explicit Euler oscillate out of control
/// at per-tick integration.
pub const MAX_STABLE_STIFFNESS: f32 = 0.25;

/// Whether the pointer pushes points away or pulls them in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerMode {
    #[default]
    Repel,
    Attract,
}

/// Configuration for a [`SpringPointField`](crate::field::SpringPointField).
///
/// # Builder Pattern
/// ```
/// use springfield::config::FieldConfig;
///
/// let config: FieldConfig<f32> = FieldConfig::new()
///     .with_stiffness(0.06)
///     .with_damping(0.94)
///     .with_influence_radius(90.0)
///     .with_ripple(300.0, 40.0, 1.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldConfig<F: Float> {
    /// Spring pull toward rest per tick. Default: 0.08.
    pub stiffness: F,
    /// Velocity multiplier per tick. Default: 0.92.
    pub damping: F,
    /// Pointer has no effect at or beyond this distance. Default: 120.
    pub influence_radius: F,
    /// Pointer force at zero distance. Default: 6.
    pub push_strength: F,
    pub pointer_mode: PointerMode,
    /// Ring expansion speed in units per second. Default: 350.
    pub ripple_speed: F,
    /// Half-width of the ring band. Default: 60.
    pub ripple_width: F,
    /// Ripple force on the ring crest of a fresh impulse. Default: 8.
    pub impulse_strength: F,
    /// Seconds before an impulse is discarded. Default: 2.
    pub max_impulse_age: F,
    /// Upper bound on the pointer + ripple force per point per tick. Default: 12.
    pub max_force: F,
}

impl<F: Float> FieldConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        FieldConfig {
            stiffness: F::from_f32(0.08),
            damping: F::from_f32(0.92),
            influence_radius: F::from_f32(120.0),
            push_strength: F::from_f32(6.0),
            pointer_mode: PointerMode::Repel,
            ripple_speed: F::from_f32(350.0),
            ripple_width: F::from_f32(60.0),
            impulse_strength: F::from_f32(8.0),
            max_impulse_age: F::from_f32(2.0),
            max_force: F::from_f32(12.0),
        }
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_influence_radius(mut self, radius: F) -> Self {
        self.influence_radius = radius;
        self
    }

    pub fn with_push_strength(mut self, strength: F) -> Self {
        self.push_strength = strength;
        self
    }

    pub fn with_pointer_mode(mut self, mode: PointerMode) -> Self {
        self.pointer_mode = mode;
        self
    }

    /// Set ring speed, band half-width and impulse lifetime together.
    pub fn with_ripple(mut self, speed: F, width: F, max_age: F) -> Self {
        self.ripple_speed = speed;
        self.ripple_width = width;
        self.max_impulse_age = max_age;
        self
    }

    pub fn with_impulse_strength(mut self, strength: F) -> Self {
        self.impulse_strength = strength;
        self
    }

    pub fn with_max_force(mut self, max_force: F) -> Self {
        self.max_force = max_force;
        self
    }

    /// Check every tunable against the range that keeps integration stable.
    pub fn validate(&self) -> Result<(), FieldError> {
        let zero = F::zero();
        if !self.stiffness.is_finite()
            || self.stiffness <= zero
            || self.stiffness >= F::from_f32(MAX_STABLE_STIFFNESS)
        {
            return Err(FieldError::InvalidStiffness);
        }
        if !self.damping.is_finite() || self.damping <= zero || self.damping >= F::one() {
            return Err(FieldError::InvalidDamping);
        }

        let positive = [
            ("influence_radius", self.influence_radius),
            ("ripple_speed", self.ripple_speed),
            ("ripple_width", self.ripple_width),
            ("max_impulse_age", self.max_impulse_age),
            ("max_force", self.max_force),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= zero {
                return Err(FieldError::NonPositiveParameter { name });
            }
        }

        let strengths = [
            ("push_strength", self.push_strength),
            ("impulse_strength", self.impulse_strength),
        ];
        for (name, value) in strengths {
            if !value.is_finite() || value < zero {
                return Err(FieldError::NegativeStrength { name });
            }
        }

        Ok(())
    }
}

impl<F: Float> Default for FieldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
