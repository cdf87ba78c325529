use super::constants::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown setting `{0}`")]
    UnknownKey(String),
    #[error("setting `{key}` is not a number: `{value}`")]
    NotANumber { key: String, value: String },
    #[error("setting `{key}` must be positive, got {value}")]
    NotPositive { key: &'static str, value: f32 },
    #[error("dot spacing {value} is below the {min} px minimum")]
    SpacingTooSmall { value: f32, min: f32 },
    #[error("opacity range is inverted or outside 0..=1: [{min}, {max}]")]
    OpacityRange { min: f32, max: f32 },
}

/// Tuning for the dot-grid background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundConfig {
    pub dot_spacing: f32,
    pub opacity_min: f32,
    pub opacity_max: f32,
    pub base_radius: f32,
    pub interaction_radius: f32,
    pub color_rgb: [u8; 3],
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            dot_spacing: DOT_SPACING,
            opacity_min: BASE_OPACITY_MIN,
            opacity_max: BASE_OPACITY_MAX,
            base_radius: BASE_RADIUS,
            interaction_radius: INTERACTION_RADIUS,
            color_rgb: DOT_COLOR_RGB,
        }
    }
}

impl BackgroundConfig {
    /// Attribute names (without the `data-` prefix) accepted by [`Self::with_overrides`].
    pub const OVERRIDE_KEYS: [&'static str; 5] = [
        "dot-spacing",
        "interaction-radius",
        "opacity-min",
        "opacity-max",
        "dot-radius",
    ];

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("dot-spacing", self.dot_spacing),
            ("interaction-radius", self.interaction_radius),
            ("dot-radius", self.base_radius),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { key, value });
            }
        }
        if self.dot_spacing < MIN_DOT_SPACING {
            return Err(ConfigError::SpacingTooSmall {
                value: self.dot_spacing,
                min: MIN_DOT_SPACING,
            });
        }
        let (min, max) = (self.opacity_min, self.opacity_max);
        if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) || min > max {
            return Err(ConfigError::OpacityRange { min, max });
        }
        Ok(())
    }

    /// Apply `(key, value)` overrides on top of `self` and validate the result.
    /// Nothing is applied unless every override parses.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, raw) in overrides {
            let value: f32 = raw.trim().parse().map_err(|_| ConfigError::NotANumber {
                key: key.to_string(),
                value: raw.to_string(),
            })?;
            match key {
                "dot-spacing" => self.dot_spacing = value,
                "interaction-radius" => self.interaction_radius = value,
                "opacity-min" => self.opacity_min = value,
                "opacity-max" => self.opacity_max = value,
                "dot-radius" => self.base_radius = value,
                other => return Err(ConfigError::UnknownKey(other.to_string())),
            }
        }
        self.validate()?;
        Ok(self)
    }
}

/// Stiffness/damping pair for a unit-mass spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorConfig {
    pub ring: SpringParams,
    pub dot: SpringParams,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            ring: SpringParams {
                stiffness: RING_STIFFNESS,
                damping: RING_DAMPING,
            },
            dot: SpringParams {
                stiffness: DOT_STIFFNESS,
                damping: DOT_DAMPING,
            },
        }
    }
}

/// Map a `data-log-level` value onto a log level, falling back to `Info`.
pub fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|s| s.trim().parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info)
}
