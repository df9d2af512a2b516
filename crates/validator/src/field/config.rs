//! Per-field behaviour settings.
//!
//! A [`FieldConfig`] decides *when* feedback appears and whether the field
//! shakes; the rules decide *what* the feedback says. Configs can be built in
//! code or shipped with a form definition as JSON:
//!
//! ```rust,ignore
//! let config = FieldConfig::from_json(r#"{ "initial_validate": true, "shake_on_invalid": true }"#)?;
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::shake::{ShakeDirection, ShakeStrength};

/// Separator used to join several messages into one string.
pub const DEFAULT_SEPARATOR: &str = ", ";

// ============================================================================
// ERRORS
// ============================================================================

/// Invalid field configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The shake step must be positive.
    #[error("shake step must be greater than zero")]
    ZeroShakeStep,

    /// The shake amplitude must be a finite, non-negative number.
    #[error("shake strength must be finite and non-negative, got {strength}")]
    InvalidShakeStrength {
        /// The rejected amplitude.
        strength: f32,
    },

    /// The JSON document could not be decoded.
    #[error("invalid field config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// SHAKE CONFIG
// ============================================================================

/// How a field shakes when validation fails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakeConfig {
    /// Amplitude.
    pub strength: ShakeStrength,
    /// Which way the field moves first.
    pub direction: ShakeDirection,
    /// Duration of one step of the choreography, in milliseconds.
    pub step_ms: u64,
}

impl ShakeConfig {
    /// Step duration.
    #[must_use]
    pub const fn step(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            strength: ShakeStrength::Custom(20.0),
            direction: ShakeDirection::LeftThenRight,
            step_ms: 20,
        }
    }
}

// ============================================================================
// FIELD CONFIG
// ============================================================================

/// Behaviour settings for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Start visible, showing errors immediately. `reset` becomes a no-op.
    pub initial_validate: bool,

    /// Show the rule messages as supporting text even before the user
    /// interacted.
    pub always_show_rule: bool,

    /// Joins several messages into one string.
    pub validation_separator: String,

    /// Shake when `validate` finds an error.
    pub shake_on_invalid: bool,

    /// Whether typing flags errors straight away. When `false`, errors are
    /// listed but only flagged after `validate` or focus loss.
    pub show_error_on_interaction: bool,

    /// Validate, errors shown, when the field loses focus.
    pub validate_on_focus_lost: bool,

    /// Shake parameters.
    pub shake: ShakeConfig,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            initial_validate: false,
            always_show_rule: false,
            validation_separator: DEFAULT_SEPARATOR.to_owned(),
            shake_on_invalid: false,
            show_error_on_interaction: true,
            validate_on_focus_lost: false,
            shake: ShakeConfig::default(),
        }
    }
}

impl FieldConfig {
    /// Decodes a config from JSON. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and the other
    /// variants when the decoded config fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the config for values that cannot work.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero shake step or a non-finite or negative
    /// shake strength.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shake.step_ms == 0 {
            return Err(ConfigError::ZeroShakeStep);
        }
        let strength = self.shake.strength.value();
        if !strength.is_finite() || strength < 0.0 {
            return Err(ConfigError::InvalidShakeStrength { strength });
        }
        Ok(())
    }

    /// Start visible with errors shown.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_initial_validate(mut self, on: bool) -> Self {
        self.initial_validate = on;
        self
    }

    /// Always show rule messages as supporting text.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_always_show_rule(mut self, on: bool) -> Self {
        self.always_show_rule = on;
        self
    }

    /// Custom message separator.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.validation_separator = separator.into();
        self
    }

    /// Shake on failed `validate`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_shake_on_invalid(mut self, on: bool) -> Self {
        self.shake_on_invalid = on;
        self
    }

    /// Flag errors while typing.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_show_error_on_interaction(mut self, on: bool) -> Self {
        self.show_error_on_interaction = on;
        self
    }

    /// Validate on focus loss.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_validate_on_focus_lost(mut self, on: bool) -> Self {
        self.validate_on_focus_lost = on;
        self
    }

    /// Shake parameters.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_shake(mut self, shake: ShakeConfig) -> Self {
        self.shake = shake;
        self
    }
}
