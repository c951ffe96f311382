//! Match configuration
//!
//! Field geometry, ball and paddle tuning, and the behaviour variants a
//! deployment can pick: flat vs angled paddle reflection, pause vs immediate
//! serve after a goal, random vs fixed serve direction.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Area, Bounds};

/// How the ball leaves a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionPolicy {
    /// Flip the horizontal velocity, keep everything else
    Simple,
    /// Outgoing angle depends on where the ball struck the paddle
    #[default]
    Angled,
}

impl ReflectionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReflectionPolicy::Simple => "simple",
            ReflectionPolicy::Angled => "angled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "simple" | "flat" => Some(ReflectionPolicy::Simple),
            "angled" | "angle" => Some(ReflectionPolicy::Angled),
            _ => None,
        }
    }
}

/// What happens right after a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalPolicy {
    /// Ball waits at center until the host toggles pause off
    #[default]
    PauseForServe,
    /// Ball is relaunched on the same tick
    ServeImmediately,
}

/// Velocity given to the ball after a goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ServePolicy {
    /// Random side, random angle within `±max_angle` of horizontal
    Random { max_angle: f32 },
    /// Always the same angle, travelling right
    Fixed { angle: f32 },
}

impl Default for ServePolicy {
    fn default() -> Self {
        ServePolicy::Random {
            max_angle: SERVE_MAX_ANGLE,
        }
    }
}

/// Complete match configuration (immutable for a session)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    // === Field ===
    pub width: f32,
    pub height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Opening and serve speed (pixels/s)
    pub ball_speed: f32,
    /// Speed retained after a wall bounce
    pub restitution: f32,
    /// Constant acceleration on the ball (pixels/s²), zero for classic play
    pub ball_acceleration: Vec2,
    /// Direction of the opening serve
    pub initial_angle: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from each side wall to the paddle center
    pub paddle_inset: f32,
    /// Speed the host assigns while a movement key is held
    pub paddle_speed: f32,

    // === Timing ===
    /// Ceiling on the per-tick step (seconds)
    pub max_dt: f32,

    // === Variants ===
    pub reflection: ReflectionPolicy,
    /// Angled reflection scale; edge hits leave at half of this
    pub deflection_scale: f32,
    pub serve: ServePolicy,
    pub on_goal: GoalPolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            width: AREA_WIDTH,
            height: AREA_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            restitution: BALL_RESTITUTION,
            ball_acceleration: Vec2::ZERO,
            initial_angle: INITIAL_BALL_ANGLE,

            paddle_width: PADDLE_WIDTH,
            paddle_height: AREA_HEIGHT * PADDLE_HEIGHT_FRACTION,
            paddle_inset: PADDLE_INSET,
            paddle_speed: PADDLE_SPEED,

            max_dt: MAX_DT,

            reflection: ReflectionPolicy::Angled,
            deflection_scale: PADDLE_DEFLECTION,
            serve: ServePolicy::default(),
            on_goal: GoalPolicy::PauseForServe,
        }
    }
}

impl MatchConfig {
    /// The single-variant rules: flat reflection, fixed serve angle, no pause
    pub fn classic() -> Self {
        Self {
            reflection: ReflectionPolicy::Simple,
            serve: ServePolicy::Fixed {
                angle: INITIAL_BALL_ANGLE,
            },
            on_goal: GoalPolicy::ServeImmediately,
            ..Self::default()
        }
    }

    pub fn area(&self) -> Area {
        Area::new(self.width, self.height)
    }

    pub fn x_bounds(&self) -> Bounds {
        self.area().x_bounds()
    }

    pub fn y_bounds(&self) -> Bounds {
        self.area().y_bounds()
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let config = Self::from_json(&content)?;
        log::info!("Loaded match config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reject configurations the engine cannot play sensibly.
    ///
    /// A paddle taller than the field is accepted: the controller pins it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("ball_radius", self.ball_radius)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("max_dt", self.max_dt)?;
        finite("ball_speed", self.ball_speed)?;
        finite("paddle_speed", self.paddle_speed)?;
        finite("initial_angle", self.initial_angle)?;
        finite("deflection_scale", self.deflection_scale)?;

        if !self.ball_acceleration.is_finite() {
            return Err(ConfigError::invalid("ball_acceleration", "must be finite"));
        }
        if !(self.restitution > 0.0 && self.restitution <= 1.0) {
            return Err(ConfigError::invalid("restitution", "must be in (0, 1]"));
        }
        if self.width <= 2.0 * self.paddle_width {
            return Err(ConfigError::invalid(
                "paddle_width",
                "field must be wider than both paddles",
            ));
        }
        let half = self.paddle_width / 2.0;
        if !(self.paddle_inset >= half && self.paddle_inset + half < self.width / 2.0) {
            return Err(ConfigError::invalid(
                "paddle_inset",
                "paddles must sit inside their own half of the field",
            ));
        }
        match self.serve {
            ServePolicy::Random { max_angle } => {
                if !(0.0..std::f32::consts::FRAC_PI_2).contains(&max_angle) {
                    return Err(ConfigError::invalid("serve.max_angle", "must be in [0, π/2)"));
                }
            }
            ServePolicy::Fixed { angle } => finite("serve.angle", angle)?,
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must be positive and finite"))
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must be finite"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config read error: {e}"),
            Self::Parse(e) => write!(f, "config parse error: {e}"),
            Self::Invalid { field, reason } => write!(f, "invalid config `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = MatchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.paddle_height, 100.0);
        assert!(MatchConfig::classic().validate().is_ok());
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = MatchConfig::from_json(r#"{ "width": 800, "reflection": "simple" }"#).unwrap();
        assert_eq!(config.width, 800.0);
        assert_eq!(config.height, AREA_HEIGHT);
        assert_eq!(config.reflection, ReflectionPolicy::Simple);
        assert_eq!(config.on_goal, GoalPolicy::PauseForServe);
    }

    #[test]
    fn test_serve_policy_json() {
        let config =
            MatchConfig::from_json(r#"{ "serve": { "kind": "fixed", "angle": 0.5 } }"#).unwrap();
        assert_eq!(config.serve, ServePolicy::Fixed { angle: 0.5 });

        let back = MatchConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = MatchConfig::from_json(r#"{ "ball_radius": 0 }"#).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                field: "ball_radius",
                reason: "must be positive and finite"
            }
        );

        let err = MatchConfig::from_json(r#"{ "restitution": 1.5 }"#).unwrap_err();
        assert!(err.to_string().contains("restitution"));

        let err = MatchConfig::from_json(r#"{ "width": 8, "paddle_width": 5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "paddle_width", .. }));

        assert!(matches!(
            MatchConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_tall_paddle_is_accepted() {
        let config = MatchConfig {
            paddle_height: 600.0,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(ReflectionPolicy::from_str("FLAT"), Some(ReflectionPolicy::Simple));
        assert_eq!(ReflectionPolicy::from_str("angled"), Some(ReflectionPolicy::Angled));
        assert_eq!(ReflectionPolicy::from_str("spin"), None);
        assert_eq!(ReflectionPolicy::Angled.as_str(), "angled");
    }

    #[test]
    fn test_load_missing_file() {
        let err = MatchConfig::load("/nonexistent/rally.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
