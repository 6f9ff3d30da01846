use serde::{Deserialize, Serialize};

/// Horizontal move speed (pixels per step).
pub const MOVE_SPEED: f32 = 5.0;
/// Jump initial velocity (pixels per step, applied upward).
pub const JUMP_FORCE: f32 = 12.0;
/// Gravity acceleration (pixels per step^2, downward).
pub const GRAVITY: f32 = 0.3;
/// Player AABB width.
pub const PLAYER_WIDTH: f32 = 32.0;
/// Player AABB height.
pub const PLAYER_HEIGHT: f32 = 32.0;
/// Canvas width in pixels.
pub const CANVAS_WIDTH: f32 = 800.0;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: f32 = 600.0;

/// Configurable physics parameters, loadable from TOML.
///
/// The defaults are calibrated for one integration step per animation
/// frame; they are not per-second rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub speed: f32,
    pub jump_force: f32,
    pub gravity: f32,
    pub player_width: f32,
    pub player_height: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            speed: MOVE_SPEED,
            jump_force: JUMP_FORCE,
            gravity: GRAVITY,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
        }
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub physics: PhysicsConfig,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable (in the browser there is no filesystem, so
    /// the client always runs on defaults).
    pub fn load() -> Self {
        let path = std::env::var("SKYHOP_CONFIG")
            .unwrap_or_else(|_| "config/skyhop.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<GameConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    GameConfig::default()
                },
            },
            Err(_) => GameConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuning_constants() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.physics.speed, 5.0);
        assert_eq!(cfg.physics.jump_force, 12.0);
        assert_eq!(cfg.physics.gravity, 0.3);
        assert_eq!(cfg.physics.player_width, 32.0);
        assert_eq!(cfg.physics.player_height, 32.0);
        assert_eq!(cfg.canvas_width, 800.0);
        assert_eq!(cfg.canvas_height, 600.0);
    }

    #[test]
    fn partial_toml_keeps_defaults_elsewhere() {
        let cfg: GameConfig = toml::from_str(
            r#"
            canvas_width = 1024.0

            [physics]
            gravity = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.canvas_width, 1024.0);
        assert_eq!(cfg.canvas_height, 600.0);
        assert_eq!(cfg.physics.gravity, 0.5);
        assert_eq!(cfg.physics.speed, 5.0);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let cfg = GameConfig::default();
        let text = toml::to_string(&cfg).unwrap();
        let back: GameConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }
}
