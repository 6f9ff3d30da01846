use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::geom::Rect;
use crate::input::InputSnapshot;
use crate::platform::Platform;
use crate::player::Player;
use crate::sprite::SpriteSheet;

fn player_sheet() -> SpriteSheet {
    SpriteSheet {
        src: "assets/player.svg".to_string(),
        frame_width: 32.0,
        frame_height: 32.0,
        frames_per_row: 1,
        total_frames: 1,
        animation_speed: 10.0,
    }
}

fn platform_sheet() -> SpriteSheet {
    SpriteSheet {
        src: "assets/platform.svg".to_string(),
        frame_width: 200.0,
        frame_height: 40.0,
        frames_per_row: 1,
        total_frames: 1,
        animation_speed: 0.0,
    }
}

/// The whole simulation: one player and the fixed, ordered platform list.
/// Platforms are created here and never move; draw order follows list
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub player: Player,
    platforms: Vec<Platform>,
    config: GameConfig,
}

impl World {
    /// Build the fixed level: a ground slab across the bottom of the
    /// canvas plus three floating platforms, with the player spawned at
    /// the canvas center.
    pub fn new(config: GameConfig) -> Self {
        let w = config.canvas_width;
        let h = config.canvas_height;

        let player = Player::new(w / 2.0, h / 2.0, config.physics.clone(), player_sheet());

        let platforms = vec![
            Platform::new(Rect::new(0.0, h - 40.0, w, 40.0), platform_sheet()),
            Platform::new(Rect::new(100.0, 400.0, 200.0, 20.0), platform_sheet()),
            Platform::new(Rect::new(400.0, 300.0, 200.0, 20.0), platform_sheet()),
            Platform::new(Rect::new(200.0, 200.0, 200.0, 20.0), platform_sheet()),
        ];

        Self {
            player,
            platforms,
            config,
        }
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Advance the simulation one frame: player physics and collision,
    /// then every animation counter.
    pub fn update(&mut self, dt: f32, input: InputSnapshot) {
        self.player.update(dt, input, &self.platforms);
        self.player.animation.advance();
        for platform in &mut self.platforms {
            platform.animation_mut().advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_layout_matches_canvas_size() {
        let world = World::new(GameConfig::default());
        let rects: Vec<Rect> = world.platforms().iter().map(|p| *p.rect()).collect();
        assert_eq!(
            rects,
            vec![
                Rect::new(0.0, 560.0, 800.0, 40.0),
                Rect::new(100.0, 400.0, 200.0, 20.0),
                Rect::new(400.0, 300.0, 200.0, 20.0),
                Rect::new(200.0, 200.0, 200.0, 20.0),
            ]
        );
    }

    #[test]
    fn player_spawns_at_canvas_center() {
        let world = World::new(GameConfig::default());
        assert_eq!(world.player.rect.x, 400.0);
        assert_eq!(world.player.rect.y, 300.0);
    }

    #[test]
    fn falling_player_settles_on_the_ground() {
        // Spawned at (400, 300) the player clears the floating platforms
        // and lands on the ground slab at y = 560 - height.
        let mut world = World::new(GameConfig::default());

        for _ in 0..400 {
            world.update(16.0, InputSnapshot::RELEASED);
        }

        assert!(world.player.motion.is_grounded());
        assert_eq!(world.player.rect.y, 560.0 - world.player.rect.h);
        assert_eq!(world.player.vy, 0.0);
    }

    #[test]
    fn grounded_jump_reaches_a_peak_and_returns() {
        let mut world = World::new(GameConfig::default());

        // Settle on the ground first.
        for _ in 0..400 {
            world.update(16.0, InputSnapshot::RELEASED);
        }
        let rest_y = world.player.rect.y;

        // One frame with jump held launches; release afterwards.
        world.update(16.0, InputSnapshot::new(false, false, true));
        assert!(world.player.rect.y < rest_y);
        assert!(world.player.motion.is_jumping());

        let mut peak = world.player.rect.y;
        for _ in 0..400 {
            world.update(16.0, InputSnapshot::RELEASED);
            peak = peak.min(world.player.rect.y);
        }

        assert!(peak < rest_y - 100.0, "jump must gain real height");
        assert!(world.player.motion.is_grounded());
        assert_eq!(world.player.rect.y, rest_y);
    }

    #[test]
    fn update_advances_animation_counters() {
        let mut world = World::new(GameConfig::default());
        let before = world.player.animation.clone();
        world.update(16.0, InputSnapshot::RELEASED);
        // Single-frame sheets keep frame 0 but the call must be wired.
        assert_eq!(world.player.animation.current_frame(), 0);
        assert_eq!(before.current_frame(), 0);
    }
}
