use serde::{Deserialize, Serialize};

use crate::config::PhysicsConfig;
use crate::geom::{Rect, overlaps};
use crate::input::InputSnapshot;
use crate::platform::Platform;
use crate::sprite::{Animation, SpriteSheet};

/// Motion state of the player. An explicit variant instead of a
/// grounded/jumping flag pair, so the transitions are testable on their
/// own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    /// Resting on top of a platform; jump input is honored only here.
    Grounded,
    /// In the air. `jumping` is true only after an actual takeoff, not
    /// after walking off a ledge.
    Airborne { jumping: bool },
}

impl Motion {
    pub fn is_grounded(self) -> bool {
        matches!(self, Motion::Grounded)
    }

    pub fn is_jumping(self) -> bool {
        matches!(self, Motion::Airborne { jumping: true })
    }

    /// Takeoff from the ground.
    fn launch(self) -> Self {
        Motion::Airborne { jumping: true }
    }

    /// Lose ground support without jumping. A grounded player becomes a
    /// non-jumping faller; an airborne player keeps its jump flag.
    fn release(self) -> Self {
        match self {
            Motion::Grounded => Motion::Airborne { jumping: false },
            airborne => airborne,
        }
    }

    /// Come to rest on top of a platform.
    fn land(self) -> Self {
        Motion::Grounded
    }
}

/// The one dynamic body in the simulation: position, velocity, motion
/// state, and the physics tuning it was built with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    pub motion: Motion,
    pub animation: Animation,
    tuning: PhysicsConfig,
}

impl Player {
    pub fn new(x: f32, y: f32, tuning: PhysicsConfig, sheet: SpriteSheet) -> Self {
        Self {
            rect: Rect::new(x, y, tuning.player_width, tuning.player_height),
            vx: 0.0,
            vy: 0.0,
            motion: Motion::Airborne { jumping: false },
            animation: Animation::new(sheet),
            tuning,
        }
    }

    /// Step the player one frame: input intent, gravity, jump, Euler move,
    /// then collision resolution against every platform.
    ///
    /// `_dt` is the measured presentation-timestamp delta. It deliberately
    /// does not scale the velocities: the tuning constants assume one
    /// integration step per animation frame, and rescaling them is a
    /// behavior change this simulation does not make.
    pub fn update(&mut self, _dt: f32, input: InputSnapshot, platforms: &[Platform]) {
        // Horizontal intent; left wins if both directions are held.
        self.vx = if input.left {
            -self.tuning.speed
        } else if input.right {
            self.tuning.speed
        } else {
            0.0
        };

        // Gravity applies every frame, with no terminal velocity cap.
        self.vy += self.tuning.gravity;

        // Jump only from the ground; airborne jump input is ignored.
        if input.jump && self.motion.is_grounded() {
            self.vy = -self.tuning.jump_force;
            self.motion = self.motion.launch();
        }

        self.rect.x += self.vx;
        self.rect.y += self.vy;

        self.resolve_collisions(platforms);
    }

    /// Resolve overlaps platform by platform, in list order. Each overlap
    /// picks the smallest of the four penetration depths and corrects that
    /// axis, but only while the player is moving toward the chosen side;
    /// otherwise the overlap is left for a later frame. Later platforms may
    /// override earlier corrections.
    ///
    /// The smallest-penetration pick can choose the wrong side at corners.
    /// That is a known limit of the heuristic and is kept as-is.
    fn resolve_collisions(&mut self, platforms: &[Platform]) {
        self.motion = self.motion.release();

        for platform in platforms {
            let plat = platform.rect();
            if !overlaps(&self.rect, plat) {
                continue;
            }

            let bottom_pen = self.rect.bottom() - plat.top();
            let top_pen = plat.bottom() - self.rect.top();
            let left_pen = self.rect.right() - plat.left();
            let right_pen = plat.right() - self.rect.left();

            let min_pen = bottom_pen.min(top_pen).min(left_pen).min(right_pen);

            if min_pen == bottom_pen && self.vy >= 0.0 {
                // Landed on top of the platform.
                self.rect.y = plat.top() - self.rect.h;
                self.vy = 0.0;
                self.motion = self.motion.land();
            } else if min_pen == top_pen && self.vy <= 0.0 {
                // Head bump against the underside.
                self.rect.y = plat.bottom();
                self.vy = 0.0;
            } else if min_pen == left_pen && self.vx > 0.0 {
                // Ran into the left face.
                self.rect.x = plat.left() - self.rect.w;
                self.vx = 0.0;
            } else if min_pen == right_pen && self.vx < 0.0 {
                // Ran into the right face.
                self.rect.x = plat.right();
                self.vx = 0.0;
            }
        }
    }
}
