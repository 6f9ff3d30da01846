use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// Animation steps per second. The frame counter assumes one `advance` per
/// animation frame at the usual 60 Hz presentation cadence.
const STEP_RATE: f32 = 60.0;

/// Sprite-sheet descriptor: an image path plus fixed frame geometry. This
/// is the whole contract with the asset; the image itself is loaded and
/// drawn by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheet {
    /// Path to the sheet image, also the asset-cache key.
    pub src: String,
    pub frame_width: f32,
    pub frame_height: f32,
    pub frames_per_row: u32,
    pub total_frames: u32,
    /// Animation speed in frames per second; 0 disables animation.
    pub animation_speed: f32,
}

/// Frame-timing state for one drawable. Pure counter logic; whether the
/// backing image has loaded is the renderer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub sheet: SpriteSheet,
    current_frame: u32,
    frame_counter: u32,
}

impl Animation {
    pub fn new(sheet: SpriteSheet) -> Self {
        Self {
            sheet,
            current_frame: 0,
            frame_counter: 0,
        }
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    /// Advance the counter by one step, wrapping to the next frame every
    /// `STEP_RATE / animation_speed` steps. Single-frame sheets never
    /// animate.
    pub fn advance(&mut self) {
        if self.sheet.total_frames <= 1 || self.sheet.animation_speed <= 0.0 {
            return;
        }
        self.frame_counter += 1;
        if self.frame_counter as f32 >= STEP_RATE / self.sheet.animation_speed {
            self.frame_counter = 0;
            self.current_frame = (self.current_frame + 1) % self.sheet.total_frames;
        }
    }

    /// Source rectangle of the current frame within the sheet image.
    pub fn source_rect(&self) -> Rect {
        let per_row = self.sheet.frames_per_row.max(1);
        let row = self.current_frame / per_row;
        let col = self.current_frame % per_row;
        Rect::new(
            col as f32 * self.sheet.frame_width,
            row as f32 * self.sheet.frame_height,
            self.sheet.frame_width,
            self.sheet.frame_height,
        )
    }
}
