use serde::{Deserialize, Serialize};

use crate::geom::Rect;
use crate::sprite::{Animation, SpriteSheet};

/// A static slab of level geometry with a drawable face. Constructed once
/// at world init; the geometry never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    rect: Rect,
    animation: Animation,
}

impl Platform {
    pub fn new(rect: Rect, sheet: SpriteSheet) -> Self {
        Self {
            rect,
            animation: Animation::new(sheet),
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub(crate) fn animation_mut(&mut self) -> &mut Animation {
        &mut self.animation
    }
}
