use serde::{Deserialize, Serialize};

/// Held state of the three logical actions, sampled once at the start of
/// each update. The host input layer writes it between frames; the
/// simulation only ever reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputSnapshot {
    /// No actions held.
    pub const RELEASED: Self = Self {
        left: false,
        right: false,
        jump: false,
    };

    pub fn new(left: bool, right: bool, jump: bool) -> Self {
        Self { left, right, jump }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_nothing_held() {
        assert_eq!(InputSnapshot::default(), InputSnapshot::RELEASED);
    }
}
