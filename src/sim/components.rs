use bitflags::bitflags;

bitflags! {
    /// Movement intent sampled once per frame by the window thread.
    ///
    /// A snapshot is sent whole to the update step, so a frame never sees a
    /// half-updated key state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InputCmd: u8 {
        const FORWARD    = 0x01; // ↑
        const BACKWARD   = 0x02; // ↓
        const TURN_LEFT  = 0x04; // ←
        const TURN_RIGHT = 0x08; // →
    }
}

impl Default for InputCmd {
    fn default() -> Self {
        Self::empty()
    }
}

impl InputCmd {
    /// Turn sign for this tic: `+1` left, `-1` right, left wins ties.
    #[inline]
    pub fn turn(self) -> f64 {
        if self.contains(Self::TURN_LEFT) {
            1.0
        } else if self.contains(Self::TURN_RIGHT) {
            -1.0
        } else {
            0.0
        }
    }

    /// Walk sign for this tic: `+1` forward, `-1` back, forward wins ties.
    #[inline]
    pub fn walk(self) -> f64 {
        if self.contains(Self::FORWARD) {
            1.0
        } else if self.contains(Self::BACKWARD) {
            -1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_matches_key_priority() {
        let all = InputCmd::all();
        assert_eq!(all.turn(), 1.0);
        assert_eq!(all.walk(), 1.0);
        assert_eq!((InputCmd::TURN_RIGHT | InputCmd::BACKWARD).turn(), -1.0);
        assert_eq!((InputCmd::TURN_RIGHT | InputCmd::BACKWARD).walk(), -1.0);
        assert_eq!(InputCmd::default().walk(), 0.0);
        assert_eq!(InputCmd::default().turn(), 0.0);
    }
}
