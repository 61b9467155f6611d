//! The state machine behind the rotating alert banner.

/// What the banner is pointing at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BannerState {
    #[default]
    Hidden,
    Showing(usize),
}

/// Cycles through the active alerts one at a time.
///
/// The owner calls [`sync`](Self::sync) whenever the alert list changes and
/// [`tick`](Self::tick) each time its rotation timer fires. A timer is only
/// needed while [`needs_timer`](Self::needs_timer) is true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BannerRotation {
    state: BannerState,
    len: usize,
    dismissed: bool,
}

impl BannerRotation {
    pub fn state(&self) -> BannerState {
        self.state
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Adopts the new length of the alert list.
    ///
    /// An empty list hides the banner. A list that was empty starts over at
    /// the first alert and forgets an earlier dismissal. A shrunken list
    /// wraps the current index back into range.
    pub fn sync(&mut self, len: usize) {
        let was_empty = self.len == 0;
        self.len = len;
        self.state = match (len, self.state) {
            (0, _) => BannerState::Hidden,
            (_, BannerState::Showing(index)) if !was_empty => BannerState::Showing(index % len),
            _ => {
                self.dismissed = false;
                BannerState::Showing(0)
            }
        };
    }

    /// Advances to the next alert, wrapping at the end.
    pub fn tick(&mut self) {
        if let BannerState::Showing(index) = self.state {
            if self.len > 0 {
                self.state = BannerState::Showing((index + 1) % self.len);
            }
        }
    }

    /// Suppresses the banner until the list next goes from empty to non-empty.
    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    /// Index of the alert to display, if anything should be displayed.
    pub fn visible_index(&self) -> Option<usize> {
        match self.state {
            BannerState::Showing(index) if !self.dismissed => Some(index),
            _ => None,
        }
    }

    pub fn needs_timer(&self) -> bool {
        self.visible_index().is_some()
    }
}
