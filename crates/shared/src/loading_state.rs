use serde::{Deserialize, Serialize};
use std::fmt;

/// Load state of a grid image.
///
/// Lazy images start out `Deferred` with no displayed source and move to
/// `Loaded` on their first visibility event. Images that are not lazy are
/// `Eager` for their whole life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LoadingState {
    #[default]
    Deferred,
    Loaded,
    Eager,
}

impl LoadingState {
    pub fn is_deferred(&self) -> bool {
        matches!(self, LoadingState::Deferred)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded)
    }

    /// Whether the element still carries the lazy marker.
    pub fn is_lazy_marked(&self) -> bool {
        self.is_deferred()
    }

    /// Whether a source should be displayed at all.
    pub fn has_source(&self) -> bool {
        !self.is_deferred()
    }

    pub fn transition_to_loaded(self) -> Self {
        Self::Loaded
    }
}

impl fmt::Display for LoadingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadingState::Deferred => write!(f, "Deferred"),
            LoadingState::Loaded => write!(f, "Loaded"),
            LoadingState::Eager => write!(f, "Eager"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingEvent {
    Intersecting,
    NotIntersecting,
}

impl LoadingEvent {
    pub fn from_intersecting(intersecting: bool) -> Self {
        if intersecting {
            LoadingEvent::Intersecting
        } else {
            LoadingEvent::NotIntersecting
        }
    }

    /// Only the first intersection of a deferred image does anything.
    pub fn apply_to_state(self, current_state: LoadingState) -> LoadingState {
        match (self, current_state) {
            (LoadingEvent::Intersecting, LoadingState::Deferred) => {
                current_state.transition_to_loaded()
            }
            (_, state) => state,
        }
    }
}
