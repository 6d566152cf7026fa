use std::fmt::{Display, Formatter};

/// States of the loader indicator.
///
/// The indicator loops freely while a download runs, plays forward to 100%
/// exactly once when the download completes, then loops again. There is no
/// terminal state, the indicator stays reusable across attempts.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum LoaderState {
    Idle,
    Looping,
    FinishingOnce,
}

impl LoaderState {
    /// A download was started.
    pub fn begin_looping(self) -> LoaderState {
        match self {
            LoaderState::Idle => LoaderState::Looping,
            other => other,
        }
    }

    /// The download completed, the finish playback begins.
    pub fn finish_once(self) -> LoaderState {
        match self {
            LoaderState::Looping => LoaderState::FinishingOnce,
            other => other,
        }
    }

    /// The finish playback reached its target.
    pub fn playback_done(self) -> LoaderState {
        match self {
            LoaderState::FinishingOnce => LoaderState::Looping,
            other => other,
        }
    }
}

impl Display for LoaderState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderState::Idle => write!(f, "Idle"),
            LoaderState::Looping => write!(f, "Looping"),
            LoaderState::FinishingOnce => write!(f, "FinishingOnce"),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::loader_state::LoaderState;

    #[test]
    fn test_full_cycle() {
        let state = LoaderState::Idle;
        let state = state.begin_looping();
        assert_eq!(state, LoaderState::Looping);
        let state = state.finish_once();
        assert_eq!(state, LoaderState::FinishingOnce);
        let state = state.playback_done();
        assert_eq!(state, LoaderState::Looping);
    }

    #[test]
    fn test_begin_while_looping_is_noop() {
        let state = LoaderState::Looping;
        assert_eq!(state.begin_looping(), LoaderState::Looping);
    }

    #[test]
    fn test_finish_requires_looping() {
        assert_eq!(LoaderState::Idle.finish_once(), LoaderState::Idle);
        assert_eq!(
            LoaderState::FinishingOnce.finish_once(),
            LoaderState::FinishingOnce
        );
    }

    #[test]
    fn test_playback_done_requires_finishing() {
        assert_eq!(LoaderState::Idle.playback_done(), LoaderState::Idle);
        assert_eq!(LoaderState::Looping.playback_done(), LoaderState::Looping);
    }
}
