//! Match setup loading.
//!
//! Setup data (profiles, decks) may take several ticks to arrive. The
//! `Initializing` state polls a `MatchLoader` once per tick and never blocks.

use std::task::Poll;

use crate::players::{MatchSetup, SetupError};

/// Source of match setup data, polled once per tick until ready.
pub trait MatchLoader {
    /// `Pending` until the setup is available. After returning `Ready`
    /// the loader is not polled again.
    fn poll_load(&mut self) -> Poll<Result<MatchSetup, SetupError>>;
}

impl<F> MatchLoader for F
where
    F: FnMut() -> Poll<Result<MatchSetup, SetupError>>,
{
    fn poll_load(&mut self) -> Poll<Result<MatchSetup, SetupError>> {
        self()
    }
}

/// A loader whose result is already known.
///
/// ```
/// use std::task::Poll;
/// use rust_ccg_match::machine::{MatchLoader, ReadyLoader};
/// use rust_ccg_match::players::MatchSetup;
///
/// let mut loader = ReadyLoader::new(MatchSetup::default());
/// assert!(matches!(loader.poll_load(), Poll::Ready(Ok(_))));
/// assert!(loader.poll_load().is_pending());
/// ```
#[derive(Debug)]
pub struct ReadyLoader {
    result: Option<Result<MatchSetup, SetupError>>,
}

impl ReadyLoader {
    #[must_use]
    pub fn new(setup: MatchSetup) -> Self {
        Self {
            result: Some(Ok(setup)),
        }
    }

    /// A loader that reports `error` on the first poll.
    #[must_use]
    pub fn failed(error: SetupError) -> Self {
        Self {
            result: Some(Err(error)),
        }
    }
}

impl MatchLoader for ReadyLoader {
    fn poll_load(&mut self) -> Poll<Result<MatchSetup, SetupError>> {
        match self.result.take() {
            Some(result) => Poll::Ready(result),
            None => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_loader() {
        let mut polls = 0;
        let mut loader = move || -> Poll<Result<MatchSetup, SetupError>> {
            polls += 1;
            if polls < 3 {
                Poll::Pending
            } else {
                Poll::Ready(Ok(MatchSetup::default()))
            }
        };

        assert!(MatchLoader::poll_load(&mut loader).is_pending());
        assert!(MatchLoader::poll_load(&mut loader).is_pending());
        assert!(MatchLoader::poll_load(&mut loader).is_ready());
    }

    #[test]
    fn test_failed_loader() {
        let mut loader = ReadyLoader::failed(SetupError::LoadFailed("missing deck file".into()));

        assert_eq!(
            loader.poll_load(),
            Poll::Ready(Err(SetupError::LoadFailed("missing deck file".into())))
        );
    }
}
