//! Interactive visualization of the sort engines.
//!
//! [`Surface`] abstracts the render target and its input events.
//! [`SortSession`] drives an instrumented sort against a surface,
//! pacing, pausing and cancelling according to the events it receives.

pub mod session;
pub mod surface;

pub use session::SortSession;
pub use surface::{Surface, SurfaceEvent, TerminalSurface};

/// Lifecycle phase of a visualization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No run in progress.
    #[default]
    Idle,
    /// The engine is stepping.
    Running,
    /// The engine is blocked waiting for a resume or quit.
    Paused,
    /// The engine has finished; the final frame is on screen.
    Finished,
}

/// Run state shared between the session driver and the sink callback.
///
/// Tracks the phase and whether a quit was requested mid-run. A
/// cancelled run still completes sorting; the flag only suppresses
/// pacing and the dismissal wait.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionState {
    phase: Phase,
    cancelled: bool,
}

impl SessionState {
    /// Create a new state in [`Phase::Idle`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a run is in progress (running or paused).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused)
    }

    /// Whether the run is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        matches!(self.phase, Phase::Paused)
    }

    /// Whether a quit was requested during the run.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Begin a run. Clears any previous cancellation.
    pub fn start(&mut self) {
        self.phase = Phase::Running;
        self.cancelled = false;
    }

    /// Toggle between running and paused. No effect outside a run.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
    }

    /// Request cancellation. The run keeps stepping to completion but
    /// stops pacing and skips the dismissal wait.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        if self.is_active() {
            self.phase = Phase::Running;
        }
    }

    /// Mark the run finished.
    pub fn finish(&mut self) {
        self.phase = Phase::Finished;
    }

    /// Return to idle, ready for the next run.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.cancelled = false;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let state = SessionState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.is_active());
        assert!(!state.is_cancelled());
    }

    #[test]
    fn test_start_runs() {
        let mut state = SessionState::new();
        state.start();
        assert_eq!(state.phase(), Phase::Running);
        assert!(state.is_active());
    }

    #[test]
    fn test_pause_toggle_round_trip() {
        let mut state = SessionState::new();
        state.start();
        state.toggle_pause();
        assert!(state.is_paused());
        state.toggle_pause();
        assert_eq!(state.phase(), Phase::Running);
    }

    #[test]
    fn test_pause_toggle_ignored_when_idle() {
        let mut state = SessionState::new();
        state.toggle_pause();
        assert_eq!(state.phase(), Phase::Idle);
        state.finish();
        state.toggle_pause();
        assert_eq!(state.phase(), Phase::Finished);
    }

    #[test]
    fn test_cancel_unblocks_a_paused_run() {
        let mut state = SessionState::new();
        state.start();
        state.toggle_pause();
        state.cancel();
        assert!(state.is_cancelled());
        assert_eq!(state.phase(), Phase::Running);
    }

    #[test]
    fn test_cancelled_run_still_finishes() {
        let mut state = SessionState::new();
        state.start();
        state.cancel();
        state.finish();
        assert_eq!(state.phase(), Phase::Finished);
        assert!(state.is_cancelled());
    }

    #[test]
    fn test_start_clears_previous_cancellation() {
        let mut state = SessionState::new();
        state.start();
        state.cancel();
        state.finish();
        state.reset();
        state.start();
        assert!(!state.is_cancelled());
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut state = SessionState::new();
        state.start();
        state.finish();
        state.reset();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.is_cancelled());
    }
}
