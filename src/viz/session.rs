//! Drives an instrumented sort against a [`Surface`].
//!
//! The session implements [`StepSink`], so the engine calls back into
//! it on every step. Each callback drains pending input, blocks while
//! paused, renders the frame with the step's indices highlighted and
//! sleeps for the pacing delay. A quit request cancels the run: the
//! engine still steps to completion, but frames, pacing and the final
//! dismissal wait are skipped.

use std::thread;
use std::time::Duration;

use crate::error::{VizError, VizResult};
use crate::sort::{Algorithm, StepSink};
use crate::viz::surface::{Surface, SurfaceEvent};
use crate::viz::SessionState;

/// One visualization run over a surface.
pub struct SortSession<S: Surface> {
    surface: S,
    state: SessionState,
    delay: Duration,
    failure: Option<VizError>,
}

impl<S: Surface> SortSession<S> {
    /// Create a session with the given pacing delay between steps.
    pub fn new(surface: S, delay: Duration) -> Self {
        Self {
            surface,
            state: SessionState::new(),
            delay,
            failure: None,
        }
    }

    /// Run state, for inspection after `run` returns.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Give the surface back, consuming the session.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Visualize `algorithm` sorting `values` in place.
    ///
    /// Renders an initial frame, steps the engine with per-step frames,
    /// then renders the final sorted frame and waits for a key to
    /// dismiss it. An empty sequence returns immediately. A cancelled
    /// run still leaves `values` fully sorted.
    pub fn run(&mut self, algorithm: Algorithm, values: &mut [i32]) -> VizResult<()> {
        if values.is_empty() {
            return Ok(());
        }
        self.state.start();
        self.failure = None;
        let result = self.drive(algorithm, values);
        self.state.reset();
        result
    }

    fn drive(&mut self, algorithm: Algorithm, values: &mut [i32]) -> VizResult<()> {
        self.surface.render(values, None)?;
        algorithm.sort_with(values, self);
        self.state.finish();

        if let Some(err) = self.failure.take() {
            return Err(err);
        }
        self.surface.render(values, None)?;

        if !self.state.is_cancelled() {
            self.wait_for_dismissal(values)?;
        }
        Ok(())
    }

    /// Block on the final frame until any key press.
    fn wait_for_dismissal(&mut self, values: &[i32]) -> VizResult<()> {
        loop {
            match self.surface.wait_event()? {
                SurfaceEvent::Resize => self.surface.render(values, None)?,
                _ => return Ok(()),
            }
        }
    }

    /// Record a surface failure and cancel so the engine winds down
    /// without further frames.
    fn fail(&mut self, err: VizError) {
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        self.state.cancel();
    }

    fn handle_event(&mut self, event: SurfaceEvent, values: &[i32], highlight: (usize, usize)) {
        match event {
            SurfaceEvent::Quit => self.state.cancel(),
            SurfaceEvent::PauseToggle => self.state.toggle_pause(),
            SurfaceEvent::Resize => {
                if let Err(err) = self.surface.render(values, Some(highlight)) {
                    self.fail(err);
                }
            }
            SurfaceEvent::Other => {}
        }
    }
}

impl<S: Surface> StepSink for SortSession<S> {
    fn on_step(&mut self, values: &[i32], a: usize, b: usize) {
        if self.failure.is_some() {
            return;
        }
        // Drain whatever input arrived since the last step.
        loop {
            match self.surface.poll_event() {
                Ok(Some(event)) => self.handle_event(event, values, (a, b)),
                Ok(None) => break,
                Err(err) => {
                    self.fail(err);
                    return;
                }
            }
        }
        // A pause blocks the engine right here until resumed or quit.
        while self.state.is_paused() {
            match self.surface.wait_event() {
                Ok(event) => self.handle_event(event, values, (a, b)),
                Err(err) => {
                    self.fail(err);
                    return;
                }
            }
        }
        if self.state.is_cancelled() {
            return;
        }
        if let Err(err) = self.surface.render(values, Some((a, b))) {
            self.fail(err);
            return;
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::VizError;
    use crate::viz::Phase;
    use std::collections::VecDeque;

    /// Surface double driven by scripted event queues.
    ///
    /// `poll` holds one entry per poll call (`None` meaning no pending
    /// event); once exhausted, polling reports no events. `wait`
    /// defaults to `Quit` when exhausted so dismissal never hangs.
    #[derive(Default)]
    struct ScriptedSurface {
        poll: VecDeque<Option<SurfaceEvent>>,
        wait: VecDeque<SurfaceEvent>,
        frames: Vec<(Vec<i32>, Option<(usize, usize)>)>,
        wait_calls: usize,
        fail_render_at: Option<usize>,
    }

    impl Surface for ScriptedSurface {
        fn render(&mut self, values: &[i32], highlight: Option<(usize, usize)>) -> VizResult<()> {
            if self.fail_render_at == Some(self.frames.len()) {
                return Err(VizError::surface("scripted render failure"));
            }
            self.frames.push((values.to_vec(), highlight));
            Ok(())
        }

        fn poll_event(&mut self) -> VizResult<Option<SurfaceEvent>> {
            Ok(self.poll.pop_front().flatten())
        }

        fn wait_event(&mut self) -> VizResult<SurfaceEvent> {
            self.wait_calls += 1;
            Ok(self.wait.pop_front().unwrap_or(SurfaceEvent::Quit))
        }
    }

    fn session(surface: ScriptedSurface) -> SortSession<ScriptedSurface> {
        SortSession::new(surface, Duration::ZERO)
    }

    #[test]
    fn test_natural_run_renders_every_step() {
        // Bubble on [3,1,2] emits 5 events; plus initial and final.
        let mut session = session(ScriptedSurface::default());
        let mut values = vec![3, 1, 2];
        session.run(Algorithm::Bubble, &mut values).unwrap();
        assert_eq!(values, [1, 2, 3]);

        let surface = session.into_surface();
        assert_eq!(surface.frames.len(), 7);
        assert_eq!(surface.frames[0], (vec![3, 1, 2], None));
        assert_eq!(surface.frames[1], (vec![3, 1, 2], Some((0, 1))));
        assert_eq!(surface.frames[6], (vec![1, 2, 3], None));
        // One wait for the dismissal key.
        assert_eq!(surface.wait_calls, 1);
    }

    #[test]
    fn test_quit_cancels_but_still_sorts() {
        let surface = ScriptedSurface {
            poll: VecDeque::from([Some(SurfaceEvent::Quit)]),
            ..ScriptedSurface::default()
        };
        let mut session = session(surface);
        let mut values = vec![3, 1, 2];
        session.run(Algorithm::Bubble, &mut values).unwrap();
        assert_eq!(values, [1, 2, 3]);

        let surface = session.into_surface();
        // Initial and final frames only; step frames are skipped.
        assert_eq!(surface.frames.len(), 2);
        assert_eq!(surface.frames[1], (vec![1, 2, 3], None));
        // Dismissal wait skipped after a cancel.
        assert_eq!(surface.wait_calls, 0);
    }

    #[test]
    fn test_pause_blocks_until_resumed() {
        let surface = ScriptedSurface {
            poll: VecDeque::from([Some(SurfaceEvent::PauseToggle)]),
            wait: VecDeque::from([SurfaceEvent::Other, SurfaceEvent::PauseToggle]),
            ..ScriptedSurface::default()
        };
        let mut session = session(surface);
        let mut values = vec![3, 1, 2];
        session.run(Algorithm::Bubble, &mut values).unwrap();
        assert_eq!(values, [1, 2, 3]);

        let surface = session.into_surface();
        // Pause loses no frames: still initial + 5 steps + final.
        assert_eq!(surface.frames.len(), 7);
        // Two waits while paused plus one for dismissal.
        assert_eq!(surface.wait_calls, 3);
    }

    #[test]
    fn test_quit_during_pause_cancels() {
        let surface = ScriptedSurface {
            poll: VecDeque::from([Some(SurfaceEvent::PauseToggle)]),
            wait: VecDeque::from([SurfaceEvent::Quit]),
            ..ScriptedSurface::default()
        };
        let mut session = session(surface);
        let mut values = vec![3, 1, 2];
        session.run(Algorithm::Bubble, &mut values).unwrap();
        assert_eq!(values, [1, 2, 3]);

        let surface = session.into_surface();
        assert_eq!(surface.frames.len(), 2);
        assert_eq!(surface.wait_calls, 1);
    }

    #[test]
    fn test_resize_redraws_current_frame() {
        let surface = ScriptedSurface {
            poll: VecDeque::from([Some(SurfaceEvent::Resize)]),
            ..ScriptedSurface::default()
        };
        let mut session = session(surface);
        let mut values = vec![3, 1, 2];
        session.run(Algorithm::Bubble, &mut values).unwrap();

        let surface = session.into_surface();
        // One extra frame from the redraw, highlighted like the step.
        assert_eq!(surface.frames.len(), 8);
        assert_eq!(surface.frames[1], (vec![3, 1, 2], Some((0, 1))));
    }

    #[test]
    fn test_empty_sequence_is_a_no_op() {
        let mut session = session(ScriptedSurface::default());
        let mut values: Vec<i32> = vec![];
        session.run(Algorithm::Quick, &mut values).unwrap();

        let surface = session.into_surface();
        assert!(surface.frames.is_empty());
        assert_eq!(surface.wait_calls, 0);
    }

    #[test]
    fn test_render_failure_surfaces_as_error() {
        let surface = ScriptedSurface {
            fail_render_at: Some(2),
            ..ScriptedSurface::default()
        };
        let mut session = session(surface);
        let mut values = vec![3, 1, 2];
        let err = session.run(Algorithm::Bubble, &mut values).unwrap_err();
        assert!(err.is_surface_failure());
        // The engine still finished sorting before the error returned.
        assert_eq!(values, [1, 2, 3]);
        assert_eq!(session.state().phase(), Phase::Idle);
    }

    #[test]
    fn test_state_returns_to_idle_after_run() {
        let mut session = session(ScriptedSurface::default());
        let mut values = vec![2, 1];
        session.run(Algorithm::Insertion, &mut values).unwrap();
        assert_eq!(session.state().phase(), Phase::Idle);
        assert!(!session.state().is_cancelled());
    }
}
