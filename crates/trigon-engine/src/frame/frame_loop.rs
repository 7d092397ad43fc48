use std::time::Instant;

use winit::dpi::PhysicalSize;

use crate::error::{RenderError, RenderResult};
use crate::time::{elapsed_ms, FrameClock};

use super::pass::{AcquireFailure, FramePass};

/// The presentation operations one loop iteration needs.
///
/// Implemented over wgpu by [`GpuPresenter`](super::GpuPresenter); the
/// frame loop only sees this trait.
pub trait Presenter {
    /// Acquired presentable texture.
    type Frame;

    /// Requests the current presentable texture.
    fn acquire(&mut self) -> Result<Self::Frame, AcquireFailure>;

    /// Current drawable size of the window.
    fn window_size(&self) -> PhysicalSize<u32>;

    /// Applies `size` to the stored configuration and reconfigures the surface.
    fn reconfigure(&mut self, size: PhysicalSize<u32>);

    /// Records `pass` into one render pass targeting `frame` and submits it.
    fn record_and_submit(&mut self, frame: &Self::Frame, pass: &FramePass);

    /// Shows `frame` on screen.
    fn present(&mut self, frame: Self::Frame);
}

/// Result of one loop iteration that did not fail.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    Presented,
    /// Acquisition timed out; nothing was recorded or presented.
    Skipped,
}

/// Drives acquire → (reconfigure → reacquire) → record/submit → present.
#[derive(Debug)]
pub struct FrameLoop {
    pass: FramePass,
    clock: FrameClock,
    running: bool,
}

impl FrameLoop {
    pub fn new(pass: FramePass) -> Self {
        Self {
            pass,
            clock: FrameClock::new(),
            running: true,
        }
    }

    /// Index of the next iteration to run.
    pub fn frame_index(&self) -> u64 {
        self.clock.frame_index()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Marks the loop as finished.
    ///
    /// Checked by the caller between iterations; an iteration already under
    /// way still completes.
    pub fn request_quit(&mut self) {
        self.running = false;
    }

    /// Runs one iteration. The frame counter advances whatever the outcome.
    pub fn run_frame<P: Presenter>(&mut self, presenter: &mut P) -> RenderResult<FrameOutcome> {
        let outcome = self.step(presenter);

        let ft = self.clock.tick();
        log::trace!("frame {} ({:.3} ms since previous)", ft.frame_index, ft.dt * 1000.0);
        outcome
    }

    fn step<P: Presenter>(&self, presenter: &mut P) -> RenderResult<FrameOutcome> {
        let started = Instant::now();

        let mut acquired = presenter.acquire();

        // One reconfigure + retry per iteration; a second Outdated is fatal.
        if let Err(AcquireFailure::Outdated) = acquired {
            let size = presenter.window_size();
            log::info!("resized to {}x{}", size.width, size.height);

            presenter.reconfigure(size);
            acquired = presenter.acquire();
        }

        let frame = match acquired {
            Ok(frame) => frame,
            Err(AcquireFailure::Timeout) => {
                log::warn!("surface texture timeout; skipping frame {}", self.clock.frame_index());
                return Ok(FrameOutcome::Skipped);
            }
            Err(failure) => return Err(RenderError::TextureAcquisitionFailed(failure)),
        };

        log::debug!("waited {:.3} ms for the swapchain image", elapsed_ms(started));

        presenter.record_and_submit(&frame, &self.pass);
        presenter.present(frame);

        Ok(FrameOutcome::Presented)
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(FramePass::TRIANGLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Acquire,
        Reconfigure(PhysicalSize<u32>),
        RecordAndSubmit(u32, FramePass),
        Present(u32),
    }

    /// Presenter that replays scripted acquisition results.
    struct Scripted {
        results: VecDeque<Result<u32, AcquireFailure>>,
        window: PhysicalSize<u32>,
        configured: PhysicalSize<u32>,
        calls: Vec<Call>,
    }

    impl Scripted {
        fn new(results: impl IntoIterator<Item = Result<u32, AcquireFailure>>) -> Self {
            Self {
                results: results.into_iter().collect(),
                window: PhysicalSize::new(1024, 768),
                configured: PhysicalSize::new(1024, 768),
                calls: Vec::new(),
            }
        }

        fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
            self.calls.iter().filter(|c| pred(c)).count()
        }
    }

    impl Presenter for Scripted {
        type Frame = u32;

        fn acquire(&mut self) -> Result<u32, AcquireFailure> {
            self.calls.push(Call::Acquire);
            self.results.pop_front().expect("unscripted acquire")
        }

        fn window_size(&self) -> PhysicalSize<u32> {
            self.window
        }

        fn reconfigure(&mut self, size: PhysicalSize<u32>) {
            self.configured = size;
            self.calls.push(Call::Reconfigure(size));
        }

        fn record_and_submit(&mut self, frame: &u32, pass: &FramePass) {
            self.calls.push(Call::RecordAndSubmit(*frame, pass.clone()));
        }

        fn present(&mut self, frame: u32) {
            self.calls.push(Call::Present(frame));
        }
    }

    // ── success ───────────────────────────────────────────────────────────

    #[test]
    fn success_records_submits_and_presents_once() {
        let mut fl = FrameLoop::default();
        let mut p = Scripted::new([Ok(7)]);

        assert_eq!(fl.run_frame(&mut p).unwrap(), FrameOutcome::Presented);
        assert_eq!(
            p.calls,
            vec![
                Call::Acquire,
                Call::RecordAndSubmit(7, FramePass::TRIANGLE),
                Call::Present(7),
            ]
        );
        assert_eq!(p.configured, PhysicalSize::new(1024, 768));
        assert_eq!(fl.frame_index(), 1);
    }

    #[test]
    fn recorded_pass_is_magenta_clear_and_one_triangle() {
        let mut fl = FrameLoop::default();
        let mut p = Scripted::new([Ok(0)]);
        fl.run_frame(&mut p).unwrap();

        let Some(Call::RecordAndSubmit(_, pass)) = p.calls.get(1) else {
            panic!("expected a recorded pass, got {:?}", p.calls);
        };
        assert_eq!(pass.clear, wgpu::Color { r: 1.0, g: 0.0, b: 1.0, a: 1.0 });
        assert_eq!(pass.draw.vertices, 0..3);
        assert_eq!(pass.draw.instances, 0..1);
    }

    #[test]
    fn each_iteration_submits_at_most_once() {
        let mut fl = FrameLoop::default();
        let mut p = Scripted::new([
            Ok(1),
            Err(AcquireFailure::Timeout),
            Err(AcquireFailure::Outdated),
            Ok(2),
            Ok(3),
        ]);

        for _ in 0..4 {
            let submits_before = p.count(|c| matches!(c, Call::RecordAndSubmit(..)));
            fl.run_frame(&mut p).unwrap();
            let submits_after = p.count(|c| matches!(c, Call::RecordAndSubmit(..)));
            assert!(submits_after - submits_before <= 1);
        }

        assert_eq!(p.count(|c| matches!(c, Call::RecordAndSubmit(..))), 3);
        assert_eq!(p.count(|c| matches!(c, Call::Present(_))), 3);
        assert_eq!(fl.frame_index(), 4);
    }

    // ── outdated ──────────────────────────────────────────────────────────

    #[test]
    fn outdated_reconfigures_to_window_size_then_retries_once() {
        let mut fl = FrameLoop::default();
        let mut p = Scripted::new([Err(AcquireFailure::Outdated), Ok(9)]);
        p.window = PhysicalSize::new(640, 480);

        assert_eq!(fl.run_frame(&mut p).unwrap(), FrameOutcome::Presented);
        assert_eq!(
            p.calls,
            vec![
                Call::Acquire,
                Call::Reconfigure(PhysicalSize::new(640, 480)),
                Call::Acquire,
                Call::RecordAndSubmit(9, FramePass::TRIANGLE),
                Call::Present(9),
            ]
        );
        assert_eq!(p.configured, PhysicalSize::new(640, 480));
    }

    #[test]
    fn second_outdated_is_fatal_without_another_retry() {
        let mut fl = FrameLoop::default();
        let mut p = Scripted::new([Err(AcquireFailure::Outdated), Err(AcquireFailure::Outdated)]);

        let err = fl.run_frame(&mut p).unwrap_err();
        assert!(matches!(
            err,
            RenderError::TextureAcquisitionFailed(AcquireFailure::Outdated)
        ));
        assert_eq!(p.count(|c| *c == Call::Acquire), 2);
        assert_eq!(p.count(|c| matches!(c, Call::Reconfigure(_))), 1);
        assert_eq!(p.count(|c| matches!(c, Call::Present(_))), 0);
        assert_eq!(fl.frame_index(), 1);
    }

    #[test]
    fn outdated_then_timeout_skips() {
        let mut fl = FrameLoop::default();
        let mut p = Scripted::new([Err(AcquireFailure::Outdated), Err(AcquireFailure::Timeout)]);

        assert_eq!(fl.run_frame(&mut p).unwrap(), FrameOutcome::Skipped);
        assert_eq!(p.count(|c| matches!(c, Call::Reconfigure(_))), 1);
        assert_eq!(p.count(|c| matches!(c, Call::RecordAndSubmit(..))), 0);
    }

    // ── timeout ───────────────────────────────────────────────────────────

    #[test]
    fn timeout_skips_render_and_present_but_advances_counter() {
        let mut fl = FrameLoop::default();
        let mut p = Scripted::new([Err(AcquireFailure::Timeout), Ok(4)]);

        assert_eq!(fl.run_frame(&mut p).unwrap(), FrameOutcome::Skipped);
        assert_eq!(p.calls, vec![Call::Acquire]);
        assert_eq!(fl.frame_index(), 1);

        assert_eq!(fl.run_frame(&mut p).unwrap(), FrameOutcome::Presented);
        assert_eq!(fl.frame_index(), 2);
    }

    // ── fatal ─────────────────────────────────────────────────────────────

    #[test]
    fn lost_surface_is_fatal() {
        let mut fl = FrameLoop::default();
        let mut p = Scripted::new([Err(AcquireFailure::Lost)]);

        let err = fl.run_frame(&mut p).unwrap_err();
        assert!(matches!(
            err,
            RenderError::TextureAcquisitionFailed(AcquireFailure::Lost)
        ));
        assert_eq!(p.calls, vec![Call::Acquire]);
        assert_eq!(fl.frame_index(), 1);
    }

    #[test]
    fn out_of_memory_is_fatal() {
        let mut fl = FrameLoop::default();
        let mut p = Scripted::new([Err(AcquireFailure::OutOfMemory)]);
        assert!(fl.run_frame(&mut p).is_err());
    }

    // ── quit ──────────────────────────────────────────────────────────────

    #[test]
    fn quit_lets_current_iteration_finish() {
        let mut fl = FrameLoop::default();
        let mut p = Scripted::new([Ok(1)]);

        fl.request_quit();
        assert!(!fl.is_running());
        assert_eq!(fl.run_frame(&mut p).unwrap(), FrameOutcome::Presented);
        assert!(!fl.is_running());
    }

    #[test]
    fn custom_pass_is_recorded_verbatim() {
        let pass = FramePass {
            clear: wgpu::Color::BLACK,
            ..FramePass::TRIANGLE
        };
        let mut fl = FrameLoop::new(pass.clone());
        let mut p = Scripted::new([Ok(5)]);

        fl.run_frame(&mut p).unwrap();
        assert_eq!(p.calls[1], Call::RecordAndSubmit(5, pass));
    }
}
