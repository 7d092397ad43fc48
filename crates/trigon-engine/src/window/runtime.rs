use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::device::{Gpu, GpuInit};
use crate::error::RenderError;
use crate::frame::{FrameLoop, FramePass, GpuPresenter};
use crate::render::TrianglePipeline;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "WebGPU Demo".to_string(),
            initial_size: LogicalSize::new(1024.0, 768.0),
            resizable: true,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and renders `pass` every iteration until the window
    /// is closed or a frame fails.
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit, pass: FramePass) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, pass);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Window plus the GPU context borrowing it.
#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// Everything alive between window creation and exit.
///
/// Dropping the session releases the pipeline, device, queue, adapter,
/// surface and instance, then the window.
struct Session {
    pipeline: TrianglePipeline,
    entry: WindowEntry,
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    frames: FrameLoop,

    session: Option<Session>,
    failure: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, pass: FramePass) -> Self {
        Self {
            config,
            gpu_init,
            frames: FrameLoop::new(pass),
            session: None,
            failure: None,
        }
    }

    fn create_session(&self, event_loop: &ActiveEventLoop) -> Result<Session> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        let pipeline =
            entry.with_gpu(|gpu| TrianglePipeline::new(gpu.device(), gpu.surface_format()));

        Ok(Session { pipeline, entry })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        self.session = None;
        event_loop.exit();
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() {
            return;
        }

        match self.create_session(event_loop) {
            Ok(session) => {
                self.session = Some(session);
                event_loop.set_control_flow(ControlFlow::Poll);
            }
            Err(e) => self.fail(event_loop, e.context("failed to create initial window")),
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Quit is the only event acted on; resizes surface as Outdated on acquire.
        if let WindowEvent::CloseRequested = event {
            log::info!("quit requested");
            self.frames.request_quit();
        }
    }

    /// Runs once all pending events are drained: one loop iteration.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(Session { pipeline, entry }) = self.session.as_mut() else {
            return;
        };

        let frames = &mut self.frames;
        let result = entry.with_mut(|fields| {
            let mut presenter = GpuPresenter {
                window: fields.window,
                gpu: fields.gpu,
                pipeline: &*pipeline,
            };
            frames.run_frame(&mut presenter)
        });

        if let Err(err) = result {
            self.fail(event_loop, render_failure(err));
            return;
        }

        if !self.frames.is_running() {
            log::info!("exiting after {} frames", self.frames.frame_index());
            self.session = None;
            event_loop.exit();
        }
    }
}

fn render_failure(err: RenderError) -> anyhow::Error {
    anyhow::Error::new(err).context("frame loop stopped")
}
