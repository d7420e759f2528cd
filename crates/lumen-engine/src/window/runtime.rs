use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{logical_viewport, App, AppControl, FrameCtx, LoopState, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{translate_window_event, InputEvent};
use crate::paint::Color;
use crate::render::RenderCtx;
use crate::time::{fps_caption, FpsCounter, FrameClock, FramePacer};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Projection matrices are built from the initial size, so the window
    /// is fixed-size by default.
    pub resizable: bool,
    /// Frame-rate cap; `0` disables it.
    pub target_fps: u32,
    pub clear_color: Color,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "lumen".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            resizable: false,
            target_fps: 60,
            clear_color: Color::BLACK,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, starts `app`, and runs the frame loop until a quit
    /// request, an `Exit` from the app, or a fatal error.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,
    fps: FpsCounter,
    pacer: FramePacer,
    shown_fps: Option<u32>,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    loop_state: LoopState,
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            loop_state: LoopState::new(),
            fatal: None,
        }
    }

    /// Records the first fatal error and stops the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        record_fatal(&mut self.loop_state, &mut self.fatal, err);
        event_loop.exit();
    }

    /// Creates the window and GPU context, then lets the app build its scene.
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let now = Instant::now();

        let entry = WindowEntryTryBuilder {
            clock: FrameClock::starting_at(now),
            fps: FpsCounter::new(),
            pacer: FramePacer::new(self.config.target_fps, now),
            shown_fps: None,
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
            .try_build()
            .context("GPU initialization failed")?;

        let app = &mut self.app;
        entry
            .with(|fields| {
                let rctx = RenderCtx::new(
                    fields.gpu.device(),
                    fields.gpu.queue(),
                    fields.gpu.surface_format(),
                    logical_viewport(fields.window),
                );
                app.on_start(&rctx)
            })
            .context("app startup failed")?;

        log::info!(
            "runtime started: '{}' {}x{} @ {} fps cap",
            self.config.title,
            self.config.initial_size.width,
            self.config.initial_size.height,
            self.config.target_fps
        );

        entry.with_window(|w| w.request_redraw());
        self.entry = Some(entry);
        Ok(())
    }

    /// Ticks timing, refreshes the caption and runs one app frame.
    fn draw_frame(&mut self, event_loop: &ActiveEventLoop) {
        let clear_color = self.config.clear_color;
        let app = &mut self.app;
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let outcome = entry.with_mut(|fields| {
            let now = Instant::now();
            fields.pacer.mark_frame(now);

            let time = fields.clock.tick_at(now);
            fields.fps.record(time.raw_dt);
            let fps = fields.fps.fps();

            let shown = fps as u32;
            if *fields.shown_fps != Some(shown) {
                fields.window.set_title(&fps_caption(fps));
                *fields.shown_fps = Some(shown);
            }

            log::trace!("frame {} (dt {:.4}s, {fps:.1} fps)", time.frame_index, time.dt);

            let mut ctx = FrameCtx {
                window: WindowCtx { window: fields.window },
                gpu: fields.gpu,
                time,
                fps,
                clear_color,
            };

            app.on_frame(&mut ctx)
        });

        if !settle_frame(&mut self.loop_state, &mut self.fatal, outcome) {
            event_loop.exit();
        }
    }
}

/// Stores `err` as the run's result unless one is already stored, and stops
/// the loop.
fn record_fatal(
    loop_state: &mut LoopState,
    fatal: &mut Option<anyhow::Error>,
    err: anyhow::Error,
) {
    log::error!("{err:#}");
    if fatal.is_none() {
        *fatal = Some(err);
    }
    loop_state.stop();
}

/// Applies the result of one app frame. Returns `false` once the loop has
/// stopped.
fn settle_frame(
    loop_state: &mut LoopState,
    fatal: &mut Option<anyhow::Error>,
    outcome: Result<AppControl>,
) -> bool {
    match outcome {
        Ok(AppControl::Continue) => {}
        Ok(AppControl::Exit) => {
            log::info!("app requested exit");
            loop_state.stop();
        }
        Err(err) => record_fatal(loop_state, fatal, err.context("frame failed")),
    }
    loop_state.is_running()
}

/// Feeds one window event's input to the loop flag and then the app.
///
/// Returns `false` once the loop has stopped; the event, and any redraw
/// queued behind it, must then go unprocessed.
fn route_input<A: App>(
    loop_state: &mut LoopState,
    app: &mut A,
    input: Option<&InputEvent>,
) -> bool {
    if let Some(ev) = input {
        loop_state.handle_event(ev);

        if loop_state.is_running() && app.on_input(ev) == AppControl::Exit {
            log::info!("app requested exit on {ev:?}");
            loop_state.stop();
        }
    }
    loop_state.is_running()
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || !self.loop_state.is_running() {
            return;
        }

        if let Err(e) = self.start(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.loop_state.is_running() {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.entry.as_ref() else {
            return;
        };

        // Redraw once the pacer deadline has passed; otherwise sleep until it.
        let now = Instant::now();
        let deadline = entry.with(|fields| {
            if fields.pacer.is_due(now) {
                fields.window.request_redraw();
            }
            fields.pacer.deadline()
        });

        event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let input = translate_window_event(&event);
        if !route_input(&mut self.loop_state, &mut self.app, input.as_ref()) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
            }

            WindowEvent::RedrawRequested => self.draw_frame(event_loop),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!("runtime exiting");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{surface_outcome, FrameCtx};
    use crate::device::SurfaceErrorAction;
    use crate::input::{Key, KeyState};

    /// App that counts input and optionally exits on Enter.
    #[derive(Default)]
    struct Recorder {
        exit_on_enter: bool,
        inputs: Vec<InputEvent>,
    }

    impl App for Recorder {
        fn on_start(&mut self, _ctx: &RenderCtx<'_>) -> Result<()> {
            Ok(())
        }

        fn on_input(&mut self, event: &InputEvent) -> AppControl {
            self.inputs.push(event.clone());
            if self.exit_on_enter && *event == InputEvent::key_pressed(Key::Enter) {
                AppControl::Exit
            } else {
                AppControl::Continue
            }
        }

        fn on_frame(&mut self, _ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
            Ok(AppControl::Continue)
        }
    }

    #[test]
    fn escape_stops_before_the_queued_redraw() {
        let mut state = LoopState::new();
        let mut app = Recorder::default();

        assert!(!route_input(&mut state, &mut app, Some(&InputEvent::key_pressed(Key::Escape))));
        // RedrawRequested translates to no input.
        assert!(!route_input(&mut state, &mut app, None));
        assert!(app.inputs.is_empty());
    }

    #[test]
    fn quit_stops_before_the_queued_redraw() {
        let mut state = LoopState::new();
        let mut app = Recorder::default();

        assert!(!route_input(&mut state, &mut app, Some(&InputEvent::Quit)));
        assert!(!route_input(&mut state, &mut app, None));
        assert!(app.inputs.is_empty());
    }

    #[test]
    fn other_input_reaches_the_app_and_keeps_running() {
        let mut state = LoopState::new();
        let mut app = Recorder::default();
        let escape_up = InputEvent::Key {
            key: Key::Escape,
            state: KeyState::Released,
            repeat: false,
        };

        assert!(route_input(&mut state, &mut app, Some(&InputEvent::key_pressed(Key::Space))));
        assert!(route_input(&mut state, &mut app, Some(&escape_up)));
        assert!(route_input(&mut state, &mut app, Some(&InputEvent::Focused(false))));
        assert!(route_input(&mut state, &mut app, None));
        assert_eq!(app.inputs.len(), 3);
    }

    #[test]
    fn app_exit_on_input_stops_loop() {
        let mut state = LoopState::new();
        let mut app = Recorder {
            exit_on_enter: true,
            ..Default::default()
        };

        assert!(route_input(&mut state, &mut app, Some(&InputEvent::key_pressed(Key::Space))));
        assert!(!route_input(&mut state, &mut app, Some(&InputEvent::key_pressed(Key::Enter))));
        assert!(!state.is_running());
        assert!(!route_input(&mut state, &mut app, None));
    }

    #[test]
    fn fatal_frame_error_is_stored() {
        let mut state = LoopState::new();
        let mut fatal = None;

        let outcome = surface_outcome(SurfaceErrorAction::Fatal, "Out of memory")
            .map(|()| AppControl::Continue);
        assert!(!settle_frame(&mut state, &mut fatal, outcome));
        assert!(!state.is_running());

        let err = fatal.take().unwrap();
        assert!(format!("{err:#}").contains("fatal surface error"));
    }

    #[test]
    fn first_fatal_error_wins() {
        let mut state = LoopState::new();
        let mut fatal = None;

        settle_frame(&mut state, &mut fatal, Err(anyhow::anyhow!("first")));
        settle_frame(&mut state, &mut fatal, Err(anyhow::anyhow!("second")));
        assert!(format!("{:#}", fatal.unwrap()).contains("first"));
    }

    #[test]
    fn app_exit_on_frame_stops_without_error() {
        let mut state = LoopState::new();
        let mut fatal = None;

        assert!(settle_frame(&mut state, &mut fatal, Ok(AppControl::Continue)));
        assert!(!settle_frame(&mut state, &mut fatal, Ok(AppControl::Exit)));
        assert!(fatal.is_none());
    }
}
