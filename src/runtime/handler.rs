//! 显示线程上的事件处理 - 托管所有窗口，识别点击，呈现画布

use super::display::Command;
use super::surface::SurfaceShared;
use super::window::{WindowConfig, FALLBACK_FPS};
use crate::error::{GraphicsError, Result};
use crate::event::{MouseButton, MouseEvent, PointerTracker};
use crate::timer::{frame_period, FpsCounter};
use crate::{Color, Point};
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowAttributes, WindowId};

/// 显示线程托管的单个窗口
struct HostedWindow {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    shared: Arc<SurfaceShared>,
    pointer: PointerTracker,
    fps: FpsCounter,
    frame_period: Duration,
    next_frame: Instant,
}

impl HostedWindow {
    fn present(&mut self) {
        let size = self.window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return;
        };

        if let Err(e) = self.surface.resize(width, height) {
            log::warn!("failed to resize surface of '{}': {}", self.shared.config.title, e);
            return;
        }

        match self.surface.buffer_mut() {
            Ok(mut buffer) => {
                self.shared
                    .canvas()
                    .present_into(&mut buffer, size.width, size.height, Color::WHITE);
                if let Err(e) = buffer.present() {
                    log::warn!("failed to present '{}': {}", self.shared.config.title, e);
                    return;
                }
            }
            Err(e) => {
                log::warn!("failed to map buffer of '{}': {}", self.shared.config.title, e);
                return;
            }
        }

        if self.shared.display_fps() {
            if let Some(fps) = self.fps.tick() {
                log::info!("[{}] FPS - {}", self.shared.config.title, fps);
            }
        }
    }

    fn dispatch(&self, event: &MouseEvent) -> usize {
        let delivered = self.shared.router.dispatch(event);
        if delivered > 0 {
            log::trace!("{:?} at {:?} -> {} observer(s)", event.kind, event.position, delivered);
        }
        delivered
    }
}

pub(crate) struct DisplayHandler {
    windows: HashMap<WindowId, HostedWindow>,
}

impl DisplayHandler {
    pub fn new() -> Self {
        Self { windows: HashMap::new() }
    }

    fn open(&mut self, event_loop: &ActiveEventLoop, shared: Arc<SurfaceShared>) -> Result<WindowId> {
        let config = &shared.config;

        let mut attrs = WindowAttributes::default()
            .with_title(config.title.clone())
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(config.resizable)
            .with_visible(config.visible);
        if let Some(position) = initial_position(event_loop, config) {
            attrs = attrs.with_position(position);
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| GraphicsError::window_creation(e.to_string()))?,
        );
        let context = softbuffer::Context::new(window.clone())
            .map_err(|e| GraphicsError::window_creation(e.to_string()))?;
        let surface = softbuffer::Surface::new(&context, window.clone())
            .map_err(|e| GraphicsError::window_creation(e.to_string()))?;

        let fps = config
            .target_fps
            .filter(|fps| *fps > 0)
            .or_else(|| monitor_refresh_rate(event_loop))
            .unwrap_or_else(|| {
                log::info!("could not detect frame-rate, using {} FPS", FALLBACK_FPS);
                FALLBACK_FPS
            });

        let id = window.id();
        log::info!(
            "window {} opened: {}x{} '{}' at {} FPS{}",
            shared.id.get(),
            config.width,
            config.height,
            config.title,
            fps,
            if config.visible { "" } else { " (hidden)" }
        );

        shared.mark_dirty();
        window.request_redraw();

        self.windows.insert(id, HostedWindow {
            window,
            surface,
            shared,
            pointer: PointerTracker::new(),
            fps: FpsCounter::new(),
            frame_period: frame_period(fps),
            next_frame: Instant::now(),
        });
        Ok(id)
    }

    fn close(&mut self, id: WindowId) {
        if let Some(hosted) = self.windows.remove(&id) {
            hosted.shared.mark_closed();
            log::debug!("window {} closed", hosted.shared.id.get());
        }
    }

    fn close_requested(&mut self, id: WindowId) {
        let Some(hosted) = self.windows.remove(&id) else { return };
        hosted.shared.mark_closed();
        log::info!("window '{}' closed by user", hosted.shared.config.title);

        if hosted.shared.config.exit_on_close {
            log::info!("exit on close, terminating");
            std::process::exit(0);
        }
    }
}

impl ApplicationHandler<Command> for DisplayHandler {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn user_event(&mut self, event_loop: &ActiveEventLoop, command: Command) {
        match command {
            Command::Open { shared, reply } => {
                let result = self.open(event_loop, shared);
                if let Err(e) = &result {
                    log::error!("{}", e);
                }
                let _ = reply.send(result);
            }
            Command::Close(id) => self.close(id),
            Command::SetVisible(id, visible) => {
                if let Some(hosted) = self.windows.get(&id) {
                    hosted.window.set_visible(visible);
                    hosted.shared.mark_dirty();
                }
            }
            Command::Dispatch { window, event, ack } => {
                let delivered = self.windows.get(&window).map(|hosted| hosted.dispatch(&event));
                let _ = ack.send(delivered);
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if let WindowEvent::CloseRequested = event {
            self.close_requested(id);
            return;
        }

        let Some(hosted) = self.windows.get_mut(&id) else { return };
        let surface = hosted.shared.id;

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let cursor = Point::new(position.x.floor() as i32, position.y.floor() as i32);
                let event = hosted.pointer.moved(surface, cursor);
                hosted.dispatch(&event);
            }
            WindowEvent::CursorLeft { .. } => hosted.pointer.left(),
            WindowEvent::MouseInput { state, button, .. } => {
                let Some(button) = map_button(button) else { return };
                match state {
                    ElementState::Pressed => hosted.pointer.pressed(button),
                    ElementState::Released => {
                        if let Some(click) = hosted.pointer.released(surface, button) {
                            hosted.dispatch(&click);
                        }
                    }
                }
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                hosted.shared.mark_dirty();
                hosted.window.request_redraw();
            }
            WindowEvent::RedrawRequested => hosted.present(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let mut next_wake: Option<Instant> = None;

        for hosted in self.windows.values_mut() {
            if now >= hosted.next_frame {
                if hosted.shared.take_dirty() {
                    hosted.window.request_redraw();
                }
                hosted.next_frame = now + hosted.frame_period;
            }
            next_wake = Some(next_wake.map_or(hosted.next_frame, |t| t.min(hosted.next_frame)));
        }

        event_loop.set_control_flow(match next_wake {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        });
    }
}

fn map_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

fn monitor_refresh_rate(event_loop: &ActiveEventLoop) -> Option<u32> {
    event_loop
        .primary_monitor()
        .and_then(|monitor| monitor.refresh_rate_millihertz())
        .map(|millihertz| millihertz / 1000)
        .filter(|fps| *fps > 0)
}

/// 给定的偏移直接使用，缺省的方向在主显示器上居中
fn initial_position(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Option<PhysicalPosition<i32>> {
    let screen = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
        .map(|monitor| monitor.size());
    let centre = |screen_len: u32, len: u32| (screen_len as i32 - len as i32) / 2;

    let x = config.x.or_else(|| screen.map(|s| centre(s.width, config.width)))?;
    let y = config.y.or_else(|| screen.map(|s| centre(s.height, config.height)))?;
    Some(PhysicalPosition::new(x, y))
}
