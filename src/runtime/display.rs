//! 显示线程 - 进程内唯一的 winit 事件循环
//!
//! winit 每个进程只允许创建一个事件循环，所有窗口共享同一个显示线程。
//! 线程在第一次创建窗口时启动，调用方通过 `EventLoopProxy` 发送命令。

use super::handler::DisplayHandler;
use super::surface::SurfaceShared;
use crate::error::{GraphicsError, Result};
use crate::event::MouseEvent;
use once_cell::sync::OnceCell;
use std::ffi::OsStr;
use std::sync::mpsc::{self, SyncSender};
use std::sync::{Arc, Mutex};
use std::thread;
use winit::event_loop::{EventLoop, EventLoopBuilder, EventLoopProxy};
use winit::window::WindowId;

/// 设置后强制视为无显示环境
pub const HEADLESS_ENV: &str = "FUNGRAPHICS_HEADLESS";

pub(crate) const DISPLAY_THREAD_NAME: &str = "fungraphics-display";

/// 发往显示线程的命令
pub(crate) enum Command {
    Open {
        shared: Arc<SurfaceShared>,
        reply: SyncSender<Result<WindowId>>,
    },
    Close(WindowId),
    SetVisible(WindowId, bool),
    /// 合成的鼠标事件；窗口已关闭时回复 None
    Dispatch {
        window: WindowId,
        event: MouseEvent,
        ack: SyncSender<Option<usize>>,
    },
}

pub(crate) struct DisplayHandle {
    proxy: Mutex<EventLoopProxy<Command>>,
}

impl DisplayHandle {
    pub fn send(&self, command: Command) -> Result<()> {
        let proxy = self.proxy.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        proxy
            .send_event(command)
            .map_err(|_| GraphicsError::display_unavailable("display thread is no longer running"))
    }

    /// 发送命令并阻塞等待显示线程回复
    pub fn request<T>(&self, make: impl FnOnce(SyncSender<T>) -> Command) -> Result<T> {
        let (tx, rx) = mpsc::sync_channel(1);
        self.send(make(tx))?;
        rx.recv()
            .map_err(|_| GraphicsError::display_unavailable("display thread dropped the request"))
    }
}

static DISPLAY: OnceCell<std::result::Result<DisplayHandle, String>> = OnceCell::new();

/// 获取显示线程句柄，首次调用时启动线程
pub(crate) fn display() -> Result<&'static DisplayHandle> {
    DISPLAY
        .get_or_init(|| start().map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|msg| GraphicsError::display_unavailable(msg.clone()))
}

pub(crate) fn on_display_thread() -> bool {
    thread::current().name() == Some(DISPLAY_THREAD_NAME)
}

/// 当前环境是否没有显示服务
pub fn is_headless() -> bool {
    env_flag(HEADLESS_ENV) || headless_platform()
}

/// 能否创建窗口：不是无显示环境，并且显示线程已经（或可以）启动
pub fn display_available() -> bool {
    !is_headless() && display().is_ok()
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).map_or(false, |value| flag_value(&value))
}

/// 开关型环境变量的取值：空、"0"、"false" 视为关闭
pub(crate) fn flag_value(value: &str) -> bool {
    !matches!(value.trim(), "" | "0" | "false")
}

/// 两个显示变量都缺失或为空时没有显示服务
#[cfg_attr(
    not(any(
        target_os = "linux",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd"
    )),
    allow(dead_code)
)]
pub(crate) fn headless_from(display: Option<&OsStr>, wayland: Option<&OsStr>) -> bool {
    ![display, wayland]
        .into_iter()
        .any(|var| var.map_or(false, |value| !value.is_empty()))
}

#[cfg(any(
    target_os = "linux",
    target_os = "dragonfly",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd"
))]
fn headless_platform() -> bool {
    let display = std::env::var_os("DISPLAY");
    let wayland = std::env::var_os("WAYLAND_DISPLAY");
    headless_from(display.as_deref(), wayland.as_deref())
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "dragonfly",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd"
)))]
fn headless_platform() -> bool {
    false
}

fn start() -> Result<DisplayHandle> {
    if is_headless() {
        return Err(GraphicsError::display_unavailable("no display server available"));
    }

    let (tx, rx) = mpsc::sync_channel(1);
    thread::Builder::new()
        .name(DISPLAY_THREAD_NAME.to_string())
        .spawn(move || run(tx))?;

    let proxy = rx
        .recv()
        .map_err(|_| GraphicsError::display_unavailable("display thread exited during startup"))??;

    log::info!("display thread started");
    Ok(DisplayHandle { proxy: Mutex::new(proxy) })
}

fn run(ready: SyncSender<Result<EventLoopProxy<Command>>>) {
    let event_loop = match build_event_loop() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            let _ = ready.send(Err(e));
            return;
        }
    };

    let _ = ready.send(Ok(event_loop.create_proxy()));

    let mut handler = DisplayHandler::new();
    if let Err(e) = event_loop.run_app(&mut handler) {
        log::error!("display event loop terminated: {}", e);
    }
}

fn build_event_loop() -> Result<EventLoop<Command>> {
    let mut builder = EventLoop::<Command>::with_user_event();
    allow_any_thread(&mut builder)?;
    builder
        .build()
        .map_err(|e| GraphicsError::display_unavailable(e.to_string()))
}

#[cfg(any(
    target_os = "linux",
    target_os = "dragonfly",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd"
))]
fn allow_any_thread(builder: &mut EventLoopBuilder<Command>) -> Result<()> {
    // X11 和 Wayland 共用同一个 any_thread 属性
    winit::platform::x11::EventLoopBuilderExtX11::with_any_thread(builder, true);
    Ok(())
}

#[cfg(target_os = "windows")]
fn allow_any_thread(builder: &mut EventLoopBuilder<Command>) -> Result<()> {
    winit::platform::windows::EventLoopBuilderExtWindows::with_any_thread(builder, true);
    Ok(())
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "dragonfly",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "windows"
)))]
fn allow_any_thread(_builder: &mut EventLoopBuilder<Command>) -> Result<()> {
    Err(GraphicsError::display_unavailable(
        "the event loop must run on the main thread on this platform",
    ))
}
