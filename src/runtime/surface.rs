//! 窗口表面的共享状态 - 调用线程与显示线程之间共享

use super::window::WindowConfig;
use crate::event::{MouseRouter, SurfaceId};
use crate::{Canvas, Color};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};

/// 窗口表面生命周期
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    /// 尺寸已确定，还没有观察者
    Constructed,
    /// 至少注册过一个观察者
    Observing,
    /// 窗口已关闭（终态）
    Closed,
}

impl SurfaceState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Constructed,
            1 => Self::Observing,
            _ => Self::Closed,
        }
    }
}

pub(crate) struct SurfaceShared {
    pub id: SurfaceId,
    pub config: WindowConfig,
    pub router: MouseRouter,
    canvas: Mutex<Canvas>,
    state: AtomicU8,
    dirty: AtomicBool,
    display_fps: AtomicBool,
}

impl SurfaceShared {
    pub fn new(config: WindowConfig) -> Self {
        let mut canvas = Canvas::new(config.width, config.height);
        canvas.clear(Color::WHITE);

        Self {
            id: SurfaceId::next(),
            router: MouseRouter::new(config.size().bounds()),
            config,
            canvas: Mutex::new(canvas),
            state: AtomicU8::new(SurfaceState::Constructed as u8),
            dirty: AtomicBool::new(true),
            display_fps: AtomicBool::new(false),
        }
    }

    pub fn canvas(&self) -> MutexGuard<'_, Canvas> {
        self.canvas.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn pixel(&self, x: i32, y: i32) -> Color {
        self.canvas().get_pixel(x, y)
    }

    pub fn state(&self) -> SurfaceState {
        SurfaceState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Constructed -> Observing，其他状态不变
    pub fn mark_observing(&self) {
        let _ = self.state.compare_exchange(
            SurfaceState::Constructed as u8,
            SurfaceState::Observing as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    pub fn mark_closed(&self) {
        self.state.store(SurfaceState::Closed as u8, Ordering::Release);
    }

    pub fn is_closed(&self) -> bool {
        self.state() == SurfaceState::Closed
    }

    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// 读取并清除脏标记
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    pub fn set_display_fps(&self, enabled: bool) {
        self.display_fps.store(enabled, Ordering::Relaxed);
    }

    pub fn display_fps(&self) -> bool {
        self.display_fps.load(Ordering::Relaxed)
    }
}
