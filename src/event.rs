//! 事件系统 - 鼠标事件与观察者分发

use crate::{Point, Rect};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// 窗口表面标识，进程内唯一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// 鼠标按键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// 鼠标事件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    /// 按下并在原处释放
    Clicked,
    /// 光标移动，没有按键按下
    Moved,
    /// 按住按键拖动
    Dragged,
}

impl MouseEventKind {
    fn is_motion(&self) -> bool {
        matches!(self, Self::Moved | Self::Dragged)
    }
}

/// 鼠标事件，坐标相对于内容区域
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub position: Point,
    pub button: Option<MouseButton>,
    pub surface: SurfaceId,
}

impl MouseEvent {
    pub fn click(surface: SurfaceId, position: Point, button: MouseButton) -> Self {
        Self { kind: MouseEventKind::Clicked, position, button: Some(button), surface }
    }

    pub fn moved(surface: SurfaceId, position: Point) -> Self {
        Self { kind: MouseEventKind::Moved, position, button: None, surface }
    }

    pub fn dragged(surface: SurfaceId, position: Point, button: MouseButton) -> Self {
        Self { kind: MouseEventKind::Dragged, position, button: Some(button), surface }
    }

    pub fn x(&self) -> i32 { self.position.x }
    pub fn y(&self) -> i32 { self.position.y }
}

type Observer = Arc<dyn Fn(&MouseEvent) + Send + Sync>;

#[derive(Default)]
struct Observers {
    click: Vec<Observer>,
    motion: Vec<Observer>,
}

/// 鼠标事件路由 - 持有某个窗口表面的全部观察者
///
/// 分发时先复制观察者列表再释放锁，回调里可以继续注册观察者或在表面上绘制。
pub struct MouseRouter {
    bounds: Rect,
    observers: Mutex<Observers>,
}

impl MouseRouter {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds, observers: Mutex::new(Observers::default()) }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    fn lock(&self) -> MutexGuard<'_, Observers> {
        self.observers.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add_click_observer<F>(&self, callback: F)
    where
        F: Fn(&MouseEvent) + Send + Sync + 'static,
    {
        self.lock().click.push(Arc::new(callback));
    }

    pub fn add_motion_observer<F>(&self, callback: F)
    where
        F: Fn(&MouseEvent) + Send + Sync + 'static,
    {
        self.lock().motion.push(Arc::new(callback));
    }

    pub fn clear(&self) {
        let mut observers = self.lock();
        observers.click.clear();
        observers.motion.clear();
    }

    pub fn observer_count(&self) -> usize {
        let observers = self.lock();
        observers.click.len() + observers.motion.len()
    }

    /// 分发事件，返回被调用的观察者数量
    ///
    /// 内容区域之外的事件直接丢弃。
    pub fn dispatch(&self, event: &MouseEvent) -> usize {
        if !self.bounds.contains(&event.position) {
            log::trace!("dropping {:?} outside content area at {:?}", event.kind, event.position);
            return 0;
        }

        let targets: Vec<Observer> = {
            let observers = self.lock();
            if event.kind.is_motion() {
                observers.motion.clone()
            } else {
                observers.click.clone()
            }
        };

        for callback in &targets {
            callback(event);
        }
        targets.len()
    }
}

/// 按下/释放配对为点击的最大位移（物理像素）
pub const CLICK_SLOP: f32 = 10.0;

/// 点击识别 - 记录按下位置，释放时判断是否构成一次点击
#[derive(Debug, Default)]
pub struct ClickTracker {
    pressed: Option<(MouseButton, Point)>,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录按下；已有按键按住时忽略，先按下的键决定这次点击
    pub fn press(&mut self, button: MouseButton, position: Point) {
        if self.pressed.is_none() {
            self.pressed = Some((button, position));
        }
    }

    /// 当前按住的键
    pub fn held(&self) -> Option<MouseButton> {
        self.pressed.map(|(button, _)| button)
    }

    /// 释放按键；与按下的是同一个键且位移在 `CLICK_SLOP` 内时返回点击位置
    pub fn release(&mut self, button: MouseButton, position: Point) -> Option<Point> {
        match self.pressed {
            Some((pressed, start)) if pressed == button => {
                self.pressed = None;
                (start.distance(&position) <= CLICK_SLOP).then_some(position)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pressed = None;
    }
}

/// 窗口内的指针状态 - 光标位置加点击识别
///
/// 光标位置在第一次移动之前和离开窗口之后都是未知的，这期间的按键被忽略。
#[derive(Debug, Default)]
pub struct PointerTracker {
    cursor: Option<Point>,
    clicks: ClickTracker,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// 光标移动；按住按键时产生拖动事件
    pub fn moved(&mut self, surface: SurfaceId, position: Point) -> MouseEvent {
        self.cursor = Some(position);
        match self.clicks.held() {
            Some(button) => MouseEvent::dragged(surface, position, button),
            None => MouseEvent::moved(surface, position),
        }
    }

    /// 光标离开窗口，进行中的点击作废
    pub fn left(&mut self) {
        self.cursor = None;
        self.clicks.cancel();
    }

    pub fn pressed(&mut self, button: MouseButton) {
        if let Some(position) = self.cursor {
            self.clicks.press(button, position);
        }
    }

    pub fn released(&mut self, surface: SurfaceId, button: MouseButton) -> Option<MouseEvent> {
        let position = self.clicks.release(button, self.cursor?)?;
        Some(MouseEvent::click(surface, position, button))
    }
}
