//! FunGraphics 窗口表面 - 对外的主要接口

use crate::error::{GraphicsError, Result};
use crate::event::{MouseEvent, SurfaceId};
use crate::runtime::display::{self, Command};
use crate::runtime::surface::{SurfaceShared, SurfaceState};
use crate::runtime::WindowConfig;
use crate::timer::FrameTimer;
use crate::{Color, Point, Rect};
use std::path::Path;
use std::sync::{Arc, Weak};
use winit::window::WindowId;

/// 可绘制、可点击的窗口表面
///
/// 内容区域的尺寸与构造时请求的宽高完全一致。鼠标点击在显示线程上
/// 识别后交给注册的观察者，坐标相对于内容区域左上角。
///
/// ```no_run
/// use fun_graphics::{FunGraphics, Point};
///
/// let graphics = FunGraphics::with_options(200, 150, Some(Point::new(0, 0)), "hello", true)?;
/// graphics.add_click_observer(|event| println!("clicked at {}, {}", event.x(), event.y()));
/// # Ok::<(), fun_graphics::GraphicsError>(())
/// ```
pub struct FunGraphics {
    shared: Arc<SurfaceShared>,
    window: Option<WindowId>,
    pen: Color,
    background: Color,
    timer: FrameTimer,
}

impl FunGraphics {
    /// 创建窗口表面，默认不显示、无标题
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::from_config(WindowConfig::new(width, height))
    }

    /// 创建带标题的窗口并显示
    pub fn titled(width: u32, height: u32, title: &str) -> Result<Self> {
        Self::from_config(WindowConfig::new(width, height).with_title(title).with_visible(true))
    }

    /// 完整参数：`position` 为 None 时居中
    pub fn with_options(
        width: u32,
        height: u32,
        position: Option<Point>,
        title: &str,
        visible: bool,
    ) -> Result<Self> {
        Self::from_config(
            WindowConfig::new(width, height)
                .with_position(position)
                .with_title(title)
                .with_visible(visible),
        )
    }

    pub fn from_config(config: WindowConfig) -> Result<Self> {
        config.validate()?;
        if display::on_display_thread() {
            return Err(GraphicsError::Reentrant);
        }

        let shared = Arc::new(SurfaceShared::new(config));
        let window = display::display()?.request(|reply| Command::Open {
            shared: shared.clone(),
            reply,
        })??;

        log::info!("FunGraphics v{}", Self::version());
        Ok(Self::assemble(shared, Some(window)))
    }

    /// 没有系统窗口的表面，像素与鼠标分发行为相同
    pub fn offscreen(width: u32, height: u32) -> Result<Self> {
        let config = WindowConfig::new(width, height).with_exit_on_close(false);
        config.validate()?;
        Ok(Self::assemble(Arc::new(SurfaceShared::new(config)), None))
    }

    fn assemble(shared: Arc<SurfaceShared>, window: Option<WindowId>) -> Self {
        Self {
            shared,
            window,
            pen: Color::BLACK,
            background: Color::WHITE,
            timer: FrameTimer::new(),
        }
    }

    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn frame_width(&self) -> u32 {
        self.shared.config.width
    }

    pub fn frame_height(&self) -> u32 {
        self.shared.config.height
    }

    /// 内容区域，原点 (0, 0)
    pub fn content_area(&self) -> Rect {
        self.shared.router.bounds()
    }

    pub fn id(&self) -> SurfaceId {
        self.shared.id
    }

    pub fn title(&self) -> &str {
        &self.shared.config.title
    }

    /// 构造时请求的屏幕位置，居中的窗口返回 None
    pub fn position(&self) -> Option<Point> {
        let config = &self.shared.config;
        Some(Point::new(config.x?, config.y?))
    }

    pub fn config(&self) -> &WindowConfig {
        &self.shared.config
    }

    pub fn state(&self) -> SurfaceState {
        self.shared.state()
    }

    /// 是否有仍然打开的系统窗口
    pub fn is_windowed(&self) -> bool {
        self.window.is_some() && !self.shared.is_closed()
    }

    /// 可以移入观察者的像素句柄
    pub fn painter(&self) -> Painter {
        Painter { shared: Arc::downgrade(&self.shared), surface: self.shared.id }
    }

    pub(crate) fn shared(&self) -> &SurfaceShared {
        &self.shared
    }

    pub(crate) fn window_id(&self) -> Option<WindowId> {
        self.window
    }

    /// 注册点击观察者，每次点击调用一次；可以重复注册
    pub fn add_click_observer<F>(&self, observer: F)
    where
        F: Fn(&MouseEvent) + Send + Sync + 'static,
    {
        self.shared.router.add_click_observer(observer);
        self.shared.mark_observing();
    }

    /// 注册移动/拖动观察者
    pub fn add_motion_observer<F>(&self, observer: F)
    where
        F: Fn(&MouseEvent) + Send + Sync + 'static,
    {
        self.shared.router.add_motion_observer(observer);
        self.shared.mark_observing();
    }

    pub fn clear_observers(&self) {
        self.shared.router.clear();
    }

    pub fn observer_count(&self) -> usize {
        self.shared.router.observer_count()
    }

    pub fn set_color(&mut self, color: Color) {
        self.pen = color;
    }

    pub fn color(&self) -> Color {
        self.pen
    }

    /// 用当前颜色画一个像素
    pub fn set_pixel(&self, x: i32, y: i32) {
        self.set_pixel_with(x, y, self.pen);
    }

    /// 用指定颜色画一个像素，不改变当前颜色
    pub fn set_pixel_with(&self, x: i32, y: i32, color: Color) {
        write_pixel(&self.shared, x, y, color);
    }

    pub fn pixel(&self, x: i32, y: i32) -> Color {
        self.shared.pixel(x, y)
    }

    /// 用背景色清空
    pub fn clear(&self) {
        self.clear_with(self.background);
    }

    pub fn clear_with(&self, color: Color) {
        self.shared.canvas().clear(color);
        self.shared.mark_dirty();
    }

    pub fn set_visible(&self, visible: bool) -> Result<()> {
        let window = self.live_window()?;
        display::display()?.send(Command::SetVisible(window, visible))
    }

    /// 每秒输出一次呈现帧率
    pub fn display_fps(&self, enabled: bool) {
        self.shared.set_display_fps(enabled);
    }

    /// 截图保存为 PNG
    pub fn save_as_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.shared.canvas().save_png(path)?;
        log::info!("saved screenshot to {}", path.display());
        Ok(())
    }

    /// 在游戏循环里每帧调用，保持固定帧率
    pub fn sync_game_logic(&mut self, fps: u32) {
        self.timer.sync(fps);
    }

    /// 关闭窗口；drop 时也会关闭
    pub fn close(self) {}

    fn live_window(&self) -> Result<WindowId> {
        match self.window {
            Some(window) if !self.shared.is_closed() => Ok(window),
            _ => Err(GraphicsError::WindowClosed),
        }
    }
}

impl Drop for FunGraphics {
    fn drop(&mut self) {
        if let Ok(window) = self.live_window() {
            if let Ok(display) = display::display() {
                let _ = display.send(Command::Close(window));
            }
        }
        self.shared.mark_closed();
    }
}

/// 窗口表面的像素句柄，`Send + Sync`，可在观察者回调里绘制
///
/// 只持有弱引用，表面释放后所有操作都不再生效。
#[derive(Clone)]
pub struct Painter {
    shared: Weak<SurfaceShared>,
    surface: SurfaceId,
}

impl Painter {
    pub fn set_pixel(&self, x: i32, y: i32, color: Color) {
        if let Some(shared) = self.shared.upgrade() {
            write_pixel(&shared, x, y, color);
        }
    }

    /// 表面已释放时返回透明色
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        self.shared.upgrade().map_or(Color::TRANSPARENT, |shared| shared.pixel(x, y))
    }

    pub fn clear(&self, color: Color) {
        if let Some(shared) = self.shared.upgrade() {
            shared.canvas().clear(color);
            shared.mark_dirty();
        }
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }
}

fn write_pixel(shared: &SurfaceShared, x: i32, y: i32, color: Color) {
    let written = shared.canvas().set_pixel(x, y, color);
    if written {
        shared.mark_dirty();
    } else if shared.config.check_borders {
        log::warn!("[FunGraphics] Coordinates out of frame ({}, {})", x, y);
    }
}
