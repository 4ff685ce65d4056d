//! 合成鼠标输入
//!
//! 在内容区域坐标上模拟点击和移动。窗口表面的事件交给显示线程分发，
//! 调用方阻塞到观察者执行完毕；离屏表面直接在当前线程分发。

use crate::error::{GraphicsError, Result};
use crate::event::{MouseButton, MouseEvent};
use crate::runtime::display::{self, Command};
use crate::{FunGraphics, Point};

pub struct Robot<'a> {
    surface: &'a FunGraphics,
}

impl<'a> Robot<'a> {
    pub fn new(surface: &'a FunGraphics) -> Self {
        Self { surface }
    }

    /// 左键点击，返回收到事件的观察者数量
    pub fn click(&self, point: Point) -> Result<usize> {
        self.click_button(point, MouseButton::Left)
    }

    pub fn click_button(&self, point: Point, button: MouseButton) -> Result<usize> {
        self.deliver(MouseEvent::click(self.surface.id(), point, button))
    }

    pub fn move_to(&self, point: Point) -> Result<usize> {
        self.deliver(MouseEvent::moved(self.surface.id(), point))
    }

    pub fn drag_to(&self, point: Point, button: MouseButton) -> Result<usize> {
        self.deliver(MouseEvent::dragged(self.surface.id(), point, button))
    }

    fn deliver(&self, event: MouseEvent) -> Result<usize> {
        let Point { x, y } = event.position;
        if !self.surface.content_area().contains(&event.position) {
            return Err(GraphicsError::OutsideContentArea { x, y });
        }

        let shared = self.surface.shared();
        if shared.is_closed() {
            return Err(GraphicsError::WindowClosed);
        }

        match self.surface.window_id() {
            // 已经在显示线程上（观察者内部）时不能再阻塞等待自己
            Some(window) if !display::on_display_thread() => display::display()?
                .request(|ack| Command::Dispatch { window, event, ack })?
                .ok_or(GraphicsError::WindowClosed),
            _ => Ok(shared.router.dispatch(&event)),
        }
    }
}
