//! FunGraphics - 简单的 2D 窗口绘图工具
//! 固定尺寸的窗口表面、像素画布、鼠标点击观察者

mod canvas;
mod color;
mod geometry;
mod graphics;

pub use canvas::Canvas;
pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use graphics::{FunGraphics, Painter};

// 错误类型
pub mod error;
pub use error::{GraphicsError, Result};

// 鼠标事件与观察者
pub mod event;
pub use event::{MouseButton, MouseEvent, MouseEventKind, SurfaceId};

// 帧率控制
pub mod timer;

// 显示线程与窗口配置
pub mod runtime;
pub use runtime::{SurfaceState, WindowConfig};

// 合成鼠标输入
pub mod robot;
pub use robot::Robot;

// 单元测试
#[cfg(test)]
mod tests;
