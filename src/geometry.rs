//! 几何模块 - 像素坐标

/// 像素坐标点，相对于内容区域左上角
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const ORIGIN: Point = Point::new(0, 0);

    /// 两点之间的距离
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// 尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// 内容区域矩形，原点在 (0, 0)
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

/// 矩形，`contains` 为半开区间 [x, x + width) × [y, y + height)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> i32 { self.x }
    pub fn top(&self) -> i32 { self.y }
    pub fn right(&self) -> i32 { self.x.saturating_add(clamp_len(self.width)) }
    pub fn bottom(&self) -> i32 { self.y.saturating_add(clamp_len(self.height)) }

    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.x && point.x < self.right() &&
        point.y >= self.y && point.y < self.bottom()
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.x.saturating_add(clamp_len(self.width) / 2),
            self.y.saturating_add(clamp_len(self.height) / 2),
        )
    }
}

/// 长度超出 i32 时截到 i32::MAX
fn clamp_len(len: u32) -> i32 {
    len.min(i32::MAX as u32) as i32
}
