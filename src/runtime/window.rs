//! 窗口配置

use crate::error::{GraphicsError, Result};
use crate::{Color, Point, Size};
use serde::Deserialize;
use std::path::Path;

/// 窗口配置，可从 JSON 加载（camelCase 键）
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    #[serde(default)]
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// 屏幕位置，缺省时该方向居中
    #[serde(default)]
    pub x: Option<i32>,
    #[serde(default)]
    pub y: Option<i32>,
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub resizable: bool,
    #[serde(default = "default_true")]
    pub exit_on_close: bool,
    /// 越界写像素时输出警告
    #[serde(default = "default_true")]
    pub check_borders: bool,
    /// 刷新帧率，缺省跟随显示器
    #[serde(default)]
    pub target_fps: Option<u32>,
}

fn default_true() -> bool { true }

/// 显示器刷新率未知时使用的帧率
pub const FALLBACK_FPS: u32 = 50;

/// 画布像素缓冲的上限（1 GiB）
pub const MAX_CANVAS_BYTES: usize = 1 << 30;

impl WindowConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            title: String::new(),
            width,
            height,
            x: None,
            y: None,
            visible: false,
            resizable: false,
            exit_on_close: true,
            check_borders: true,
            target_fps: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_position(mut self, position: Option<Point>) -> Self {
        self.x = position.map(|p| p.x);
        self.y = position.map(|p| p.y);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_exit_on_close(mut self, exit_on_close: bool) -> Self {
        self.exit_on_close = exit_on_close;
        self
    }

    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = Some(fps);
        self
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// 宽高必须为正，落在 i32 坐标范围内，且像素缓冲不超过 `MAX_CANVAS_BYTES`
    pub fn validate(&self) -> Result<()> {
        let limit = i32::MAX as u32;
        let bytes = (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|pixels| pixels.checked_mul(std::mem::size_of::<Color>()));

        let fits = !self.size().is_empty()
            && self.width <= limit
            && self.height <= limit
            && bytes.map_or(false, |bytes| bytes <= MAX_CANVAS_BYTES);
        if !fits {
            return Err(GraphicsError::InvalidDimensions { width: self.width, height: self.height });
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: WindowConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
