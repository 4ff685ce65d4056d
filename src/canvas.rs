//! Canvas 画布模块 - 内容区域的像素存储

use crate::error::Result;
use crate::{Color, Point, Size};

/// 画布 - 窗口内容区域背后的像素缓冲
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// 获取像素数据引用
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// 清空画布
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// 坐标是否落在画布内
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// 获取像素，越界返回透明色
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Color {
        if self.in_bounds(x, y) {
            self.pixels[self.index(x, y)]
        } else {
            Color::TRANSPARENT
        }
    }

    /// 设置像素（带 alpha 混合），越界时忽略并返回 false
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }

        let idx = self.index(x, y);
        if color.a == 255 {
            self.pixels[idx] = color;
        } else if color.a > 0 {
            self.pixels[idx] = color.blend(&self.pixels[idx]);
        }
        true
    }

    pub fn set_pixel_at(&mut self, point: Point, color: Color) -> bool {
        self.set_pixel(point.x, point.y, color)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// 导出为 RGBA 字节数组
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            data.push(pixel.r);
            data.push(pixel.g);
            data.push(pixel.b);
            data.push(pixel.a);
        }
        data
    }

    /// 将画布写入窗口缓冲区 (0x00RRGGBB)
    ///
    /// 缓冲区比画布大时，多出的区域填充 `background`。
    pub fn present_into(&self, buffer: &mut [u32], buffer_width: u32, buffer_height: u32, background: Color) {
        let bg = background.to_packed_rgb();
        for y in 0..buffer_height {
            for x in 0..buffer_width {
                let dst_idx = (y * buffer_width + x) as usize;
                if dst_idx >= buffer.len() {
                    return;
                }
                buffer[dst_idx] = if x < self.width && y < self.height {
                    let pixel = self.pixels[self.index(x as i32, y as i32)];
                    // 半透明像素先和背景混合
                    pixel.blend(&background).to_packed_rgb()
                } else {
                    bg
                };
            }
        }
    }

    /// 保存为 PNG
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        use image::{ImageBuffer, Rgba};

        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_raw(self.width, self.height, self.to_rgba()).ok_or_else(|| {
                image::ImageError::Parameter(image::error::ParameterError::from_kind(
                    image::error::ParameterErrorKind::DimensionMismatch,
                ))
            })?;

        img.save(path)?;
        Ok(())
    }
}
