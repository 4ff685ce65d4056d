//! 画布与颜色单元测试

use crate::{Canvas, Color, Point, Rect, Size};

/// 测试新画布的尺寸与初始像素
#[test]
fn test_new_canvas_is_transparent() {
    let canvas = Canvas::new(12, 20);

    assert_eq!(canvas.width(), 12);
    assert_eq!(canvas.height(), 20);
    assert_eq!(canvas.size(), Size::new(12, 20));
    assert_eq!(canvas.pixels().len(), 12 * 20);
    assert!(canvas.pixels().iter().all(|p| *p == Color::TRANSPARENT));
}

/// 测试像素读写与越界
#[test]
fn test_set_and_get_pixel() {
    let mut canvas = Canvas::new(10, 10);
    canvas.clear(Color::WHITE);

    assert!(canvas.set_pixel(3, 4, Color::RED));
    assert_eq!(canvas.get_pixel(3, 4), Color::RED);
    assert_eq!(canvas.get_pixel(4, 3), Color::WHITE);

    // 越界写入被忽略
    assert!(!canvas.set_pixel(-1, 0, Color::RED));
    assert!(!canvas.set_pixel(10, 0, Color::RED));
    assert!(!canvas.set_pixel(0, 10, Color::RED));
    assert_eq!(canvas.get_pixel(10, 10), Color::TRANSPARENT);

    assert!(canvas.set_pixel_at(Point::new(9, 9), Color::BLUE));
    assert_eq!(canvas.get_pixel(9, 9), Color::BLUE);
}

/// 测试半透明像素的混合
#[test]
fn test_semi_transparent_pixel_blends() {
    let mut canvas = Canvas::new(2, 2);
    canvas.clear(Color::WHITE);

    canvas.set_pixel(0, 0, Color::RED.with_alpha(128));
    let blended = canvas.get_pixel(0, 0);
    assert_eq!(blended, Color::new(255, 127, 127, 255));

    // 完全透明不改变目标
    canvas.set_pixel(1, 1, Color::TRANSPARENT);
    assert_eq!(canvas.get_pixel(1, 1), Color::WHITE);
}

/// 测试写入窗口缓冲区
#[test]
fn test_present_into_buffer() {
    let mut canvas = Canvas::new(2, 2);
    canvas.set_pixel(0, 0, Color::RED);
    canvas.set_pixel(1, 1, Color::BLUE.with_alpha(128));

    let mut buffer = vec![0u32; 9];
    canvas.present_into(&mut buffer, 3, 3, Color::WHITE);

    assert_eq!(buffer[0], 0xFF0000);
    // 透明像素显示为背景色
    assert_eq!(buffer[1], 0xFFFFFF);
    // 画布外的区域用背景色填充
    assert_eq!(buffer[2], 0xFFFFFF);
    assert_eq!(buffer[6], 0xFFFFFF);
    assert_eq!(buffer[8], 0xFFFFFF);
    // 半透明像素先和背景混合
    assert_eq!(buffer[4], Color::BLUE.with_alpha(128).blend(&Color::WHITE).to_packed_rgb());
}

/// 测试缓冲区比画布小的情况
#[test]
fn test_present_into_smaller_buffer() {
    let mut canvas = Canvas::new(4, 4);
    canvas.clear(Color::BLUE);

    let mut buffer = vec![0u32; 4];
    canvas.present_into(&mut buffer, 2, 2, Color::WHITE);
    assert!(buffer.iter().all(|p| *p == 0x0000FF));
}

/// 测试 PNG 导出
#[test]
fn test_save_png() {
    let mut canvas = Canvas::new(8, 6);
    canvas.clear(Color::WHITE);
    canvas.set_pixel(2, 3, Color::from_hex(0x336699));

    let path = std::env::temp_dir().join(format!("fungraphics_canvas_{}.png", std::process::id()));
    canvas.save_png(&path).expect("save png");

    let img = image::open(&path).expect("open png").to_rgba8();
    assert_eq!(img.dimensions(), (8, 6));
    assert_eq!(img.get_pixel(2, 3).0, [0x33, 0x66, 0x99, 255]);
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);

    let _ = std::fs::remove_file(&path);
}

/// 测试颜色构造与打包
#[test]
fn test_color_conversions() {
    let c = Color::from_hex(0x123456);
    assert_eq!(c, Color::rgb(0x12, 0x34, 0x56));
    assert_eq!(c.to_packed_rgb(), 0x123456);
    assert_eq!(Color::from(0xFF0000), Color::RED);
    assert_eq!(Color::default(), Color::BLACK);
}

/// 测试矩形的半开区间
#[test]
fn test_rect_contains_is_half_open() {
    let rect = Size::new(200, 150).bounds();
    assert_eq!(rect, Rect::new(0, 0, 200, 150));

    assert!(rect.contains(&Point::new(0, 0)));
    assert!(rect.contains(&Point::new(199, 149)));
    assert!(!rect.contains(&Point::new(200, 149)));
    assert!(!rect.contains(&Point::new(199, 150)));
    assert!(!rect.contains(&Point::new(-1, 0)));
    assert_eq!(rect.center(), Point::new(100, 75));
}

/// 测试超出 i32 的宽度不会让坐标回绕
#[test]
fn test_rect_wide_contains_origin() {
    let rect = Rect::new(0, 0, 3_000_000_000, 1);
    assert!(rect.contains(&Point::new(0, 0)));
    assert!(rect.contains(&Point::new(i32::MAX - 1, 0)));
    assert_eq!(rect.right(), i32::MAX);
    assert!(!rect.contains(&Point::new(0, 1)));
}
