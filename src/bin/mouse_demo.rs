//! 鼠标演示 - 点击处画一个方块，按住拖动留下轨迹
//!
//! 用法: fun-graphics-mouse-demo [window.json]

use fun_graphics::{Color, FunGraphics, MouseButton, MouseEventKind, WindowConfig};

const MARK_SIZE: i32 = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => WindowConfig::from_file(&path)?,
        None => WindowConfig::new(300, 300).with_title("Mouse demo").with_visible(true),
    };

    let mut graphics = FunGraphics::from_config(config)?;
    log::info!("🖱  {}x{} window ready, click to draw", graphics.frame_width(), graphics.frame_height());

    let painter = graphics.painter();
    graphics.add_click_observer(move |event| {
        let color = match event.button {
            Some(MouseButton::Left) => Color::RED,
            Some(MouseButton::Right) => Color::BLUE,
            _ => Color::GREEN,
        };
        log::info!("{:?} click at ({}, {})", event.button, event.x(), event.y());

        let half = MARK_SIZE / 2;
        for dy in -half..=half {
            for dx in -half..=half {
                painter.set_pixel(event.x() + dx, event.y() + dy, color);
            }
        }
    });

    let painter = graphics.painter();
    graphics.add_motion_observer(move |event| {
        if event.kind == MouseEventKind::Dragged {
            painter.set_pixel(event.x(), event.y(), Color::BLACK);
        }
    });

    while graphics.is_windowed() {
        graphics.sync_game_logic(60);
    }
    Ok(())
}
