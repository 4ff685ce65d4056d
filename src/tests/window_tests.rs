//! 真实窗口测试，没有显示服务时跳过

use crate::runtime;
use crate::{FunGraphics, GraphicsError, Point, Robot, SurfaceState};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// 没有显示服务时返回 false，并输出跳过原因
pub(crate) fn display_ready(test: &str) -> bool {
    ready_or_skip(test, runtime::display_available())
}

pub(crate) fn ready_or_skip(test: &str, available: bool) -> bool {
    let _ = env_logger::builder().is_test(true).try_init();
    if available {
        return true;
    }
    log::warn!("skipping {}: no display available", test);
    eprintln!("skipping {}: no display available", test);
    false
}

/// 测试窗口内容区域与请求的尺寸一致
#[test]
fn test_window_size() {
    if !display_ready("test_window_size") {
        return;
    }

    let graphics = FunGraphics::new(12, 20).unwrap();
    assert_eq!(graphics.frame_width(), 12);
    assert_eq!(graphics.frame_height(), 20);
    assert!(graphics.is_windowed());
    assert_eq!(graphics.state(), SurfaceState::Constructed);
}

/// 测试合成点击在返回前送达观察者
#[test]
fn test_click() {
    if !display_ready("test_click") {
        return;
    }

    let graphics = FunGraphics::with_options(200, 150, Some(Point::new(0, 0)), "hello", true).unwrap();
    assert_eq!(graphics.title(), "hello");

    let clicked = Arc::new(AtomicBool::new(false));
    let count = Arc::new(AtomicUsize::new(0));
    let flag = clicked.clone();
    let counter = count.clone();
    graphics.add_click_observer(move |_| {
        flag.store(true, Ordering::SeqCst);
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let robot = Robot::new(&graphics);
    assert_eq!(robot.click(Point::new(100, 75)).unwrap(), 1);
    assert_eq!(robot.click(Point::new(0, 0)).unwrap(), 1);

    assert!(clicked.load(Ordering::SeqCst));
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

/// 测试多个窗口共用显示线程
#[test]
fn test_two_windows() {
    if !display_ready("test_two_windows") {
        return;
    }

    let first = FunGraphics::new(30, 30).unwrap();
    let second = FunGraphics::new(40, 20).unwrap();
    assert_ne!(first.id(), second.id());
    assert_eq!(second.frame_width(), 40);

    first.set_visible(false).unwrap();
    first.close();
    assert!(second.is_windowed());
}

/// 测试在观察者里创建窗口会被拒绝而不是死锁
#[test]
fn test_reentrant_construction() {
    if !display_ready("test_reentrant_construction") {
        return;
    }

    let graphics = FunGraphics::new(20, 20).unwrap();
    let rejected = Arc::new(AtomicBool::new(false));
    let flag = rejected.clone();
    graphics.add_click_observer(move |_| {
        if let Err(GraphicsError::Reentrant) = FunGraphics::new(5, 5) {
            flag.store(true, Ordering::SeqCst);
        }
    });

    Robot::new(&graphics).click(Point::new(1, 1)).unwrap();
    assert!(rejected.load(Ordering::SeqCst));
}
