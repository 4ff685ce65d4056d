//! 显示环境检测测试

use super::window_tests::ready_or_skip;
use crate::runtime;
use crate::runtime::display::{flag_value, headless_from};
use std::ffi::OsStr;

/// 测试开关型环境变量的取值
#[test]
fn test_flag_value() {
    assert!(flag_value("1"));
    assert!(flag_value("true"));
    assert!(flag_value(" yes "));

    assert!(!flag_value(""));
    assert!(!flag_value("  "));
    assert!(!flag_value("0"));
    assert!(!flag_value("false"));
}

/// 测试根据 DISPLAY / WAYLAND_DISPLAY 判断无显示环境
#[test]
fn test_headless_from_display_vars() {
    let x11 = OsStr::new(":0");
    let wayland = OsStr::new("wayland-0");
    let empty = OsStr::new("");

    assert!(headless_from(None, None));
    // 设置了但为空也算没有显示服务
    assert!(headless_from(Some(empty), None));
    assert!(headless_from(Some(empty), Some(empty)));

    assert!(!headless_from(Some(x11), None));
    assert!(!headless_from(None, Some(wayland)));
    assert!(!headless_from(Some(empty), Some(wayland)));
}

/// 无显示环境下窗口一定不可用
#[test]
fn test_headless_implies_unavailable() {
    if runtime::is_headless() {
        assert!(!runtime::display_available());
    }
}

/// 测试没有显示服务时测试被跳过而不是失败
#[test]
fn test_skip_without_display() {
    assert!(!ready_or_skip("test_skip_without_display", false));
    assert!(ready_or_skip("test_skip_without_display", true));
}
