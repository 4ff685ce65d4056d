//! 窗口配置测试

use crate::runtime::{WindowConfig, MAX_CANVAS_BYTES};
use crate::{GraphicsError, Point, Size};

/// 测试只给宽高时的默认值
#[test]
fn test_minimal_json_uses_defaults() {
    let config = WindowConfig::from_json(r#"{ "width": 12, "height": 20 }"#).unwrap();

    assert_eq!(config.size(), Size::new(12, 20));
    assert_eq!(config.title, "");
    assert_eq!(config.x, None);
    assert_eq!(config.y, None);
    assert!(!config.visible);
    assert!(!config.resizable);
    assert!(config.exit_on_close);
    assert!(config.check_borders);
    assert_eq!(config.target_fps, None);
    assert_eq!(config, WindowConfig::new(12, 20));
}

/// 测试 camelCase 完整配置
#[test]
fn test_full_json() {
    let json = r#"{
        "title": "hello",
        "width": 200,
        "height": 150,
        "x": 0,
        "y": 0,
        "visible": true,
        "resizable": true,
        "exitOnClose": false,
        "checkBorders": false,
        "targetFps": 30
    }"#;

    let config = WindowConfig::from_json(json).unwrap();
    let expected = WindowConfig {
        resizable: true,
        check_borders: false,
        ..WindowConfig::new(200, 150)
            .with_title("hello")
            .with_position(Some(Point::new(0, 0)))
            .with_visible(true)
            .with_exit_on_close(false)
            .with_target_fps(30)
    };
    assert_eq!(config, expected);
}

/// 测试零尺寸被拒绝
#[test]
fn test_zero_dimensions_rejected() {
    let err = WindowConfig::from_json(r#"{ "width": 0, "height": 20 }"#).unwrap_err();
    assert!(matches!(err, GraphicsError::InvalidDimensions { width: 0, height: 20 }));

    let err = WindowConfig::new(10, 0).validate().unwrap_err();
    assert!(matches!(err, GraphicsError::InvalidDimensions { width: 10, height: 0 }));
}

/// 测试超出坐标范围或内存上限的尺寸被拒绝
#[test]
fn test_oversized_dimensions_rejected() {
    let too_wide = i32::MAX as u32 + 1;
    assert!(matches!(
        WindowConfig::new(too_wide, 1).validate(),
        Err(GraphicsError::InvalidDimensions { .. })
    ));
    assert!(WindowConfig::new(1, too_wide).validate().is_err());
    assert!(WindowConfig::new(u32::MAX, u32::MAX).validate().is_err());
    assert!(WindowConfig::new(65_536, 65_536).validate().is_err());

    // 正好在上限内
    let side = ((MAX_CANVAS_BYTES / 4) as f64).sqrt() as u32;
    assert!(WindowConfig::new(side, side).validate().is_ok());
    assert!(WindowConfig::new(1920, 1080).validate().is_ok());
}

/// 测试格式错误与缺少字段
#[test]
fn test_malformed_json() {
    assert!(matches!(WindowConfig::from_json("{ width: 1"), Err(GraphicsError::Config(_))));
    assert!(matches!(WindowConfig::from_json(r#"{ "width": 10 }"#), Err(GraphicsError::Config(_))));
}

/// 测试位置为 None 时两个方向都居中
#[test]
fn test_position_none_centres() {
    let config = WindowConfig::new(10, 10).with_position(Some(Point::new(3, 4)));
    assert_eq!((config.x, config.y), (Some(3), Some(4)));

    let config = config.with_position(None);
    assert_eq!((config.x, config.y), (None, None));
}

/// 测试从文件加载
#[test]
fn test_from_file() {
    let path = std::env::temp_dir().join(format!("fungraphics_config_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "title": "file", "width": 64, "height": 48 }"#).unwrap();

    let config = WindowConfig::from_file(&path).unwrap();
    assert_eq!(config.title, "file");
    assert_eq!(config.size(), Size::new(64, 48));

    let _ = std::fs::remove_file(&path);

    assert!(matches!(WindowConfig::from_file(&path), Err(GraphicsError::Io(_))));
}
