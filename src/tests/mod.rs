//! 单元测试模块
//! 覆盖画布、事件分发、窗口配置、帧率控制、窗口表面、显示环境检测

pub mod canvas_tests;
pub mod config_tests;
pub mod window_tests;
pub mod display_tests;
