//! 帧率控制

use std::thread;
use std::time::{Duration, Instant};

/// 固定帧率同步，在游戏循环里每帧调用一次 `sync`
pub struct FrameTimer {
    last: Instant,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self { last: Instant::now() }
    }

    /// 等待到上一次同步之后一个帧周期，fps 为 0 时立即返回
    pub fn sync(&mut self, fps: u32) {
        if fps == 0 {
            self.last = Instant::now();
            return;
        }

        let deadline = self.last + frame_period(fps);
        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
        self.last = Instant::now();
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn frame_period(fps: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / fps.max(1) as u64)
}

/// 帧率统计，每秒产出一次结果
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self { window_start: Instant::now(), frames: 0 }
    }

    /// 记录一帧；统计窗口满一秒时返回帧率
    pub fn tick(&mut self) -> Option<f32> {
        self.frames += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed < Duration::from_secs(1) {
            return None;
        }

        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.window_start = Instant::now();
        self.frames = 0;
        Some(fps.round())
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
