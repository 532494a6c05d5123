use crate::frame_source::interface::{Frame, FrameSource};
use crate::library::logger::interface::Logger;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct FrameSourceFakeConfig {
    /// Calls answered with `None` before the session starts producing frames.
    pub warmup_calls: u32,
    pub width: usize,
    pub height: usize,
}

impl Default for FrameSourceFakeConfig {
    fn default() -> Self {
        Self {
            warmup_calls: 3,
            width: 224,
            height: 224,
        }
    }
}

pub struct FrameSourceFake {
    config: FrameSourceFakeConfig,
    calls: AtomicU32,
    running: AtomicBool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FrameSourceFake {
    pub fn new(config: FrameSourceFakeConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            calls: AtomicU32::new(0),
            running: AtomicBool::new(true),
            logger: logger.with_namespace("frame_source").with_namespace("fake"),
        }
    }
}

/// Session controls for tests that need the camera to go away.
#[cfg(test)]
impl FrameSourceFake {
    pub fn pause(&self) {
        self.running.store(false, Ordering::SeqCst);
        let _ = self.logger.info("Session paused");
    }

    pub fn resume(&self) {
        self.running.store(true, Ordering::SeqCst);
        let _ = self.logger.info("Session resumed");
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FrameSource for FrameSourceFake {
    fn current_frame(&self) -> Option<Frame> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.running.load(Ordering::SeqCst) {
            return None;
        }

        if call < self.config.warmup_calls {
            let _ = self.logger.info("Session warming up, no frame yet");
            return None;
        }

        let shade = (call % 256) as u8;
        let bytes = vec![shade; self.config.width * self.config.height * 3];
        Some(Frame::new(bytes))
    }
}
