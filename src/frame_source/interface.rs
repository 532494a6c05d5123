use std::time::Instant;

/// One captured camera image. Moved into a single classification call.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    pub bytes: Vec<u8>,
    pub captured_at: Instant,
}

impl Frame {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            captured_at: Instant::now(),
        }
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("bytes", &self.bytes.len())
            .field("captured_at", &self.captured_at)
            .finish()
    }
}

pub trait FrameSource {
    /// Newest frame of the running session, or `None` while the session is
    /// not producing frames.
    fn current_frame(&self) -> Option<Frame>;
}
