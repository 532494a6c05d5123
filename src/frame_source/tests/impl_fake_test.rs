use crate::frame_source::impl_fake::{FrameSourceFake, FrameSourceFakeConfig};
use crate::frame_source::interface::FrameSource;
use crate::library::logger::impl_fake::LoggerFake;
use std::sync::Arc;

fn frame_source(warmup_calls: u32) -> FrameSourceFake {
    FrameSourceFake::new(
        FrameSourceFakeConfig {
            warmup_calls,
            width: 4,
            height: 2,
        },
        Arc::new(LoggerFake::new()),
    )
}

#[test]
fn test_no_frames_during_warmup() {
    let frame_source = frame_source(3);

    for _ in 0..3 {
        assert!(frame_source.current_frame().is_none());
    }

    let frame = frame_source.current_frame().unwrap();
    assert_eq!(frame.bytes.len(), 4 * 2 * 3);
    assert_eq!(frame_source.calls(), 4);
}

#[test]
fn test_frames_right_away_without_warmup() {
    let frame_source = frame_source(0);

    assert!(frame_source.current_frame().is_some());
}

#[test]
fn test_paused_session_yields_nothing_until_resumed() {
    let frame_source = frame_source(0);

    frame_source.pause();
    for _ in 0..10 {
        assert!(frame_source.current_frame().is_none());
    }

    frame_source.resume();
    assert!(frame_source.current_frame().is_some());
    assert_eq!(frame_source.calls(), 11);
}
