//! # Console Tests

use ls8_core::soc::{CaptureConsole, Console};

#[test]
fn test_capture_console_records_in_order() {
    let mut console = CaptureConsole::new();
    console.emit(3);
    console.emit(0);
    console.emit(255);
    assert_eq!(console.values(), vec![3, 0, 255]);
    assert_eq!(console.text(), "3\n0\n255\n");
}

#[test]
fn test_capture_console_clones_share_buffer() {
    let reader = CaptureConsole::new();
    let mut writer = reader.clone();
    writer.emit(42);
    assert_eq!(reader.values(), vec![42]);
}
