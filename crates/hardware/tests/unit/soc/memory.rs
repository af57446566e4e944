//! # RAM Tests

use ls8_core::common::{Fault, MEMORY_SIZE};
use ls8_core::soc::Ram;

#[test]
fn test_ram_starts_zeroed() {
    let ram = Ram::new();
    assert_eq!(ram.as_slice().len(), MEMORY_SIZE);
    assert!(ram.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_ram_read_write_boundaries() {
    let mut ram = Ram::new();
    ram.write(0, 0x11).unwrap();
    ram.write(255, 0x22).unwrap();
    assert_eq!(ram.read(0), Ok(0x11));
    assert_eq!(ram.read(255), Ok(0x22));
}

#[test]
fn test_ram_out_of_bounds() {
    let mut ram = Ram::new();
    assert_eq!(ram.read(256), Err(Fault::MemoryOutOfBounds { address: 256 }));
    assert_eq!(
        ram.write(1000, 1),
        Err(Fault::MemoryOutOfBounds { address: 1000 })
    );
}

#[test]
fn test_load_at_keeps_prefix_on_overrun() {
    let mut ram = Ram::new();
    assert_eq!(
        ram.load_at(254, &[1, 2, 3]),
        Err(Fault::MemoryOutOfBounds { address: 256 })
    );
    assert_eq!(ram.read(254), Ok(1));
    assert_eq!(ram.read(255), Ok(2));
}
