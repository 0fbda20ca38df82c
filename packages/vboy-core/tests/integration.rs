//! End-to-end exercises against the public `VirtualBoy` surface: mounting a
//! cartridge, running frames, and round-tripping a save state through
//! `bincode` the way a front-end would persist it to disk.

extern crate vboy_core;

use vboy_core::devices::cartridge;
use vboy_core::devices::core::VirtualBoy;

fn fixture_rom(size: usize, title: &str) -> Vec<u8> {
    let mut buf = vec![0u8; size];
    let header_start = size - cartridge::HEADER_OFFSET_FROM_END;
    let title_bytes = title.as_bytes();
    buf[header_start..header_start + title_bytes.len()].copy_from_slice(title_bytes);
    buf
}

#[test]
fn a_mounted_rom_reports_its_title_and_runs_frames() {
    let mut vb = VirtualBoy::new();
    vb.load_rom(&fixture_rom(0x20_0000, "WARIOLAND")).unwrap();

    assert_eq!(vb.get_rom_title(), "WARIOLAND");
    for _ in 0..3 {
        vb.step_frame();
    }
}

#[test]
fn rejects_a_malformed_rom() {
    let mut vb = VirtualBoy::new();
    let bad = vec![0u8; 100]; // not a power of two
    assert!(vb.load_rom(&bad).is_err());
}

#[test]
fn save_state_bytes_round_trip_through_bincode() {
    let mut vb = VirtualBoy::new();
    vb.load_rom(&fixture_rom(0x20_0000, "KIRBY")).unwrap();
    vb.step_frame();

    let blob = vb.save_state();
    let encoded: Vec<u8> = bincode::serialize(&blob).expect("serialize save state bytes");
    let decoded: Vec<u8> = bincode::deserialize(&encoded).expect("deserialize save state bytes");
    assert_eq!(decoded, blob);

    let mut restored = VirtualBoy::new();
    restored.load_rom(&fixture_rom(0x20_0000, "KIRBY")).unwrap();
    restored.load_state(&decoded).unwrap();
}
