//! Work RAM: the 64 KiB pool backing the `0x05xxxxxx` bus region.

use super::bus::{BusDevice, BusPeekResult};

pub const WRAM_SIZE: usize = 64 * 1024;
pub const WRAM_MASK: u32 = (WRAM_SIZE - 1) as u32;

const RESET_PATTERN: [u8; 8] = [0x0D, 0x0E, 0x0A, 0x0D, 0x0B, 0x0E, 0x0E, 0x0F];

pub struct Wram {
    buf: Vec<u8>,
}

impl BusDevice for Wram {
    fn read8(&mut self, addr: u32) -> u8 {
        self.buf[(addr & WRAM_MASK) as usize]
    }

    fn write8(&mut self, addr: u32, value: u8) {
        self.buf[(addr & WRAM_MASK) as usize] = value;
    }

    fn peek8(&self, addr: u32) -> BusPeekResult {
        BusPeekResult::Result(self.buf[(addr & WRAM_MASK) as usize])
    }
}

impl Wram {
    pub fn new() -> Wram {
        let mut wram = Wram {
            buf: vec![0u8; WRAM_SIZE],
        };
        wram.reset();
        wram
    }

    /// Fill WRAM with the power-on garbage pattern real hardware leaves
    /// behind (unprogrammed SRAM, not zeroed).
    pub fn reset(&mut self) {
        for (i, byte) in self.buf.iter_mut().enumerate() {
            *byte = RESET_PATTERN[i % RESET_PATTERN.len()];
        }
    }
}

impl Default for Wram {
    fn default() -> Self {
        Wram::new()
    }
}

pub const STATE_BLOB_SIZE: usize = WRAM_SIZE;

impl Wram {
    pub(crate) fn state_blob(&self) -> Vec<u8> {
        self.buf.clone()
    }

    pub(crate) fn load_state_blob(&mut self, bytes: &[u8]) {
        self.buf.copy_from_slice(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_fills_the_repeating_pattern() {
        let wram = Wram::new();
        for (i, byte) in wram.buf.iter().enumerate().take(16) {
            assert_eq!(*byte, RESET_PATTERN[i % RESET_PATTERN.len()]);
        }
    }

    #[test]
    fn mirrors_above_64kib() {
        let mut wram = Wram::new();
        wram.write8(0x0000_1234, 0xAB);
        assert_eq!(wram.read8(0x0001_1234), 0xAB);
        assert_eq!(wram.read8(0x00FF_1234), 0xAB);
    }

    #[test]
    fn read_write_round_trip() {
        let mut wram = Wram::new();
        wram.write8(0x4242, 0x99);
        assert_eq!(wram.read8(0x4242), 0x99);
    }

    #[test]
    fn state_blob_round_trips() {
        let mut wram = Wram::new();
        wram.write8(0x10, 0xAB);
        let blob = wram.state_blob();

        let mut restored = Wram::new();
        restored.load_state_blob(&blob);
        assert_eq!(restored.read8(0x10), 0xAB);
    }
}
