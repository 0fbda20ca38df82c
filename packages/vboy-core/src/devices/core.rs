//! The top-level device: owns every component and dispatches the bus.

use super::bus::{
    memory_map::{decode, Region},
    BusDevice, Motherboard,
};
use super::cartridge::{self, RomHeader};
use super::cpu::{self, Cpu810, WithCpu};
use super::error::CoreError;
use super::mem::Wram;
use super::misc_io::MiscIo;
use super::state;
use super::vip::Vip;
use super::vsu::Vsu;

/// CPU clock (20 MHz) divided by the frame rate (50 Hz).
pub const CYCLES_PER_FRAME: u32 = 400_000;

/// The Virtual Boy as a whole unit: CPU, bus devices, and the mounted ROM.
pub struct VirtualBoy {
    cpu: Cpu810,
    vip: Vip,
    vsu: Vsu,
    wram: Wram,
    misc_io: MiscIo,
    rom: Vec<u8>,
    rom_mask: u32,
    rom_header: Option<RomHeader>,
}

impl VirtualBoy {
    pub fn new() -> VirtualBoy {
        VirtualBoy {
            cpu: Cpu810::new(),
            vip: Vip::new(),
            vsu: Vsu::new(),
            wram: Wram::new(),
            misc_io: MiscIo::new(),
            rom: Vec::new(),
            rom_mask: 0,
            rom_header: None,
        }
    }

    /// Validate and mount a ROM image, then perform a full reset.
    pub fn load_rom(&mut self, data: &[u8]) -> Result<(), CoreError> {
        let (mask, header) = cartridge::validate(data)?;
        self.rom = data.to_vec();
        self.rom_mask = mask;
        self.rom_header = Some(header);
        self.reset();
        Ok(())
    }

    pub fn get_rom_header(&self) -> Option<&RomHeader> {
        self.rom_header.as_ref()
    }

    pub fn get_rom_title(&self) -> &str {
        self.rom_header.as_ref().map(RomHeader::title).unwrap_or("")
    }

    /// Reset the CPU and every bus device to their power-on state; WRAM
    /// fills with the garbage pattern real hardware leaves behind rather
    /// than zeroing.
    pub fn reset(&mut self) {
        cpu::reset(self);
        self.vip.reset();
        self.vsu.reset();
        self.wram.reset();
        self.misc_io.reset();
    }

    /// Execute one frame's worth of cycles: CPU clock 20 MHz at 50 Hz ->
    /// 400,000 cycles, stepping the CPU in its fixed per-instruction cost
    /// until the budget is exhausted.
    pub fn step_frame(&mut self) {
        let mut cycles = 0u32;
        while cycles < CYCLES_PER_FRAME {
            let step_cycles = cpu::step(self);
            self.vip.tick(step_cycles);
            self.vsu.tick(step_cycles);
            cycles += step_cycles;
        }
    }

    pub fn save_state(&self) -> Vec<u8> {
        state::save(&self.cpu, &self.vip, &self.vsu, &self.wram, &self.misc_io)
    }

    pub fn load_state(&mut self, bytes: &[u8]) -> Result<(), CoreError> {
        state::load(bytes, &mut self.cpu, &mut self.vip, &mut self.vsu, &mut self.wram, &mut self.misc_io)
    }

    fn rom_read8(&self, addr: u32) -> u8 {
        if self.rom.is_empty() {
            tracing::warn!(addr, "read from Game Pak ROM with no cartridge mounted");
            return 0;
        }
        self.rom[(addr & self.rom_mask) as usize]
    }
}

impl Default for VirtualBoy {
    fn default() -> Self {
        VirtualBoy::new()
    }
}

impl WithCpu for VirtualBoy {
    fn cpu(&self) -> &Cpu810 {
        &self.cpu
    }

    fn cpu_mut(&mut self) -> &mut Cpu810 {
        &mut self.cpu
    }
}

impl Motherboard for VirtualBoy {
    fn read8(&mut self, addr: u32) -> u8 {
        match decode(addr) {
            Region::Vip => self.vip.read8(addr),
            Region::Vsu => self.vsu.read8(addr),
            Region::MiscIo => self.misc_io.read8(addr),
            Region::Unmapped => {
                tracing::warn!(addr, "read from unmapped bus region");
                0
            }
            Region::GamePakExpansion => {
                tracing::warn!(addr, "read from Game Pak Expansion (stubbed, unimplemented)");
                0
            }
            Region::Wram => self.wram.read8(addr),
            Region::GamePakRam => {
                tracing::warn!(addr, "read from Game Pak RAM (stubbed, unimplemented)");
                0
            }
            Region::GamePakRom => self.rom_read8(addr),
        }
    }

    fn write8(&mut self, addr: u32, value: u8) {
        match decode(addr) {
            Region::Vip => self.vip.write8(addr, value),
            Region::Vsu => self.vsu.write8(addr, value),
            Region::MiscIo => self.misc_io.write8(addr, value),
            Region::Unmapped => tracing::warn!(addr, "write to unmapped bus region dropped"),
            Region::GamePakExpansion => {
                tracing::warn!(addr, "write to Game Pak Expansion dropped (stubbed, unimplemented)")
            }
            Region::Wram => self.wram.write8(addr, value),
            Region::GamePakRam => {
                tracing::warn!(addr, "write to Game Pak RAM dropped (stubbed, unimplemented)")
            }
            Region::GamePakRom => tracing::warn!(addr, "write to Game Pak ROM dropped: read-only"),
        }
    }

    fn read16(&mut self, addr: u32) -> u16 {
        match decode(addr) {
            Region::Vip => self.vip.read16(addr),
            Region::Vsu => self.vsu.read16(addr),
            _ => {
                let lo = self.read8(addr) as u16;
                let hi = self.read8(addr.wrapping_add(1)) as u16;
                lo | (hi << 8)
            }
        }
    }

    fn write16(&mut self, addr: u32, value: u16) {
        match decode(addr) {
            Region::Vip => self.vip.write16(addr, value),
            Region::Vsu => self.vsu.write16(addr, value),
            _ => {
                self.write8(addr, (value & 0xFF) as u8);
                self.write8(addr.wrapping_add(1), (value >> 8) as u8);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_rom(size: usize) -> Vec<u8> {
        let mut buf = vec![0u8; size];
        let header_start = size - cartridge::HEADER_OFFSET_FROM_END;
        buf[header_start..header_start + 5].copy_from_slice(b"KIRBY");
        buf
    }

    #[test]
    fn reset_after_load_rom_reaches_the_poweron_pc() {
        let mut vb = VirtualBoy::new();
        vb.load_rom(&fixture_rom(0x20_0000)).unwrap();
        assert_eq!(vb.cpu().state.pc, 0xFFFF_FFF0);
        assert_eq!(vb.get_rom_title(), "KIRBY");
    }

    #[test]
    fn wram_round_trips_through_the_bus() {
        let mut vb = VirtualBoy::new();
        vb.write8(0x0500_1234, 0x77);
        assert_eq!(vb.read8(0x0500_1234), 0x77);
    }

    #[test]
    fn rom_reads_wrap_via_the_power_of_two_mask() {
        let mut vb = VirtualBoy::new();
        vb.load_rom(&fixture_rom(0x20_0000)).unwrap();
        assert_eq!(vb.read8(0x0700_0000), vb.read8(0x0720_0000));
    }

    #[test]
    fn unmapped_reads_return_zero() {
        let mut vb = VirtualBoy::new();
        assert_eq!(vb.read8(0x0300_0000), 0);
    }

    #[test]
    fn save_and_load_state_round_trip_across_reset() {
        let mut vb = VirtualBoy::new();
        vb.write8(0x0500_0000, 0x55);
        let blob = vb.save_state();

        vb.reset();
        assert_ne!(vb.read8(0x0500_0000), 0x55);

        vb.load_state(&blob).unwrap();
        assert_eq!(vb.read8(0x0500_0000), 0x55);
    }

    #[test]
    fn step_frame_retires_the_expected_cycle_budget() {
        let mut vb = VirtualBoy::new();
        vb.load_rom(&fixture_rom(0x20_0000)).unwrap();
        let before = vb.cpu().state.step_count;
        vb.step_frame();
        let steps = vb.cpu().state.step_count - before;
        assert_eq!(steps as u32, CYCLES_PER_FRAME / cpu::CYCLES_PER_STEP);
    }
}
