//! The 16 KiB flat memory image, following the teacher's `RAM` (src/memory.rs)
//! in spirit but sized and addressed the way the cabinet needs: a single
//! linear byte array with no device-list indirection, since every cabinet
//! I/O path in this emulator goes through ports, not memory-mapped registers.

use crate::error::EmuError;

/// Total address space: 0x0000..=0x3FFF.
pub const MEMORY_SIZE: usize = 0x4000;

/// Offset the ROM is loaded at in debug mode, and the CP/M-style diagnostic
/// hook address that gets patched with a `RET`.
const DEBUG_ROM_OFFSET: usize = 0x100;
const DIAGNOSTIC_HOOK_ADDR: usize = 0x0005;
const DIAGNOSTIC_HOOK_RET: u8 = 0xC9;

/// Video RAM: a packed monochrome bitmap, 8 vertically-adjacent pixels per byte.
pub const VRAM_START: usize = 0x2400;
pub const VRAM_END: usize = MEMORY_SIZE;

pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    /// Builds a 16 KiB image from a ROM file, prepopulating it per §4.1.
    ///
    /// In non-debug mode the ROM is copied to address 0. In debug mode it is
    /// copied to 0x100 and the CP/M-style `CALL 5` hook at 0x0005 is patched
    /// with `RET` so that control returns immediately once the diagnostic
    /// side effect (if any) has run.
    pub fn load(rom: &[u8], debug: bool) -> Result<Self, EmuError> {
        let (offset, limit) = if debug {
            (DEBUG_ROM_OFFSET, MEMORY_SIZE - DEBUG_ROM_OFFSET)
        } else {
            (0, MEMORY_SIZE)
        };
        if rom.len() > limit {
            return Err(EmuError::RomTooLarge {
                actual: rom.len(),
                limit,
                mode: if debug { "debug" } else { "non-debug" },
            });
        }

        let mut data = vec![0u8; MEMORY_SIZE];
        data[offset..offset + rom.len()].copy_from_slice(rom);
        if debug {
            data[DIAGNOSTIC_HOOK_ADDR] = DIAGNOSTIC_HOOK_RET;
        }
        Ok(Self { data })
    }

    /// Builds an empty, zeroed memory image — used by tests that poke
    /// instructions in directly rather than loading a ROM file.
    pub fn blank() -> Self {
        Self { data: vec![0u8; MEMORY_SIZE] }
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.data[(addr as usize) & (MEMORY_SIZE - 1)]
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[(addr as usize) & (MEMORY_SIZE - 1)] = value;
    }

    pub fn vram(&self) -> &[u8] {
        &self.data[VRAM_START..VRAM_END]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn non_debug_loads_rom_at_zero() {
        let mem = Memory::load(&[0xAA, 0xBB], false).unwrap();
        assert_eq!(mem.read(0), 0xAA);
        assert_eq!(mem.read(1), 0xBB);
        assert_eq!(mem.read(2), 0);
    }

    #[test]
    fn debug_loads_rom_at_0x100_and_patches_hook() {
        let mem = Memory::load(&[0x76], true).unwrap();
        assert_eq!(mem.read(0x100), 0x76);
        assert_eq!(mem.read(0x0005), 0xC9);
    }

    #[test]
    fn oversized_rom_is_rejected() {
        let rom = vec![0u8; MEMORY_SIZE];
        assert!(Memory::load(&rom, false).is_err());
        assert!(Memory::load(&rom, true).is_err());
    }

    #[test]
    fn reads_wrap_at_14_bit_boundary() {
        let mut mem = Memory::blank();
        mem.write(0x3FFF, 0x42);
        assert_eq!(mem.read(0x7FFF), 0x42);
    }
}
