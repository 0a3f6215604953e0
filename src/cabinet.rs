//! Assembles the CPU, memory, and the concrete collaborators (audio,
//! video, input) into a runnable cabinet — the role the teacher's
//! `atari.rs::st1040()` plays for its 68000 machine, minus the
//! memory-mapped device bus this cabinet doesn't need (every cabinet
//! device here is reached through `IN`/`OUT` ports instead, §4.5).

use std::path::Path;

use tracing::info;

use crate::audio::AudioBackend;
use crate::error::EmuError;
use crate::input;
use crate::memory::Memory;
use crate::processor::Cpu;
use crate::scheduler;
use crate::video::Monitor;

pub struct Cabinet {
    cpu: Cpu,
    audio: AudioBackend,
    monitor: Monitor,
}

impl Cabinet {
    pub fn new(rom: &[u8], debug: bool, samples_dir: &Path) -> Result<Self, EmuError> {
        let memory = Memory::load(rom, debug)?;
        let mut cpu = Cpu::new(memory, debug);
        input::init(&mut cpu.regs.io);

        Ok(Self {
            cpu,
            audio: AudioBackend::new(samples_dir),
            monitor: Monitor::new(),
        })
    }

    /// Poll input, run one video frame of CPU, present the frame; repeat
    /// until the cabinet is quit or the CPU executes `HLT` (§4's run loop).
    pub fn run(&mut self) {
        while self.monitor.is_open() {
            let held = self.monitor.held_keys();
            if input::wants_quit(&held) {
                break;
            }
            input::apply(&mut self.cpu.regs.io, &held);

            let sound_events = scheduler::run_frame(&mut self.cpu);
            self.audio.dispatch(sound_events);
            self.monitor.present(self.cpu.memory.vram());

            if self.cpu.halted {
                info!("HLT executed, shutting down");
                break;
            }
        }
    }
}
