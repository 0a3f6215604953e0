//! Concrete playback backend for the Sound Trigger's events (§4.4),
//! grounded in `original_source/audio.py`: nine WAV samples, one looping
//! (the UFO idle tone) and eight one-shots. Construction failure degrades
//! to a no-op backend rather than aborting emulation (§7, error kind 2).

use std::io::Cursor;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use tracing::warn;

use crate::sound::SoundEvent;

const SAMPLE_COUNT: usize = 9;
const SAMPLE_NAMES: [&str; SAMPLE_COUNT] = [
    "0.wav", "1.wav", "2.wav", "3.wav", "4.wav", "5.wav", "6.wav", "7.wav", "8.wav",
];

const UFO_LOOP: usize = 0;
const SHOT: usize = 1;
const PLAYER_DEATH: usize = 2;
const INVADER_DEATH: usize = 3;
const FLEET_STEP_1: usize = 4;
const FLEET_STEP_2: usize = 5;
const FLEET_STEP_3: usize = 6;
const FLEET_STEP_4: usize = 7;
const UFO_HIT: usize = 8;

pub struct AudioBackend {
    // Held for its own lifetime: dropping it tears down the output device.
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
    samples: Vec<Vec<u8>>,
    ufo_loop: Option<Sink>,
}

impl AudioBackend {
    /// Loads `samples/0.wav`..`samples/8.wav` relative to `samples_dir`.
    /// Any failure (missing directory, unreadable file, no output device)
    /// is logged and yields a backend whose `dispatch` calls are all no-ops.
    pub fn new(samples_dir: &Path) -> Self {
        let (stream, handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(err) => {
                warn!(error = %err, "no audio output device, sound disabled");
                return Self::disabled();
            }
        };

        let mut samples = Vec::with_capacity(SAMPLE_COUNT);
        for name in SAMPLE_NAMES {
            match std::fs::read(samples_dir.join(name)) {
                Ok(bytes) => samples.push(bytes),
                Err(err) => {
                    warn!(sample = name, error = %err, "could not load sound sample, sound disabled");
                    return Self::disabled();
                }
            }
        }

        Self { _stream: Some(stream), handle: Some(handle), samples, ufo_loop: None }
    }

    fn disabled() -> Self {
        Self { _stream: None, handle: None, samples: Vec::new(), ufo_loop: None }
    }

    /// Drains a batch of Sound Trigger events (as returned by
    /// [`crate::scheduler::run_frame`]) into playback calls.
    pub fn dispatch(&mut self, events: Vec<SoundEvent>) {
        for event in events {
            match event {
                SoundEvent::UfoLoopStart => self.start_loop(UFO_LOOP),
                SoundEvent::UfoLoopStop => self.stop_loop(),
                SoundEvent::Shot => self.play_once(SHOT),
                SoundEvent::PlayerDeath => self.play_once(PLAYER_DEATH),
                SoundEvent::InvaderDeath => self.play_once(INVADER_DEATH),
                SoundEvent::FleetStep1 => self.play_once(FLEET_STEP_1),
                SoundEvent::FleetStep2 => self.play_once(FLEET_STEP_2),
                SoundEvent::FleetStep3 => self.play_once(FLEET_STEP_3),
                SoundEvent::FleetStep4 => self.play_once(FLEET_STEP_4),
                SoundEvent::UfoHit => self.play_once(UFO_HIT),
            }
        }
    }

    fn play_once(&self, index: usize) {
        let Some(handle) = &self.handle else { return };
        let Ok(sink) = Sink::try_new(handle) else { return };
        let cursor = Cursor::new(self.samples[index].clone());
        let Ok(source) = Decoder::new(cursor) else { return };
        sink.append(source);
        sink.detach();
    }

    fn start_loop(&mut self, index: usize) {
        let Some(handle) = &self.handle else { return };
        let Ok(sink) = Sink::try_new(handle) else { return };
        let cursor = Cursor::new(self.samples[index].clone());
        let Ok(source) = Decoder::new(cursor) else { return };
        sink.append(source.buffered().repeat_infinite());
        self.ufo_loop = Some(sink);
    }

    fn stop_loop(&mut self) {
        if let Some(sink) = self.ufo_loop.take() {
            sink.stop();
        }
    }
}
