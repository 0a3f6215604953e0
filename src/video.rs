//! The Video Sampler (§4.8) and its `minifb` presentation window, grounded
//! in the teacher's `devices.rs::Monitor` (a `Window` plus a `Vec<u32>`
//! pixel buffer updated from bit-packed device writes).

use minifb::{Key, Window, WindowOptions};

/// VRAM addresses 0x2400..0x4000 as the cabinet's native (pre-rotation) axes:
/// 256 columns of 28 bytes each, 8 vertically-adjacent pixels per byte.
const NATIVE_COLUMNS: usize = 256;
const BYTES_PER_COLUMN: usize = 28;

/// Reads one pixel off the raw VRAM slice. `x` indexes the hardware's
/// native column (0..256), `y` the row within that column (0..224); bit 0
/// of each byte is the topmost of its 8 pixels.
pub fn pixel(vram: &[u8], x: usize, y: usize) -> bool {
    let byte = vram[x * BYTES_PER_COLUMN + y / 8];
    (byte >> (y % 8)) & 1 != 0
}

const SCREEN_WIDTH: usize = 224;
const SCREEN_HEIGHT: usize = 256;
const SCALE: usize = 3;
const WINDOW_WIDTH: usize = SCREEN_WIDTH * SCALE;
const WINDOW_HEIGHT: usize = SCREEN_HEIGHT * SCALE;

const ON_PIXEL: u32 = 0x00FF_FFFF;
const OFF_PIXEL: u32 = 0x0000_0000;

pub struct Monitor {
    window: Window,
    native: Vec<u32>,
    scaled: Vec<u32>,
}

impl Monitor {
    pub fn new() -> Self {
        let mut window = Window::new(
            "Space Invaders",
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            WindowOptions::default(),
        )
        .unwrap_or_else(|e| panic!("failed to open presentation window: {e}"));
        window.limit_update_rate(Some(std::time::Duration::from_micros(16_666)));
        Self {
            window,
            native: vec![OFF_PIXEL; SCREEN_WIDTH * SCREEN_HEIGHT],
            scaled: vec![OFF_PIXEL; WINDOW_WIDTH * WINDOW_HEIGHT],
        }
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn held_keys(&self) -> Vec<Key> {
        self.window.get_keys()
    }

    /// Rotates the sampler's 256x224 bit-pattern 90 degrees counter-clockwise
    /// into the native 224x256 portrait frame, then nearest-neighbor scales
    /// it 3x and presents it.
    pub fn present(&mut self, vram: &[u8]) {
        for native_y in 0..SCREEN_HEIGHT {
            for native_x in 0..SCREEN_WIDTH {
                let sample_x = SCREEN_HEIGHT - 1 - native_y;
                let sample_y = native_x;
                let on = pixel(vram, sample_x, sample_y);
                self.native[native_y * SCREEN_WIDTH + native_x] =
                    if on { ON_PIXEL } else { OFF_PIXEL };
            }
        }

        for y in 0..WINDOW_HEIGHT {
            let src_row = y / SCALE;
            for x in 0..WINDOW_WIDTH {
                let src_col = x / SCALE;
                self.scaled[y * WINDOW_WIDTH + x] = self.native[src_row * SCREEN_WIDTH + src_col];
            }
        }

        self.window
            .update_with_buffer(&self.scaled, WINDOW_WIDTH, WINDOW_HEIGHT)
            .expect("failed to present frame");
    }
}
