//! The Input Mapper (§4.7): translates the cabinet's physical key layout
//! into the `input1`/`input2` port bits the CPU reads back via `IN 1`/`IN 2`.
//!
//! Grounded in `original_source/emulator.py::HandleEvents`'s key layout and
//! spec.md §6's bit table. `minifb` only exposes a per-frame snapshot of
//! held keys (`Window::get_keys`), not a key-down/key-up event queue, so
//! live bits are recomputed from that snapshot every frame; the dip-switch
//! keys (lives/bonus/coin-info) are sticky — they only change while held,
//! matching "key-down only, no key-up partner".

use minifb::Key;

use crate::registers::CabinetScratch;

fn set_bit(byte: &mut u8, bit: u8, value: bool) {
    if value {
        *byte |= 1 << bit;
    } else {
        *byte &= !(1 << bit);
    }
}

/// Coin slot idles released, which reads as `1` (active-low).
pub fn init(scratch: &mut CabinetScratch) {
    scratch.input1 |= 0x01;
}

/// Recomputes every held-key-driven bit from this frame's key snapshot.
pub fn apply(scratch: &mut CabinetScratch, held: &[Key]) {
    let down = |key: Key| held.contains(&key);

    set_bit(&mut scratch.input1, 0, !down(Key::Enter));
    set_bit(&mut scratch.input1, 1, down(Key::RightCtrl));
    set_bit(&mut scratch.input1, 2, down(Key::E));
    set_bit(&mut scratch.input1, 4, down(Key::W));
    set_bit(&mut scratch.input1, 5, down(Key::A));
    set_bit(&mut scratch.input1, 6, down(Key::D));

    set_bit(&mut scratch.input2, 2, down(Key::Space));
    set_bit(&mut scratch.input2, 4, down(Key::Up));
    set_bit(&mut scratch.input2, 5, down(Key::Left));
    set_bit(&mut scratch.input2, 6, down(Key::Right));

    if down(Key::Key0) {
        set_lives(scratch, 0);
    } else if down(Key::Key1) {
        set_lives(scratch, 1);
    } else if down(Key::Key2) {
        set_lives(scratch, 2);
    } else if down(Key::Key3) {
        set_lives(scratch, 3);
    }

    if down(Key::Key4) {
        set_bit(&mut scratch.input2, 3, false); // 1500-point bonus
    } else if down(Key::Key5) {
        set_bit(&mut scratch.input2, 3, true); // 1000-point bonus
    }

    if down(Key::Key6) {
        set_bit(&mut scratch.input2, 7, false); // coin info off
    } else if down(Key::Key7) {
        set_bit(&mut scratch.input2, 7, true); // coin info on
    }
}

fn set_lives(scratch: &mut CabinetScratch, value: u8) {
    scratch.input2 = (scratch.input2 & !0x03) | (value & 0x03);
}

/// `Escape` terminates the run loop (§4.7).
pub fn wants_quit(held: &[Key]) -> bool {
    held.contains(&Key::Escape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn coin_insert_clears_the_active_low_bit() {
        let mut scratch = CabinetScratch::default();
        init(&mut scratch);
        assert_eq!(scratch.input1 & 0x01, 0x01);
        apply(&mut scratch, &[Key::Enter]);
        assert_eq!(scratch.input1 & 0x01, 0x00);
        apply(&mut scratch, &[]);
        assert_eq!(scratch.input1 & 0x01, 0x01);
    }

    #[test]
    fn player_one_controls_set_their_bits() {
        let mut scratch = CabinetScratch::default();
        apply(&mut scratch, &[Key::A, Key::W]);
        assert_eq!(scratch.input1 & 0x20, 0x20);
        assert_eq!(scratch.input1 & 0x10, 0x10);
        assert_eq!(scratch.input1 & 0x40, 0);
    }

    #[test]
    fn lives_dipswitch_is_sticky_without_a_keyup() {
        let mut scratch = CabinetScratch::default();
        apply(&mut scratch, &[Key::Key2]);
        assert_eq!(scratch.input2 & 0x03, 2);
        apply(&mut scratch, &[]);
        assert_eq!(scratch.input2 & 0x03, 2, "dip switch bits have no key-up partner");
    }

    #[test]
    fn escape_requests_quit() {
        assert!(wants_quit(&[Key::Escape]));
        assert!(!wants_quit(&[Key::A]));
    }
}
