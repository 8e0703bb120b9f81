//! Joypad matrix and edge-triggered Joypad interrupt.

use std::io::Cursor;

use boytacean_common::{
    data::{read_u8, write_u8},
    error::Error,
};

use crate::{
    mmu::BusComponent,
    state::{StateComponent, StateFormat},
    warnln,
};

pub struct Pad {
    down: bool,
    up: bool,
    left: bool,
    right: bool,
    start: bool,
    select: bool,
    b: bool,
    a: bool,
    selection: PadSelection,
    int_pad: bool,
}

#[derive(Clone, Copy, PartialEq)]
pub enum PadSelection {
    Action,
    Direction,
}

pub enum PadKey {
    Up,
    Down,
    Left,
    Right,
    Start,
    Select,
    A,
    B,
}

impl Pad {
    pub fn new() -> Self {
        Self {
            down: false,
            up: false,
            left: false,
            right: false,
            start: false,
            select: false,
            b: false,
            a: false,
            selection: PadSelection::Action,
            int_pad: false,
        }
    }

    pub fn reset(&mut self) {
        self.down = false;
        self.up = false;
        self.left = false;
        self.right = false;
        self.start = false;
        self.select = false;
        self.b = false;
        self.a = false;
        self.selection = PadSelection::Action;
        self.int_pad = false;
    }

    /// No-op per-cycle tick. The joypad has no internal clock of its own;
    /// it exists here only so the machine orchestrator can drive every
    /// peripheral uniformly.
    pub fn clock(&mut self, _cycles: u16) {}

    pub fn read(&self, addr: u16) -> u8 {
        match addr & 0x00ff {
            0x0000 => {
                let mut value = match self.selection {
                    PadSelection::Action => {
                        (if self.a { 0x00 } else { 0x01 })
                            | (if self.b { 0x00 } else { 0x02 })
                            | (if self.select { 0x00 } else { 0x04 })
                            | (if self.start { 0x00 } else { 0x08 })
                    }
                    PadSelection::Direction => {
                        (if self.right { 0x00 } else { 0x01 })
                            | (if self.left { 0x00 } else { 0x02 })
                            | (if self.up { 0x00 } else { 0x04 })
                            | (if self.down { 0x00 } else { 0x08 })
                    }
                };
                value |= match self.selection {
                    PadSelection::Direction => 0x10,
                    PadSelection::Action => 0x20,
                };
                value
            }
            addr => {
                warnln!("Reading from unknown Pad location 0x{:04x}", addr);
                0xff
            }
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr & 0x00ff {
            0x0000 => {
                self.selection = if value & 0x10 == 0x00 {
                    PadSelection::Direction
                } else {
                    PadSelection::Action
                }
            }
            addr => warnln!("Writing to unknown Pad location 0x{:04x}", addr),
        }
    }

    /// Presses `key`, raising the Joypad interrupt if that key's matrix
    /// line is currently selected — a press is the high-to-low transition
    /// the hardware latches on.
    pub fn key_press(&mut self, key: PadKey) {
        let triggers = self.is_selected(&key) && !self.is_pressed(&key);
        self.set_pressed(&key, true);
        if triggers {
            self.int_pad = true;
        }
    }

    pub fn key_lift(&mut self, key: PadKey) {
        self.set_pressed(&key, false);
    }

    fn is_pressed(&self, key: &PadKey) -> bool {
        match key {
            PadKey::Up => self.up,
            PadKey::Down => self.down,
            PadKey::Left => self.left,
            PadKey::Right => self.right,
            PadKey::Start => self.start,
            PadKey::Select => self.select,
            PadKey::A => self.a,
            PadKey::B => self.b,
        }
    }

    fn set_pressed(&mut self, key: &PadKey, value: bool) {
        match key {
            PadKey::Up => self.up = value,
            PadKey::Down => self.down = value,
            PadKey::Left => self.left = value,
            PadKey::Right => self.right = value,
            PadKey::Start => self.start = value,
            PadKey::Select => self.select = value,
            PadKey::A => self.a = value,
            PadKey::B => self.b = value,
        }
    }

    fn is_selected(&self, key: &PadKey) -> bool {
        match key {
            PadKey::Up | PadKey::Down | PadKey::Left | PadKey::Right => {
                self.selection == PadSelection::Direction
            }
            PadKey::Start | PadKey::Select | PadKey::A | PadKey::B => {
                self.selection == PadSelection::Action
            }
        }
    }

    #[inline(always)]
    pub fn int_pad(&self) -> bool {
        self.int_pad
    }

    #[inline(always)]
    pub fn set_int_pad(&mut self, value: bool) {
        self.int_pad = value;
    }

    #[inline(always)]
    pub fn ack_pad(&mut self) {
        self.set_int_pad(false);
    }
}

impl BusComponent for Pad {
    fn read(&self, addr: u16) -> u8 {
        self.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.write(addr, value);
    }
}

impl Default for Pad {
    fn default() -> Self {
        Self::new()
    }
}

impl StateComponent for Pad {
    fn state(&self, _format: Option<StateFormat>) -> Result<Vec<u8>, Error> {
        let mut cursor = Cursor::new(vec![]);
        write_u8(
            &mut cursor,
            if self.selection == PadSelection::Direction {
                1
            } else {
                0
            },
        )?;
        write_u8(&mut cursor, self.up as u8)?;
        write_u8(&mut cursor, self.down as u8)?;
        write_u8(&mut cursor, self.left as u8)?;
        write_u8(&mut cursor, self.right as u8)?;
        write_u8(&mut cursor, self.start as u8)?;
        write_u8(&mut cursor, self.select as u8)?;
        write_u8(&mut cursor, self.a as u8)?;
        write_u8(&mut cursor, self.b as u8)?;
        write_u8(&mut cursor, self.int_pad as u8)?;
        Ok(cursor.into_inner())
    }

    fn set_state(&mut self, data: &[u8], _format: Option<StateFormat>) -> Result<(), Error> {
        let mut cursor = Cursor::new(data);
        self.selection = if read_u8(&mut cursor)? == 1 {
            PadSelection::Direction
        } else {
            PadSelection::Action
        };
        self.up = read_u8(&mut cursor)? != 0;
        self.down = read_u8(&mut cursor)? != 0;
        self.left = read_u8(&mut cursor)? != 0;
        self.right = read_u8(&mut cursor)? != 0;
        self.start = read_u8(&mut cursor)? != 0;
        self.select = read_u8(&mut cursor)? != 0;
        self.a = read_u8(&mut cursor)? != 0;
        self.b = read_u8(&mut cursor)? != 0;
        self.int_pad = read_u8(&mut cursor)? != 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_press_raises_interrupt_when_selected() {
        let mut pad = Pad::new();
        pad.write(0x0000, 0x10); // select action half-matrix
        pad.key_press(PadKey::A);
        assert!(pad.int_pad());
    }

    #[test]
    fn test_key_press_does_not_raise_when_not_selected() {
        let mut pad = Pad::new();
        pad.write(0x0000, 0x20); // select direction half-matrix
        pad.key_press(PadKey::A);
        assert!(!pad.int_pad());
    }

    #[test]
    fn test_read_reflects_active_low_state() {
        let mut pad = Pad::new();
        pad.write(0x0000, 0x10);
        assert_eq!(pad.read(0x0000) & 0x01, 0x01);
        pad.key_press(PadKey::A);
        assert_eq!(pad.read(0x0000) & 0x01, 0x00);
    }
}
