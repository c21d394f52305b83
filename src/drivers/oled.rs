//! SSD1306 128×64 OLED driver (I²C).
//!
//! Keeps a 1 KiB frame buffer in RAM; `clear`/`draw_text` only touch the
//! buffer and nothing reaches the panel until `flush`.  Text is drawn with
//! the 5×7 font from [`font`](super::font) and word-wrapped to a pixel
//! width, so long sentences spill onto the next line rather than off the
//! edge.
//!
//! ## Dual-target design
//!
//! Generic over [`embedded_hal::i2c::I2c`]: `I2cDriver` on ESP-IDF, a
//! recording mock in tests, a logging stand-in in the simulator.

use embedded_hal::i2c::I2c;

use crate::error::DisplayError;
use crate::pins::{OLED_HEIGHT, OLED_WIDTH};

use super::font::{self, CHAR_ADVANCE, GLYPH_HEIGHT, LINE_HEIGHT};

const PAGES: usize = (OLED_HEIGHT / 8) as usize;
pub const BUFFER_LEN: usize = OLED_WIDTH as usize * PAGES;

/// I²C control byte: following bytes are commands.
const CONTROL_CMD: u8 = 0x00;
/// I²C control byte: following bytes are display RAM.
const CONTROL_DATA: u8 = 0x40;
/// Payload bytes per data transfer (keeps the driver's TX buffer small).
const DATA_CHUNK: usize = 16;

/// Power-up sequence for a 128×64 panel with the internal charge pump,
/// mounted upside down (segment and COM scan reversed).
#[rustfmt::skip]
const INIT_SEQUENCE: &[u8] = &[
    0xAE,       // display off
    0xD5, 0x80, // clock divide
    0xA8, 0x3F, // multiplex 64
    0xD3, 0x00, // no display offset
    0x40,       // start line 0
    0x8D, 0x14, // charge pump on
    0x20, 0x00, // horizontal addressing
    0xA0,       // segment remap off (flipped)
    0xC0,       // COM scan increment (flipped)
    0xDA, 0x12, // COM pins alternative
    0x81, 0xCF, // contrast
    0xD9, 0xF1, // pre-charge
    0xDB, 0x40, // VCOMH deselect
    0xA4,       // output follows RAM
    0xA6,       // normal (not inverted)
    0x2E,       // scroll off
    0xAF,       // display on
];

pub struct Ssd1306<I: I2c> {
    i2c: I,
    address: u8,
    buffer: [u8; BUFFER_LEN],
    initialised: bool,
}

impl<I: I2c> Ssd1306<I> {
    pub fn new(i2c: I, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: [0; BUFFER_LEN],
            initialised: false,
        }
    }

    /// Send the power-up sequence and push a blank frame.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.send_commands(INIT_SEQUENCE)?;
        self.initialised = true;
        self.clear();
        self.flush()?;
        log::info!("OLED: initialised at 0x{:02X}", self.address);
        Ok(())
    }

    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// Draw `text` with its top-left corner at (`x`, `y`), wrapping at
    /// `max_width` pixels.  Pixels outside the box or the panel are clipped.
    pub fn draw_text(&mut self, x: u32, y: u32, max_width: u32, text: &str) {
        let right = x.saturating_add(max_width).min(OLED_WIDTH);
        for (row, line) in wrap(text, max_width).iter().enumerate() {
            let top = y.saturating_add((row as u32).saturating_mul(LINE_HEIGHT));
            if top >= OLED_HEIGHT {
                break;
            }
            let mut left = x;
            for ch in line.chars() {
                if left >= right {
                    break;
                }
                for (col, bits) in font::glyph(ch).iter().enumerate() {
                    let px = left.saturating_add(col as u32);
                    if px >= right {
                        break;
                    }
                    for bit in 0..GLYPH_HEIGHT {
                        if bits & (1 << bit) != 0 {
                            self.set_pixel(px, top + bit);
                        }
                    }
                }
                left = left.saturating_add(CHAR_ADVANCE);
            }
        }
    }

    /// Push the frame buffer to display RAM.
    pub fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.initialised {
            return Err(DisplayError::NotInitialised);
        }
        let window = [
            0x21, 0x00, (OLED_WIDTH - 1) as u8, // column range
            0x22, 0x00, (PAGES - 1) as u8, // page range
        ];
        self.send_commands(&window)?;

        let mut frame: heapless::Vec<u8, { DATA_CHUNK + 1 }> = heapless::Vec::new();
        for chunk in self.buffer.chunks(DATA_CHUNK) {
            frame.clear();
            let _ = frame.push(CONTROL_DATA);
            let _ = frame.extend_from_slice(chunk);
            self.i2c
                .write(self.address, &frame)
                .map_err(|_| DisplayError::BusWriteFailed)?;
        }
        Ok(())
    }

    /// Whether pixel (`x`, `y`) is lit in the frame buffer.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= OLED_WIDTH || y >= OLED_HEIGHT {
            return false;
        }
        self.buffer[Self::index(x, y)] & (1 << (y % 8)) != 0
    }

    /// Give the bus back (tests, re-wiring).
    pub fn release(self) -> I {
        self.i2c
    }

    fn set_pixel(&mut self, x: u32, y: u32) {
        if x < OLED_WIDTH && y < OLED_HEIGHT {
            self.buffer[Self::index(x, y)] |= 1 << (y % 8);
        }
    }

    fn index(x: u32, y: u32) -> usize {
        x as usize + (y / 8) as usize * OLED_WIDTH as usize
    }

    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), DisplayError> {
        let mut frame: heapless::Vec<u8, 32> = heapless::Vec::new();
        for chunk in cmds.chunks(31) {
            frame.clear();
            let _ = frame.push(CONTROL_CMD);
            let _ = frame.extend_from_slice(chunk);
            self.i2c
                .write(self.address, &frame)
                .map_err(|_| DisplayError::BusWriteFailed)?;
        }
        Ok(())
    }
}

/// Greedy word wrap to `max_width` pixels.  Words wider than the box are
/// broken between characters.
pub fn wrap(text: &str, max_width: u32) -> Vec<String> {
    let per_line = (max_width.saturating_add(1) / CHAR_ADVANCE).max(1) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let width = if current.is_empty() {
            font::text_width(word)
        } else {
            font::text_width(&current) + CHAR_ADVANCE + font::text_width(word)
        };
        if width <= max_width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(core::mem::take(&mut current));
        }
        if font::text_width(word) <= max_width {
            current.push_str(word);
        } else {
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(per_line) {
                let piece: String = piece.iter().collect();
                if piece.chars().count() == per_line {
                    lines.push(piece);
                } else {
                    current = piece;
                }
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
