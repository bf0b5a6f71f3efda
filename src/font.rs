//! Text font handling.
//!
//! [`draw_text`](crate::Layer2::draw_text) renders fixed-width 8×8 glyphs
//! for the 96 printable characters 32..=127. The built-in table follows the
//! Spectrum ROM character set, where `^`, `` ` `` and DEL are the up-arrow,
//! pound and copyright symbols. A caller-supplied font replaces the table
//! wholesale; it must use the same 96 × 8 byte layout, one byte per glyph
//! row, most significant bit leftmost.

/// Number of glyphs in a font.
pub const GLYPH_COUNT: usize = 96;

/// Bytes per glyph (8 rows of 8 pixels).
pub const GLYPH_BYTES: usize = 8;

/// First character code a font covers.
const FIRST_CODE: u8 = 32;

/// A fixed-width 8×8 bitmap font for character codes 32..=127.
#[derive(Copy, Clone)]
pub struct Font {
    glyphs: &'static [u8; GLYPH_COUNT * GLYPH_BYTES],
}

impl Font {
    /// Wrap a caller-supplied glyph table.
    pub const fn new(glyphs: &'static [u8; GLYPH_COUNT * GLYPH_BYTES]) -> Self {
        Self { glyphs }
    }

    /// The built-in ROM-style font.
    pub const fn rom() -> Self {
        Self { glyphs: &ROM_FONT }
    }

    /// The 8 row bytes of the glyph for `code`. Codes outside 32..=127
    /// resolve to `?`.
    pub(crate) fn glyph(&self, code: u8) -> &[u8] {
        let code = if (FIRST_CODE..=127).contains(&code) { code } else { b'?' };
        let start = (code - FIRST_CODE) as usize * GLYPH_BYTES;
        &self.glyphs[start..start + GLYPH_BYTES]
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::rom()
    }
}

#[rustfmt::skip]
static ROM_FONT: [u8; GLYPH_COUNT * GLYPH_BYTES] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // space
    0x00, 0x10, 0x10, 0x10, 0x10, 0x00, 0x10, 0x00, // !
    0x00, 0x24, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00, // "
    0x00, 0x24, 0x7E, 0x24, 0x24, 0x7E, 0x24, 0x00, // #
    0x00, 0x08, 0x3E, 0x28, 0x3E, 0x0A, 0x3E, 0x08, // $
    0x00, 0x62, 0x64, 0x08, 0x10, 0x26, 0x46, 0x00, // %
    0x00, 0x10, 0x28, 0x10, 0x2A, 0x44, 0x3A, 0x00, // &
    0x00, 0x08, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, // '
    0x00, 0x04, 0x08, 0x08, 0x08, 0x08, 0x04, 0x00, // (
    0x00, 0x20, 0x10, 0x10, 0x10, 0x10, 0x20, 0x00, // )
    0x00, 0x00, 0x14, 0x08, 0x3E, 0x08, 0x14, 0x00, // *
    0x00, 0x00, 0x08, 0x08, 0x3E, 0x08, 0x08, 0x00, // +
    0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x10, // ,
    0x00, 0x00, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x00, // -
    0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, // .
    0x00, 0x00, 0x02, 0x04, 0x08, 0x10, 0x20, 0x00, // /
    0x00, 0x3C, 0x46, 0x4A, 0x52, 0x62, 0x3C, 0x00, // 0
    0x00, 0x18, 0x28, 0x08, 0x08, 0x08, 0x3E, 0x00, // 1
    0x00, 0x3C, 0x42, 0x02, 0x3C, 0x40, 0x7E, 0x00, // 2
    0x00, 0x3C, 0x42, 0x0C, 0x02, 0x42, 0x3C, 0x00, // 3
    0x00, 0x08, 0x18, 0x28, 0x48, 0x7E, 0x08, 0x00, // 4
    0x00, 0x7E, 0x40, 0x7C, 0x02, 0x42, 0x3C, 0x00, // 5
    0x00, 0x3C, 0x40, 0x7C, 0x42, 0x42, 0x3C, 0x00, // 6
    0x00, 0x7E, 0x02, 0x04, 0x08, 0x10, 0x10, 0x00, // 7
    0x00, 0x3C, 0x42, 0x3C, 0x42, 0x42, 0x3C, 0x00, // 8
    0x00, 0x3C, 0x42, 0x42, 0x3E, 0x02, 0x3C, 0x00, // 9
    0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, // :
    0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x10, 0x20, // ;
    0x00, 0x00, 0x04, 0x08, 0x10, 0x08, 0x04, 0x00, // <
    0x00, 0x00, 0x00, 0x3E, 0x00, 0x3E, 0x00, 0x00, // =
    0x00, 0x00, 0x10, 0x08, 0x04, 0x08, 0x10, 0x00, // >
    0x00, 0x3C, 0x42, 0x04, 0x08, 0x00, 0x08, 0x00, // ?
    0x00, 0x3C, 0x4A, 0x56, 0x5E, 0x40, 0x3C, 0x00, // @
    0x00, 0x3C, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x00, // A
    0x00, 0x7C, 0x42, 0x7C, 0x42, 0x42, 0x7C, 0x00, // B
    0x00, 0x3C, 0x42, 0x40, 0x40, 0x42, 0x3C, 0x00, // C
    0x00, 0x78, 0x44, 0x42, 0x42, 0x44, 0x78, 0x00, // D
    0x00, 0x7E, 0x40, 0x7C, 0x40, 0x40, 0x7E, 0x00, // E
    0x00, 0x7E, 0x40, 0x7C, 0x40, 0x40, 0x40, 0x00, // F
    0x00, 0x3C, 0x42, 0x40, 0x4E, 0x42, 0x3C, 0x00, // G
    0x00, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00, // H
    0x00, 0x3E, 0x08, 0x08, 0x08, 0x08, 0x3E, 0x00, // I
    0x00, 0x02, 0x02, 0x02, 0x42, 0x42, 0x3C, 0x00, // J
    0x00, 0x44, 0x48, 0x70, 0x48, 0x44, 0x42, 0x00, // K
    0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7E, 0x00, // L
    0x00, 0x42, 0x66, 0x5A, 0x42, 0x42, 0x42, 0x00, // M
    0x00, 0x42, 0x62, 0x52, 0x4A, 0x46, 0x42, 0x00, // N
    0x00, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00, // O
    0x00, 0x7C, 0x42, 0x42, 0x7C, 0x40, 0x40, 0x00, // P
    0x00, 0x3C, 0x42, 0x42, 0x52, 0x4A, 0x3C, 0x00, // Q
    0x00, 0x7C, 0x42, 0x42, 0x7C, 0x44, 0x42, 0x00, // R
    0x00, 0x3C, 0x40, 0x3C, 0x02, 0x42, 0x3C, 0x00, // S
    0x00, 0xFE, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, // T
    0x00, 0x42, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00, // U
    0x00, 0x42, 0x42, 0x42, 0x42, 0x24, 0x18, 0x00, // V
    0x00, 0x42, 0x42, 0x42, 0x42, 0x5A, 0x24, 0x00, // W
    0x00, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x00, // X
    0x00, 0x82, 0x44, 0x28, 0x10, 0x10, 0x10, 0x00, // Y
    0x00, 0x7E, 0x04, 0x08, 0x10, 0x20, 0x7E, 0x00, // Z
    0x00, 0x0E, 0x08, 0x08, 0x08, 0x08, 0x0E, 0x00, // [
    0x00, 0x00, 0x40, 0x20, 0x10, 0x08, 0x04, 0x00, // backslash
    0x00, 0x70, 0x10, 0x10, 0x10, 0x10, 0x70, 0x00, // ]
    0x00, 0x10, 0x38, 0x54, 0x10, 0x10, 0x10, 0x00, // up arrow
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, // _
    0x00, 0x1C, 0x22, 0x78, 0x20, 0x20, 0x7E, 0x00, // pound
    0x00, 0x00, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00, // a
    0x00, 0x20, 0x20, 0x3C, 0x22, 0x22, 0x3C, 0x00, // b
    0x00, 0x00, 0x1C, 0x20, 0x20, 0x20, 0x1C, 0x00, // c
    0x00, 0x04, 0x04, 0x3C, 0x44, 0x44, 0x3C, 0x00, // d
    0x00, 0x00, 0x38, 0x44, 0x78, 0x40, 0x3C, 0x00, // e
    0x00, 0x0C, 0x10, 0x18, 0x10, 0x10, 0x10, 0x00, // f
    0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x38, // g
    0x00, 0x40, 0x40, 0x78, 0x44, 0x44, 0x44, 0x00, // h
    0x00, 0x10, 0x00, 0x30, 0x10, 0x10, 0x38, 0x00, // i
    0x00, 0x04, 0x00, 0x04, 0x04, 0x04, 0x24, 0x18, // j
    0x00, 0x20, 0x28, 0x30, 0x30, 0x28, 0x24, 0x00, // k
    0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x0C, 0x00, // l
    0x00, 0x00, 0x68, 0x54, 0x54, 0x54, 0x54, 0x00, // m
    0x00, 0x00, 0x78, 0x44, 0x44, 0x44, 0x44, 0x00, // n
    0x00, 0x00, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00, // o
    0x00, 0x00, 0x78, 0x44, 0x44, 0x78, 0x40, 0x40, // p
    0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x06, // q
    0x00, 0x00, 0x1C, 0x20, 0x20, 0x20, 0x20, 0x00, // r
    0x00, 0x00, 0x38, 0x40, 0x38, 0x04, 0x78, 0x00, // s
    0x00, 0x10, 0x38, 0x10, 0x10, 0x10, 0x0C, 0x00, // t
    0x00, 0x00, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00, // u
    0x00, 0x00, 0x44, 0x44, 0x28, 0x28, 0x10, 0x00, // v
    0x00, 0x00, 0x44, 0x54, 0x54, 0x54, 0x28, 0x00, // w
    0x00, 0x00, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00, // x
    0x00, 0x00, 0x44, 0x44, 0x44, 0x3C, 0x04, 0x38, // y
    0x00, 0x00, 0x7C, 0x08, 0x10, 0x20, 0x7C, 0x00, // z
    0x00, 0x0E, 0x08, 0x30, 0x08, 0x08, 0x0E, 0x00, // {
    0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, // |
    0x00, 0x70, 0x10, 0x0C, 0x10, 0x10, 0x70, 0x00, // }
    0x00, 0x14, 0x28, 0x00, 0x00, 0x00, 0x00, 0x00, // ~
    0x3C, 0x42, 0x99, 0xA1, 0xA1, 0x99, 0x42, 0x3C, // copyright
];
