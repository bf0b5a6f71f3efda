//! Glyph and string rendering.

use crate::bus::Bus;
use crate::draw::Layer2;
use crate::font::Font;
use crate::paging::PagedScreen;
use crate::screen::{Screen, Section};

/// Character rows on screen (192 / 8).
pub const TEXT_ROWS: u8 = 24;

/// Character columns on screen (256 / 8).
pub const TEXT_COLUMNS: u8 = 32;

/// X position of the last character cell in a row.
const LAST_COLUMN_X: u8 = (TEXT_COLUMNS - 1) * 8;

impl<B: Bus> Layer2<B> {
    /// Draw `text` at character cell (`row` 0-23, `column` 0-31).
    ///
    /// Text is additive: only the set bits of each glyph are written, the
    /// background shows through the rest. Characters outside 32..=127 render
    /// as `?`. Text that does not fit the row is truncated at the right
    /// screen edge, not wrapped. Out-of-range coordinates or empty text are
    /// a no-op.
    pub fn draw_text(&mut self, row: u8, column: u8, text: &str, color: u8, screen: Screen) {
        if row >= TEXT_ROWS || column >= TEXT_COLUMNS || text.is_empty() {
            return;
        }

        let mut x = column << 3;
        let y = row << 3;
        let font = self.font;

        let mut paged = PagedScreen::begin(&mut self.bus, screen);

        // cell rows are 8-aligned, so a glyph never straddles a section:
        // one section select serves the whole string
        let (section, local_y) = Section::of_y(y);
        paged.section(section);

        for &code in text.as_bytes() {
            draw_char(&mut paged, x, local_y, code, color, font);
            if x == LAST_COLUMN_X {
                break;
            }
            x += 8;
        }
    }
}

fn draw_char<B: Bus>(
    paged: &mut PagedScreen<'_, B>,
    x: u8,
    local_y: u8,
    code: u8,
    color: u8,
    font: Font,
) {
    for (line, &bits) in font.glyph(code).iter().enumerate() {
        for i in 0..8u8 {
            if bits & (0x80 >> i) != 0 {
                paged.set_pixel(x + i, local_y + line as u8, color);
            }
        }
    }
}
