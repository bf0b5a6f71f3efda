//! Linear-source blits and whole-screen transfers.

use crate::bus::Bus;
use crate::draw::Layer2;
use crate::paging::PagedScreen;
use crate::regs::{AccessFlags, REG_GLOBAL_TRANSPARENCY};
use crate::screen::{
    SCREEN_BYTES, SCREEN_HEIGHT, SCREEN_WIDTH, SECTION_BYTES, Screen, Section, section_runs,
};

impl<B: Bus> Layer2<B> {
    /// Copy a `width` × `height` rectangle of linear pixels to (`x`, `y`).
    ///
    /// `source` holds the rectangle row-major with stride `width`. The
    /// footprint is clipped to the screen; a source shorter than
    /// `width * height` bytes is ignored, as are zero extents and an
    /// off-screen `y`.
    pub fn blit(&mut self, x: u8, y: u8, source: &[u8], width: u16, height: u8, screen: Screen) {
        let Some(height) = clip_blit(y, source, width, height) else {
            return;
        };

        let mut paged = PagedScreen::begin(&mut self.bus, screen);
        for run in section_runs(y, height) {
            paged.section(run.section);
            let rows = &source[run.offset as usize * width as usize..];
            blit_section(&mut paged, x, run.local_y, rows, width, run.rows);
        }
    }

    /// Like [`blit`](Self::blit), but source pixels matching the global
    /// transparency colour are skipped, leaving the destination visible
    /// through them.
    ///
    /// Works a pixel at a time where `blit` moves whole rows, so it is the
    /// slower of the two; use it for software sprites, not backgrounds.
    pub fn blit_transparent(
        &mut self,
        x: u8,
        y: u8,
        source: &[u8],
        width: u16,
        height: u8,
        screen: Screen,
    ) {
        let Some(height) = clip_blit(y, source, width, height) else {
            return;
        };
        let key = self.bus.read_next_reg(REG_GLOBAL_TRANSPARENCY);
        let clip_width = clip_span(x, width);

        let mut paged = PagedScreen::begin(&mut self.bus, screen);
        for run in section_runs(y, height) {
            paged.section(run.section);
            let rows = source[run.offset as usize * width as usize..]
                .chunks(width as usize)
                .take(run.rows as usize);
            for (row, data) in rows.enumerate() {
                let local_y = run.local_y + row as u8;
                for (i, &px) in data[..clip_width as usize].iter().enumerate() {
                    if px != key {
                        paged.set_pixel(x + i as u8, local_y, px);
                    }
                }
            }
        }
    }

    /// Write a complete 49152-byte screen image into `screen`, top section
    /// first, row-major within each section. Shorter data is ignored.
    pub fn write_screen(&mut self, data: &[u8], screen: Screen) {
        if data.len() < SCREEN_BYTES {
            return;
        }
        let mut paged = PagedScreen::begin(&mut self.bus, screen);
        let chunks = data.chunks_exact(SECTION_BYTES as usize);
        for (section, chunk) in Section::ALL.into_iter().zip(chunks) {
            paged.section(section);
            paged.copy_span(0, 0, chunk);
        }
    }

    /// Copy a whole off-screen buffer to the main screen, one 16 KB section
    /// at a time. Anything but an off-screen source is a no-op.
    pub fn copy_off_screen(&mut self, off_screen: Screen) {
        let Screen::OffScreen { top_bank, middle_bank, bottom_bank } = off_screen else {
            return;
        };
        let saved = self.bus.active_ram_bank();
        let banks = [
            (Section::Top, top_bank),
            (Section::Middle, middle_bank),
            (Section::Bottom, bottom_bank),
        ];
        for (section, bank) in banks {
            self.bus.write_layer2_config(
                AccessFlags::VISIBLE | AccessFlags::WRITE_ENABLE | AccessFlags::section(section),
            );
            self.bus.switch_ram_bank(bank);
            self.bus.copy_block(0x0000, 0xC000, SECTION_BYTES);
        }
        self.bus.write_layer2_config(AccessFlags::VISIBLE);
        self.bus.switch_ram_bank(saved);
    }
}

/// Shared argument validation: `None` means the call is a no-op, otherwise
/// the height clipped to the bottom screen edge.
fn clip_blit(y: u8, source: &[u8], width: u16, height: u8) -> Option<u8> {
    if y >= SCREEN_HEIGHT || width == 0 || height == 0 {
        return None;
    }
    if source.len() < width as usize * height as usize {
        return None;
    }
    let mut height = height;
    if y as u16 + height as u16 > SCREEN_HEIGHT as u16 {
        height = SCREEN_HEIGHT - y;
    }
    Some(height)
}

/// Width of the visible part of a row starting at `x`.
fn clip_span(x: u8, width: u16) -> u16 {
    if x as u16 + width > SCREEN_WIDTH { SCREEN_WIDTH - x as u16 } else { width }
}

fn blit_section<B: Bus>(
    paged: &mut PagedScreen<'_, B>,
    x: u8,
    local_y: u8,
    source: &[u8],
    width: u16,
    rows: u8,
) {
    let clip_width = clip_span(x, width);

    if x == 0 && width == SCREEN_WIDTH {
        // full-width rows are contiguous with the destination stride:
        // one block copy instead of a copy per row
        paged.copy_span(0, local_y, &source[..width as usize * rows as usize]);
    } else {
        let row_chunks = source.chunks(width as usize).take(rows as usize);
        for (row, data) in row_chunks.enumerate() {
            paged.copy_span(x, local_y + row as u8, &data[..clip_width as usize]);
        }
    }
}
