//! Row and column transfers from off-screen buffers into the main screen.
//!
//! Hardware scrolling wraps the displayed screen around; to scroll between
//! screens, the row or column being wrapped in is filled from the screen
//! being scrolled to. These transfers are the specialized blits for that:
//! each copies from an off-screen buffer (readable through the top window)
//! into the main screen (written through the bottom window), with both
//! windows paged at once. Source and destination positions section-map
//! independently — destination row 63 lives at the bottom of the top
//! section while source row 64 starts the middle section, and the transfer
//! still comes out as a single copy.

use crate::bus::Bus;
use crate::draw::Layer2;
use crate::regs::AccessFlags;
use crate::screen::{SCREEN_HEIGHT, SCREEN_WIDTH, Screen, Section, section_runs};

/// The three banks of an off-screen source.
#[derive(Copy, Clone)]
struct SourceBanks {
    top: u8,
    middle: u8,
    bottom: u8,
}

impl SourceBanks {
    fn of(screen: Screen) -> Option<SourceBanks> {
        match screen {
            Screen::OffScreen { top_bank, middle_bank, bottom_bank } => Some(SourceBanks {
                top: top_bank,
                middle: middle_bank,
                bottom: bottom_bank,
            }),
            _ => None,
        }
    }

    fn bank(&self, section: Section) -> u8 {
        match section {
            Section::Top => self.top,
            Section::Middle => self.middle,
            Section::Bottom => self.bottom,
        }
    }
}

impl<B: Bus> Layer2<B> {
    /// Copy one full row of `source` into the main screen.
    pub fn blit_row(&mut self, dest_y: u8, source: Screen, source_y: u8) {
        self.blit_sub_row(0, dest_y, source, 0, source_y, SCREEN_WIDTH);
    }

    /// Copy `width` pixels of one row of `source` into the main screen.
    ///
    /// The source must be an off-screen buffer. Source and destination rows
    /// map to their sections independently; the copy itself is one block
    /// move between the two windows.
    pub fn blit_sub_row(
        &mut self,
        dest_x: u8,
        dest_y: u8,
        source: Screen,
        source_x: u8,
        source_y: u8,
        width: u16,
    ) {
        let Some(banks) = SourceBanks::of(source) else {
            return;
        };
        if dest_y >= SCREEN_HEIGHT || source_y >= SCREEN_HEIGHT || width == 0 {
            return;
        }
        let mut width = width;
        if source_x as u16 + width > SCREEN_WIDTH {
            width = SCREEN_WIDTH - source_x as u16;
        }
        if dest_x as u16 + width > SCREEN_WIDTH {
            width = SCREEN_WIDTH - dest_x as u16;
        }

        let (dest_section, dest_local) = Section::of_y(dest_y);
        let (source_section, source_local) = Section::of_y(source_y);

        let saved = self.bus.active_ram_bank();
        self.bus.write_layer2_config(
            AccessFlags::VISIBLE | AccessFlags::WRITE_ENABLE | AccessFlags::section(dest_section),
        );
        self.bus.switch_ram_bank(banks.bank(source_section));

        let dst = ((dest_local as u16) << 8) + dest_x as u16;
        let src = 0xC000 + ((source_local as u16) << 8) + source_x as u16;
        self.bus.copy_block(dst, src, width);

        self.bus.write_layer2_config(AccessFlags::VISIBLE);
        self.bus.switch_ram_bank(saved);
    }

    /// Copy one full column of `source` into the main screen.
    ///
    /// Whole columns split at the same rows on both sides, so the three
    /// sections pair up bank-for-bank.
    pub fn blit_column(&mut self, dest_x: u8, source: Screen, source_x: u8) {
        let Some(banks) = SourceBanks::of(source) else {
            return;
        };
        let saved = self.bus.active_ram_bank();
        for section in Section::ALL {
            self.bus.write_layer2_config(
                AccessFlags::VISIBLE | AccessFlags::WRITE_ENABLE | AccessFlags::section(section),
            );
            self.bus.switch_ram_bank(banks.bank(section));
            copy_column_slice(&mut self.bus, dest_x, 0, source_x, 0, 64);
        }
        self.bus.write_layer2_config(AccessFlags::VISIBLE);
        self.bus.switch_ram_bank(saved);
    }

    /// Copy `height` pixels of one column of `source` into the main screen.
    ///
    /// The source side is split across its banks first; each slice is then
    /// split again wherever it crosses destination sections, since the two
    /// sides' section boundaries need not line up.
    pub fn blit_sub_column(
        &mut self,
        dest_x: u8,
        dest_y: u8,
        source: Screen,
        source_x: u8,
        source_y: u8,
        height: u8,
    ) {
        let Some(banks) = SourceBanks::of(source) else {
            return;
        };
        if dest_y >= SCREEN_HEIGHT || source_y >= SCREEN_HEIGHT || height == 0 {
            return;
        }
        let mut height = height;
        if source_y as u16 + height as u16 > SCREEN_HEIGHT as u16 {
            height = SCREEN_HEIGHT - source_y;
        }

        let saved = self.bus.active_ram_bank();
        for run in section_runs(source_y, height) {
            let dest_start = dest_y as u16 + run.offset as u16;
            if dest_start >= SCREEN_HEIGHT as u16 {
                break;
            }
            self.bus.switch_ram_bank(banks.bank(run.section));
            self.copy_column_to_main(dest_x, dest_start as u8, source_x, run.local_y, run.rows);
        }
        self.bus.write_layer2_config(AccessFlags::VISIBLE);
        self.bus.switch_ram_bank(saved);
    }

    /// One source-section slice of a column copy; splits across destination
    /// sections and clips at the bottom screen edge.
    fn copy_column_to_main(
        &mut self,
        dest_x: u8,
        dest_y: u8,
        source_x: u8,
        source_local_y: u8,
        height: u8,
    ) {
        let mut height = height;
        if dest_y as u16 + height as u16 > SCREEN_HEIGHT as u16 {
            height = SCREEN_HEIGHT - dest_y;
        }
        for run in section_runs(dest_y, height) {
            self.bus.write_layer2_config(
                AccessFlags::VISIBLE
                    | AccessFlags::WRITE_ENABLE
                    | AccessFlags::section(run.section),
            );
            copy_column_slice(
                &mut self.bus,
                dest_x,
                run.local_y,
                source_x,
                source_local_y + run.offset,
                run.rows,
            );
        }
    }
}

/// Copy `height` bytes down a column, both sides inside a single section.
/// Columns are not linear in this layout, so this is a stride-256 loop of
/// single-byte moves.
fn copy_column_slice<B: Bus>(
    bus: &mut B,
    dest_x: u8,
    dest_local_y: u8,
    source_x: u8,
    source_local_y: u8,
    height: u8,
) {
    let dst = ((dest_local_y as u16) << 8) + dest_x as u16;
    let src = 0xC000 + ((source_local_y as u16) << 8) + source_x as u16;
    for row in 0..height as u16 {
        let step = row << 8;
        let byte = bus.peek(src + step);
        bus.poke(dst + step, byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emulated::EmulatedBus;

    fn layer2() -> Layer2<EmulatedBus> {
        Layer2::new(EmulatedBus::new())
    }

    const BUFFER: Screen = Screen::OffScreen { top_bank: 30, middle_bank: 31, bottom_bank: 32 };

    /// Buffer where every pixel encodes its position: x ^ y.
    fn position_coded(layer2: &mut Layer2<EmulatedBus>) {
        for y in 0..SCREEN_HEIGHT {
            let (section, local_y) = Section::of_y(y);
            let bank = layer2.bus().section_bank(BUFFER, section);
            let row = &mut layer2.bus_mut().bank_mut(bank)
                [(local_y as usize) << 8..((local_y as usize) << 8) + 256];
            for (x, px) in row.iter_mut().enumerate() {
                *px = x as u8 ^ y;
            }
        }
    }

    fn main_pixel(layer2: &Layer2<EmulatedBus>, x: u8, y: u8) -> u8 {
        layer2.bus().screen_pixel(Screen::Main, x, y)
    }

    #[test]
    fn row_transfer_maps_both_sides_independently() {
        let mut layer2 = layer2();
        position_coded(&mut layer2);
        // destination in the top section, source in the middle section
        layer2.blit_row(63, BUFFER, 64);
        for x in 0..=255u8 {
            assert_eq!(main_pixel(&layer2, x, 63), x ^ 64);
        }
        assert_eq!(main_pixel(&layer2, 0, 62), 0);
        assert_eq!(main_pixel(&layer2, 0, 64), 0);
    }

    #[test]
    fn sub_row_copies_only_its_span() {
        let mut layer2 = layer2();
        position_coded(&mut layer2);
        layer2.blit_sub_row(10, 100, BUFFER, 40, 180, 16);
        for i in 0..16u8 {
            assert_eq!(main_pixel(&layer2, 10 + i, 100), (40 + i) ^ 180);
        }
        assert_eq!(main_pixel(&layer2, 9, 100), 0);
        assert_eq!(main_pixel(&layer2, 26, 100), 0);
    }

    #[test]
    fn sub_row_clips_against_both_right_edges() {
        let mut layer2 = layer2();
        position_coded(&mut layer2);
        layer2.blit_sub_row(250, 0, BUFFER, 200, 0, 100);
        // width limited by the destination edge: 6 pixels
        for i in 0..6u8 {
            assert_eq!(main_pixel(&layer2, 250 + i, 0), (200 + i) ^ 0);
        }
        assert_eq!(main_pixel(&layer2, 0, 0), 0);
    }

    #[test]
    fn sub_row_rejects_bad_arguments() {
        let mut layer2 = layer2();
        position_coded(&mut layer2);
        layer2.blit_sub_row(0, 192, BUFFER, 0, 0, 16);
        layer2.blit_sub_row(0, 0, BUFFER, 0, 192, 16);
        layer2.blit_sub_row(0, 0, BUFFER, 0, 0, 0);
        layer2.blit_sub_row(0, 0, Screen::Shadow, 0, 0, 16);
        for y in 0..SCREEN_HEIGHT {
            assert_eq!(main_pixel(&layer2, 0, y), 0);
        }
    }

    #[test]
    fn full_column_transfer_covers_all_sections() {
        let mut layer2 = layer2();
        position_coded(&mut layer2);
        layer2.blit_column(5, BUFFER, 250);
        for y in 0..SCREEN_HEIGHT {
            assert_eq!(main_pixel(&layer2, 5, y), 250 ^ y);
        }
        assert_eq!(main_pixel(&layer2, 4, 100), 0);
        assert_eq!(main_pixel(&layer2, 6, 100), 0);
    }

    #[test]
    fn sub_column_handles_misaligned_sections() {
        let mut layer2 = layer2();
        position_coded(&mut layer2);
        // source spans middle+bottom, destination spans top+middle
        layer2.blit_sub_column(8, 32, BUFFER, 9, 96, 64);
        for i in 0..64u8 {
            assert_eq!(main_pixel(&layer2, 8, 32 + i), 9 ^ (96 + i), "row {i}");
        }
        assert_eq!(main_pixel(&layer2, 8, 31), 0);
        assert_eq!(main_pixel(&layer2, 8, 96), 0);
    }

    #[test]
    fn sub_column_clips_against_source_and_destination_bottoms() {
        let mut layer2 = layer2();
        position_coded(&mut layer2);
        // source clip: 160 + 64 overruns, leaving 32 rows
        layer2.blit_sub_column(0, 0, BUFFER, 0, 160, 64);
        for i in 0..32u8 {
            assert_eq!(main_pixel(&layer2, 0, i), 0 ^ (160 + i));
        }
        assert_eq!(main_pixel(&layer2, 0, 32), 0);

        // destination clip: destination runs out of screen first
        layer2.blit_sub_column(1, 180, BUFFER, 0, 0, 60);
        for i in 0..12u8 {
            assert_eq!(main_pixel(&layer2, 1, 180 + i), 0 ^ i);
        }
    }

    #[test]
    fn transfers_restore_the_previous_bank_and_config() {
        let mut layer2 = layer2();
        position_coded(&mut layer2);
        layer2.bus_mut().switch_ram_bank(3);
        layer2.blit_row(0, BUFFER, 0);
        layer2.blit_column(0, BUFFER, 0);
        layer2.blit_sub_column(0, 0, BUFFER, 0, 0, 10);
        assert_eq!(layer2.bus().active_ram_bank(), 3);
        assert_eq!(layer2.bus().layer2_config(), AccessFlags::VISIBLE);
    }
}
