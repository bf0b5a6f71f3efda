//! Paging bracket for drawing operations.
//!
//! Every drawing call opens exactly one [`PagedScreen`] for its target,
//! switches sections through it as its footprint requires, and lets the
//! guard's `Drop` restore the pre-call state: write window disabled for the
//! main/shadow screen, previously active RAM bank for an off-screen buffer.
//! The guard also carries the span primitives — the single-section units
//! every shape decomposes into.

use crate::bus::Bus;
use crate::regs::AccessFlags;
use crate::screen::{SECTION_BYTES, Screen, Section};

/// Exclusive use of the paging windows for one drawing call.
pub(crate) struct PagedScreen<'a, B: Bus> {
    bus: &'a mut B,
    screen: Screen,
    saved_bank: Option<u8>,
}

impl<'a, B: Bus> PagedScreen<'a, B> {
    /// Capture the state the call must restore and take the bus for the
    /// duration of the call.
    pub fn begin(bus: &'a mut B, screen: Screen) -> Self {
        let saved_bank = screen.is_off_screen().then(|| bus.active_ram_bank());
        Self { bus, screen, saved_bank }
    }

    /// Page in one section of the target screen.
    pub fn section(&mut self, section: Section) {
        match self.screen {
            Screen::Main => self.bus.write_layer2_config(
                AccessFlags::VISIBLE | AccessFlags::WRITE_ENABLE | AccessFlags::section(section),
            ),
            Screen::Shadow => self.bus.write_layer2_config(
                AccessFlags::VISIBLE
                    | AccessFlags::WRITE_ENABLE
                    | AccessFlags::SHADOW
                    | AccessFlags::section(section),
            ),
            Screen::OffScreen { top_bank, middle_bank, bottom_bank } => {
                let bank = match section {
                    Section::Top => top_bank,
                    Section::Middle => middle_bank,
                    Section::Bottom => bottom_bank,
                };
                self.bus.switch_ram_bank(bank);
            }
        }
    }

    fn addr(&self, local_x: u8, local_y: u8) -> u16 {
        self.screen.window_base() + ((local_y as u16) << 8) + local_x as u16
    }

    /// Write one pixel of the active section.
    pub fn set_pixel(&mut self, local_x: u8, local_y: u8, color: u8) {
        let addr = self.addr(local_x, local_y);
        self.bus.poke(addr, color);
    }

    /// Fill `width` pixels of one row. The caller pre-clips so the run does
    /// not cross the 256-column edge.
    pub fn fill_span(&mut self, local_x: u8, local_y: u8, width: u16, color: u8) {
        let addr = self.addr(local_x, local_y);
        self.bus.fill_block(addr, width, color);
    }

    /// Copy `data` into one row, same boundary rule as [`fill_span`](Self::fill_span).
    pub fn copy_span(&mut self, local_x: u8, local_y: u8, data: &[u8]) {
        let addr = self.addr(local_x, local_y);
        self.bus.write_block(addr, data);
    }

    /// Write `height` pixels down a column at stride 256, confined to the
    /// active section (`local_y + height` at most 64).
    pub fn set_column(&mut self, local_x: u8, local_y: u8, height: u8, color: u8) {
        let base = self.addr(local_x, local_y);
        for row in 0..height as u16 {
            self.bus.poke(base + (row << 8), color);
        }
    }

    /// Fill the whole active section.
    pub fn fill_section(&mut self, color: u8) {
        let base = self.screen.window_base();
        self.bus.fill_block(base, SECTION_BYTES, color);
    }
}

impl<B: Bus> Drop for PagedScreen<'_, B> {
    fn drop(&mut self) {
        match self.saved_bank {
            Some(bank) => self.bus.switch_ram_bank(bank),
            None => self.bus.write_layer2_config(AccessFlags::VISIBLE),
        }
    }
}
