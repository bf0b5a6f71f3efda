//! # Drawing Context
//!
//! [`Layer2`] owns the [`Bus`] and exposes the full drawing surface: shapes,
//! text, blits and the scroll-support transfers, plus the thin control
//! operations (screen flipping, scroll offsets, transparency, palette).
//!
//! Drawing operations take a [`Screen`](crate::screen::Screen) argument and
//! page its sections in and out internally; callers never touch the paging
//! state themselves. Invalid arguments make a call a silent no-op and
//! partially visible footprints are clipped, never reported — there is no
//! fault path in the underlying memory model to surface errors through.

mod blit;
mod scroll;
mod shapes;
mod text;

pub use text::{TEXT_COLUMNS, TEXT_ROWS};

use crate::bus::Bus;
use crate::font::Font;
use crate::regs::{
    AccessFlags, LayerPriority, REG_GLOBAL_TRANSPARENCY, REG_LAYER2_OFFSET_X, REG_LAYER2_OFFSET_Y,
    REG_LAYER2_RAM_PAGE, REG_LAYER2_SHADOW_RAM_PAGE, REG_SPRITE_LAYER_SYSTEM,
};
use crate::screen::{SCREEN_HEIGHT, Section};

const LAYER_PRIORITY_MASK: u8 = 0b0001_1100;
const LAYER_PRIORITY_SHIFT: u8 = 2;

/// The layer 2 drawing context.
///
/// One `Layer2` exists per machine; it assumes single-writer access to the
/// banking state and is not reentrant (see [`crate::bus`]).
pub struct Layer2<B: Bus> {
    bus: B,
    font: Font,
}

impl<B: Bus> Layer2<B> {
    /// Take ownership of the bus, leaving the screen visible and the write
    /// window disabled.
    pub fn new(bus: B) -> Self {
        let mut layer2 = Self { bus, font: Font::default() };
        layer2.configure(true, false, false, Section::Top);
        layer2
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Reprogram the layer 2 access port directly: display visibility,
    /// write-window enable, main or shadow selection, and the section paged
    /// in for writing.
    ///
    /// The drawing operations manage the port themselves; this is for
    /// callers that write the screen memory on their own.
    pub fn configure(&mut self, visible: bool, write_enabled: bool, shadow: bool, section: Section) {
        let mut flags = AccessFlags::section(section);
        if visible {
            flags |= AccessFlags::VISIBLE;
        }
        if write_enabled {
            flags |= AccessFlags::WRITE_ENABLE;
        }
        if shadow {
            flags |= AccessFlags::SHADOW;
        }
        self.bus.write_layer2_config(flags);
    }

    /// Set the starting RAM bank of the main screen. The middle and bottom
    /// sections follow in the next two banks.
    ///
    /// This decides what the display shows: pointing it at the shadow
    /// screen's banks (or an off-screen buffer's consecutive banks) makes
    /// that buffer the displayed screen.
    pub fn set_main_screen_ram_bank(&mut self, bank: u8) {
        self.bus.write_next_reg(REG_LAYER2_RAM_PAGE, bank);
    }

    /// Starting RAM bank of the main screen.
    pub fn main_screen_ram_bank(&self) -> u8 {
        self.bus.read_next_reg(REG_LAYER2_RAM_PAGE)
    }

    /// Set the starting RAM bank of the shadow screen.
    pub fn set_shadow_screen_ram_bank(&mut self, bank: u8) {
        self.bus.write_next_reg(REG_LAYER2_SHADOW_RAM_PAGE, bank);
    }

    /// Starting RAM bank of the shadow screen.
    pub fn shadow_screen_ram_bank(&self) -> u8 {
        self.bus.read_next_reg(REG_LAYER2_SHADOW_RAM_PAGE)
    }

    /// Exchange the main and shadow screen bank assignments.
    ///
    /// No pixel data moves; the display simply starts reading the other
    /// three banks. Flip during vertical blanking to avoid tearing.
    pub fn flip_main_shadow_screen(&mut self) {
        let main = self.bus.read_next_reg(REG_LAYER2_RAM_PAGE);
        let shadow = self.bus.read_next_reg(REG_LAYER2_SHADOW_RAM_PAGE);
        self.bus.write_next_reg(REG_LAYER2_RAM_PAGE, shadow);
        self.bus.write_next_reg(REG_LAYER2_SHADOW_RAM_PAGE, main);
    }

    /// Offset the displayed columns horizontally in a wrapping manner.
    /// Drawing coordinates are unaffected.
    pub fn set_offset_x(&mut self, offset_x: u8) {
        self.bus.write_next_reg(REG_LAYER2_OFFSET_X, offset_x);
    }

    /// Current horizontal scroll offset.
    pub fn offset_x(&self) -> u8 {
        self.bus.read_next_reg(REG_LAYER2_OFFSET_X)
    }

    /// Offset the displayed rows vertically in a wrapping manner; the value
    /// is reduced modulo 192. Drawing coordinates are unaffected.
    pub fn set_offset_y(&mut self, offset_y: u8) {
        self.bus.write_next_reg(REG_LAYER2_OFFSET_Y, offset_y % SCREEN_HEIGHT);
    }

    /// Current vertical scroll offset.
    pub fn offset_y(&self) -> u8 {
        self.bus.read_next_reg(REG_LAYER2_OFFSET_Y)
    }

    /// Set the global transparency colour used by
    /// [`blit_transparent`](Self::blit_transparent) and the display
    /// hardware. Default `0xE3`.
    pub fn set_global_transparency_color(&mut self, color: u8) {
        self.bus.write_next_reg(REG_GLOBAL_TRANSPARENCY, color);
    }

    /// Current global transparency colour.
    pub fn global_transparency_color(&self) -> u8 {
        self.bus.read_next_reg(REG_GLOBAL_TRANSPARENCY)
    }

    /// Set the priority order of the sprite, layer 2 and ULA layers.
    pub fn set_layer_priorities(&mut self, priorities: LayerPriority) {
        let old = self.bus.read_next_reg(REG_SPRITE_LAYER_SYSTEM);
        let value = (old & !LAYER_PRIORITY_MASK) | ((priorities as u8) << LAYER_PRIORITY_SHIFT);
        self.bus.write_next_reg(REG_SPRITE_LAYER_SYSTEM, value);
    }

    /// Upload RGB333 colour words to the palette starting at `start_index`.
    pub fn set_palette(&mut self, colors: &[u16], start_index: u8) {
        self.bus.write_palette(start_index, colors);
    }

    /// Set the font used by [`draw_text`](Self::draw_text).
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }
}
