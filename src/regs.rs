//! # Layer 2 Control Registers
//!
//! This module defines the bit layout of the layer 2 access port and the
//! Next register numbers the library programs through the [`Bus`](crate::bus::Bus).
//!
//! ## AccessFlags (port `0x123B`)
//!
//! Controls visibility of the layer 2 screen and which part of it is paged
//! into the bottom 16 KB write window:
//!
//! | Flag             | Effect                                              |
//! |------------------|-----------------------------------------------------|
//! | `WRITE_ENABLE`   | Writes to `0x0000-0x3FFF` go to the paged-in section |
//! | `VISIBLE`        | Layer 2 screen shown on the display                 |
//! | `SHADOW`         | Page in the shadow screen instead of the main screen |
//! | `SECTION_*`      | Which 64-row section is paged in (bits 6-7)         |
//!
//! The port is write-only on real hardware; the library keeps its own copy
//! of the last written value where it needs one.

use crate::screen::Section;

/// Layer 2 access port.
pub const LAYER2_ACCESS_PORT: u16 = 0x123B;

/// Classic 128K paging port; bits 0-2 select the RAM bank at `0xC000`.
pub const BANK_PORT: u16 = 0x7FFD;

/// Next extension of [`BANK_PORT`]; carries bank bits 3-5.
pub const BANK_EXT_PORT: u16 = 0xDFFD;

/// Next register: starting RAM bank of the main screen (default 8).
pub const REG_LAYER2_RAM_PAGE: u8 = 0x12;

/// Next register: starting RAM bank of the shadow screen (default 11).
pub const REG_LAYER2_SHADOW_RAM_PAGE: u8 = 0x13;

/// Next register: global transparency colour (default `0xE3`).
pub const REG_GLOBAL_TRANSPARENCY: u8 = 0x14;

/// Next register: sprite and layer system control; bits 2-4 hold the
/// layer priority order.
pub const REG_SPRITE_LAYER_SYSTEM: u8 = 0x15;

/// Next register: horizontal scroll offset (0-255).
pub const REG_LAYER2_OFFSET_X: u8 = 0x16;

/// Next register: vertical scroll offset (0-191).
pub const REG_LAYER2_OFFSET_Y: u8 = 0x17;

bitflags::bitflags! {
    /// Layer 2 access port (`0x123B`) bit layout.
    ///
    /// Bits 6-7 select the screen section paged into the bottom 16 KB;
    /// the remaining bits control write-through, display and main/shadow
    /// selection.
    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    pub struct AccessFlags: u8 {
        /// Enable writing the paged-in section through `0x0000-0x3FFF`.
        /// Reads of that range still see the ROM, never the screen.
        const WRITE_ENABLE        = 0b0000_0001;
        /// Layer 2 screen visible on the display.
        const VISIBLE             = 0b0000_0010;
        /// Page in the shadow screen instead of the main screen.
        const SHADOW              = 0b0000_1000;

        // Bits 6-7: screen section paged in for writing
        const SECTION_TOP         = 0b0000_0000;
        const SECTION_MIDDLE      = 0b0100_0000;
        const SECTION_BOTTOM      = 0b1000_0000;
    }
}

impl AccessFlags {
    /// The section-select bits for `section`.
    pub fn section(section: Section) -> AccessFlags {
        match section {
            Section::Top => AccessFlags::SECTION_TOP,
            Section::Middle => AccessFlags::SECTION_MIDDLE,
            Section::Bottom => AccessFlags::SECTION_BOTTOM,
        }
    }
}

/// Priority order of the sprite, layer 2 and ULA layers, topmost first.
///
/// Written to bits 2-4 of [`REG_SPRITE_LAYER_SYSTEM`].
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum LayerPriority {
    /// Sprites over layer 2 over ULA (default).
    SpritesLayer2Ula = 0x0,
    /// Layer 2 over sprites over ULA.
    Layer2SpritesUla = 0x1,
    /// Sprites over ULA over layer 2.
    SpritesUlaLayer2 = 0x2,
    /// Layer 2 over ULA over sprites.
    Layer2UlaSprites = 0x3,
    /// ULA over sprites over layer 2.
    UlaSpritesLayer2 = 0x4,
    /// ULA over layer 2 over sprites.
    UlaLayer2Sprites = 0x5,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_bits_occupy_bits_6_and_7() {
        assert_eq!(AccessFlags::section(Section::Top).bits(), 0b0000_0000);
        assert_eq!(AccessFlags::section(Section::Middle).bits(), 0b0100_0000);
        assert_eq!(AccessFlags::section(Section::Bottom).bits(), 0b1000_0000);
    }

    #[test]
    fn flags_compose() {
        let flags = AccessFlags::VISIBLE
            | AccessFlags::WRITE_ENABLE
            | AccessFlags::section(Section::Bottom);
        assert_eq!(flags.bits(), 0b1000_0011);
    }
}
