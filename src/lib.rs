//! # ZX Spectrum Next Layer 2 Graphics
//!
//! Drawing library for the Next's layer 2 screen: 256 × 192 pixels, one
//! byte per pixel indexing a 256-colour palette, laid out linearly left to
//! right and top to bottom.
//!
//! ## The banked screen
//!
//! The 48 KB screen is never addressable at once. It is stored in three
//! 16 KB RAM banks — top, middle and bottom 64-row sections — and one
//! section at a time is paged into a fixed 16 KB window for writing. The
//! paged-in screen memory is *write-only*: reading the window sees the ROM
//! underneath it, never the pixels. Every operation here takes care of the
//! paging for you — it clips to the screen, works out which sections its
//! footprint touches, pages each one in with the right section-local
//! coordinates, and restores the previous paging state before returning:
//!
//! ```ignore
//! let mut layer2 = Layer2::new(bus);
//!
//! layer2.clear_screen(0x00, Screen::Main);
//! layer2.fill_rect(32, 100, 64, 60, 0xFC, Screen::Main);   // spans 2 sections
//! layer2.draw_line(0, 0, 255, 191, 0x1F, Screen::Main);    // spans all 3
//! layer2.draw_text(1, 1, "Hello", 0xFF, Screen::Main);
//! ```
//!
//! ## Double buffering
//!
//! There are two screens: the displayed main screen and a shadow screen in
//! three banks of its own. Draw to the shadow screen, then swap the two
//! during vertical blanking — the flip rewrites two bank registers, no
//! pixels move:
//!
//! ```ignore
//! layer2.clear_screen(0x00, Screen::Shadow);
//! layer2.draw_text(10, 10, "next frame", 0xFF, Screen::Shadow);
//! layer2.flip_main_shadow_screen();
//! ```
//!
//! ## Off-screen buffers and scrolling
//!
//! Any three RAM banks can serve as an off-screen buffer
//! ([`Screen::off_screen`]), drawn on with the same operations and paged
//! through the top 16 KB window, where they are also readable. The hardware
//! scroll offsets ([`Layer2::set_offset_x`], [`Layer2::set_offset_y`]) wrap
//! the displayed screen around; to scroll between screens, fill the rows or
//! columns being wrapped in from an off-screen buffer with
//! [`Layer2::blit_row`] / [`Layer2::blit_column`] and their sub-range
//! variants.
//!
//! ## Buses
//!
//! All hardware access goes through the [`Bus`] trait.
//! [`EmulatedBus`] backs the windows with ordinary memory — keeping the
//! paging and write-only semantics — which makes the library usable in
//! hosted tools and directly testable. A bare-metal target implements
//! [`Bus`] with real port I/O instead.
//!
//! Drawing calls are not reentrant: the active bank and section are global
//! state, and an interrupt handler that repages them mid-call will corrupt
//! the operation in flight. See [`bus`] for the contract.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bus;
pub mod draw;
pub mod emulated;
pub mod font;
pub mod regs;
pub mod screen;

mod paging;
#[cfg(feature = "std")]
mod loader;

pub use bus::Bus;
pub use draw::{Layer2, TEXT_COLUMNS, TEXT_ROWS};
pub use emulated::EmulatedBus;
pub use font::Font;
pub use regs::{AccessFlags, LayerPriority};
pub use screen::{
    SCREEN_HEIGHT, SCREEN_WIDTH, Screen, Section, dec_y, inc_y,
};
