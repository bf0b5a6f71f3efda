//! # Bus Interface
//!
//! The drawing engine never touches hardware directly; it drives this trait.
//! A [`Bus`] covers the collaborators the engine depends on: the layer 2
//! access port, RAM-bank paging at the top 16 KB window, Next register
//! access, and raw byte traffic through the two paged windows.
//!
//! The crate ships [`EmulatedBus`](crate::emulated::EmulatedBus), which backs
//! the windows with ordinary memory while preserving the hardware's paging
//! semantics. A bare-metal port implements the same trait with port I/O.
//!
//! ## Reentrancy
//!
//! The active bank and section are global, process-wide state: every drawing
//! call is a critical section with respect to them. The engine brackets each
//! call with one page-in/restore pair and assumes nothing else switches banks
//! in between. An interrupt handler that repages the windows mid-call will
//! corrupt either the drawing operation or its own access; implementations
//! of [`switch_ram_bank`](Bus::switch_ram_bank) must at minimum mask
//! interrupts around their own port writes so the bank state itself stays
//! consistent.

use crate::regs::AccessFlags;

/// Access to the banking hardware and the two paged memory windows.
///
/// Addresses follow the machine's memory map: `0x0000-0x3FFF` is the layer 2
/// write window (write-only; what is read there is the ROM, never the
/// screen) and `0xC000-0xFFFF` is the general paging window for the bank
/// selected with [`switch_ram_bank`](Bus::switch_ram_bank).
pub trait Bus {
    /// Reprogram the layer 2 access port (`0x123B`).
    fn write_layer2_config(&mut self, flags: AccessFlags);

    /// Page `bank` into the top 16 KB window, updating the system's record
    /// of the active bank.
    fn switch_ram_bank(&mut self, bank: u8);

    /// The bank currently paged into the top 16 KB window.
    fn active_ram_bank(&self) -> u8;

    /// Write a Next register.
    fn write_next_reg(&mut self, reg: u8, value: u8);

    /// Read a Next register.
    fn read_next_reg(&self, reg: u8) -> u8;

    /// Write one byte through the memory map.
    fn poke(&mut self, addr: u16, value: u8);

    /// Read one byte through the memory map. The layer 2 write window reads
    /// as ROM, not as screen contents.
    fn peek(&self, addr: u16) -> u8;

    /// Fill `len` consecutive bytes starting at `addr` with `value`.
    /// The run must stay inside one window.
    fn fill_block(&mut self, addr: u16, len: u16, value: u8) {
        for i in 0..len {
            self.poke(addr + i, value);
        }
    }

    /// Copy `data` to consecutive addresses starting at `addr`, staying
    /// inside one window.
    fn write_block(&mut self, addr: u16, data: &[u8]) {
        for (i, &byte) in data.iter().enumerate() {
            self.poke(addr + i as u16, byte);
        }
    }

    /// Copy `len` bytes from `src` to `dst`. Source and destination each
    /// stay inside one window, but may be in different windows.
    fn copy_block(&mut self, dst: u16, src: u16, len: u16) {
        for i in 0..len {
            let byte = self.peek(src + i);
            self.poke(dst + i, byte);
        }
    }

    /// Upload RGB333 colour words to the palette hardware starting at
    /// `index`. Each word holds the RGB332 bits in its high byte and the
    /// zero-extended lowest blue bit in its low byte.
    fn write_palette(&mut self, index: u8, colors: &[u16]);
}
