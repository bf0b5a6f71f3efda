//! Screen and palette file loading (`std` feature).
//!
//! A screen file is 49152 raw pixel bytes in top/middle/bottom section
//! order, row-major within each section, optionally preceded by a 512-byte
//! palette table of 256 RGB333 colour words. A palette file is the 512-byte
//! table alone. Each colour word stores the RGB332 bits in its first byte
//! and the zero-extended lowest blue bit in its second.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt};

use crate::bus::Bus;
use crate::draw::Layer2;
use crate::screen::{SCREEN_BYTES, Screen};

impl<B: Bus> Layer2<B> {
    /// Load a screen file into `screen`, programming the palette first if
    /// `has_palette` says the file carries one.
    pub fn load_screen<P: AsRef<Path>>(
        &mut self,
        path: P,
        screen: Screen,
        has_palette: bool,
    ) -> io::Result<()> {
        let mut file = File::open(path)?;
        self.read_screen(&mut file, screen, has_palette)
    }

    /// Same as [`load_screen`](Self::load_screen), from any byte stream.
    pub fn read_screen<R: Read>(
        &mut self,
        reader: &mut R,
        screen: Screen,
        has_palette: bool,
    ) -> io::Result<()> {
        if has_palette {
            let colors = read_palette_words(reader)?;
            self.set_palette(&colors, 0);
        }
        let mut data = alloc::vec![0u8; SCREEN_BYTES];
        reader.read_exact(&mut data)?;
        self.write_screen(&data, screen);
        Ok(())
    }

    /// Load a 512-byte palette file into the palette, starting at index 0.
    pub fn load_palette<P: AsRef<Path>>(&mut self, path: P) -> io::Result<()> {
        let mut file = File::open(path)?;
        let colors = read_palette_words(&mut file)?;
        self.set_palette(&colors, 0);
        Ok(())
    }
}

fn read_palette_words<R: Read>(reader: &mut R) -> io::Result<[u16; 256]> {
    let mut colors = [0u16; 256];
    for color in colors.iter_mut() {
        *color = reader.read_u16::<BigEndian>()?;
    }
    Ok(colors)
}
