//! RGB565 packed color.

use bytemuck::{Pod, Zeroable};

/// A 16-bit color: 5 bits red (high), 6 bits green, 5 bits blue (low).
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Rgb565 = Rgb565(0x0000);
    pub const WHITE: Rgb565 = Rgb565(0xFFFF);
    pub const RED: Rgb565 = Rgb565(0xF800);
    pub const GREEN: Rgb565 = Rgb565(0x07E0);
    pub const BLUE: Rgb565 = Rgb565(0x001F);

    /// Pack 8-bit channels, truncating the low bits of each.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Rgb565((((r & 0xF8) as u16) << 8) | (((g & 0xFC) as u16) << 3) | ((b >> 3) as u16))
    }

    /// The raw 16-bit value.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel as stored (0..=31).
    #[inline]
    pub const fn red5(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Green channel as stored (0..=63).
    #[inline]
    pub const fn green6(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue channel as stored (0..=31).
    #[inline]
    pub const fn blue5(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// Expand back to 8-bit channels, replicating the high bits into the
    /// vacated low bits so full intensity maps to 255.
    pub const fn to_rgb8(self) -> [u8; 3] {
        let r = self.red5();
        let g = self.green6();
        let b = self.blue5();
        [(r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2)]
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Rgb565(raw)
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> Self {
        color.0
    }
}
