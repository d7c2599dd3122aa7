//! Packed 32-bit pixel encoding.
//!
//! A pixel holds four 8-bit channels at fixed bit offsets: red in bits `0..8`, green in
//! `8..16`, blue in `16..24` and alpha in `24..32`. Every component of the engine packs and
//! unpacks through this table.

/// Bit offset of the red channel.
pub const SHIFT_RED: u32 = 0;
/// Bit offset of the green channel.
pub const SHIFT_GREEN: u32 = 8;
/// Bit offset of the blue channel.
pub const SHIFT_BLUE: u32 = 16;
/// Bit offset of the alpha channel.
pub const SHIFT_ALPHA: u32 = 24;

pub(crate) const MASK_RED_BLUE: u64 = (0xFF << SHIFT_RED) | (0xFF << SHIFT_BLUE);
pub(crate) const MASK_GREEN: u64 = 0xFF << SHIFT_GREEN;
pub(crate) const MASK_ALPHA: u64 = 0xFF << SHIFT_ALPHA;

/// Fully transparent black.
pub const TRANSPARENT: u32 = 0;

/// Pack four channels into a pixel.
///
/// Inputs are masked to their low 8 bits, not clamped: `pack(256, 0, 0, 255)` has a red
/// channel of `0`. Callers that need saturation must clamp first.
#[inline]
pub const fn pack(r: u32, g: u32, b: u32, a: u32) -> u32 {
    ((r & 0xFF) << SHIFT_RED)
        | ((g & 0xFF) << SHIFT_GREEN)
        | ((b & 0xFF) << SHIFT_BLUE)
        | ((a & 0xFF) << SHIFT_ALPHA)
}

/// Split a pixel into `(r, g, b, a)`.
#[inline]
pub const fn unpack(pixel: u32) -> (u8, u8, u8, u8) {
    (
        ((pixel >> SHIFT_RED) & 0xFF) as u8,
        ((pixel >> SHIFT_GREEN) & 0xFF) as u8,
        ((pixel >> SHIFT_BLUE) & 0xFF) as u8,
        ((pixel >> SHIFT_ALPHA) & 0xFF) as u8,
    )
}

/// Alpha channel of a pixel.
#[inline]
pub const fn alpha(pixel: u32) -> u8 {
    ((pixel >> SHIFT_ALPHA) & 0xFF) as u8
}

/// Byte offsets of each channel inside one 4-byte cell of a byte-addressed buffer.
///
/// The four offsets must be a permutation of `{0, 1, 2, 3}`. The engine does not enforce
/// this; a layout that repeats an offset silently aliases two channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ChannelLayout {
    /// Byte offset of red.
    pub red: usize,
    /// Byte offset of green.
    pub green: usize,
    /// Byte offset of blue.
    pub blue: usize,
    /// Byte offset of alpha.
    pub alpha: usize,
}

impl ChannelLayout {
    /// `R, G, B, A` in memory order.
    pub const RGBA: Self = Self::new(0, 1, 2, 3);
    /// `B, G, R, A` in memory order (common for window-system surfaces).
    pub const BGRA: Self = Self::new(2, 1, 0, 3);
    /// `A, R, G, B` in memory order.
    pub const ARGB: Self = Self::new(1, 2, 3, 0);

    /// Build a layout from explicit byte offsets.
    pub const fn new(red: usize, green: usize, blue: usize, alpha: usize) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Decode one stored cell into a canonical packed pixel.
    #[inline]
    pub fn decode(self, stored: u32) -> u32 {
        let bytes = stored.to_ne_bytes();
        pack(
            u32::from(bytes[self.red & 3]),
            u32::from(bytes[self.green & 3]),
            u32::from(bytes[self.blue & 3]),
            u32::from(bytes[self.alpha & 3]),
        )
    }

    /// Encode a canonical packed pixel into this layout's stored cell.
    #[inline]
    pub fn encode(self, pixel: u32) -> u32 {
        let (r, g, b, a) = unpack(pixel);
        let mut bytes = [0u8; 4];
        bytes[self.red & 3] = r;
        bytes[self.green & 3] = g;
        bytes[self.blue & 3] = b;
        bytes[self.alpha & 3] = a;
        u32::from_ne_bytes(bytes)
    }
}

impl Default for ChannelLayout {
    fn default() -> Self {
        Self::RGBA
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/pixel.rs"]
mod tests;
