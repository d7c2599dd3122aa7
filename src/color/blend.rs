//! Per-pixel compositing strategies.
//!
//! Each strategy combines a foreground pixel (the value being drawn) with the background
//! pixel already stored in the canvas. Strategies are available three ways:
//!
//! - as plain functions (`alpha_composite(fg, bg)`),
//! - as zero-sized [`PixelBlend`] types for statically dispatched drawing calls,
//! - as the runtime [`BlendMode`] value a canvas carries.

use crate::color::pixel::{MASK_ALPHA, MASK_GREEN, MASK_RED_BLUE, SHIFT_ALPHA, pack, unpack};
use crate::foundation::math::add_sat_u8;

/// Replace the background with the foreground.
#[inline]
pub fn overwrite(fg: u32, _bg: u32) -> u32 {
    fg
}

/// Porter-Duff source-over on straight (non-premultiplied) alpha.
///
/// When both operands are fully transparent the result alpha is zero and the colour is
/// undefined; this implementation returns `bg` in that case rather than dividing by zero.
#[inline]
pub fn alpha_composite(fg: u32, bg: u32) -> u32 {
    let (fg_r, fg_g, fg_b, fg_a) = unpack(fg);
    let (bg_r, bg_g, bg_b, bg_a) = unpack(bg);
    let (fg_a, bg_a) = (u32::from(fg_a), u32::from(bg_a));

    let a = fg_a + bg_a * (255 - fg_a) / 255;
    if a == 0 {
        return bg;
    }
    let channel = |fc: u8, bc: u8| {
        (u32::from(fc) * fg_a + u32::from(bc) * bg_a * (255 - fg_a) / 255) / a
    };

    pack(
        channel(fg_r, bg_r),
        channel(fg_g, bg_g),
        channel(fg_b, bg_b),
        a,
    )
}

/// Integer approximation of [`alpha_composite`] against an opaque background.
///
/// Red and blue are blended together in one multiply through a channel mask, green in a
/// second one, and the result is always opaque. A transparent foreground returns `bg`
/// unchanged.
#[inline]
pub fn fast_alpha_composite(fg: u32, bg: u32) -> u32 {
    let (fg, bg) = (u64::from(fg), u64::from(bg));
    let fg_a = (fg & MASK_ALPHA) >> SHIFT_ALPHA;
    if fg_a == 0 {
        return bg as u32;
    }

    let alpha = fg_a + 1;
    let inv_alpha = 256 - fg_a;

    let rb = (alpha * (fg & MASK_RED_BLUE) + inv_alpha * (bg & MASK_RED_BLUE)) >> 8;
    let g = (alpha * (fg & MASK_GREEN) + inv_alpha * (bg & MASK_GREEN)) >> 8;

    ((rb & MASK_RED_BLUE) | (g & MASK_GREEN) | MASK_ALPHA) as u32
}

/// Saturating per-channel add of the colour channels; background alpha is kept.
#[inline]
pub fn add(fg: u32, bg: u32) -> u32 {
    let (fg_r, fg_g, fg_b, _) = unpack(fg);
    let (bg_r, bg_g, bg_b, bg_a) = unpack(bg);
    pack(
        u32::from(add_sat_u8(bg_r, fg_r)),
        u32::from(add_sat_u8(bg_g, fg_g)),
        u32::from(add_sat_u8(bg_b, fg_b)),
        u32::from(bg_a),
    )
}

/// `bg + fg * fg.alpha / 255` per colour channel (truncating division), saturating;
/// background alpha is kept.
#[inline]
pub fn alpha_weighted_add(fg: u32, bg: u32) -> u32 {
    let (fg_r, fg_g, fg_b, fg_a) = unpack(fg);
    let (bg_r, bg_g, bg_b, bg_a) = unpack(bg);
    let weighted = |fc: u8, bc: u8| {
        let w = u32::from(fc) * u32::from(fg_a) / 255;
        (u32::from(bc) + w).min(255)
    };
    pack(
        weighted(fg_r, bg_r),
        weighted(fg_g, bg_g),
        weighted(fg_b, bg_b),
        u32::from(bg_a),
    )
}

/// A blend strategy usable as a statically dispatched drawing parameter.
pub trait PixelBlend: Copy {
    /// Combine `fg` over the stored `bg`.
    fn blend(self, fg: u32, bg: u32) -> u32;
}

macro_rules! blend_strategy {
    ($(#[$meta:meta])* $name:ident => $func:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl PixelBlend for $name {
            #[inline(always)]
            fn blend(self, fg: u32, bg: u32) -> u32 {
                $func(fg, bg)
            }
        }
    };
}

blend_strategy!(
    /// Static strategy for [`overwrite`].
    Overwrite => overwrite
);
blend_strategy!(
    /// Static strategy for [`alpha_composite`].
    AlphaComposite => alpha_composite
);
blend_strategy!(
    /// Static strategy for [`fast_alpha_composite`].
    FastAlphaComposite => fast_alpha_composite
);
blend_strategy!(
    /// Static strategy for [`add`].
    Add => add
);
blend_strategy!(
    /// Static strategy for [`alpha_weighted_add`].
    AlphaWeightedAdd => alpha_weighted_add
);

/// Runtime-selectable blend strategy carried by a canvas.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// See [`overwrite`].
    #[default]
    Overwrite,
    /// See [`alpha_composite`].
    AlphaComposite,
    /// See [`fast_alpha_composite`].
    FastAlphaComposite,
    /// See [`add`].
    Add,
    /// See [`alpha_weighted_add`].
    AlphaWeightedAdd,
}

impl PixelBlend for BlendMode {
    #[inline]
    fn blend(self, fg: u32, bg: u32) -> u32 {
        match self {
            Self::Overwrite => overwrite(fg, bg),
            Self::AlphaComposite => alpha_composite(fg, bg),
            Self::FastAlphaComposite => fast_alpha_composite(fg, bg),
            Self::Add => add(fg, bg),
            Self::AlphaWeightedAdd => alpha_weighted_add(fg, bg),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/blend.rs"]
mod tests;
