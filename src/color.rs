/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ColorFormat;

/// <alpha-value>
/// <https://w3c.github.io/csswg-drafts/css-color-4/#alpha-syntax>
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlphaValue {
    /// The value as a number in the range of 0 to 1.
    pub number: f64,
}

impl AlphaValue {
    /// Construct a new AlphaValue from a number in the range of 0 to 1.
    pub fn new(number: f64) -> Self {
        Self { number }
    }

    /// Whether this value is exactly fully opaque.
    ///
    /// Opaque colors are serialized without an alpha component.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.number == 1.
    }
}

/// The three channels of a color, with their meaning given by the variant.
///
/// Hues are always in degrees. Fields documented as "0 to 1" hold values
/// that are written as percentages in CSS. Chroma and the Lab `a`/`b` axes
/// are unbounded.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "lowercase"))]
pub enum Channels {
    /// sRGB.
    Rgb {
        /// The red channel, 0 to 1.
        red: f64,
        /// The green channel, 0 to 1.
        green: f64,
        /// The blue channel, 0 to 1.
        blue: f64,
    },
    /// Hue, saturation, lightness over sRGB.
    Hsl {
        /// The hue component, in degrees.
        hue: f64,
        /// The saturation component, 0 to 1.
        saturation: f64,
        /// The lightness component, 0 to 1.
        lightness: f64,
    },
    /// Cylindrical Oklab.
    Oklch {
        /// The perceptual lightness, 0 to 1.
        lightness: f64,
        /// The chroma.
        chroma: f64,
        /// The hue angle, in degrees.
        hue: f64,
    },
    /// CIE Lab, relative to D50.
    Lab {
        /// The CIE lightness divided by 100, so 0 to 1.
        lightness: f64,
        /// The green-red axis.
        a: f64,
        /// The blue-yellow axis.
        b: f64,
    },
    /// Cylindrical CIE Lab.
    Lch {
        /// The CIE lightness divided by 100, so 0 to 1.
        lightness: f64,
        /// The chroma.
        chroma: f64,
        /// The hue angle, in degrees.
        hue: f64,
    },
    /// Hue, whiteness, blackness over sRGB.
    Hwb {
        /// The hue component, in degrees.
        hue: f64,
        /// The whiteness component, 0 to 1.
        whiteness: f64,
        /// The blackness component, 0 to 1.
        blackness: f64,
    },
    /// Hue, saturation, value over sRGB.
    Hsv {
        /// The hue component, in degrees.
        hue: f64,
        /// The saturation component, 0 to 1.
        saturation: f64,
        /// The value component, 0 to 1.
        value: f64,
    },
    /// Hue, saturation, intensity over sRGB.
    Hsi {
        /// The hue component, in degrees.
        hue: f64,
        /// The saturation component, 0 to 1.
        saturation: f64,
        /// The intensity component, 0 to 1.
        intensity: f64,
    },
}

impl Channels {
    /// Build the channels of `format` from three values in declaration order.
    pub fn from_array(format: ColorFormat, [c0, c1, c2]: [f64; 3]) -> Self {
        match format {
            ColorFormat::Rgb => Channels::Rgb {
                red: c0,
                green: c1,
                blue: c2,
            },
            ColorFormat::Hsl => Channels::Hsl {
                hue: c0,
                saturation: c1,
                lightness: c2,
            },
            ColorFormat::Oklch => Channels::Oklch {
                lightness: c0,
                chroma: c1,
                hue: c2,
            },
            ColorFormat::Lab => Channels::Lab {
                lightness: c0,
                a: c1,
                b: c2,
            },
            ColorFormat::Lch => Channels::Lch {
                lightness: c0,
                chroma: c1,
                hue: c2,
            },
            ColorFormat::Hwb => Channels::Hwb {
                hue: c0,
                whiteness: c1,
                blackness: c2,
            },
            ColorFormat::Hsv => Channels::Hsv {
                hue: c0,
                saturation: c1,
                value: c2,
            },
            ColorFormat::Hsi => Channels::Hsi {
                hue: c0,
                saturation: c1,
                intensity: c2,
            },
        }
    }

    /// The three values in declaration order.
    pub fn to_array(self) -> [f64; 3] {
        match self {
            Channels::Rgb { red, green, blue } => [red, green, blue],
            Channels::Hsl {
                hue,
                saturation,
                lightness,
            } => [hue, saturation, lightness],
            Channels::Oklch {
                lightness,
                chroma,
                hue,
            }
            | Channels::Lch {
                lightness,
                chroma,
                hue,
            } => [lightness, chroma, hue],
            Channels::Lab { lightness, a, b } => [lightness, a, b],
            Channels::Hwb {
                hue,
                whiteness,
                blackness,
            } => [hue, whiteness, blackness],
            Channels::Hsv {
                hue,
                saturation,
                value,
            } => [hue, saturation, value],
            Channels::Hsi {
                hue,
                saturation,
                intensity,
            } => [hue, saturation, intensity],
        }
    }

    /// The notation these channels belong to.
    pub fn format(&self) -> ColorFormat {
        match *self {
            Channels::Rgb { .. } => ColorFormat::Rgb,
            Channels::Hsl { .. } => ColorFormat::Hsl,
            Channels::Oklch { .. } => ColorFormat::Oklch,
            Channels::Lab { .. } => ColorFormat::Lab,
            Channels::Lch { .. } => ColorFormat::Lch,
            Channels::Hwb { .. } => ColorFormat::Hwb,
            Channels::Hsv { .. } => ColorFormat::Hsv,
            Channels::Hsi { .. } => ColorFormat::Hsi,
        }
    }

    #[inline]
    pub(crate) fn is_finite(&self) -> bool {
        self.to_array().iter().all(|value| value.is_finite())
    }
}

/// A color in one of the supported notations, with an optional alpha.
///
/// A missing alpha means fully opaque.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CanonicalColor {
    /// The channel values.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub channels: Channels,
    /// The alpha channel.
    pub alpha: Option<AlphaValue>,
}

impl CanonicalColor {
    /// Construct a color from its channels and alpha.
    pub fn new(channels: Channels, alpha: Option<AlphaValue>) -> Self {
        Self { channels, alpha }
    }

    /// Construct an sRGB color from channels in the range 0 to 1.
    pub fn from_rgb(red: f64, green: f64, blue: f64, alpha: Option<AlphaValue>) -> Self {
        Self::new(Channels::Rgb { red, green, blue }, alpha)
    }

    /// The notation whose channel semantics apply.
    #[inline]
    pub fn space(&self) -> ColorFormat {
        self.channels.format()
    }

    /// Whether serializing this color writes an alpha component.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.alpha.map_or(false, |alpha| !alpha.is_opaque())
    }
}
