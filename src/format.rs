/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt;
use std::str::FromStr;

use phf::phf_map;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ColorError;

/// One of the color notations that can be converted between.
///
/// The legacy `rgba()` and `hsla()` function names are accepted as aliases
/// of `Rgb` and `Hsl` but are not distinct notations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorFormat {
    /// <https://w3c.github.io/csswg-drafts/css-color-4/#rgb-functions>
    Rgb,
    /// <https://w3c.github.io/csswg-drafts/css-color-4/#the-hsl-notation>
    Hsl,
    /// <https://w3c.github.io/csswg-drafts/css-color-4/#specifying-oklab-oklch>
    Oklch,
    /// <https://w3c.github.io/csswg-drafts/css-color-4/#specifying-lab-lch>
    Lab,
    /// <https://w3c.github.io/csswg-drafts/css-color-4/#specifying-lab-lch>
    Lch,
    /// <https://w3c.github.io/csswg-drafts/css-color-4/#the-hwb-notation>
    Hwb,
    /// Hue, saturation, value. Not a CSS function, but accepted in the same syntax as `hsl()`.
    Hsv,
    /// Hue, saturation, intensity. Same syntax as `hsv()`.
    Hsi,
}

static FORMAT_NAMES: phf::Map<&'static str, ColorFormat> = phf_map! {
    "rgb" => ColorFormat::Rgb,
    "rgba" => ColorFormat::Rgb,
    "hsl" => ColorFormat::Hsl,
    "hsla" => ColorFormat::Hsl,
    "oklch" => ColorFormat::Oklch,
    "lab" => ColorFormat::Lab,
    "lch" => ColorFormat::Lch,
    "hwb" => ColorFormat::Hwb,
    "hsv" => ColorFormat::Hsv,
    "hsi" => ColorFormat::Hsi,
};

/// Length of the longest key of `FORMAT_NAMES`.
const MAX_NAME_LENGTH: usize = 5;

/// `input` in ASCII lowercase, copied into `buffer` only if it has uppercase
/// letters. `None` if it does not fit, since no known name is that long.
fn to_lowercase<'a>(buffer: &'a mut [u8], input: &'a str) -> Option<&'a str> {
    let buffer = buffer.get_mut(..input.len())?;
    match input.bytes().position(|byte| byte.is_ascii_uppercase()) {
        Some(first_uppercase) => {
            buffer.copy_from_slice(input.as_bytes());
            buffer[first_uppercase..].make_ascii_lowercase();
            std::str::from_utf8(buffer).ok()
        }
        // Input is already lower-case
        None => Some(input),
    }
}

impl ColorFormat {
    /// Every notation, in declaration order.
    pub const ALL: [ColorFormat; 8] = [
        ColorFormat::Rgb,
        ColorFormat::Hsl,
        ColorFormat::Oklch,
        ColorFormat::Lab,
        ColorFormat::Lch,
        ColorFormat::Hwb,
        ColorFormat::Hsv,
        ColorFormat::Hsi,
    ];

    /// Look up a notation by its function name.
    ///
    /// Matching is case-insensitive in the ASCII range, and `rgba`/`hsla` resolve
    /// to `Rgb`/`Hsl`. An unknown name is reported lowercased.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        let mut buffer = [0; MAX_NAME_LENGTH];
        to_lowercase(&mut buffer, name)
            .and_then(|lowercase| FORMAT_NAMES.get(lowercase))
            .copied()
            .ok_or_else(|| ColorError::UnsupportedFormat(name.to_ascii_lowercase()))
    }

    /// The canonical lowercase function name, without the `a` suffix.
    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Oklch => "oklch",
            ColorFormat::Lab => "lab",
            ColorFormat::Lch => "lch",
            ColorFormat::Hwb => "hwb",
            ColorFormat::Hsv => "hsv",
            ColorFormat::Hsi => "hsi",
        }
    }

    /// Whether the channel at `index` (0, 1 or 2) is written as a percentage
    /// and stored in the unit interval.
    #[inline]
    pub(crate) fn is_unit_channel(self, index: usize) -> bool {
        match self {
            ColorFormat::Rgb => false,
            ColorFormat::Oklch | ColorFormat::Lab | ColorFormat::Lch => index == 0,
            ColorFormat::Hsl | ColorFormat::Hwb | ColorFormat::Hsv | ColorFormat::Hsi => {
                index != 0
            }
        }
    }
}

impl FromStr for ColorFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{to_lowercase, ColorFormat, FORMAT_NAMES, MAX_NAME_LENGTH};
    use crate::ColorError;

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(ColorFormat::from_name("OKLCH"), Ok(ColorFormat::Oklch));
        assert_eq!(ColorFormat::from_name("Hwb"), Ok(ColorFormat::Hwb));
        assert_eq!("lab".parse::<ColorFormat>(), Ok(ColorFormat::Lab));
    }

    #[test]
    fn legacy_aliases() {
        assert_eq!(ColorFormat::from_name("rgba"), Ok(ColorFormat::Rgb));
        assert_eq!(ColorFormat::from_name("HSLA"), Ok(ColorFormat::Hsl));
        assert_eq!(ColorFormat::Rgb.name(), "rgb");
    }

    #[test]
    fn unknown_name_is_lowercased() {
        assert_eq!(
            ColorFormat::from_name("XYZ"),
            Err(ColorError::UnsupportedFormat("xyz".into()))
        );
        assert!(ColorFormat::from_name("").is_err());
        assert!(ColorFormat::from_name("oklab").is_err());
        assert!(ColorFormat::from_name("OKLCHX").is_err());
        assert!(ColorFormat::from_name("rgbé").is_err());
    }

    #[test]
    fn lowercase_without_allocating() {
        let mut buffer = [0; MAX_NAME_LENGTH];
        assert_eq!(to_lowercase(&mut buffer, "hsl"), Some("hsl"));
        let mut buffer = [0; MAX_NAME_LENGTH];
        assert_eq!(to_lowercase(&mut buffer, "OkLch"), Some("oklch"));
        let mut buffer = [0; MAX_NAME_LENGTH];
        assert_eq!(to_lowercase(&mut buffer, "Colors"), None);
        assert!(FORMAT_NAMES.keys().all(|name| name.len() <= MAX_NAME_LENGTH));
    }

    #[test]
    fn names_round_trip() {
        for format in ColorFormat::ALL.iter() {
            assert_eq!(ColorFormat::from_name(format.name()), Ok(*format));
            assert_eq!(format.to_string(), format.name());
        }
    }
}
