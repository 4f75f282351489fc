/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The notation names accepted when no other list is configured.
pub const DEFAULT_SUPPORTED_FORMATS: [&str; 10] = [
    "rgb", "rgba", "hsl", "hsla", "oklch", "lab", "lch", "hwb", "hsv", "hsi",
];

/// Settings for [`convert_explicit_color_with`](crate::convert_explicit_color_with).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ConversionOptions {
    /// Format names a request may name as its source or target.
    ///
    /// Names are compared ignoring ASCII case. A name listed here that is not
    /// a known notation is still rejected when the request is run.
    pub supported_formats: Vec<String>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self::with_formats(DEFAULT_SUPPORTED_FORMATS.iter().copied())
    }
}

impl ConversionOptions {
    /// Options allowing exactly `formats`.
    pub fn with_formats<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConversionOptions {
            supported_formats: formats.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `format` is allowed by these options.
    #[inline]
    pub fn supports(&self, format: &str) -> bool {
        is_format_supported(format, &self.supported_formats)
    }
}

/// Whether `format` appears in `supported_formats`, ignoring ASCII case.
pub fn is_format_supported<S: AsRef<str>>(format: &str, supported_formats: &[S]) -> bool {
    supported_formats
        .iter()
        .any(|supported| supported.as_ref().eq_ignore_ascii_case(format))
}

#[cfg(test)]
mod tests {
    use super::{is_format_supported, ConversionOptions, DEFAULT_SUPPORTED_FORMATS};
    use crate::ColorFormat;

    #[test]
    fn defaults_name_every_notation() {
        let options = ConversionOptions::default();
        assert_eq!(options.supported_formats.len(), 10);
        for format in ColorFormat::ALL.iter() {
            assert!(options.supports(format.name()));
        }
        for name in DEFAULT_SUPPORTED_FORMATS.iter() {
            assert!(ColorFormat::from_name(name).is_ok());
        }
    }

    #[test]
    fn case_insensitive() {
        assert!(is_format_supported("OKLCH", &DEFAULT_SUPPORTED_FORMATS));
        assert!(is_format_supported("Rgba", &DEFAULT_SUPPORTED_FORMATS));
        assert!(!is_format_supported("xyz", &DEFAULT_SUPPORTED_FORMATS));
        assert!(!is_format_supported("", &DEFAULT_SUPPORTED_FORMATS));
    }

    #[test]
    fn restricted_list() {
        let options = ConversionOptions::with_formats(vec!["rgb", "HSL"]);
        assert!(options.supports("hsl"));
        assert!(options.supports("RGB"));
        assert!(!options.supports("rgba"));
        assert!(!options.supports("lab"));
    }
}
