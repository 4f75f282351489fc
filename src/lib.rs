/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![deny(missing_docs)]

/*!

Conversion of color values between CSS color notations.

A request names a source notation, a destination notation and the raw
channel values of the color, as they would appear between the parentheses
of a CSS color function:

```rust
use css_color_transform::convert_explicit_color;

assert_eq!(
    convert_explicit_color("rgb", "hsl", "255 0 0").unwrap(),
    "hsl(0, 100%, 50%)"
);
assert_eq!(
    convert_explicit_color("hsl", "rgba", "210 60% 50% / 0.5").unwrap(),
    "rgba(51, 128, 204, 0.50)"
);
```

# Notations

`rgb`, `hsl`, `oklch`, `lab`, `lch`, `hwb`, `hsv` and `hsi`, with `rgba`
and `hsla` accepted as aliases. Names are case-insensitive.

# Pipeline

* [`parse_color`] turns the raw values into a [`CanonicalColor`]: hues in
  degrees, percentages as numbers in the range 0 to 1, RGB channels divided
  by 255.
* [`convert_color`] goes through sRGB to reach the destination notation,
  carrying the alpha along.
* The [`ToCss`] implementation of [`CanonicalColor`] writes the result with
  the rounding of its notation.

Each stage can be used on its own. Failures are reported as [`ColorError`]
by the stages and as [`ConversionError`] by the entry points, which add the
requested notation names.

*/

pub use crate::color::{AlphaValue, CanonicalColor, Channels};
pub use crate::convert::{convert_color, from_rgb, to_rgb};
pub use crate::error::{ColorError, ConversionError, ConversionStage};
pub use crate::format::ColorFormat;
pub use crate::options::{is_format_supported, ConversionOptions, DEFAULT_SUPPORTED_FORMATS};
pub use crate::parser::{extract_numbers, normalize_value_string, parse_color, parse_color_values};
pub use crate::serializer::{format_color_output, serialize_color, ToCss};

mod color;
mod convert;
mod error;
mod format;
mod math;
mod options;
mod parser;
mod serializer;


/// Convert the color whose channel values are `values`, written in the
/// `from_format` notation, and serialize it in the `to_format` notation.
///
/// The source notation is resolved and the values are parsed before the
/// destination notation is looked at, so a request that is wrong in both
/// places reports the problem with its values.
pub fn convert_explicit_color(
    from_format: &str,
    to_format: &str,
    values: &str,
) -> Result<String, ConversionError> {
    log::debug!("converting {}({}) to {}", from_format, values, to_format);
    let wrap = |error| ConversionError::new(from_format, to_format, error);

    let from = ColorFormat::from_name(from_format).map_err(wrap)?;
    let color = parse_color(from, values).map_err(wrap)?;
    let to = ColorFormat::from_name(to_format).map_err(wrap)?;
    let converted = convert_color(&color, from, to).map_err(|e| wrap(e.error))?;
    let css = converted.to_css_string();

    log::debug!("{}({}) is {}", from_format, values, css);
    Ok(css)
}

/// Like [`convert_explicit_color`], but first rejects source and destination
/// notations that `options` does not allow.
pub fn convert_explicit_color_with(
    options: &ConversionOptions,
    from_format: &str,
    to_format: &str,
    values: &str,
) -> Result<String, ConversionError> {
    for format in [to_format, from_format].iter() {
        if !options.supports(format) {
            log::debug!("{} is not an allowed color format", format);
            return Err(ConversionError::new(
                from_format,
                to_format,
                ColorError::UnsupportedFormat(format.to_ascii_lowercase()),
            ));
        }
    }
    convert_explicit_color(from_format, to_format, values)
}
