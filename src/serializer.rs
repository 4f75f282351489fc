/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt;

use super::convert::{from_rgb, to_rgb};
use super::math::round_half_up;
use super::{AlphaValue, CanonicalColor, Channels, ColorError, ColorFormat};

/// Trait for things the can serialize themselves in CSS syntax.
pub trait ToCss {
    /// Serialize `self` in CSS syntax, writing to `dest`.
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write;

    /// Serialize `self` in CSS syntax and return a string.
    ///
    /// (This is a convenience wrapper for `to_css` and probably should not be overridden.)
    #[inline]
    fn to_css_string(&self) -> String {
        let mut s = String::new();
        self.to_css(&mut s).unwrap();
        s
    }
}

/// Serialize `color` in the notation `to`, converting it through sRGB first
/// if it is in another notation.
pub fn serialize_color(
    color: Option<&CanonicalColor>,
    to: ColorFormat,
) -> Result<String, ColorError> {
    let color = color.ok_or(ColorError::MissingColorObject)?;
    let color = if color.space() == to {
        *color
    } else {
        CanonicalColor::new(from_rgb(to_rgb(&color.channels)?, to)?, color.alpha)
    };
    Ok(color.to_css_string())
}

/// Like [`serialize_color`], with the notation given by name.
pub fn format_color_output(
    color: Option<&CanonicalColor>,
    format: &str,
) -> Result<String, ColorError> {
    let color = color.ok_or(ColorError::MissingColorObject)?;
    serialize_color(Some(color), ColorFormat::from_name(format)?)
}

/// Legacy notations separate arguments with commas and pass alpha as a
/// fourth argument; the others use spaces and `/ <alpha>`.
///
/// `rgb()` and `hsl()` switch to their `rgba()`/`hsla()` spelling when an
/// alpha is written. Integer channels use half-up rounding, fixed-precision
/// channels are written with a set number of decimals, and an opaque alpha
/// is never written.
impl ToCss for CanonicalColor {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        let alpha = self.alpha.filter(|alpha| !alpha.is_opaque());

        match self.channels {
            Channels::Rgb { red, green, blue } => {
                dest.write_str(if alpha.is_some() { "rgba(" } else { "rgb(" })?;
                write_integer(red * 255., dest)?;
                dest.write_str(", ")?;
                write_integer(green * 255., dest)?;
                dest.write_str(", ")?;
                write_integer(blue * 255., dest)?;
                write_legacy_alpha(alpha, dest)?;
            }
            Channels::Hsl {
                hue,
                saturation,
                lightness,
            } => {
                dest.write_str(if alpha.is_some() { "hsla(" } else { "hsl(" })?;
                write_legacy_hue_percentages(hue, saturation, lightness, alpha, dest)?;
            }
            Channels::Hsv {
                hue,
                saturation,
                value,
            } => {
                dest.write_str("hsv(")?;
                write_legacy_hue_percentages(hue, saturation, value, alpha, dest)?;
            }
            Channels::Hsi {
                hue,
                saturation,
                intensity,
            } => {
                dest.write_str("hsi(")?;
                write_legacy_hue_percentages(hue, saturation, intensity, alpha, dest)?;
            }
            Channels::Hwb {
                hue,
                whiteness,
                blackness,
            } => {
                dest.write_str("hwb(")?;
                write_integer(hue, dest)?;
                dest.write_char(' ')?;
                write_integer_percentage(whiteness, dest)?;
                dest.write_char(' ')?;
                write_integer_percentage(blackness, dest)?;
                write_modern_alpha(alpha, dest)?;
            }
            Channels::Oklch {
                lightness,
                chroma,
                hue,
            } => {
                dest.write_str("oklch(")?;
                write_fixed_percentage(lightness, dest)?;
                dest.write_char(' ')?;
                if chroma == 0. {
                    dest.write_char('0')?;
                } else {
                    write_fixed(chroma, 4, dest)?;
                }
                dest.write_char(' ')?;
                write_hue_or_zero(hue, dest)?;
                write_modern_alpha(alpha, dest)?;
            }
            Channels::Lab { lightness, a, b } => {
                dest.write_str("lab(")?;
                write_fixed_percentage(lightness, dest)?;
                dest.write_char(' ')?;
                write_fixed(a, 2, dest)?;
                dest.write_char(' ')?;
                write_fixed(b, 2, dest)?;
                write_modern_alpha(alpha, dest)?;
            }
            Channels::Lch {
                lightness,
                chroma,
                hue,
            } => {
                dest.write_str("lch(")?;
                write_fixed_percentage(lightness, dest)?;
                dest.write_char(' ')?;
                write_fixed(chroma, 2, dest)?;
                dest.write_char(' ')?;
                write_hue_or_zero(hue, dest)?;
                write_modern_alpha(alpha, dest)?;
            }
        }
        dest.write_char(')')
    }
}

impl fmt::Display for CanonicalColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.to_css(f)
    }
}

/// `h, s%, l%` followed by `, <alpha>` if there is one.
fn write_legacy_hue_percentages<W>(
    hue: f64,
    first: f64,
    second: f64,
    alpha: Option<AlphaValue>,
    dest: &mut W,
) -> fmt::Result
where
    W: fmt::Write,
{
    write_integer(hue, dest)?;
    dest.write_str(", ")?;
    write_integer_percentage(first, dest)?;
    dest.write_str(", ")?;
    write_integer_percentage(second, dest)?;
    write_legacy_alpha(alpha, dest)
}

#[inline]
fn write_legacy_alpha<W>(alpha: Option<AlphaValue>, dest: &mut W) -> fmt::Result
where
    W: fmt::Write,
{
    match alpha {
        Some(alpha) => {
            dest.write_str(", ")?;
            write_fixed(alpha.number, 2, dest)
        }
        None => Ok(()),
    }
}

#[inline]
fn write_modern_alpha<W>(alpha: Option<AlphaValue>, dest: &mut W) -> fmt::Result
where
    W: fmt::Write,
{
    match alpha {
        Some(alpha) => {
            dest.write_str(" / ")?;
            write_fixed(alpha.number, 2, dest)
        }
        None => Ok(()),
    }
}

fn write_integer<W>(value: f64, dest: &mut W) -> fmt::Result
where
    W: fmt::Write,
{
    let mut buffer = itoa::Buffer::new();
    dest.write_str(buffer.format(round_half_up(value) as i64))
}

/// A 0 to 1 value as a whole percentage.
fn write_integer_percentage<W>(value: f64, dest: &mut W) -> fmt::Result
where
    W: fmt::Write,
{
    write_integer(value * 100., dest)?;
    dest.write_char('%')
}

/// A 0 to 1 value as a percentage with two decimals.
fn write_fixed_percentage<W>(value: f64, dest: &mut W) -> fmt::Result
where
    W: fmt::Write,
{
    write_fixed(value * 100., 2, dest)?;
    dest.write_char('%')
}

fn write_fixed<W>(value: f64, decimals: usize, dest: &mut W) -> fmt::Result
where
    W: fmt::Write,
{
    // Ties round away from zero. Adding zero turns -0 into 0.
    let scale = 10f64.powi(decimals as i32);
    let rounded = (round_half_up(value.abs() * scale) / scale).copysign(value);
    write!(dest, "{:.*}", decimals, rounded + 0.)
}

/// A zero (or powerless) hue is written as a bare `0`.
fn write_hue_or_zero<W>(hue: f64, dest: &mut W) -> fmt::Result
where
    W: fmt::Write,
{
    if hue == 0. || hue.is_nan() {
        dest.write_char('0')
    } else {
        write_fixed(hue, 2, dest)
    }
}

#[cfg(test)]
mod tests {
    use super::{format_color_output, serialize_color, ToCss};
    use crate::{AlphaValue, CanonicalColor, Channels, ColorError, ColorFormat};

    fn css(format: ColorFormat, array: [f64; 3], alpha: Option<f64>) -> String {
        CanonicalColor::new(
            Channels::from_array(format, array),
            alpha.map(AlphaValue::new),
        )
        .to_css_string()
    }

    #[test]
    fn legacy_notations() {
        assert_eq!(css(ColorFormat::Rgb, [1., 0., 0.], None), "rgb(255, 0, 0)");
        assert_eq!(
            css(ColorFormat::Rgb, [1., 0.5, 0.], Some(0.25)),
            "rgba(255, 128, 0, 0.25)"
        );
        assert_eq!(
            css(ColorFormat::Hsl, [210.4, 0.6, 0.5], None),
            "hsl(210, 60%, 50%)"
        );
        assert_eq!(
            css(ColorFormat::Hsl, [210., 0.6, 0.5], Some(0.5)),
            "hsla(210, 60%, 50%, 0.50)"
        );
        assert_eq!(
            css(ColorFormat::Hsv, [30., 1., 1.], Some(0.9)),
            "hsv(30, 100%, 100%, 0.90)"
        );
        assert_eq!(
            css(ColorFormat::Hsi, [148., 0.88, 0.41], None),
            "hsi(148, 88%, 41%)"
        );
    }

    #[test]
    fn modern_notations() {
        assert_eq!(css(ColorFormat::Hwb, [0., 0., 0.], None), "hwb(0 0% 0%)");
        assert_eq!(
            css(ColorFormat::Hwb, [30., 0.1, 0.2], Some(0.4)),
            "hwb(30 10% 20% / 0.40)"
        );
        assert_eq!(
            css(ColorFormat::Oklch, [0.6345, 0.0812, 253.45], None),
            "oklch(63.45% 0.0812 253.45)"
        );
        assert_eq!(
            css(ColorFormat::Lab, [0.5, -20., 30.], Some(0.75)),
            "lab(50.00% -20.00 30.00 / 0.75)"
        );
        assert_eq!(
            css(ColorFormat::Lch, [0.7, 45., 120.], None),
            "lch(70.00% 45.00 120.00)"
        );
    }

    #[test]
    fn zero_chroma_and_hue() {
        assert_eq!(
            css(ColorFormat::Oklch, [0.5, 0., 0.], None),
            "oklch(50.00% 0 0)"
        );
        assert_eq!(
            css(ColorFormat::Oklch, [0.5, 0.1, f64::NAN], None),
            "oklch(50.00% 0.1000 0)"
        );
        assert_eq!(css(ColorFormat::Lch, [0.5, 0., 0.], None), "lch(50.00% 0.00 0)");
        assert_eq!(
            css(ColorFormat::Lab, [0., -0., -0.], None),
            "lab(0.00% 0.00 0.00)"
        );
    }

    #[test]
    fn opaque_alpha_is_omitted() {
        for format in ColorFormat::ALL.iter() {
            let with_opaque = css(*format, [0.5, 0.5, 0.5], Some(1.));
            let without = css(*format, [0.5, 0.5, 0.5], None);
            assert_eq!(with_opaque, without);
            assert!(!with_opaque.contains('/'));
            assert!(with_opaque.matches(',').count() <= 2);
        }
    }

    #[test]
    fn decimal_ties_round_up() {
        assert_eq!(
            css(ColorFormat::Rgb, [1., 0., 0.], Some(0.125)),
            "rgba(255, 0, 0, 0.13)"
        );
        assert_eq!(
            css(ColorFormat::Hwb, [0., 0., 0.], Some(0.625)),
            "hwb(0 0% 0% / 0.63)"
        );
        assert_eq!(
            css(ColorFormat::Lab, [0.5, -0.125, 0.375], None),
            "lab(50.00% -0.13 0.38)"
        );
        assert_eq!(
            css(ColorFormat::Oklch, [0.5, 0.03125, 10.], None),
            "oklch(50.00% 0.0313 10.00)"
        );
        assert_eq!(
            css(ColorFormat::Lab, [0.5, -0.001, 0.], None),
            "lab(50.00% 0.00 0.00)"
        );
    }

    #[test]
    fn display_matches_to_css() {
        let color = CanonicalColor::from_rgb(0., 0.5, 1., Some(AlphaValue::new(0.3)));
        assert_eq!(color.to_string(), color.to_css_string());
    }

    #[test]
    fn converts_to_requested_notation() {
        let red = CanonicalColor::from_rgb(1., 0., 0., Some(AlphaValue::new(1.)));
        assert_eq!(
            serialize_color(Some(&red), ColorFormat::Hsl),
            Ok("hsl(0, 100%, 50%)".to_owned())
        );
        assert_eq!(
            serialize_color(Some(&red), ColorFormat::Rgb),
            Ok("rgb(255, 0, 0)".to_owned())
        );
        assert_eq!(
            format_color_output(Some(&red), "HWB"),
            Ok("hwb(0 0% 0%)".to_owned())
        );
    }

    #[test]
    fn errors() {
        assert_eq!(
            serialize_color(None, ColorFormat::Rgb),
            Err(ColorError::MissingColorObject)
        );
        let red = CanonicalColor::from_rgb(1., 0., 0., None);
        assert_eq!(
            format_color_output(Some(&red), "cmyk"),
            Err(ColorError::UnsupportedFormat("cmyk".into()))
        );
        assert_eq!(
            format_color_output(None, "cmyk"),
            Err(ColorError::MissingColorObject)
        );
    }
}
