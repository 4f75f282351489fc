/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use smallvec::SmallVec;

use super::{AlphaValue, CanonicalColor, Channels, ColorError, ColorFormat};

/// Position of the alpha value, whether it came from a fourth token or from
/// the slash syntax.
const ALPHA_POSITION: usize = 3;

/// Parse the arguments of a color function in the notation named `format`.
///
/// `format` may be any spelling accepted by [`ColorFormat::from_name`],
/// including the `rgba` and `hsla` aliases.
pub fn parse_color_values(format: &str, values: &str) -> Result<CanonicalColor, ColorError> {
    parse_color(ColorFormat::from_name(format)?, values)
}

/// Parse the arguments of a color function, for example `210 60% 50% / 0.5`
/// or `255, 0, 0, 0.5`.
///
/// Legacy comma-separated and modern space-separated arguments are both
/// accepted. Channels documented as 0 to 1 are read as percentages, with or
/// without the `%` sign. The alpha comes from the `/ <alpha>` suffix if there
/// is one, otherwise from a fourth argument, and defaults to 1.
pub fn parse_color(format: ColorFormat, values: &str) -> Result<CanonicalColor, ColorError> {
    let values = values.trim();

    let (channels, alpha_from_slash) = match values.split_once('/') {
        Some((channels, alpha)) => (channels.trim(), Some(parse_alpha(alpha.trim())?)),
        None => (values, None),
    };

    let normalized = normalize_value_string(channels);
    let tokens: SmallVec<[&str; 4]> = normalized.split(' ').collect();

    let mut array = [0.; 3];
    for (index, value) in array.iter_mut().enumerate() {
        *value = parse_channel(format, &tokens, index)?;
    }

    let alpha = match alpha_from_slash {
        Some(alpha) => alpha,
        None => match tokens.get(ALPHA_POSITION) {
            Some(token) if !token.is_empty() => parse_alpha(token)?,
            _ => AlphaValue::new(1.),
        },
    };

    Ok(CanonicalColor::new(
        Channels::from_array(format, array),
        Some(alpha),
    ))
}

#[inline]
fn parse_channel(format: ColorFormat, tokens: &[&str], index: usize) -> Result<f64, ColorError> {
    let token = tokens.get(index).copied().unwrap_or("");
    let malformed = || ColorError::MalformedValue {
        token: token.to_owned(),
        position: index,
    };

    if format == ColorFormat::Rgb {
        Ok(parse_number(token).ok_or_else(malformed)? / 255.)
    } else if format.is_unit_channel(index) {
        let number = token.strip_suffix('%').unwrap_or(token);
        Ok(parse_number(number).ok_or_else(malformed)? / 100.)
    } else {
        parse_number(token).ok_or_else(malformed)
    }
}

/// <alpha-value>, as a number or a percentage, clamped to 0 to 1.
fn parse_alpha(token: &str) -> Result<AlphaValue, ColorError> {
    let (number, scale) = match token.strip_suffix('%') {
        Some(number) => (number, 100.),
        None => (token, 1.),
    };
    let number = parse_number(number).ok_or_else(|| ColorError::MalformedValue {
        token: token.to_owned(),
        position: ALPHA_POSITION,
    })?;
    Ok(AlphaValue::new((number / scale).clamp(0., 1.)))
}

/// Parse the longest prefix of `text` that looks like a number:
/// an optional sign, digits with an optional fraction, and an optional exponent.
///
/// Anything after the number (such as a `deg` unit) is ignored.
/// Returns `None` if there is no such prefix or the value is not finite.
fn parse_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let digits_from = |mut position: usize| {
        while bytes.get(position).map_or(false, u8::is_ascii_digit) {
            position += 1;
        }
        position
    };

    let mut end = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let integer_end = digits_from(end);
    let mut has_digits = integer_end > end;
    end = integer_end;

    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        if has_digits || fraction_end > end + 1 {
            has_digits = true;
            end = fraction_end;
        }
    }
    if !has_digits {
        return None;
    }

    if let Some(b'e') | Some(b'E') = bytes.get(end) {
        let mut exponent = end + 1;
        if let Some(b'+') | Some(b'-') = bytes.get(exponent) {
            exponent += 1;
        }
        let exponent_end = digits_from(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Trim `value`, collapse runs of whitespace into one space, and turn each
/// comma (with the whitespace after it) into a space.
///
/// This brings legacy `a, b, c` and modern `a b c` arguments to the same shape.
pub fn normalize_value_string(value: &str) -> String {
    let mut normalized = String::with_capacity(value.len());
    let mut chars = value.trim().chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() || c == ',' {
            while chars.peek().map_or(false, |c| c.is_whitespace()) {
                chars.next();
            }
            normalized.push(' ');
        } else {
            normalized.push(c);
        }
    }
    normalized
}

/// Every decimal number in `value`, in order, with an optional leading minus.
pub fn extract_numbers(value: &str) -> Vec<f64> {
    let bytes = value.as_bytes();
    let mut numbers = Vec::new();
    let mut position = 0;
    while position < bytes.len() {
        if !bytes[position].is_ascii_digit() {
            position += 1;
            continue;
        }

        let negative = position > 0 && bytes[position - 1] == b'-';
        let start = if negative { position - 1 } else { position };
        while position < bytes.len() && bytes[position].is_ascii_digit() {
            position += 1;
        }
        if bytes.get(position) == Some(&b'.')
            && bytes.get(position + 1).map_or(false, u8::is_ascii_digit)
        {
            position += 1;
            while position < bytes.len() && bytes[position].is_ascii_digit() {
                position += 1;
            }
        }
        if let Ok(number) = value[start..position].parse() {
            numbers.push(number);
        }
    }
    numbers
}
