/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use super::math;
use super::{CanonicalColor, Channels, ColorError, ColorFormat, ConversionError, ConversionStage};

/// Convert `color`, whose channels are in the `from` notation, to the `to` notation.
///
/// Every conversion goes through sRGB: the source channels are first turned
/// into RGB, then RGB is turned into the destination channels. An alpha on
/// the input is copied to the result untouched.
///
/// Fails if `from` does not describe `color`, or if either half of the
/// conversion produces a value that is not finite.
pub fn convert_color(
    color: &CanonicalColor,
    from: ColorFormat,
    to: ColorFormat,
) -> Result<CanonicalColor, ConversionError> {
    let wrap = |error| ConversionError::new(from.name(), to.name(), error);

    if color.space() != from {
        return Err(wrap(ColorError::ConversionFailure {
            format: from,
            stage: ConversionStage::ToRgb,
        }));
    }

    let rgb = to_rgb(&color.channels).map_err(wrap)?;
    log::trace!("{} pivot for {:?}: {:?}", from, color.channels, rgb);
    let channels = from_rgb(rgb, to).map_err(wrap)?;

    Ok(CanonicalColor::new(channels, color.alpha))
}

/// The sRGB channels (0 to 1, unclamped) of `channels`.
pub fn to_rgb(channels: &Channels) -> Result<[f64; 3], ColorError> {
    let format = channels.format();
    if !channels.is_finite() {
        return Err(ColorError::ConversionFailure {
            format,
            stage: ConversionStage::ToRgb,
        });
    }

    let rgb = match *channels {
        Channels::Rgb { red, green, blue } => [red, green, blue],
        Channels::Hsl {
            hue,
            saturation,
            lightness,
        } => math::hsl_to_rgb(hue, saturation, lightness),
        Channels::Oklch {
            lightness,
            chroma,
            hue,
        } => {
            let [l, a, b] = math::lch_to_lab(lightness, chroma, hue);
            math::oklab_to_rgb(l, a, b)
        }
        Channels::Lab { lightness, a, b } => math::lab_to_rgb(lightness * 100., a, b),
        Channels::Lch {
            lightness,
            chroma,
            hue,
        } => {
            let [l, a, b] = math::lch_to_lab(lightness * 100., chroma, hue);
            math::lab_to_rgb(l, a, b)
        }
        Channels::Hwb {
            hue,
            whiteness,
            blackness,
        } => math::hwb_to_rgb(hue, whiteness, blackness),
        Channels::Hsv {
            hue,
            saturation,
            value,
        } => math::hsv_to_rgb(hue, saturation, value),
        Channels::Hsi {
            hue,
            saturation,
            intensity,
        } => math::hsi_to_rgb(hue, saturation, intensity),
    };

    if rgb.iter().all(|value| value.is_finite()) {
        Ok(rgb)
    } else {
        Err(ColorError::ConversionFailure {
            format,
            stage: ConversionStage::ToRgb,
        })
    }
}

/// The channels of `to` for the sRGB color `rgb`.
///
/// Hues come out in `[0, 360)`, and are 0 when the color has no hue.
pub fn from_rgb(rgb: [f64; 3], to: ColorFormat) -> Result<Channels, ColorError> {
    let [red, green, blue] = rgb;

    let array = match to {
        ColorFormat::Rgb => rgb,
        ColorFormat::Hsl => math::rgb_to_hsl(red, green, blue),
        ColorFormat::Oklch => {
            let [l, a, b] = math::rgb_to_oklab(red, green, blue);
            math::lab_to_lch(l, a, b)
        }
        ColorFormat::Lab => {
            let [l, a, b] = math::rgb_to_lab(red, green, blue);
            [l / 100., a, b]
        }
        ColorFormat::Lch => {
            let [l, a, b] = math::rgb_to_lab(red, green, blue);
            let [l, c, h] = math::lab_to_lch(l, a, b);
            [l / 100., c, h]
        }
        ColorFormat::Hwb => math::rgb_to_hwb(red, green, blue),
        ColorFormat::Hsv => math::rgb_to_hsv(red, green, blue),
        ColorFormat::Hsi => math::rgb_to_hsi(red, green, blue),
    };

    let channels = Channels::from_array(to, array);
    if channels.is_finite() {
        Ok(channels)
    } else {
        Err(ColorError::ConversionFailure {
            format: to,
            stage: ConversionStage::FromRgb,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{convert_color, from_rgb, to_rgb};
    use crate::{AlphaValue, CanonicalColor, Channels, ColorError, ColorFormat, ConversionStage};

    fn close(a: [f64; 3], b: [f64; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(a, b)| (a - b).abs() < 1e-4)
    }

    #[test]
    fn rgb_passes_through() {
        let rgb = [0.25, 0.5, 0.75];
        assert_eq!(
            to_rgb(&Channels::from_array(ColorFormat::Rgb, rgb)),
            Ok(rgb)
        );
        assert_eq!(
            from_rgb(rgb, ColorFormat::Rgb),
            Ok(Channels::from_array(ColorFormat::Rgb, rgb))
        );
    }

    #[test]
    fn same_space_round_trips() {
        let samples = [
            (ColorFormat::Hsl, [210., 0.6, 0.5]),
            (ColorFormat::Oklch, [0.6345, 0.0812, 253.45]),
            (ColorFormat::Lab, [0.5429, 40., -30.]),
            (ColorFormat::Lch, [0.7, 45., 120.]),
            (ColorFormat::Hwb, [200., 0.1, 0.2]),
            (ColorFormat::Hsv, [300., 0.4, 0.9]),
            (ColorFormat::Hsi, [45., 0.3, 0.5]),
        ];
        for &(format, array) in samples.iter() {
            let color = CanonicalColor::new(Channels::from_array(format, array), None);
            let converted = convert_color(&color, format, format).unwrap();
            assert!(
                close(converted.channels.to_array(), array),
                "{:?} became {:?}",
                color,
                converted
            );
        }
    }

    #[test]
    fn alpha_is_carried_through() {
        let color = CanonicalColor::new(
            Channels::Hsl {
                hue: 30.,
                saturation: 1.,
                lightness: 0.5,
            },
            Some(AlphaValue::new(0.4)),
        );
        for to in ColorFormat::ALL.iter() {
            let converted = convert_color(&color, ColorFormat::Hsl, *to).unwrap();
            assert_eq!(converted.alpha, Some(AlphaValue::new(0.4)));
            assert_eq!(converted.space(), *to);
        }

        let opaque = CanonicalColor::from_rgb(1., 0., 0., None);
        let converted = convert_color(&opaque, ColorFormat::Rgb, ColorFormat::Lab).unwrap();
        assert_eq!(converted.alpha, None);
    }

    #[test]
    fn achromatic_hue_is_zero() {
        let channels = from_rgb([0.5, 0.5, 0.5], ColorFormat::Hsl).unwrap();
        assert_eq!(channels.to_array()[0], 0.);
        let channels = from_rgb([0., 0., 0.], ColorFormat::Lch).unwrap();
        assert_eq!(channels.to_array(), [0., 0., 0.]);
    }

    #[test]
    fn mismatched_source_tag() {
        let color = CanonicalColor::from_rgb(1., 0., 0., None);
        let error = convert_color(&color, ColorFormat::Hsl, ColorFormat::Lab).unwrap_err();
        assert_eq!(error.from, "hsl");
        assert_eq!(error.to, "lab");
        assert_eq!(
            error.error,
            ColorError::ConversionFailure {
                format: ColorFormat::Hsl,
                stage: ConversionStage::ToRgb
            }
        );
    }

    #[test]
    fn non_finite_results_fail() {
        let color = Channels::Hsv {
            hue: f64::INFINITY,
            saturation: 0.5,
            value: 0.5,
        };
        assert_eq!(
            to_rgb(&color),
            Err(ColorError::ConversionFailure {
                format: ColorFormat::Hsv,
                stage: ConversionStage::ToRgb
            })
        );
        assert_eq!(
            from_rgb([f64::NAN, 0., 0.], ColorFormat::Hsi),
            Err(ColorError::ConversionFailure {
                format: ColorFormat::Hsi,
                stage: ConversionStage::FromRgb
            })
        );
    }
}
