/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Color-space transforms, all over `f64` triples.
//!
//! Every function takes and returns channels in the crate's canonical units:
//! sRGB in 0 to 1, hues in degrees, saturation-like values in 0 to 1, and
//! CIE Lab lightness in 0 to 100 (callers scale it to 0 to 1).

/// Wrap a hue into `[0, 360)`.
#[inline]
pub(crate) fn normalize_hue(hue: f64) -> f64 {
    let hue = hue.rem_euclid(360.);
    // A tiny negative hue rounds up to exactly 360.
    if hue >= 360. {
        0.
    } else {
        hue
    }
}

/// The 60 degree sector, 0 to 5, of a hue in `[0, 360)`.
#[inline]
fn sextant(hue: f64) -> u8 {
    ((hue / 60.).floor() as u8).min(5)
}

/// The hue of an sRGB color, or 0 when it is achromatic.
fn rgb_hue(red: f64, green: f64, blue: f64) -> f64 {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let delta = max - min;
    if delta == 0. {
        return 0.;
    }

    let sextant = if max == red {
        (green - blue) / delta + if green < blue { 6. } else { 0. }
    } else if max == green {
        (blue - red) / delta + 2.
    } else {
        (red - green) / delta + 4.
    };
    sextant * 60.
}

/// <https://w3c.github.io/csswg-drafts/css-color-4/#hsl-to-rgb>
#[inline]
pub(crate) fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [f64; 3] {
    let hue = normalize_hue(hue);

    let f = |n: f64| -> f64 {
        let k = (n + hue / 30.) % 12.;
        let a = saturation * lightness.min(1. - lightness);

        lightness - a * (-1f64).max((k - 3.).min(9. - k).min(1.))
    };

    [f(0.), f(8.), f(4.)]
}

/// <https://w3c.github.io/csswg-drafts/css-color-4/#rgb-to-hsl>
pub(crate) fn rgb_to_hsl(red: f64, green: f64, blue: f64) -> [f64; 3] {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let saturation = if max == min {
        0.
    } else {
        (max - min) / (1. - (max + min - 1.).abs())
    };

    [rgb_hue(red, green, blue), saturation, 0.5 * (max + min)]
}

pub(crate) fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> [f64; 3] {
    let hue = normalize_hue(hue);
    let f = ((hue / 60.) % 2. - 1.).abs();
    let p = value * (1. - saturation);
    let q = value * (1. - saturation * f);

    match sextant(hue) {
        0 => [value, q, p],
        1 => [q, value, p],
        2 => [p, value, q],
        3 => [p, q, value],
        4 => [q, p, value],
        _ => [value, p, q],
    }
}

pub(crate) fn rgb_to_hsv(red: f64, green: f64, blue: f64) -> [f64; 3] {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let saturation = if max == 0. { 0. } else { 1. - min / max };

    [rgb_hue(red, green, blue), saturation, max]
}

/// <https://w3c.github.io/csswg-drafts/css-color-4/#hwb-to-rgb>
#[inline]
pub(crate) fn hwb_to_rgb(hue: f64, whiteness: f64, blackness: f64) -> [f64; 3] {
    if whiteness + blackness >= 1. {
        let gray = whiteness / (whiteness + blackness);
        return [gray, gray, gray];
    }

    hsv_to_rgb(hue, 1. - whiteness / (1. - blackness), 1. - blackness)
}

/// <https://w3c.github.io/csswg-drafts/css-color-4/#rgb-to-hwb>
pub(crate) fn rgb_to_hwb(red: f64, green: f64, blue: f64) -> [f64; 3] {
    let [hue, saturation, value] = rgb_to_hsv(red, green, blue);
    [hue, (1. - saturation) * value, 1. - value]
}

pub(crate) fn hsi_to_rgb(hue: f64, saturation: f64, intensity: f64) -> [f64; 3] {
    let hue = normalize_hue(hue);
    let f = ((hue / 60.) % 2. - 1.).abs();
    let high = intensity * (1. + saturation * (3. / (2. - f) - 1.));
    let mid = intensity * (1. + saturation * (3. * (1. - f) / (2. - f) - 1.));
    let low = intensity * (1. - saturation);

    match sextant(hue) {
        0 => [high, mid, low],
        1 => [mid, high, low],
        2 => [low, high, mid],
        3 => [low, mid, high],
        4 => [mid, low, high],
        _ => [high, low, mid],
    }
}

pub(crate) fn rgb_to_hsi(red: f64, green: f64, blue: f64) -> [f64; 3] {
    let sum = red + green + blue;
    let min = red.min(green).min(blue);
    let saturation = if sum == 0. { 0. } else { 1. - 3. * min / sum };

    [rgb_hue(red, green, blue), saturation, sum / 3.]
}

// sRGB transfer function, extended to negative values by symmetry.

#[inline]
fn srgb_to_linear(value: f64) -> f64 {
    let magnitude = value.abs();
    if magnitude <= 0.04045 {
        value / 12.92
    } else {
        ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
    }
}

#[inline]
fn linear_to_srgb(value: f64) -> f64 {
    let magnitude = value.abs();
    if magnitude > 0.0031308 {
        (1.055 * magnitude.powf(1. / 2.4) - 0.055).copysign(value)
    } else {
        value * 12.92
    }
}

/// <https://bottosson.github.io/posts/oklab/>
pub(crate) fn rgb_to_oklab(red: f64, green: f64, blue: f64) -> [f64; 3] {
    let (r, g, b) = (
        srgb_to_linear(red),
        srgb_to_linear(green),
        srgb_to_linear(blue),
    );

    let l = (0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b).cbrt();
    let m = (0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b).cbrt();
    let s = (0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b).cbrt();

    [
        0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s,
        1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s,
        0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s,
    ]
}

/// <https://bottosson.github.io/posts/oklab/>
pub(crate) fn oklab_to_rgb(lightness: f64, a: f64, b: f64) -> [f64; 3] {
    let l = (lightness + 0.3963377774 * a + 0.2158037573 * b).powi(3);
    let m = (lightness - 0.1055613458 * a - 0.0638541728 * b).powi(3);
    let s = (lightness - 0.0894841775 * a - 1.2914855480 * b).powi(3);

    [
        linear_to_srgb(4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s),
        linear_to_srgb(-1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s),
        linear_to_srgb(-0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s),
    ]
}

// The D50 reference white, as used by CSS `lab()`.
const D50: [f64; 3] = [0.3457 / 0.3585, 1.00000, (1.0 - 0.3457 - 0.3585) / 0.3585];
// 29^3/3^3
const K: f64 = 24389.0 / 27.0;
// 6^3/29^3
const E: f64 = 216.0 / 24389.0;

/// sRGB to CIE Lab, with linear sRGB adapted to D50 by Bradford.
/// Lightness is returned in 0 to 100.
pub(crate) fn rgb_to_lab(red: f64, green: f64, blue: f64) -> [f64; 3] {
    let (r, g, b) = (
        srgb_to_linear(red),
        srgb_to_linear(green),
        srgb_to_linear(blue),
    );

    let x = 0.436065742824811 * r + 0.3851514688337912 * g + 0.14307845442264197 * b;
    let y = 0.22249319175623702 * r + 0.7168870538238823 * g + 0.06061979053616537 * b;
    let z = 0.013923904500943465 * r + 0.09708128566574634 * g + 0.7140993584005155 * b;

    let f = |v: f64| -> f64 {
        if v > E {
            v.cbrt()
        } else {
            (K * v + 16.) / 116.
        }
    };
    let f0 = f(x / D50[0]);
    let f1 = f(y / D50[1]);
    let f2 = f(z / D50[2]);

    [116. * f1 - 16., 500. * (f0 - f1), 200. * (f1 - f2)]
}

/// CIE Lab (lightness in 0 to 100) to sRGB.
pub(crate) fn lab_to_rgb(lightness: f64, a: f64, b: f64) -> [f64; 3] {
    // https://github.com/w3c/csswg-drafts/blob/fba005e2ce9bcac55b49e4aa19b87208b3a0631e/css-color-4/conversions.js#L352
    let f1 = (lightness + 16.) / 116.;
    let f0 = a / 500. + f1;
    let f2 = f1 - b / 200.;

    let x = if f0.powi(3) > E {
        f0.powi(3)
    } else {
        (116. * f0 - 16.) / K
    };
    let y = if lightness > K * E {
        f1.powi(3)
    } else {
        lightness / K
    };
    let z = if f2.powi(3) > E {
        f2.powi(3)
    } else {
        (116. * f2 - 16.) / K
    };

    let (x, y, z) = (x * D50[0], y * D50[1], z * D50[2]);

    [
        linear_to_srgb(x * 3.1341359569958707 - y * 1.6173863321612538 - 0.4906619460083532 * z),
        linear_to_srgb(x * -0.978795502912089 + y * 1.916254567259524 + 0.03344273116131949 * z),
        linear_to_srgb(x * 0.07195537988411677 - y * 0.2289768264158322 + 1.405386058324125 * z),
    ]
}

/// Rectangular `(l, a, b)` to cylindrical `(l, c, h)`.
///
/// A zero chroma has a powerless hue, reported as 0.
pub(crate) fn lab_to_lch(lightness: f64, a: f64, b: f64) -> [f64; 3] {
    let chroma = a.hypot(b);
    let hue = if chroma == 0. {
        0.
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    [lightness, chroma, hue]
}

/// Cylindrical `(l, c, h)` to rectangular `(l, a, b)`.
pub(crate) fn lch_to_lab(lightness: f64, chroma: f64, hue: f64) -> [f64; 3] {
    let hue = hue.to_radians();
    [lightness, chroma * hue.cos(), chroma * hue.sin()]
}

/// Round half up, as CSS serializers conventionally do for integer channels.
#[inline]
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
