/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::error::Error;
use std::fmt;

use super::ColorFormat;

/// Which half of a pivot conversion failed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConversionStage {
    /// From the source notation into RGB.
    ToRgb,
    /// From RGB into the destination notation.
    FromRgb,
}

impl fmt::Display for ConversionStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ConversionStage::ToRgb => "to-rgb",
            ConversionStage::FromRgb => "from-rgb",
        })
    }
}

/// The ways a single stage (parse, convert, or format) can fail.
#[derive(Clone, PartialEq, Debug)]
pub enum ColorError {
    /// The format tag is not one of the supported notations.
    UnsupportedFormat(String),
    /// A channel token is missing or does not start with a number.
    MalformedValue {
        /// The offending token, empty if it was missing.
        token: String,
        /// Index of the token; the alpha slot is 3.
        position: usize,
    },
    /// A color-space transform produced no usable (finite) value.
    ConversionFailure {
        /// The notation being converted from or to.
        format: ColorFormat,
        /// The half of the pivot conversion that failed.
        stage: ConversionStage,
    },
    /// There was no color to format.
    MissingColorObject,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorError::UnsupportedFormat(ref tag) => write!(f, "unsupported color format: {}", tag),
            ColorError::MalformedValue { ref token, position } if token.is_empty() => {
                write!(f, "missing color channel at position {}", position)
            }
            ColorError::MalformedValue { ref token, position } => {
                write!(f, "malformed value {:?} at position {}", token, position)
            }
            ColorError::ConversionFailure { format, stage } => {
                write!(f, "{} conversion failed for {}", stage, format)
            }
            ColorError::MissingColorObject => f.write_str("missing color object"),
        }
    }
}

impl Error for ColorError {}

/// A failed conversion request, with the source and destination tags as given
/// by the caller (lowercased).
#[derive(Clone, PartialEq, Debug)]
pub struct ConversionError {
    /// The source format tag.
    pub from: String,
    /// The destination format tag.
    pub to: String,
    /// What went wrong.
    pub error: ColorError,
}

impl ConversionError {
    pub(crate) fn new(from: &str, to: &str, error: ColorError) -> Self {
        ConversionError {
            from: from.to_ascii_lowercase(),
            to: to.to_ascii_lowercase(),
            error,
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "cannot convert from {} to {}: {}",
            self.from, self.to, self.error
        )
    }
}

impl Error for ConversionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
