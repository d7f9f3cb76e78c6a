use crate::gradient::GradientError;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to parse the image
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// A report or configuration document was not valid JSON for its schema
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    /// The colour stops do not describe a valid gradient
    Gradient(#[from] GradientError),

    #[error("cannot {found} while in the {current} phase, expected {expected}")]
    /// A composer operation was called out of order
    OutOfOrder {
        current: &'static str,
        found: &'static str,
        expected: &'static str,
    },
}
