use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum GridError {
    #[error("invalid vertical alignment `{0}` (expected `top`, `bottom` or `center`)")]
    /// A vertical alignment keyword was not recognised
    InvalidVerticalAlign(String),

    #[error("invalid horizontal alignment `{0}` (expected `left`, `right` or `center`)")]
    /// A horizontal alignment keyword was not recognised
    InvalidHorizontalAlign(String),

    #[error("invalid image anchor `{0}`")]
    /// An image anchor keyword was not recognised
    InvalidAnchor(String),

    #[error("invalid image fitting `{0}` (expected `fit`, `fill` or `crop`)")]
    /// An image fitting keyword was not recognised
    InvalidFitting(String),

    #[error("slice step cannot be zero")]
    /// A [`Slice`](crate::Slice) was resolved with a step of 0
    ZeroSliceStep,

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to parse the image
    Image(#[from] image::ImageError),
}
