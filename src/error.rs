use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(transparent)]
    /// An I/O error occurred while reading a font resource
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    /// The requested font family could not be loaded and no default face is
    /// registered to stand in for it
    #[error("no usable font for family {family:?} and no default face is registered")]
    MissingFont { family: String },
}
