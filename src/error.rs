use thiserror::Error;

/// A rendered region could not be turned into a bitmap
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("cannot capture an empty region ({width}x{height})")]
    /// The region has no area to rasterize
    EmptyRegion { width: f32, height: f32 },

    #[error("capture scale must be a positive, finite number (got {0})")]
    /// The requested supersampling factor is unusable
    InvalidScale(f32),

    #[error("pixels of the region could not be read back: {0}")]
    /// The surface refused or failed to hand over its pixels
    Unreadable(String),

    #[error("scene has {runs} text runs but no font to draw them with")]
    /// Text was drawn on a surface that has no font attached
    MissingFont { runs: usize },
}

/// A captured bitmap could not be turned into a finished document
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("invalid page dimensions {width}x{height}")]
    /// The derived page has a non-positive or non-finite side
    InvalidPageSize { width: f32, height: f32 },

    #[error("page of {width}x{height}pt exceeds the {limit}pt limit of PDF user space")]
    /// The derived page is larger than PDF readers will accept
    PageTooLarge { width: f32, height: f32, limit: f32 },

    #[error("the print host rejected the request: {0}")]
    /// The host print facility failed
    Print(String),

    #[error(transparent)]
    /// Writing the finished document failed
    Io(#[from] std::io::Error),
}

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum TicketError {
    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),
}
