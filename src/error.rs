use thiserror::Error;

pub type Result<T> = std::result::Result<T, MazeError>;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}: both must be at least {min}")]
    InvalidDimension { width: u16, height: u16, min: u16 },

    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u16,
        height: u16,
    },

    #[error("maze has already been generated by this generator")]
    AlreadyGenerated,

    #[error("carved path never reaches the cells next to the end edge")]
    UnreachableEnd,

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl MazeError {
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
