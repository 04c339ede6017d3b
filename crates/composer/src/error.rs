#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("composer is closed")]
    Closed,

    #[error("composer is busy")]
    Busy,
}

pub type Result<T> = std::result::Result<T, Error>;
