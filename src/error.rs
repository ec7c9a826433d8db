use thiserror::Error;

#[derive(Debug, Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingCanvas(String),
    #[error("#{0} is not a <canvas>")]
    NotACanvas(String),
}
