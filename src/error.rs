use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error produced while rendering a document.
///
/// Building and combining documents never fails; the only failure source
/// is the writer a document is rendered into.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying byte sink rejected a write.
    #[error("failed to write rendered output: {0}")]
    Io(#[from] std::io::Error),
}
