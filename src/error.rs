use thiserror::Error;

/// Errors surfaced by the set's diagnostic surface.
///
/// Key absence is never an error: lookups and removals report it through
/// their return values (`None` / `false`).
#[derive(Error, Debug)]
pub enum SetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
