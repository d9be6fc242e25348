use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no global `window` (not running in a browser main thread)")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
}
