use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MkfsError>;

#[derive(Debug, Error)]
pub enum MkfsError {
    #[error("Usage: mkfs dev_name")]
    Usage,
    #[error("open {}: {}", path.display(), source)]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0}")]
    Io(#[from] io::Error),
}

impl From<bincode::Error> for MkfsError {
    fn from(err: bincode::Error) -> Self {
        match *err {
            bincode::ErrorKind::Io(err) => MkfsError::Io(err),
            other => MkfsError::Io(io::Error::new(io::ErrorKind::Other, other)),
        }
    }
}
