use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum LoaderError {
    None,
    Configuration(String),
    Head,
    Request,
    Response,
    ResponseChunk,
    OpenOrCreateFile,
    FileOpen,
    FileWrite,
    FileFlush,
    FileRename(String),
    Decode(String),
    DownloadInFlight,
    DownloadTask,
}

pub type Result<T> = core::result::Result<T, LoaderError>;

impl Display for LoaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::None => { write!(f, "None") }
            LoaderError::Configuration(message) => {
                write!(f, "Configuration {}", message)
            }
            LoaderError::Head => { write!(f, "Head") }
            LoaderError::Request => { write!(f, "Request") }
            LoaderError::Response => { write!(f, "Response") }
            LoaderError::ResponseChunk => { write!(f, "ResponseChunk") }
            LoaderError::OpenOrCreateFile => { write!(f, "OpenOrCreateFile") }
            LoaderError::FileOpen => { write!(f, "FileOpen") }
            LoaderError::FileWrite => { write!(f, "FileWrite") }
            LoaderError::FileFlush => { write!(f, "FileFlush") }
            LoaderError::FileRename(message) => {
                write!(f, "FileRename {}", message)
            }
            LoaderError::Decode(message) => {
                write!(f, "Decode {}", message)
            }
            LoaderError::DownloadInFlight => { write!(f, "DownloadInFlight") }
            LoaderError::DownloadTask => { write!(f, "DownloadTask") }
        }
    }
}
