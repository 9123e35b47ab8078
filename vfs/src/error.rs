use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[display(fmt = "already exists")]
    AlreadyExists,
    #[display(fmt = "no such file or directory")]
    NotFound,
    #[display(fmt = "is a directory")]
    IsADirectory,
    #[display(fmt = "not a directory")]
    NotADirectory,
    #[display(fmt = "permission denied")]
    PermissionDenied,
    /// 空路径、含NUL或无法规范化的路径
    #[display(fmt = "invalid path")]
    InvalidPath,
    /// 超过[`crate::MAX_PATH_LEN`]
    #[display(fmt = "file name too long")]
    NameTooLong,
    #[display(fmt = "too many open files")]
    TooManyOpenFiles,
    #[display(fmt = "bad file handle")]
    BadHandle,
    /// Any other failure reported by the storage layer
    #[display(fmt = "i/o error")]
    Io,
}

impl core::error::Error for Error {}
