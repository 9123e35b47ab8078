use crate::{Error, Handle};

/// The file-system calls a user program may make.
///
/// 每次调用都是阻塞的，返回时结果已确定。
pub trait FileSystem {
    /// Creates an empty regular file at `path`, truncating it if it already
    /// exists, and opens it.
    fn create(&self, path: &str) -> Result<Handle, Error>;

    /// Releases a handle obtained from [`FileSystem::create`].
    fn close(&self, handle: Handle) -> Result<(), Error>;

    /// Removes the directory entry at `path` and frees its storage.
    ///
    /// Handles still referring to the file are closed first. Fails with
    /// [`Error::NotFound`] if there is nothing to remove.
    fn remove(&self, path: &str) -> Result<(), Error>;

    fn exists(&self, path: &str) -> bool;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn create(&self, path: &str) -> Result<Handle, Error> {
        (**self).create(path)
    }

    fn close(&self, handle: Handle) -> Result<(), Error> {
        (**self).close(handle)
    }

    fn remove(&self, path: &str) -> Result<(), Error> {
        (**self).remove(path)
    }

    fn exists(&self, path: &str) -> bool {
        (**self).exists(path)
    }
}
