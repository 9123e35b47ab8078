use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use vfs::{Error, FileSystem, Handle, MAX_OPEN_FILES, SlotVec};

/// [`FileSystem`] backed by the host's `std::fs`, anchored at a root directory.
#[derive(Debug)]
pub struct HostFs {
    root: PathBuf,
    /// 打开的文件及其宿主路径
    handles: Mutex<SlotVec<(PathBuf, File)>>,
}

impl HostFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            handles: Mutex::default(),
        }
    }

    /// Anchors relative paths at the current working directory.
    pub fn new_at_cwd() -> Self {
        let root = std::env::current_dir().unwrap_or_else(|err| {
            log::warn!("failed to read cwd, resolving against `.`: {err}");
            PathBuf::new()
        });
        Self::new(root)
    }

    /// 先按词法规范化，使同一文件的不同写法映射到同一宿主路径；
    /// 相对路径不可越出`root`
    fn resolve(&self, path: &str) -> Result<PathBuf, Error> {
        let canonical = vfs::path::resolve(path, "/")?;
        let host_path = if path.starts_with('/') {
            PathBuf::from(canonical)
        } else {
            self.root.join(canonical.trim_start_matches('/'))
        };
        log::debug!("path={path:?} host={}", host_path.display());
        Ok(host_path)
    }

    fn handles(&self) -> MutexGuard<'_, SlotVec<(PathBuf, File)>> {
        // 句柄表里只有文件，毒化后仍可安全使用
        self.handles.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn host_error(err: io::Error) -> Error {
    match err.kind() {
        io::ErrorKind::NotFound => Error::NotFound,
        io::ErrorKind::AlreadyExists => Error::AlreadyExists,
        io::ErrorKind::PermissionDenied => Error::PermissionDenied,
        io::ErrorKind::IsADirectory => Error::IsADirectory,
        io::ErrorKind::NotADirectory => Error::NotADirectory,
        _ => {
            log::warn!("unmapped host error: {err}");
            Error::Io
        }
    }
}

impl FileSystem for HostFs {
    fn create(&self, path: &str) -> Result<Handle, Error> {
        let path = self.resolve(path)?;
        let mut handles = self.handles();
        if handles.occupied() >= MAX_OPEN_FILES {
            return Err(Error::TooManyOpenFiles);
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(host_error)?;
        let handle = Handle::from(handles.insert((path, file)));
        log::debug!("opened {handle}");
        Ok(handle)
    }

    fn close(&self, handle: Handle) -> Result<(), Error> {
        // `File`在此被drop，即关闭
        self.handles()
            .remove(handle.index())
            .map(|(path, _)| log::debug!("closed {handle} ({})", path.display()))
            .ok_or(Error::BadHandle)
    }

    fn remove(&self, path: &str) -> Result<(), Error> {
        let path = self.resolve(path)?;
        fs::remove_file(&path).map_err(host_error)?;

        let closed = self.handles().retain(|(target, _)| *target != path);
        if closed > 0 {
            log::debug!("closed {closed} handle(s) still open on {}", path.display());
        }
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|path| path.exists())
    }
}
