//! Deletes a single file through an injected [`FileSystem`].

pub mod cli;
mod host_fs;


use std::io::Write;
use std::process::ExitCode;

use derive_more::Display;
use vfs::FileSystem;

pub use self::{cli::Cli, host_fs::HostFs};

pub const USAGE: &str = "Usage: rm <file>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Exit {
    Success = 0,
    Failure = 1,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum RmError {
    #[display(fmt = "{}", USAGE)]
    Usage,
    #[display(fmt = "Unable to remove {}: {}", path, source)]
    FileSystem { path: String, source: vfs::Error },
}

impl std::error::Error for RmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Usage => None,
            Self::FileSystem { source, .. } => Some(source),
        }
    }
}

pub struct Remover<F> {
    fs: F,
    create_first: bool,
}

impl<F: FileSystem> Remover<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            create_first: false,
        }
    }

    /// 删除前先创建目标文件，使单次运行自成一体
    pub fn create_first(mut self, create_first: bool) -> Self {
        self.create_first = create_first;
        self
    }

    /// Removes the single file named by `paths`, writing one line to `out`.
    pub fn run<S: AsRef<str>>(&self, paths: &[S], out: &mut impl Write) -> Exit {
        let result = match paths {
            [path] => self.remove(path.as_ref()),
            _ => Err(RmError::Usage),
        };

        let (line, exit) = match &result {
            Ok(path) => (format!("remove successful: {path}"), Exit::Success),
            Err(err) => (err.to_string(), Exit::Failure),
        };
        if let Err(err) = writeln!(out, "{line}") {
            log::error!("failed to report result: {err}");
        }
        exit
    }

    fn remove<'p>(&self, path: &'p str) -> Result<&'p str, RmError> {
        if self.create_first {
            self.prepare(path);
        }

        self.fs
            .remove(path)
            .map(|()| {
                log::info!("removed {path:?}");
                path
            })
            .map_err(|source| RmError::FileSystem {
                path: path.to_owned(),
                source,
            })
    }

    /// 创建失败不影响随后的删除：若文件仍不存在，删除自然会报错
    fn prepare(&self, path: &str) {
        match self.fs.create(path) {
            Ok(handle) => {
                if let Err(err) = self.fs.close(handle) {
                    log::warn!("failed to close {handle} on {path:?}: {err}");
                }
            }
            Err(err) => log::warn!("failed to create {path:?}: {err}"),
        }
    }
}
