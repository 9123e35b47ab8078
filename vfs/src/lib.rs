#![no_std]

extern crate alloc;

pub mod collections;
mod dirent;
mod error;
mod fs;
mod handle;
pub mod mem;
pub mod path;

pub use self::{
    collections::SlotVec,
    dirent::{DirEntry, DirEntryType},
    error::Error,
    fs::FileSystem,
    handle::Handle,
    mem::MemFs,
};

/// 路径的最大字节数
pub const MAX_PATH_LEN: usize = 256;

/// 每个文件系统同时存活的句柄上限
pub const MAX_OPEN_FILES: usize = 16;
