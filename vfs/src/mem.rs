//! 内存文件系统
//!
//! 以规范化的绝对路径为键保存全部节点，相对路径一律相对于根目录解析。

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use spin::Mutex;

use crate::path::{self, Path};
use crate::{DirEntry, DirEntryType, Error, FileSystem, Handle, MAX_OPEN_FILES, SlotVec};

const ROOT: &str = "/";
const ROOT_INODE: u64 = 1;

#[derive(Debug)]
pub struct MemFs {
    inner: Mutex<MemFsInner>,
}

#[derive(Debug)]
struct MemFsInner {
    nodes: BTreeMap<String, Node>,
    /// 每个存活句柄所指向的文件路径
    handles: SlotVec<String>,
    next_inode: u64,
}

#[derive(Debug)]
struct Node {
    inode: u64,
    ty: DirEntryType,
    data: Vec<u8>,
}

impl Default for MemFs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemFs {
    /// Creates a file system holding only the root directory.
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(
            String::from(ROOT),
            Node {
                inode: ROOT_INODE,
                ty: DirEntryType::Directory,
                data: Vec::new(),
            },
        );

        Self {
            inner: Mutex::new(MemFsInner {
                nodes,
                handles: SlotVec::new(),
                next_inode: ROOT_INODE + 1,
            }),
        }
    }

    pub fn mkdir(&self, path: &str) -> Result<(), Error> {
        let path = path::resolve(path, ROOT)?;
        let mut inner = self.inner.lock();
        if inner.nodes.contains_key(&path) {
            return Err(Error::AlreadyExists);
        }
        inner.check_parent(&path)?;
        inner.insert_node(path, DirEntryType::Directory);
        Ok(())
    }

    /// Appends `data` to the file opened as `handle`.
    pub fn write(&self, handle: Handle, data: &[u8]) -> Result<usize, Error> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        let path = inner.handles.get(handle.index()).ok_or(Error::BadHandle)?;
        let node = inner.nodes.get_mut(path).ok_or(Error::BadHandle)?;
        node.data.extend_from_slice(data);
        Ok(data.len())
    }

    pub fn read_dir(&self, path: &str) -> Result<Vec<DirEntry>, Error> {
        let path = path::resolve(path, ROOT)?;
        let inner = self.inner.lock();
        match inner.nodes.get(&path) {
            None => return Err(Error::NotFound),
            Some(node) if node.ty != DirEntryType::Directory => return Err(Error::NotADirectory),
            Some(_) => (),
        }

        let dirents = inner
            .nodes
            .iter()
            .filter_map(|(child, node)| {
                let (parent, name) = child.parent_file()?;
                (parent == path).then(|| DirEntry {
                    inode: node.inode,
                    ty: node.ty,
                    name: String::from(name),
                })
            })
            .collect();
        Ok(dirents)
    }

    /// Bytes currently held by regular files.
    pub fn used_bytes(&self) -> usize {
        self.inner
            .lock()
            .nodes
            .values()
            .map(|node| node.data.len())
            .sum()
    }

    pub fn open_handles(&self) -> usize {
        self.inner.lock().handles.occupied()
    }
}

impl MemFsInner {
    /// 父目录须存在且确为目录
    fn check_parent(&self, path: &str) -> Result<(), Error> {
        let (parent, _) = path.parent_file().ok_or(Error::IsADirectory)?;
        match self.nodes.get(parent) {
            None => Err(Error::NotFound),
            Some(node) if node.ty != DirEntryType::Directory => Err(Error::NotADirectory),
            Some(_) => Ok(()),
        }
    }

    fn insert_node(&mut self, path: String, ty: DirEntryType) {
        let inode = self.next_inode;
        self.next_inode += 1;
        self.nodes.insert(
            path,
            Node {
                inode,
                ty,
                data: Vec::new(),
            },
        );
    }
}

impl FileSystem for MemFs {
    fn create(&self, path: &str) -> Result<Handle, Error> {
        let path = path::resolve(path, ROOT)?;
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        inner.check_parent(&path)?;
        if inner.handles.occupied() >= MAX_OPEN_FILES {
            return Err(Error::TooManyOpenFiles);
        }

        if let Some(node) = inner.nodes.get_mut(&path) {
            if node.ty == DirEntryType::Directory {
                return Err(Error::IsADirectory);
            }
            node.data.clear();
        } else {
            inner.insert_node(path.clone(), DirEntryType::Regular);
        }

        let handle = Handle::from(inner.handles.insert(path));
        log::debug!("opened {handle}");
        Ok(handle)
    }

    fn close(&self, handle: Handle) -> Result<(), Error> {
        let mut inner = self.inner.lock();
        inner
            .handles
            .remove(handle.index())
            .map(|path| log::debug!("closed {handle} ({path:?})"))
            .ok_or(Error::BadHandle)
    }

    fn remove(&self, path: &str) -> Result<(), Error> {
        let path = path::resolve(path, ROOT)?;
        let mut inner = self.inner.lock();
        inner.check_parent(&path)?;
        match inner.nodes.get(&path) {
            None => return Err(Error::NotFound),
            Some(node) if node.ty == DirEntryType::Directory => return Err(Error::IsADirectory),
            Some(_) => (),
        }

        let closed = inner.handles.retain(|target| *target != path);
        if closed > 0 {
            log::debug!("closed {closed} handle(s) still open on {path:?}");
        }
        inner.nodes.remove(&path);
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        path::resolve(path, ROOT).is_ok_and(|path| self.inner.lock().nodes.contains_key(&path))
    }
}
