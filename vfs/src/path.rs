use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{Error, MAX_PATH_LEN};

/// Checks the invariants every path handed to a file system must hold.
pub fn validate(path: &str) -> Result<&str, Error> {
    if path.is_empty() || path.contains('\0') {
        return Err(Error::InvalidPath);
    }
    if path.len() > MAX_PATH_LEN {
        return Err(Error::NameTooLong);
    }
    Ok(path)
}

pub trait Path: ToOwned {
    fn is_absolute(&self) -> bool;

    /// 返回不以`/`结束、不包含相对项的绝对路径。
    ///
    /// # 参数
    ///
    /// `cwd`: 绝对路径，且非根时不以`/`结束。
    fn canonicalize(&self, cwd: &Self) -> Option<Self::Owned>;

    /// Returns the final component of the Path, if there is one.
    ///
    /// Returns [`None`] for the root.
    fn file_name(&self) -> Option<&Self>;

    /// 返回路径的`(父目录, 文件名)`
    fn parent_file(&self) -> Option<(&Self, &Self)>;

    fn is_relative(&self) -> bool {
        !self.is_absolute()
    }
}

impl Path for str {
    fn is_absolute(&self) -> bool {
        self.starts_with('/')
    }

    fn canonicalize(&self, cwd: &Self) -> Option<Self::Owned> {
        if self == "/" {
            return Some(String::from("/"));
        }

        let mut cmps = Vec::new();
        if self.is_relative() {
            // 防止第一个`/`带来的空字符串的影响，
            // 尤其是只有`cwd == /`时。
            cmps.extend(cwd.split('/').filter(|s| !s.is_empty()));
        }

        for cmp in self.trim_start_matches('/').split('/') {
            match cmp {
                ".." => {
                    cmps.pop()?;
                }
                "." => (),
                "" => return None,
                s => cmps.push(s),
            }
        }

        if cmps.is_empty() {
            return Some(String::from("/"));
        }
        cmps.insert(0, ""); // 在接下来的拼接中代表根目录

        Some(cmps.join("/"))
    }

    fn file_name(&self) -> Option<&Self> {
        self.parent_file().map(|(_, name)| name)
    }

    fn parent_file(&self) -> Option<(&Self, &Self)> {
        if self == "/" {
            return None;
        }

        self.rsplit_once('/')
            .map(|(p, f)| if p.is_empty() { ("/", f) } else { (p, f) })
    }
}

/// Validates `path` and canonicalizes it against `cwd`.
pub fn resolve(path: &str, cwd: &str) -> Result<String, Error> {
    let path = validate(path)?;
    let resolved = path.canonicalize(cwd).ok_or(Error::InvalidPath)?;
    log::debug!("path={path:?} resolved={resolved:?}");
    Ok(resolved)
}
