use derive_more::{Display, From, Into};

/// An open file, as returned by [`crate::FileSystem::create`].
///
/// 即文件描述符表中的槽位索引
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into)]
#[display(fmt = "#{}", _0)]
pub struct Handle(usize);

impl Handle {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}
