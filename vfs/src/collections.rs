use alloc::vec::Vec;

/// 槽位向量：移除元素只会清空槽位，其余元素的索引保持不变
#[derive(Debug, Clone)]
pub struct SlotVec<T>(Vec<Option<T>>);

impl<T> Default for SlotVec<T> {
    fn default() -> Self {
        Self(Vec::default())
    }
}

impl<T> SlotVec<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// 插入新元素至空槽位，并返回槽位的索引
    pub fn insert(&mut self, element: T) -> usize {
        let index = self.0.iter().position(Option::is_none).unwrap_or_else(|| {
            self.0.push(None);
            self.0.len() - 1
        });
        self.0[index] = Some(element);
        index
    }

    /// 清空指定槽位；越界或槽位本就为空时返回`None`
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.0.get_mut(index)?.take()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)?.as_ref()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    /// Empties every slot whose element does not satisfy `keep`,
    /// returning how many were emptied.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
        let mut emptied = 0;
        for slot in &mut self.0 {
            if slot.as_ref().is_some_and(|element| !keep(element)) {
                *slot = None;
                emptied += 1;
            }
        }
        emptied
    }
}
