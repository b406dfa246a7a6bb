use std::fmt;

/// A single key/value binding stored in an `AssociativeArray`
///
/// The key is fixed once the pair is created; only the value can change.
///
/// `AssociativeArray` 中存储的单个 key/value 绑定
///
/// pair 创建后 key 固定不变，只有 value 可以修改
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct Pair<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Pair<K, V> {
    #[inline(always)]
    pub(crate) fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Replace the value, returning the previous one
    ///
    /// 替换 value，返回之前的值
    #[inline]
    pub(crate) fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    #[inline(always)]
    pub(crate) fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Pair<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}
