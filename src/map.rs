use crate::Key;
use crate::error::AssocArrayError;
use crate::pair::Pair;
use log::{debug, trace};
use std::borrow::Borrow;
use std::fmt;

/// Number of slots a new AssociativeArray starts with
///
/// 新建 AssociativeArray 的初始 slot 数量
pub const DEFAULT_CAPACITY: usize = 16;

/// AssociativeArray is an array-backed map with linear lookup
///
/// Entries are kept in a growable sequence of pairs, in the order their keys
/// were first inserted. Every lookup is a linear scan comparing keys with
/// [`Eq`], so keys need neither `Hash` nor `Ord`.
///
/// AssociativeArray 是一个基于数组、线性查找的映射表
///
/// 条目保存在一个可增长的 pair 序列中，按 key 首次插入的顺序排列。
/// 每次查找都是用 [`Eq`] 比较 key 的线性扫描，因此 key 既不需要 `Hash` 也不需要 `Ord`
///
/// # Features (特性)
///
/// - Insertion order among live entries | 存活条目保持插入顺序
/// - Removal closes the gap without reordering | 删除时填补空位且不打乱顺序
/// - Capacity doubles when full | 容量满时翻倍
/// - Null keys are rejected | 拒绝空 key
///
/// # Examples (示例)
///
/// ```
/// use assoc_array::{AssocArrayError, AssociativeArray};
///
/// let mut map = AssociativeArray::new();
///
/// map.insert_or_update("k", "key").unwrap();
/// assert!(map.exists("k"));
/// assert_eq!(map.fetch("k"), Ok(&"key"));
/// assert_eq!(map.fetch("q"), Err(AssocArrayError::KeyNotFound));
///
/// map.delete("k");
/// assert!(!map.exists("k"));
/// assert_eq!(map.size(), 0);
/// ```
pub struct AssociativeArray<K, V> {
    pairs: Vec<Pair<K, V>>, // Live pairs, len() is the live count | 存活的 pair，len() 即存活数量
    capacity: usize,        // Logical slot count | 逻辑 slot 数量
}

impl<K, V> AssociativeArray<K, V> {
    /// Create a new empty AssociativeArray with [`DEFAULT_CAPACITY`] slots
    ///
    /// 创建一个具有 [`DEFAULT_CAPACITY`] 个 slot 的空 AssociativeArray
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use assoc_array::{AssociativeArray, DEFAULT_CAPACITY};
    ///
    /// let map: AssociativeArray<&str, i32> = AssociativeArray::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), DEFAULT_CAPACITY);
    /// ```
    #[inline(always)]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an AssociativeArray with specified capacity
    ///
    /// 创建一个指定容量的 AssociativeArray
    ///
    /// # Parameters
    /// - `capacity`: Initial number of slots
    ///
    /// # 参数
    /// - `capacity`: 初始 slot 数量
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use assoc_array::AssociativeArray;
    ///
    /// let map: AssociativeArray<&str, i32> = AssociativeArray::with_capacity(4);
    /// assert_eq!(map.capacity(), 4);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Return the number of live entries
    ///
    /// 返回存活条目的数量
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use assoc_array::AssociativeArray;
    ///
    /// let mut map = AssociativeArray::new();
    /// assert_eq!(map.size(), 0);
    ///
    /// map.insert_or_update(1, "one").unwrap();
    /// assert_eq!(map.size(), 1);
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the array holds no entries
    ///
    /// 检查是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Return capacity (number of slots, live or unused)
    ///
    /// 返回容量（slot 数量，包括已用和未用）
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove all entries, keeping the capacity
    ///
    /// 删除所有条目，保留容量
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use assoc_array::AssociativeArray;
    ///
    /// let mut map = AssociativeArray::new();
    /// map.insert_or_update("a", 1).unwrap();
    ///
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 16);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Make room for at least `additional` more entries
    ///
    /// Capacity keeps doubling until it fits, so the growth pattern is the
    /// same as repeated insertion.
    ///
    /// 预留至少 `additional` 个额外条目的空间
    ///
    /// 容量持续翻倍直到足够，增长方式与连续插入相同
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use assoc_array::AssociativeArray;
    ///
    /// let mut map: AssociativeArray<u32, u32> = AssociativeArray::new();
    /// map.reserve(100);
    /// assert_eq!(map.capacity(), 128);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        let required = self.pairs.len().saturating_add(additional);
        if required <= self.capacity {
            return;
        }

        let mut new_capacity = self.capacity.max(1);
        while new_capacity < required {
            new_capacity = new_capacity.saturating_mul(2);
        }
        self.resize_slots(new_capacity);
    }

    /// Compact capacity down to the number of live entries
    ///
    /// 将容量压缩到存活条目的数量
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use assoc_array::AssociativeArray;
    ///
    /// let mut map = AssociativeArray::new();
    /// map.insert_or_update("a", 1).unwrap();
    ///
    /// map.shrink_to_fit();
    /// assert_eq!(map.capacity(), 1);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.resize_slots(self.pairs.len());
    }

    /// Double the capacity; an empty backing store grows to one slot
    ///
    /// 容量翻倍；容量为 0 时增长到 1
    #[inline]
    fn grow(&mut self) {
        let new_capacity = self.capacity.saturating_mul(2).max(1);
        self.resize_slots(new_capacity);
    }

    fn resize_slots(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.pairs.len());
        trace!(
            "resizing associative array from {} to {} slots",
            self.capacity, new_capacity
        );

        if new_capacity > self.pairs.capacity() {
            self.pairs.reserve_exact(new_capacity - self.pairs.len());
        } else {
            self.pairs.shrink_to(new_capacity);
        }
        self.capacity = new_capacity;
    }
}

impl<K: Key, V> AssociativeArray<K, V> {
    /// Find the slot index of `key` among live entries
    ///
    /// Null keys are never stored, so they are never found.
    ///
    /// 在存活条目中查找 `key` 的 slot 索引
    ///
    /// 空 key 永远不会被存储，因此永远找不到
    #[inline]
    fn locate<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        if key.is_null() {
            return None;
        }
        self.pairs.iter().position(|pair| pair.key.borrow() == key)
    }

    /// Set the value associated with `key`
    ///
    /// An existing entry is updated in place and keeps its position.
    /// Otherwise the pair is appended, doubling capacity first when full.
    ///
    /// 设置 `key` 对应的值
    ///
    /// 已存在的条目原地更新并保持位置；否则追加新 pair，容量已满时先翻倍
    ///
    /// # Parameters
    /// - `key`: The key, must not be null
    /// - `value`: The value to associate
    ///
    /// # Returns
    /// - `Ok(Some(old))`: The key existed and `old` was replaced
    /// - `Ok(None)`: A new entry was appended
    /// - `Err(AssocArrayError::InvalidKey)`: The key is null
    ///
    /// # 参数
    /// - `key`: key，不能为空
    /// - `value`: 要关联的值
    ///
    /// # 返回值
    /// - `Ok(Some(old))`: key 已存在，`old` 被替换
    /// - `Ok(None)`: 追加了新条目
    /// - `Err(AssocArrayError::InvalidKey)`: key 为空
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use assoc_array::AssociativeArray;
    ///
    /// let mut map = AssociativeArray::new();
    /// assert_eq!(map.insert_or_update("a", 1), Ok(None));
    /// assert_eq!(map.insert_or_update("a", 2), Ok(Some(1)));
    /// assert_eq!(map.size(), 1);
    /// assert_eq!(map.fetch("a"), Ok(&2));
    /// ```
    pub fn insert_or_update(&mut self, key: K, value: V) -> Result<Option<V>, AssocArrayError> {
        if key.is_null() {
            debug!("rejected insertion with a null key");
            return Err(AssocArrayError::InvalidKey);
        }

        if let Some(index) = self.locate(&key) {
            return Ok(Some(self.pairs[index].replace_value(value)));
        }

        if self.pairs.len() == self.capacity {
            self.grow();
        }
        self.pairs.push(Pair::new(key, value));
        Ok(None)
    }

    /// Get the value associated with `key`
    ///
    /// 获取 `key` 对应的值
    ///
    /// # Returns
    /// - `Ok(&V)`: Reference to the value
    /// - `Err(AssocArrayError::KeyNotFound)`: The key is null or not stored
    ///
    /// # 返回值
    /// - `Ok(&V)`: 值的引用
    /// - `Err(AssocArrayError::KeyNotFound)`: key 为空或未存储
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use assoc_array::{AssocArrayError, AssociativeArray};
    ///
    /// let mut map = AssociativeArray::new();
    /// map.insert_or_update(String::from("k"), 42).unwrap();
    ///
    /// // Borrowed forms of the key work too
    /// // 也可以使用 key 的借用形式
    /// assert_eq!(map.fetch("k"), Ok(&42));
    /// assert_eq!(map.fetch("q"), Err(AssocArrayError::KeyNotFound));
    /// ```
    #[inline]
    pub fn fetch<Q>(&self, key: &Q) -> Result<&V, AssocArrayError>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        self.locate(key)
            .map(|index| &self.pairs[index].value)
            .ok_or(AssocArrayError::KeyNotFound)
    }

    /// Get a mutable reference to the value associated with `key`
    ///
    /// 获取 `key` 对应值的可变引用
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use assoc_array::AssociativeArray;
    ///
    /// let mut map = AssociativeArray::new();
    /// map.insert_or_update("k", 42).unwrap();
    ///
    /// if let Ok(value) = map.fetch_mut("k") {
    ///     *value = 100;
    /// }
    /// assert_eq!(map.fetch("k"), Ok(&100));
    /// ```
    #[inline]
    pub fn fetch_mut<Q>(&mut self, key: &Q) -> Result<&mut V, AssocArrayError>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        match self.locate(key) {
            Some(index) => Ok(&mut self.pairs[index].value),
            None => Err(AssocArrayError::KeyNotFound),
        }
    }

    /// Check if `key` is stored
    ///
    /// Always `false` for the null key.
    ///
    /// 检查 `key` 是否已存储
    ///
    /// 对于空 key 总是返回 `false`
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use assoc_array::AssociativeArray;
    ///
    /// let mut map: AssociativeArray<Option<&str>, &str> = AssociativeArray::new();
    /// assert!(!map.exists(&Some("k")));
    ///
    /// map.insert_or_update(Some("k"), "key").unwrap();
    /// assert!(map.exists(&Some("k")));
    /// assert!(!map.exists(&None::<&str>));
    /// ```
    #[inline]
    pub fn exists<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        self.locate(key).is_some()
    }

    /// Remove the entry for `key`
    ///
    /// Later entries shift down by one to close the gap, keeping their order.
    /// Removing an absent or null key does nothing.
    ///
    /// 删除 `key` 对应的条目
    ///
    /// 后续条目前移一位填补空位，保持原有顺序。删除不存在的 key 或空 key 不做任何操作
    ///
    /// # Returns
    /// - `Some(V)`: The removed value
    /// - `None`: The key was not stored
    ///
    /// # 返回值
    /// - `Some(V)`: 被删除的值
    /// - `None`: key 未存储
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use assoc_array::AssociativeArray;
    ///
    /// let mut map = AssociativeArray::new();
    /// map.insert_or_update(1, "one").unwrap();
    /// map.insert_or_update(2, "two").unwrap();
    /// map.insert_or_update(3, "three").unwrap();
    ///
    /// assert_eq!(map.delete(&1), Some("one"));
    /// assert_eq!(map.delete(&1), None);
    /// assert_eq!(map.render(), "{2:two, 3:three}");
    /// ```
    #[inline]
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        let index = self.locate(key)?;
        let (_, value) = self.pairs.remove(index).into_parts();
        Some(value)
    }
}

impl<K: Clone, V: Clone> AssociativeArray<K, V> {
    /// Create an independent deep copy
    ///
    /// The copy has the same capacity and its own copy of every pair.
    ///
    /// 创建一个独立的深拷贝
    ///
    /// 副本具有相同的容量，并拥有每个 pair 的独立拷贝
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use assoc_array::AssociativeArray;
    ///
    /// let mut original = AssociativeArray::new();
    /// original.insert_or_update("k", String::from("key")).unwrap();
    ///
    /// let mut copy = original.duplicate();
    /// copy.fetch_mut("k").unwrap().push_str("s");
    ///
    /// assert_eq!(original.fetch("k").unwrap(), "key");
    /// assert_eq!(copy.fetch("k").unwrap(), "keys");
    /// ```
    #[inline]
    pub fn duplicate(&self) -> Self {
        self.clone()
    }
}

impl<K: fmt::Display, V: fmt::Display> AssociativeArray<K, V> {
    /// Render live entries as `{key0:value0, key1:value1}`
    ///
    /// 将存活条目渲染为 `{key0:value0, key1:value1}`
    ///
    /// # Examples (示例)
    ///
    /// ```
    /// use assoc_array::AssociativeArray;
    ///
    /// let mut map = AssociativeArray::new();
    /// assert_eq!(map.render(), "{}");
    ///
    /// map.insert_or_update("k", "key").unwrap();
    /// map.insert_or_update("2", "hey").unwrap();
    /// assert_eq!(map.render(), "{k:key, 2:hey}");
    /// ```
    #[inline]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<K: Clone, V: Clone> Clone for AssociativeArray<K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            pairs: self.pairs.clone(),
            capacity: self.capacity,
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.pairs.clone_from(&source.pairs);
        self.capacity = source.capacity;
    }
}

impl<K, V> Default for AssociativeArray<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for AssociativeArray<K, V> {
    /// Equal when the live pairs match in order; capacity is ignored
    ///
    /// 存活 pair 按顺序相同即相等；忽略容量
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl<K: Eq, V: Eq> Eq for AssociativeArray<K, V> {}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for AssociativeArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, pair) in self.pairs.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{pair}")?;
        }
        f.write_str("}")
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AssociativeArray<K, V> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("AssociativeArray")
            .field("capacity", &self.capacity)
            .field("pairs", &self.pairs)
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize> serde::Serialize for AssociativeArray<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("AssociativeArray", 2)?;
        state.serialize_field("capacity", &self.capacity)?;
        state.serialize_field("pairs", &self.pairs)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for AssociativeArray<K, V>
where
    K: Key + serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct AssociativeArrayHelper<K, V> {
            capacity: usize,
            pairs: Vec<Pair<K, V>>,
        }

        let helper = AssociativeArrayHelper::<K, V>::deserialize(deserializer)?;

        if helper.capacity < helper.pairs.len() {
            return Err(serde::de::Error::custom(
                "capacity is smaller than the number of pairs",
            ));
        }

        for (index, pair) in helper.pairs.iter().enumerate() {
            if pair.key.is_null() {
                return Err(serde::de::Error::custom("null key in serialized pairs"));
            }
            if helper.pairs[..index].iter().any(|other| other.key == pair.key) {
                return Err(serde::de::Error::custom("duplicate key in serialized pairs"));
            }
        }

        // Capacity stays logical; the backing Vec grows on demand
        // 容量仅为逻辑值；底层 Vec 按需增长
        Ok(Self {
            pairs: helper.pairs,
            capacity: helper.capacity,
        })
    }
}
