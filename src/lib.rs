mod error;
mod map;
mod pair;

use std::rc::Rc;
use std::sync::Arc;

/// Capability required of keys stored in an [`AssociativeArray`]
///
/// Keys are compared by value through [`Eq`]. A key type may additionally
/// have a null value which can never be stored: inserting it fails with
/// [`AssocArrayError::InvalidKey`] and looking it up always misses.
/// Most key types have no null value and keep the default `is_null`.
///
/// 存储在 [`AssociativeArray`] 中的 key 所需的能力
///
/// key 通过 [`Eq`] 按值比较。key 类型还可以拥有一个永远不能被存储的空值：
/// 插入它会返回 [`AssocArrayError::InvalidKey`]，查找它总是失败。
/// 大多数 key 类型没有空值，保留默认的 `is_null` 即可。
///
/// # Examples (示例)
///
/// ```
/// use assoc_array::{AssocArrayError, AssociativeArray};
///
/// // `None` is the null key of `Option<T>`
/// // `None` 是 `Option<T>` 的空 key
/// let mut map: AssociativeArray<Option<&str>, i32> = AssociativeArray::new();
/// assert_eq!(map.insert_or_update(None, 1), Err(AssocArrayError::InvalidKey));
/// assert!(!map.exists(&None::<&str>));
/// ```
pub trait Key: Eq {
    /// Whether this key is the null key
    ///
    /// 此 key 是否为空 key
    #[inline(always)]
    fn is_null(&self) -> bool {
        false
    }
}

macro_rules! impl_non_null_key {
    ($($ty:ty),* $(,)?) => {
        $(impl Key for $ty {})*
    };
}

impl_non_null_key!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, (), str, String,
);

impl<T: Key> Key for Option<T> {
    #[inline(always)]
    fn is_null(&self) -> bool {
        self.as_ref().is_none_or(Key::is_null)
    }
}

impl<T: Key + ?Sized> Key for &T {
    #[inline(always)]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Key + ?Sized> Key for Box<T> {
    #[inline(always)]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Key + ?Sized> Key for Rc<T> {
    #[inline(always)]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Key + ?Sized> Key for Arc<T> {
    #[inline(always)]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Eq> Key for Vec<T> {}

impl<A: Key, B: Key> Key for (A, B) {}

pub use error::AssocArrayError;
pub use map::{AssociativeArray, DEFAULT_CAPACITY};
