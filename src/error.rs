use std::fmt;

/// Error type for AssociativeArray operations
///
/// AssociativeArray 操作的错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssocArrayError {
    /// Insertion was attempted with a null key
    ///
    /// 尝试使用空 key 插入
    InvalidKey,

    /// The key is null or not currently stored
    ///
    /// key 为空或当前未存储
    KeyNotFound,
}

impl fmt::Display for AssocArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssocArrayError::InvalidKey => write!(f, "invalid key: null keys cannot be stored"),
            AssocArrayError::KeyNotFound => write!(f, "key not found"),
        }
    }
}

impl std::error::Error for AssocArrayError {}
