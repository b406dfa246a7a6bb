// Removal and gap-closing comprehensive tests
// 删除和空位填补的全面测试

use crate::{AssocArrayError, AssociativeArray};

#[test]
fn test_basic_removal() {
    let mut map = AssociativeArray::new();
    map.insert_or_update("k", 42).unwrap();

    assert_eq!(map.delete("k"), Some(42));
    assert_eq!(map.size(), 0);
    assert_eq!(map.fetch("k"), Err(AssocArrayError::KeyNotFound));
    assert!(!map.exists("k"));
}

#[test]
fn test_removal_returns_correct_value() {
    let mut map = AssociativeArray::new();
    map.insert_or_update(1, "Hello".to_string()).unwrap();

    let removed = map.delete(&1);
    assert_eq!(removed, Some("Hello".to_string()));
}

#[test]
fn test_removal_of_nonexistent_key() {
    let mut map = AssociativeArray::new();
    map.insert_or_update(1, 1).unwrap();

    // Removing an absent key does nothing
    // 删除不存在的 key 不做任何操作
    assert_eq!(map.delete(&12345), None);
    assert_eq!(map.size(), 1);
    assert_eq!(map.render(), "{1:1}");
}

#[test]
fn test_removal_is_idempotent() {
    let mut map = AssociativeArray::new();
    map.insert_or_update("a", 1).unwrap();
    map.insert_or_update("b", 2).unwrap();

    map.delete("a");
    let after_once = map.duplicate();

    map.delete("a");
    assert_eq!(map, after_once);
    assert_eq!(map.size(), 1);
}

#[test]
fn test_removal_of_null_key_is_noop() {
    let mut map: AssociativeArray<Option<i32>, i32> = AssociativeArray::new();
    map.insert_or_update(Some(1), 1).unwrap();

    assert_eq!(map.delete(&None::<i32>), None);
    assert_eq!(map.size(), 1);
}

#[test]
fn test_removal_preserves_order() {
    let mut map = AssociativeArray::new();
    for i in 0..6 {
        map.insert_or_update(i, i * 10).unwrap();
    }

    map.delete(&2);
    assert_eq!(map.render(), "{0:0, 1:10, 3:30, 4:40, 5:50}");

    map.delete(&0);
    assert_eq!(map.render(), "{1:10, 3:30, 4:40, 5:50}");

    map.delete(&5);
    assert_eq!(map.render(), "{1:10, 3:30, 4:40}");
}

#[test]
fn test_removal_keeps_other_entries_fetchable() {
    let mut map = AssociativeArray::new();
    for i in 0..10 {
        map.insert_or_update(i, i).unwrap();
    }

    map.delete(&4);

    for i in (0..10).filter(|&i| i != 4) {
        assert_eq!(map.fetch(&i), Ok(&i));
    }
    assert!(!map.exists(&4));
}

#[test]
fn test_reinsert_after_removal_appends() {
    let mut map = AssociativeArray::new();
    map.insert_or_update("a", 1).unwrap();
    map.insert_or_update("b", 2).unwrap();

    map.delete("a");
    map.insert_or_update("a", 3).unwrap();

    assert_eq!(map.render(), "{b:2, a:3}");
}

#[test]
fn test_removal_decrements_size() {
    let mut map = AssociativeArray::new();
    for i in 0..10 {
        map.insert_or_update(i, i).unwrap();
    }

    for i in 0..10 {
        assert_eq!(map.size(), 10 - i);
        map.delete(&i);
    }

    assert!(map.is_empty());
}

#[test]
fn test_removal_keeps_capacity() {
    let mut map = AssociativeArray::new();
    for i in 0..20 {
        map.insert_or_update(i, i).unwrap();
    }

    for i in 0..20 {
        map.delete(&i);
    }

    assert_eq!(map.capacity(), 32);
}
