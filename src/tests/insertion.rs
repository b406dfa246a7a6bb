// Insertion operation comprehensive tests
// 插入操作的全面测试

use crate::{AssocArrayError, AssociativeArray, DEFAULT_CAPACITY};

#[test]
fn test_basic_insertion() {
    let mut map = AssociativeArray::new();
    map.insert_or_update("k", "key").unwrap();

    assert_eq!(map.fetch("k"), Ok(&"key"));
    assert!(map.exists("k"));
    assert_eq!(map.size(), 1);
}

#[test]
fn test_multiple_sequential_insertions() {
    let mut map = AssociativeArray::new();

    for i in 0..100 {
        map.insert_or_update(i, i * 10).unwrap();
    }

    assert_eq!(map.size(), 100);

    for i in 0..100 {
        assert_eq!(map.fetch(&i), Ok(&(i * 10)));
    }
}

#[test]
fn test_insertion_with_different_types() {
    // Test with String
    // 测试 String 类型
    let mut map_string = AssociativeArray::new();
    map_string
        .insert_or_update("greeting".to_string(), "Hello".to_string())
        .unwrap();
    assert_eq!(map_string.fetch("greeting").map(String::as_str), Ok("Hello"));

    // Test with Vec values
    // 测试 Vec 值
    let mut map_vec = AssociativeArray::new();
    map_vec.insert_or_update('v', vec![1, 2, 3]).unwrap();
    assert_eq!(map_vec.fetch(&'v'), Ok(&vec![1, 2, 3]));

    // Test with tuple keys
    // 测试元组 key
    let mut map_tuple = AssociativeArray::new();
    map_tuple.insert_or_update((1, "a"), 1.5).unwrap();
    assert_eq!(map_tuple.fetch(&(1, "a")), Ok(&1.5));
    assert!(!map_tuple.exists(&(1, "b")));
}

#[test]
fn test_update_overwrites_in_place() {
    let mut map = AssociativeArray::new();
    map.insert_or_update("a", 1).unwrap();
    map.insert_or_update("b", 2).unwrap();
    map.insert_or_update("c", 3).unwrap();

    assert_eq!(map.insert_or_update("b", 20), Ok(Some(2)));

    // Position is kept, size unchanged
    // 位置保持不变，大小不变
    assert_eq!(map.size(), 3);
    assert_eq!(map.render(), "{a:1, b:20, c:3}");
}

#[test]
fn test_repeated_updates_return_latest() {
    let mut map = AssociativeArray::new();

    for i in 0..10 {
        map.insert_or_update("same", i).unwrap();
    }

    assert_eq!(map.size(), 1);
    assert_eq!(map.fetch("same"), Ok(&9));
}

#[test]
fn test_insertion_past_default_capacity() {
    let mut map = AssociativeArray::new();

    for i in 0..=DEFAULT_CAPACITY {
        map.insert_or_update(format!("key{i}"), i).unwrap();
    }

    assert_eq!(map.size(), DEFAULT_CAPACITY + 1);
    assert_eq!(map.capacity(), DEFAULT_CAPACITY * 2);

    for i in 0..=DEFAULT_CAPACITY {
        assert_eq!(map.fetch(format!("key{i}").as_str()), Ok(&i));
    }
}

#[test]
fn test_growth_preserves_order() {
    let mut map = AssociativeArray::with_capacity(2);

    for i in 0..9 {
        map.insert_or_update(i, i).unwrap();
    }

    assert_eq!(map.capacity(), 16);
    assert_eq!(map.render(), "{0:0, 1:1, 2:2, 3:3, 4:4, 5:5, 6:6, 7:7, 8:8}");
}

#[test]
fn test_null_key_insertion_fails() {
    let mut map: AssociativeArray<Option<&str>, &str> = AssociativeArray::new();
    map.insert_or_update(Some("k"), "key").unwrap();

    assert_eq!(
        map.insert_or_update(None, "nothing"),
        Err(AssocArrayError::InvalidKey)
    );

    // Container unchanged
    // 容器保持不变
    assert_eq!(map.size(), 1);
    assert_eq!(map.fetch(&Some("k")), Ok(&"key"));
}

#[test]
fn test_nested_null_key_insertion_fails() {
    let mut map: AssociativeArray<Option<Option<i32>>, i32> = AssociativeArray::new();

    assert_eq!(
        map.insert_or_update(Some(None), 1),
        Err(AssocArrayError::InvalidKey)
    );
    assert_eq!(map.insert_or_update(Some(Some(1)), 1), Ok(None));
    assert_eq!(map.size(), 1);
}

#[test]
fn test_insertion_into_zero_capacity() {
    let mut map = AssociativeArray::with_capacity(0);

    map.insert_or_update("a", 1).unwrap();

    assert_eq!(map.size(), 1);
    assert_eq!(map.capacity(), 1);
    assert_eq!(map.fetch("a"), Ok(&1));
}
