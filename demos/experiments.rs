use assoc_array::{AssociativeArray, Key};
use env_logger::Env;
use std::error::Error;
use std::fmt;
use std::io::{self, Write};

/// A string key that may be missing
///
/// 可能缺失的字符串 key
#[derive(Clone, Copy, PartialEq, Eq)]
struct Name(Option<&'static str>);

impl Key for Name {
    fn is_null(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(name) => f.write_str(name),
            None => f.write_str("null"),
        }
    }
}

fn quoted(name: Name) -> String {
    match name.0 {
        Some(name) => format!("\"{name}\""),
        None => "null".to_string(),
    }
}

/// Log and conduct a call to `insert_or_update`
fn set(
    pen: &mut impl Write,
    map: &mut AssociativeArray<Name, &'static str>,
    key: Name,
    value: &'static str,
) -> io::Result<()> {
    write!(pen, "set({}, \"{}\") -> ", quoted(key), value)?;
    match map.insert_or_update(key, value) {
        Ok(_) => writeln!(pen, "OK"),
        Err(err) => writeln!(pen, "FAILED because {err}"),
    }
}

/// Log and conduct a call to `fetch`
fn get(
    pen: &mut impl Write,
    map: &AssociativeArray<Name, &'static str>,
    key: Name,
) -> io::Result<()> {
    write!(pen, "get({}) -> ", quoted(key))?;
    match map.fetch(&key) {
        Ok(value) => writeln!(pen, "{value}"),
        Err(err) => writeln!(pen, "[FAILED because {err}]"),
    }
}

/// Log and conduct a call to `exists`
fn has_key(
    pen: &mut impl Write,
    map: &AssociativeArray<Name, &'static str>,
    key: Name,
) -> io::Result<()> {
    writeln!(pen, "hasKey({}) -> {}", quoted(key), map.exists(&key))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let stdout = io::stdout();
    let mut pen = stdout.lock();

    let mut strings = AssociativeArray::new();

    // The empty array should not have any key
    // 空数组不应包含任何 key
    has_key(&mut pen, &strings, Name(Some("k")))?;

    // After setting the key we should be able to get it
    // 设置 key 之后应该能够获取它
    set(&mut pen, &mut strings, Name(Some("k")), "key")?;
    has_key(&mut pen, &strings, Name(Some("k")))?;
    get(&mut pen, &strings, Name(Some("k")))?;

    // A different key
    // 不同的 key
    has_key(&mut pen, &strings, Name(Some("q")))?;
    get(&mut pen, &strings, Name(Some("q")))?;

    // The null key
    // 空 key
    set(&mut pen, &mut strings, Name(None), "nothing")?;
    has_key(&mut pen, &strings, Name(None))?;
    get(&mut pen, &strings, Name(None))?;

    set(&mut pen, &mut strings, Name(Some("2")), "hey")?;
    writeln!(pen, "render: {}", strings.render())?;

    // Duplicate, then remove from the copy only
    // 复制后只从副本中删除
    let mut copy = strings.duplicate();
    writeln!(pen, "duplicate: {}", copy.render())?;
    copy.delete(&Name(Some("k")));
    writeln!(pen, "duplicate after delete: {}", copy.render())?;
    writeln!(pen, "original after delete: {}", strings.render())?;

    // Integer keys and values
    // 整数 key 和值
    let mut ints = AssociativeArray::new();
    ints.insert_or_update(1, 2)?;
    ints.insert_or_update(3, 4)?;
    writeln!(pen, "{}", ints.render())?;
    writeln!(pen, "{}", ints.fetch(&1)?)?;
    ints.delete(&1);
    writeln!(pen, "{}", ints.render())?;

    pen.flush()?;
    Ok(())
}
