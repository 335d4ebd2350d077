use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

pub fn write_json<T: Serialize>(dir: &Path, name: &str, value: &T) -> PathBuf {
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(value).expect("serialize fixture");
    fs::write(&path, json).expect("write json fixture");
    path
}
