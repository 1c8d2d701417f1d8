use crate::errors::{Error, Result};
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

pub const ROOT_KEY: &str = "clean.root";
pub const DAYS_KEY: &str = "clean.days";

/// The two retention settings, loaded once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct RetentionConfig {
    // 待清理的根目录
    pub root: PathBuf,
    // 保留天数，超过即删除
    pub retention_days: i64,
}

impl RetentionConfig {
    /// Loads the configuration from a properties file.
    ///
    /// Any failure aborts startup: the caller is expected to propagate the
    /// error instead of proceeding with empty values.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::ConfigNotFound(path.display().to_string()),
            _ => Error::ConfigUnreadable {
                path: path.display().to_string(),
                source: e,
            },
        })?;

        Self::from_properties(&content)
    }

    fn from_properties(content: &str) -> Result<Self> {
        let props = parse_properties(content);

        let root = props.get(ROOT_KEY).ok_or(Error::MissingKey(ROOT_KEY))?;
        if root.is_empty() {
            return Err(Error::EmptyRoot);
        }

        let days = props.get(DAYS_KEY).ok_or(Error::MissingKey(DAYS_KEY))?;
        let retention_days = days.parse::<i64>().map_err(|_| Error::MalformedValue {
            key: DAYS_KEY,
            value: days.to_string(),
        })?;
        if retention_days < 0 {
            return Err(Error::NegativeRetention(retention_days));
        }

        Ok(RetentionConfig {
            root: PathBuf::from(root),
            retention_days,
        })
    }
}

// 逐行解析 properties 文件：跳过空行和 #/! 注释，首个 = 分隔键值，两侧去除空白
fn parse_properties(content: &str) -> HashMap<String, String> {
    let mut props = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            props.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    props
}
