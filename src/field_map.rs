//! FieldMap：保持插入顺序的 “字段名 → 参数值” 映射。
//!
//! 占位符序号取决于迭代顺序，所以这里只能用有序 map；
//! 从 JSON 解码时依赖 serde_json 的 `preserve_order`。

use crate::error::{BuildError, Result};
use crate::value::SqlValue;
use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    entries: IndexMap<String, SqlValue>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入字段；已存在的 key 覆盖值但保留原位置。
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<SqlValue>) -> &mut Self {
        self.entries.insert(field.into(), value.into());
        self
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&SqlValue> {
        self.entries.get(field)
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<SqlValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for FieldMap {
    fn from(obj: serde_json::Map<String, serde_json::Value>) -> Self {
        obj.into_iter().collect()
    }
}

impl TryFrom<serde_json::Value> for FieldMap {
    type Error = BuildError;

    fn try_from(v: serde_json::Value) -> Result<Self> {
        use serde_json::Value;
        match v {
            Value::Object(obj) => Ok(obj.into()),
            Value::Null => Err(BuildError::NotAnObject("null")),
            Value::Bool(_) => Err(BuildError::NotAnObject("boolean")),
            Value::Number(_) => Err(BuildError::NotAnObject("number")),
            Value::String(_) => Err(BuildError::NotAnObject("string")),
            Value::Array(_) => Err(BuildError::NotAnObject("array")),
        }
    }
}
