//! ColumnAliases：外部字段名 → 存储列名的白名单映射。
//!
//! 所有进入 SQL 文本的列名都要通过 [`check_ident`]：
//! 只接受 `[A-Za-z_][A-Za-z0-9_]*`，这样 `"col"` 形式的引用不需要转义。

use crate::error::{BuildError, Result};
use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnAliases {
    columns: IndexMap<String, String>,
}

impl ColumnAliases {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, column: impl Into<String>) -> &mut Self {
        self.columns.insert(field.into(), column.into());
        self
    }

    pub fn with(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.insert(field, column);
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.columns.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.columns.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// 解析列名：白名单内取别名，否则回退到字段名本身。
    ///
    /// 回退得到的名字同样要通过标识符校验。
    pub fn resolve<'a>(&'a self, field: &'a str) -> Result<&'a str> {
        let column = self.get(field).unwrap_or(field);
        check_ident(column)?;
        Ok(column)
    }
}

impl<F, C> FromIterator<(F, C)> for ColumnAliases
where
    F: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, C)>>(iter: I) -> Self {
        let mut aliases = Self::new();
        for (f, c) in iter {
            aliases.insert(f, c);
        }
        aliases
    }
}

/// 校验裸标识符：`[A-Za-z_][A-Za-z0-9_]*`。
pub fn check_ident(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(BuildError::InvalidIdentifier(name.to_string()))
    }
}

/// 为 SET 子句加双引号（调用前须已通过 [`check_ident`]）。
pub(crate) fn quote(name: &str) -> String {
    format!("\"{name}\"")
}
