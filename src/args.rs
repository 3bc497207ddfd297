//! Args：按顺序收集绑定参数并分配 `$n` 占位符。
//!
//! 第 N 个占位符对应第 N 个值；拼接片段时用 [`Args::append_fragment`] 保证两者不会错位。

use crate::error::{BuildError, Result};
use crate::fragment::Fragment;
use crate::value::SqlValue;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: Vec<SqlValue>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add：追加一个参数并返回对应的占位符（`$1/$2/...`）。
    pub fn add(&mut self, value: impl Into<SqlValue>) -> String {
        self.values.push(value.into());
        placeholder(self.values.len())
    }

    /// 下一个参数会得到的序号（1 起）。
    pub fn next_position(&self) -> usize {
        self.values.len() + 1
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// 追加片段的参数，返回片段文本。
    ///
    /// 片段的首个占位符必须正好是下一个空闲序号。
    pub fn append_fragment<'a>(&mut self, fragment: &'a Fragment) -> Result<&'a str> {
        let expected = self.next_position();
        if fragment.start() != expected {
            return Err(BuildError::PlaceholderMismatch {
                expected,
                found: fragment.start(),
            });
        }
        self.values.extend(fragment.values().iter().cloned());
        Ok(fragment.clause())
    }

    pub fn into_values(self) -> Vec<SqlValue> {
        self.values
    }
}

pub(crate) fn placeholder(position: usize) -> String {
    format!("${position}")
}
