//! 动态查询片段：把部分更新 / 过滤请求翻译成参数化的 `SET` / `WHERE` 片段。
//!
//! 片段文本与参数按位置耦合：文本中第 N 个占位符对应 `values()[N - 1]`。
//! 两个构建函数都是纯函数，无共享状态，可并发调用。

use crate::aliases::{ColumnAliases, check_ident, quote};
use crate::args::placeholder;
use crate::config::{BuilderConfig, UnknownFieldPolicy};
use crate::error::{BuildError, Result};
use crate::field_map::FieldMap;
use crate::filter::{FilterOp, FilterTable};
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

/// 构建结果：片段文本 + 有序参数，不可变。
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    clause: String,
    values: Vec<SqlValue>,
    start: usize,
}

impl Fragment {
    /// 片段文本（`SET ` 或 `WHERE ` 之后的部分）。
    pub fn clause(&self) -> &str {
        &self.clause
    }

    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// 参数个数，等于片段中的占位符个数。
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 首个占位符的序号。
    pub fn start(&self) -> usize {
        self.start
    }

    /// 片段之后第一个空闲占位符序号，例如 UPDATE 的 `WHERE id = $<next>`。
    pub fn next_position(&self) -> usize {
        self.start.saturating_add(self.values.len())
    }

    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.clause, self.values)
    }
}

/// 按默认配置构建 UPDATE 的 SET 片段：`"<column>"=$1, "<column>"=$2, ...`。
///
/// 不在 `aliases` 中的字段以自身名字作为列名。`fields` 为空时返回 [`BuildError::NoData`]。
pub fn build_update_fragment(fields: &FieldMap, aliases: &ColumnAliases) -> Result<Fragment> {
    FragmentBuilder::new().update(fields, aliases)
}

/// 按默认配置（公司过滤表）构建 WHERE 片段：`<column> <op> $1 AND ...`。
///
/// 既不在过滤表也不在 `aliases` 中的 key 返回 [`BuildError::UnknownField`]。
pub fn build_filter_fragment(criteria: &FieldMap, aliases: &ColumnAliases) -> Result<Fragment> {
    FragmentBuilder::new().filter(criteria, aliases)
}

/// 可配置的片段构建器。
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentBuilder {
    config: BuilderConfig,
    filters: FilterTable,
    start: usize,
}

impl Default for FragmentBuilder {
    fn default() -> Self {
        Self {
            config: BuilderConfig::default(),
            filters: FilterTable::default(),
            start: 1,
        }
    }
}

impl FragmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: BuilderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_filters(mut self, filters: FilterTable) -> Self {
        self.filters = filters;
        self
    }

    /// 从 `$<position>` 开始编号（小于 1 按 1 处理）。
    pub fn starting_at(mut self, position: usize) -> Self {
        self.start = position.max(1);
        self
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn update(&self, fields: &FieldMap, aliases: &ColumnAliases) -> Result<Fragment> {
        if fields.is_empty() {
            tracing::debug!("rejecting update with no fields");
            return Err(BuildError::NoData);
        }
        self.check_room(fields.len())?;

        let mut terms = Vec::with_capacity(fields.len());
        let mut values = Vec::with_capacity(fields.len());
        for (field, value) in fields.iter() {
            if self.config.unknown_fields == UnknownFieldPolicy::Reject && !aliases.contains(field)
            {
                tracing::debug!(field, "rejecting field outside update allow-list");
                return Err(BuildError::UnknownField(field.to_string()));
            }
            let column = aliases
                .resolve(field)
                .inspect_err(|err| tracing::debug!(field, %err, "rejecting update field"))?;
            terms.push(format!(
                "{}={}",
                quote(column),
                placeholder(self.start + values.len())
            ));
            values.push(value.clone());
        }

        let fragment = self.finish(terms, ", ", values);
        tracing::debug!(
            clause = %fragment.clause,
            values = fragment.len(),
            "built update fragment"
        );
        Ok(fragment)
    }

    pub fn filter(&self, criteria: &FieldMap, aliases: &ColumnAliases) -> Result<Fragment> {
        if criteria.is_empty() {
            tracing::debug!("rejecting filter with no criteria");
            return Err(BuildError::NoData);
        }
        self.check_room(criteria.len())?;

        let mut terms = Vec::with_capacity(criteria.len());
        let mut values = Vec::with_capacity(criteria.len());
        for (key, value) in criteria.iter() {
            let (column, op) = match (self.filters.get(key), aliases.get(key)) {
                (Some(rule), alias) => (alias.unwrap_or(rule.column.as_str()), rule.op),
                (None, Some(column)) => (column, FilterOp::Equals),
                (None, None) => {
                    tracing::debug!(key, "rejecting unknown filter criterion");
                    return Err(BuildError::UnknownField(key.to_string()));
                }
            };
            let bound = check_ident(column)
                .and_then(|()| op.transform(key, value, self.config.escape_like_wildcards))
                .inspect_err(|err| tracing::debug!(key, %err, "rejecting filter criterion"))?;
            terms.push(op.term(column, &placeholder(self.start + values.len())));
            values.push(bound);
        }

        let fragment = self.finish(terms, " AND ", values);
        tracing::debug!(
            clause = %fragment.clause,
            values = fragment.len(),
            "built filter fragment"
        );
        Ok(fragment)
    }

    /// `count` 个占位符之后的下一个序号也必须能表示。
    fn check_room(&self, count: usize) -> Result<()> {
        match self.start.checked_add(count) {
            Some(_) => Ok(()),
            None => {
                tracing::debug!(start = self.start, count, "placeholder positions overflow");
                Err(BuildError::PlaceholderOverflow {
                    start: self.start,
                    count,
                })
            }
        }
    }

    fn finish(&self, terms: Vec<String>, sep: &str, values: Vec<SqlValue>) -> Fragment {
        let mut buf = StringBuilder::new();
        buf.write_strings(&terms, sep);
        Fragment {
            clause: buf.into_string(),
            values,
            start: self.start,
        }
    }
}
