//! 过滤条件表：criterion key → {列, 运算符, 值变换}。
//!
//! 新的可过滤字段通过扩展表来添加，而不是改控制流。

use crate::error::{BuildError, Result};
use crate::value::SqlValue;

/// 过滤运算符，同时决定值如何变换。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// 大小写不敏感的子串匹配：`ILIKE`，值两侧包上 `%`。
    Contains,
    /// `>=`，值原样。
    AtLeast,
    /// `<=`，值原样。
    AtMost,
    /// `=`，值原样。
    Equals,
}

impl FilterOp {
    pub fn operator(self) -> &'static str {
        match self {
            Self::Contains => "ILIKE",
            Self::AtLeast => ">=",
            Self::AtMost => "<=",
            Self::Equals => "=",
        }
    }

    /// 生成 `<column> <op> <placeholder>`。
    pub fn term(self, column: &str, placeholder: &str) -> String {
        format!("{column} {} {placeholder}", self.operator())
    }

    /// 按运算符变换绑定值。`key` 仅用于错误信息。
    pub fn transform(self, key: &str, value: &SqlValue, escape_wildcards: bool) -> Result<SqlValue> {
        match self {
            Self::Contains => {
                let text = value
                    .as_text()
                    .ok_or_else(|| BuildError::invalid_value(key, "a text value"))?;
                let text = if escape_wildcards {
                    escape_like(&text)
                } else {
                    text.into_owned()
                };
                Ok(SqlValue::from(format!("%{text}%")))
            }
            Self::AtLeast | Self::AtMost | Self::Equals => Ok(value.clone()),
        }
    }
}

fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRule {
    pub key: String,
    pub column: String,
    pub op: FilterOp,
}

impl FilterRule {
    pub fn new(key: impl Into<String>, column: impl Into<String>, op: FilterOp) -> Self {
        Self {
            key: key.into(),
            column: column.into(),
            op,
        }
    }
}

/// 封闭的过滤规则表。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTable {
    rules: Vec<FilterRule>,
}

impl Default for FilterTable {
    fn default() -> Self {
        Self::companies()
    }
}

impl FilterTable {
    /// 不含任何内置规则：只有别名中的字段可用（等值匹配）。
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// 公司搜索：`name`、`minEmployees`、`maxEmployees`。
    pub fn companies() -> Self {
        Self::empty()
            .with_rule(FilterRule::new("name", "name", FilterOp::Contains))
            .with_rule(FilterRule::new("minEmployees", "num_employees", FilterOp::AtLeast))
            .with_rule(FilterRule::new("maxEmployees", "num_employees", FilterOp::AtMost))
    }

    /// 职位搜索：`title`、`minSalary`。
    pub fn jobs() -> Self {
        Self::empty()
            .with_rule(FilterRule::new("title", "title", FilterOp::Contains))
            .with_rule(FilterRule::new("minSalary", "salary", FilterOp::AtLeast))
    }

    /// 追加规则；同名 key 替换旧规则。
    pub fn with_rule(mut self, rule: FilterRule) -> Self {
        match self.rules.iter_mut().find(|r| r.key == rule.key) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&FilterRule> {
        self.rules.iter().find(|r| r.key == key)
    }

    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }
}
