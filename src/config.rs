//! 片段构建配置。

use serde::Deserialize;

/// 字段不在别名白名单中时的处理方式（只影响 UPDATE 片段；过滤条件总是拒绝未知 key）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFieldPolicy {
    /// 回退为字段名本身作为列名。
    #[default]
    PassThrough,
    /// 视为非法输入。
    Reject,
}

/// 片段构建配置。
///
/// 默认值对应宽松的更新行为；模型层改用 [`UnknownFieldPolicy::Reject`]。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub unknown_fields: UnknownFieldPolicy,
    /// 是否转义 ILIKE 值中的 `%`、`_` 和 `\`。
    pub escape_like_wildcards: bool,
}

impl BuilderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    /// `with_unknown_fields(UnknownFieldPolicy::Reject)` 的简写。
    pub fn reject_unknown_fields(self) -> Self {
        self.with_unknown_fields(UnknownFieldPolicy::Reject)
    }

    pub fn with_escape_like_wildcards(mut self, escape: bool) -> Self {
        self.escape_like_wildcards = escape;
        self
    }
}
