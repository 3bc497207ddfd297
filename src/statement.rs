//! Statement：完整 SQL 文本 + 有序参数，以及各语句 builder 共用的拼接逻辑。
//!
//! 表名与 RETURNING 列表由调用方（模型层）以常量给出，原样拼接；
//! 条件列名来自外部时必须先通过标识符校验。

use crate::aliases::check_ident;
use crate::args::Args;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;
use std::fmt;

/// 可直接交给驱动执行的语句。
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

impl Statement {
    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.values)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// 所有语句 builder 的统一出口。
pub trait Builder {
    fn build(&self) -> Result<Statement>;
}

/// 写入 `WHERE <fragment> AND <col> = $n ...`；片段总是排在最前。
pub(crate) fn write_where(
    buf: &mut StringBuilder,
    args: &mut Args,
    fragment: Option<&Fragment>,
    equals: &[(String, SqlValue)],
) -> Result<()> {
    let mut exprs = Vec::with_capacity(equals.len() + 1);
    if let Some(fragment) = fragment {
        exprs.push(args.append_fragment(fragment)?.to_string());
    }
    for (column, value) in equals {
        check_ident(column)?;
        let ph = args.add(value.clone());
        exprs.push(format!("{column} = {ph}"));
    }
    if exprs.iter().all(|s| s.is_empty()) {
        return Ok(());
    }
    buf.write_leading("WHERE");
    buf.write_str(" ");
    buf.write_strings(&exprs, " AND ");
    Ok(())
}

pub(crate) fn write_list(buf: &mut StringBuilder, keyword: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    buf.write_leading(keyword);
    buf.write_str(" ");
    buf.write_strings(items, ", ");
}
