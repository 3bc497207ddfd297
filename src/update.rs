//! UpdateBuilder：`UPDATE <table> SET <fragment> WHERE <id> = $<n> RETURNING ...`。

use crate::args::Args;
use crate::error::{BuildError, Result};
use crate::fragment::Fragment;
use crate::macros::{IntoStrings, collect_into_strings};
use crate::statement::{Builder, Statement, write_list, write_where};
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

#[derive(Debug, Clone, Default)]
pub struct UpdateBuilder {
    table: String,
    set: Option<Fragment>,
    equals: Vec<(String, SqlValue)>,
    returning: Vec<String>,
}

impl UpdateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = table.into();
        self
    }

    /// 设置 SET 片段；片段须从 `$1` 开始编号。
    pub fn set(&mut self, fragment: Fragment) -> &mut Self {
        self.set = Some(fragment);
        self
    }

    pub fn where_eq(&mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> &mut Self {
        self.equals.push((column.into(), value.into()));
        self
    }

    pub fn returning<T>(&mut self, cols: T) -> &mut Self
    where
        T: IntoStrings,
    {
        self.returning = collect_into_strings(cols);
        self
    }
}

impl Builder for UpdateBuilder {
    fn build(&self) -> Result<Statement> {
        let set = self.set.as_ref().ok_or(BuildError::NoData)?;
        // 不允许无条件更新整表
        if self.equals.is_empty() {
            return Err(BuildError::NoData);
        }

        let mut args = Args::new();
        let mut buf = StringBuilder::new();
        buf.write_leading("UPDATE");
        buf.write_str(" ");
        buf.write_str(&self.table);

        buf.write_leading("SET");
        buf.write_str(" ");
        buf.write_str(args.append_fragment(set)?);

        write_where(&mut buf, &mut args, None, &self.equals)?;
        write_list(&mut buf, "RETURNING", &self.returning);

        Ok(Statement {
            sql: buf.into_string(),
            values: args.into_values(),
        })
    }
}
