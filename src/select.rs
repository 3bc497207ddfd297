//! SelectBuilder：`SELECT <cols> FROM <table> [WHERE ...] [ORDER BY ...]`。

use crate::args::Args;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::macros::{IntoStrings, collect_into_strings};
use crate::statement::{Builder, Statement, write_list, write_where};
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

#[derive(Debug, Clone, Default)]
pub struct SelectBuilder {
    select_cols: Vec<String>,
    table: String,
    filter: Option<Fragment>,
    equals: Vec<(String, SqlValue)>,
    order_by_cols: Vec<String>,
}

impl SelectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select<T>(&mut self, cols: T) -> &mut Self
    where
        T: IntoStrings,
    {
        self.select_cols = collect_into_strings(cols);
        self
    }

    pub fn from(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = table.into();
        self
    }

    /// 设置过滤片段；总是放在 WHERE 的最前面，须从 `$1` 开始编号。
    pub fn filter(&mut self, fragment: Fragment) -> &mut Self {
        self.filter = Some(fragment);
        self
    }

    pub fn where_eq(&mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> &mut Self {
        self.equals.push((column.into(), value.into()));
        self
    }

    pub fn order_by<T>(&mut self, cols: T) -> &mut Self
    where
        T: IntoStrings,
    {
        self.order_by_cols = collect_into_strings(cols);
        self
    }
}

impl Builder for SelectBuilder {
    fn build(&self) -> Result<Statement> {
        let mut args = Args::new();
        let mut buf = StringBuilder::new();

        buf.write_leading("SELECT");
        buf.write_str(" ");
        if self.select_cols.is_empty() {
            buf.write_str("*");
        } else {
            buf.write_strings(&self.select_cols, ", ");
        }

        if !self.table.is_empty() {
            buf.write_leading("FROM");
            buf.write_str(" ");
            buf.write_str(&self.table);
        }

        write_where(&mut buf, &mut args, self.filter.as_ref(), &self.equals)?;
        write_list(&mut buf, "ORDER BY", &self.order_by_cols);

        Ok(Statement {
            sql: buf.into_string(),
            values: args.into_values(),
        })
    }
}
