//! DeleteBuilder：`DELETE FROM <table> WHERE ... RETURNING ...`。

use crate::args::Args;
use crate::error::{BuildError, Result};
use crate::macros::{IntoStrings, collect_into_strings};
use crate::statement::{Builder, Statement, write_list, write_where};
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

#[derive(Debug, Clone, Default)]
pub struct DeleteBuilder {
    table: String,
    equals: Vec<(String, SqlValue)>,
    returning: Vec<String>,
}

impl DeleteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delete_from(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = table.into();
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

impl Builder for DeleteBuilder {
    fn build(&self) -> Result<Statement> {
        // 不允许无条件删除整表
        if self.equals.is_empty() {
            return Err(BuildError::NoData);
        }

        let mut args = Args::new();
        let mut buf = StringBuilder::new();
        buf.write_leading("DELETE FROM");
        buf.write_str(" ");
        buf.write_str(&self.table);
        write_where(&mut buf, &mut args, None, &self.equals)?;
        write_list(&mut buf, "RETURNING", &self.returning);

        Ok(Statement {
            sql: buf.into_string(),
            values: args.into_values(),
        })
    }
}
