//! InsertBuilder：单行 `INSERT INTO <table> (cols) VALUES ($1, ...) RETURNING ...`。

use crate::aliases::check_ident;
use crate::args::Args;
use crate::error::{BuildError, Result};
use crate::macros::{IntoStrings, collect_into_strings};
use crate::statement::{Builder, Statement, write_list};
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

#[derive(Debug, Clone, Default)]
pub struct InsertBuilder {
    table: String,
    cols: Vec<String>,
    values: Vec<SqlValue>,
    returning: Vec<String>,
}

impl InsertBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_into(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = table.into();
        self
    }

    /// 追加一列及其值；列与值成对出现，不会错位。
    pub fn value(&mut self, col: impl Into<String>, value: impl Into<SqlValue>) -> &mut Self {
        self.cols.push(col.into());
        self.values.push(value.into());
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

impl Builder for InsertBuilder {
    fn build(&self) -> Result<Statement> {
        if self.cols.is_empty() {
            return Err(BuildError::NoData);
        }

        let mut args = Args::new();
        let mut placeholders = Vec::with_capacity(self.values.len());
        for (col, value) in self.cols.iter().zip(&self.values) {
            check_ident(col)?;
            placeholders.push(args.add(value.clone()));
        }

        let mut buf = StringBuilder::new();
        buf.write_leading("INSERT INTO");
        buf.write_str(" ");
        buf.write_str(&self.table);
        buf.write_str(" (");
        buf.write_strings(&self.cols, ", ");
        buf.write_str(")");
        buf.write_leading("VALUES");
        buf.write_str(" (");
        buf.write_strings(&placeholders, ", ");
        buf.write_str(")");
        write_list(&mut buf, "RETURNING", &self.returning);

        Ok(Statement {
            sql: buf.into_string(),
            values: args.into_values(),
        })
    }
}
