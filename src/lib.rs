//! jobly-sql-builder：把部分更新 / 过滤请求翻译成参数化 PostgreSQL 片段，
//! 并为公司、职位两张表组合出完整语句。

pub mod aliases;
pub mod args;
pub mod company;
#[cfg(test)]
mod company_tests;
pub mod config;
pub mod delete;
pub mod error;
pub mod field_map;
pub mod filter;
pub mod fragment;
pub mod insert;
pub mod job;
#[cfg(test)]
mod job_tests;
pub mod macros;
pub mod select;
pub mod statement;
mod string_builder;
pub mod update;
pub mod value;

pub use crate::aliases::{ColumnAliases, check_ident};
pub use crate::args::Args;
pub use crate::company::{Companies, Company, CompanyFilter, NewCompany};
pub use crate::config::{BuilderConfig, UnknownFieldPolicy};
pub use crate::delete::DeleteBuilder;
pub use crate::error::{BuildError, Result};
pub use crate::field_map::FieldMap;
pub use crate::filter::{FilterOp, FilterRule, FilterTable};
pub use crate::fragment::{Fragment, FragmentBuilder, build_filter_fragment, build_update_fragment};
pub use crate::insert::InsertBuilder;
pub use crate::job::{Job, JobFilter, Jobs, NewJob};
pub use crate::macros::IntoStrings;
pub use crate::select::SelectBuilder;
pub use crate::statement::{Builder, Statement};
pub use crate::update::UpdateBuilder;
pub use crate::value::SqlValue;
