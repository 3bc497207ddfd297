//! 职位相关查询。

use crate::aliases::ColumnAliases;
use crate::column_aliases;
use crate::config::BuilderConfig;
use crate::delete::DeleteBuilder;
use crate::error::Result;
use crate::field_map::FieldMap;
use crate::filter::FilterTable;
use crate::fragment::FragmentBuilder;
use crate::insert::InsertBuilder;
use crate::select::SelectBuilder;
use crate::statement::{Builder, Statement};
use crate::update::UpdateBuilder;
use serde::{Deserialize, Serialize};

const TABLE: &str = "jobs";
const COLUMNS: [&str; 5] = [
    "id",
    "title",
    "salary",
    "equity",
    r#"company_handle AS "companyHandle""#,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub salary: Option<i64>,
    /// NUMERIC 列，按字符串传输以免丢精度。
    pub equity: Option<String>,
    pub company_handle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub equity: Option<String>,
    #[serde(alias = "company_handle")]
    pub company_handle: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobFilter {
    pub title: Option<String>,
    /// 精确匹配薪资。
    pub salary: Option<i64>,
    pub min_salary: Option<i64>,
    #[serde(alias = "company_handle")]
    pub company_handle: Option<String>,
}

impl JobFilter {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.salary.is_none()
            && self.min_salary.is_none()
            && self.company_handle.is_none()
    }

    pub fn to_criteria(&self) -> FieldMap {
        let mut criteria = FieldMap::new();
        if let Some(title) = &self.title {
            criteria.insert("title", title.clone());
        }
        if let Some(salary) = self.salary {
            criteria.insert("salary", salary);
        }
        if let Some(min) = self.min_salary {
            criteria.insert("minSalary", min);
        }
        if let Some(handle) = &self.company_handle {
            criteria.insert("companyHandle", handle.clone());
        }
        criteria
    }
}

/// 标题和所属公司创建后不可改。
pub fn update_aliases() -> ColumnAliases {
    column_aliases! {
        "salary" => "salary",
        "equity" => "equity",
    }
}

/// 过滤表之外的等值条件。
pub fn filter_aliases() -> ColumnAliases {
    column_aliases! {
        "salary" => "salary",
        "companyHandle" => "company_handle",
    }
}

#[derive(Debug, Clone)]
pub struct Jobs {
    fragments: FragmentBuilder,
}

impl Default for Jobs {
    fn default() -> Self {
        Self::with_config(BuilderConfig::new().reject_unknown_fields())
    }
}

impl Jobs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            fragments: FragmentBuilder::new()
                .with_config(config)
                .with_filters(FilterTable::jobs()),
        }
    }

    pub fn create(&self, job: &NewJob) -> Result<Statement> {
        InsertBuilder::new()
            .insert_into(TABLE)
            .value("title", job.title.clone())
            .value("salary", job.salary)
            .value("equity", job.equity.clone())
            .value("company_handle", job.company_handle.clone())
            .returning(COLUMNS)
            .build()
    }

    pub fn find_all(&self) -> Result<Statement> {
        SelectBuilder::new()
            .select(COLUMNS)
            .from(TABLE)
            .order_by(["title"])
            .build()
    }

    pub fn filter(&self, filter: &JobFilter) -> Result<Statement> {
        let fragment = self
            .fragments
            .filter(&filter.to_criteria(), &filter_aliases())?;
        SelectBuilder::new()
            .select(COLUMNS)
            .from(TABLE)
            .filter(fragment)
            .order_by(["title"])
            .build()
    }

    pub fn get(&self, id: i64) -> Result<Statement> {
        SelectBuilder::new()
            .select(COLUMNS)
            .from(TABLE)
            .where_eq("id", id)
            .build()
    }

    pub fn update(&self, id: i64, fields: &FieldMap) -> Result<Statement> {
        let fragment = self.fragments.update(fields, &update_aliases())?;
        UpdateBuilder::new()
            .update(TABLE)
            .set(fragment)
            .where_eq("id", id)
            .returning(COLUMNS)
            .build()
    }

    pub fn remove(&self, id: i64) -> Result<Statement> {
        DeleteBuilder::new()
            .delete_from(TABLE)
            .where_eq("id", id)
            .returning(["id"])
            .build()
    }
}
