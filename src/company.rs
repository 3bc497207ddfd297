//! 公司相关查询：把请求数据组合成可执行语句（不负责执行）。

use crate::aliases::ColumnAliases;
use crate::column_aliases;
use crate::config::BuilderConfig;
use crate::delete::DeleteBuilder;
use crate::error::{BuildError, Result};
use crate::field_map::FieldMap;
use crate::filter::FilterTable;
use crate::fragment::FragmentBuilder;
use crate::insert::InsertBuilder;
use crate::select::SelectBuilder;
use crate::statement::{Builder, Statement};
use crate::update::UpdateBuilder;
use serde::{Deserialize, Serialize};

const TABLE: &str = "companies";
const COLUMNS: [&str; 5] = [
    "handle",
    "name",
    "description",
    r#"num_employees AS "numEmployees""#,
    r#"logo_url AS "logoUrl""#,
];
const JOB_COLUMNS: [&str; 4] = ["id", "title", "salary", "equity"];

/// 一行公司数据（查询结果的 JSON 形态）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

/// 创建公司的请求体。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    pub handle: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub num_employees: Option<i32>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// 公司搜索条件（来自 query string）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyFilter {
    pub name: Option<String>,
    pub min_employees: Option<i64>,
    pub max_employees: Option<i64>,
}

impl CompanyFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.min_employees.is_none() && self.max_employees.is_none()
    }

    /// `minEmployees > maxEmployees` 视为非法请求，须在构建片段前拒绝。
    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_employees, self.max_employees)
            && min > max
        {
            return Err(BuildError::EmployeeRange { min, max });
        }
        Ok(())
    }

    pub fn to_criteria(&self) -> FieldMap {
        let mut criteria = FieldMap::new();
        if let Some(name) = &self.name {
            criteria.insert("name", name.clone());
        }
        if let Some(min) = self.min_employees {
            criteria.insert("minEmployees", min);
        }
        if let Some(max) = self.max_employees {
            criteria.insert("maxEmployees", max);
        }
        criteria
    }
}

/// 可更新字段白名单。`handle` 不可改。
pub fn update_aliases() -> ColumnAliases {
    column_aliases! {
        "name" => "name",
        "description" => "description",
        "numEmployees" => "num_employees",
        "logoUrl" => "logo_url",
    }
}

/// `companies` 表的查询组装。
#[derive(Debug, Clone)]
pub struct Companies {
    fragments: FragmentBuilder,
}

impl Default for Companies {
    fn default() -> Self {
        Self::with_config(BuilderConfig::new().reject_unknown_fields())
    }
}

impl Companies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            fragments: FragmentBuilder::new()
                .with_config(config)
                .with_filters(FilterTable::companies()),
        }
    }

    pub fn create(&self, company: &NewCompany) -> Result<Statement> {
        InsertBuilder::new()
            .insert_into(TABLE)
            .value("handle", company.handle.clone())
            .value("name", company.name.clone())
            .value("description", company.description.clone())
            .value("num_employees", company.num_employees)
            .value("logo_url", company.logo_url.clone())
            .returning(COLUMNS)
            .build()
    }

    pub fn find_all(&self) -> Result<Statement> {
        SelectBuilder::new()
            .select(COLUMNS)
            .from(TABLE)
            .order_by(["name"])
            .build()
    }

    /// 按条件搜索；空条件返回 [`BuildError::NoData`]，调用方应改用 [`Self::find_all`]。
    pub fn filter(&self, filter: &CompanyFilter) -> Result<Statement> {
        filter.validate()?;
        let fragment = self
            .fragments
            .filter(&filter.to_criteria(), &ColumnAliases::new())?;
        SelectBuilder::new()
            .select(COLUMNS)
            .from(TABLE)
            .filter(fragment)
            .order_by(["name"])
            .build()
    }

    pub fn get(&self, handle: &str) -> Result<Statement> {
        SelectBuilder::new()
            .select(COLUMNS)
            .from(TABLE)
            .where_eq("handle", handle.to_string())
            .build()
    }

    /// 公司详情页附带的职位列表。
    pub fn jobs_for(&self, handle: &str) -> Result<Statement> {
        SelectBuilder::new()
            .select(JOB_COLUMNS)
            .from("jobs")
            .where_eq("company_handle", handle.to_string())
            .order_by(["id"])
            .build()
    }

    /// 部分更新；`fields` 只能包含 [`update_aliases`] 中的字段。
    pub fn update(&self, handle: &str, fields: &FieldMap) -> Result<Statement> {
        let fragment = self.fragments.update(fields, &update_aliases())?;
        UpdateBuilder::new()
            .update(TABLE)
            .set(fragment)
            .where_eq("handle", handle.to_string())
            .returning(COLUMNS)
            .build()
    }

    pub fn remove(&self, handle: &str) -> Result<Statement> {
        DeleteBuilder::new()
            .delete_from(TABLE)
            .where_eq("handle", handle.to_string())
            .returning(["handle"])
            .build()
    }
}
