#[cfg(test)]
mod tests {
    use crate::job::{Job, JobFilter, Jobs, NewJob, filter_aliases};
    use crate::{BuildError, SqlValue, field_map};
    use pretty_assertions::assert_eq;

    const RETURNING: &str = r#"id, title, salary, equity, company_handle AS "companyHandle""#;

    #[test]
    fn create_job() {
        let j: NewJob = serde_json::from_str(
            r#"{"title": "new", "salary": 50000, "equity": "0", "company_handle": "c1"}"#,
        )
        .unwrap();
        let stmt = Jobs::new().create(&j).unwrap();
        assert_eq!(
            stmt.sql,
            format!(
                "INSERT INTO jobs (title, salary, equity, company_handle) \
                 VALUES ($1, $2, $3, $4) RETURNING {RETURNING}"
            )
        );
        assert_eq!(
            stmt.values,
            vec![
                SqlValue::from("new"),
                SqlValue::I64(50000),
                SqlValue::from("0"),
                SqlValue::from("c1"),
            ]
        );
    }

    #[test]
    fn find_all_jobs() {
        let stmt = Jobs::new().find_all().unwrap();
        assert_eq!(stmt.sql, format!("SELECT {RETURNING} FROM jobs ORDER BY title"));
    }

    #[test]
    fn filter_title_salary_company() {
        let f: JobFilter = serde_json::from_str(
            r#"{"title": "J1", "minSalary": 1, "companyHandle": "c1"}"#,
        )
        .unwrap();
        let stmt = Jobs::new().filter(&f).unwrap();
        assert_eq!(
            stmt.sql,
            format!(
                "SELECT {RETURNING} FROM jobs \
                 WHERE title ILIKE $1 AND salary >= $2 AND company_handle = $3 ORDER BY title"
            )
        );
        assert_eq!(
            stmt.values,
            vec![SqlValue::from("%J1%"), SqlValue::I64(1), SqlValue::from("c1")]
        );
    }

    #[test]
    fn filter_exact_salary() {
        let f: JobFilter = serde_json::from_str(r#"{"salary": 1}"#).unwrap();
        let stmt = Jobs::new().filter(&f).unwrap();
        assert_eq!(
            stmt.sql,
            format!("SELECT {RETURNING} FROM jobs WHERE salary = $1 ORDER BY title")
        );
        assert_eq!(stmt.values, vec![SqlValue::I64(1)]);
    }

    #[test]
    fn filter_exact_and_min_salary() {
        let f: JobFilter =
            serde_json::from_str(r#"{"salary": 5, "minSalary": 1}"#).unwrap();
        let stmt = Jobs::new().filter(&f).unwrap();
        assert_eq!(
            stmt.sql,
            format!("SELECT {RETURNING} FROM jobs WHERE salary = $1 AND salary >= $2 ORDER BY title")
        );
        assert_eq!(stmt.values, vec![SqlValue::I64(5), SqlValue::I64(1)]);
    }

    #[test]
    fn filter_requires_criteria() {
        assert!(JobFilter::default().is_empty());
        assert_eq!(
            Jobs::new().filter(&JobFilter::default()),
            Err(BuildError::NoData)
        );
    }

    #[test]
    fn filter_rejects_company_criteria() {
        let r: Result<JobFilter, _> = serde_json::from_str(r#"{"minEmployees": 1}"#);
        assert!(r.is_err());
    }

    #[test]
    fn get_by_id() {
        let stmt = Jobs::new().get(11).unwrap();
        assert_eq!(stmt.sql, format!("SELECT {RETURNING} FROM jobs WHERE id = $1"));
        assert_eq!(stmt.values, vec![SqlValue::I64(11)]);
    }

    #[test]
    fn update_salary_and_equity() {
        let fields = field_map! { "salary" => 40_i64, "equity" => "0.5" };
        let stmt = Jobs::new().update(11, &fields).unwrap();
        assert_eq!(
            stmt.sql,
            format!(
                r#"UPDATE jobs SET "salary"=$1, "equity"=$2 WHERE id = $3 RETURNING {RETURNING}"#
            )
        );
        assert_eq!(
            stmt.values,
            vec![SqlValue::I64(40), SqlValue::from("0.5"), SqlValue::I64(11)]
        );
    }

    #[test]
    fn update_can_set_nulls() {
        let fields = field_map! { "salary" => SqlValue::Null, "equity" => SqlValue::Null };
        let stmt = Jobs::new().update(11, &fields).unwrap();
        assert_eq!(
            stmt.values,
            vec![SqlValue::Null, SqlValue::Null, SqlValue::I64(11)]
        );
    }

    #[test]
    fn update_rejects_title_change() {
        let fields = field_map! { "title" => "newTitle" };
        assert_eq!(
            Jobs::new().update(11, &fields),
            Err(BuildError::UnknownField("title".to_string()))
        );
    }

    #[test]
    fn update_with_no_data() {
        assert_eq!(
            Jobs::new().update(11, &field_map! {}),
            Err(BuildError::NoData)
        );
    }

    #[test]
    fn remove_job() {
        let stmt = Jobs::new().remove(3).unwrap();
        assert_eq!(stmt.sql, "DELETE FROM jobs WHERE id = $1 RETURNING id");
        assert_eq!(stmt.values, vec![SqlValue::I64(3)]);
    }

    #[test]
    fn filter_aliases_cover_equality_keys() {
        let a = filter_aliases();
        assert_eq!(a.len(), 2);
        assert_eq!(a.get("salary"), Some("salary"));
        assert_eq!(a.get("companyHandle"), Some("company_handle"));
    }

    #[test]
    fn job_row_uses_camel_case_handle() {
        let j: Job = serde_json::from_str(
            r#"{"id": 1, "title": "J1", "salary": 1, "equity": "0.1", "companyHandle": "c1"}"#,
        )
        .unwrap();
        assert_eq!(j.company_handle, "c1");
        assert_eq!(j.equity.as_deref(), Some("0.1"));
    }
}
