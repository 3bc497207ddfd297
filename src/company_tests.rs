#[cfg(test)]
mod tests {
    use crate::company::{Companies, Company, CompanyFilter, NewCompany, update_aliases};
    use crate::{BuildError, BuilderConfig, FieldMap, SqlValue, field_map};
    use pretty_assertions::assert_eq;

    const RETURNING: &str =
        r#"handle, name, description, num_employees AS "numEmployees", logo_url AS "logoUrl""#;

    #[test]
    fn create_company() {
        let c: NewCompany = serde_json::from_str(
            r#"{"handle": "new", "name": "New", "description": "DescNew", "numEmployees": 10}"#,
        )
        .unwrap();
        let stmt = Companies::new().create(&c).unwrap();
        assert_eq!(
            stmt.sql,
            format!(
                "INSERT INTO companies (handle, name, description, num_employees, logo_url) \
                 VALUES ($1, $2, $3, $4, $5) RETURNING {RETURNING}"
            )
        );
        assert_eq!(
            stmt.values,
            vec![
                SqlValue::from("new"),
                SqlValue::from("New"),
                SqlValue::from("DescNew"),
                SqlValue::I64(10),
                SqlValue::Null,
            ]
        );
    }

    #[test]
    fn find_all_orders_by_name() {
        let stmt = Companies::new().find_all().unwrap();
        assert_eq!(
            stmt.sql,
            format!("SELECT {RETURNING} FROM companies ORDER BY name")
        );
        assert!(stmt.values.is_empty());
    }

    #[test]
    fn filter_from_query() {
        let f: CompanyFilter =
            serde_json::from_str(r#"{"name": "bauer", "minEmployees": 5, "maxEmployees": 20}"#)
                .unwrap();
        let stmt = Companies::new().filter(&f).unwrap();
        assert_eq!(
            stmt.sql,
            format!(
                "SELECT {RETURNING} FROM companies \
                 WHERE name ILIKE $1 AND num_employees >= $2 AND num_employees <= $3 \
                 ORDER BY name"
            )
        );
        assert_eq!(
            stmt.values,
            vec![SqlValue::from("%bauer%"), SqlValue::I64(5), SqlValue::I64(20)]
        );
    }

    #[test]
    fn filter_rejects_inverted_range() {
        let f = CompanyFilter {
            min_employees: Some(50),
            max_employees: Some(10),
            ..CompanyFilter::default()
        };
        assert_eq!(
            Companies::new().filter(&f),
            Err(BuildError::EmployeeRange { min: 50, max: 10 })
        );
    }

    #[test]
    fn filter_equal_bounds_are_fine() {
        let f = CompanyFilter {
            min_employees: Some(10),
            max_employees: Some(10),
            ..CompanyFilter::default()
        };
        assert_eq!(f.validate(), Ok(()));
    }

    #[test]
    fn empty_filter_has_no_data() {
        let f = CompanyFilter::default();
        assert!(f.is_empty());
        assert_eq!(Companies::new().filter(&f), Err(BuildError::NoData));
    }

    #[test]
    fn filter_query_rejects_unknown_keys() {
        let r: Result<CompanyFilter, _> = serde_json::from_str(r#"{"nameLike": "x"}"#);
        assert!(r.is_err());
    }

    #[test]
    fn get_and_jobs_for() {
        let c = Companies::new();
        let stmt = c.get("c1").unwrap();
        assert_eq!(
            stmt.sql,
            format!("SELECT {RETURNING} FROM companies WHERE handle = $1")
        );
        assert_eq!(stmt.values, vec![SqlValue::from("c1")]);

        let stmt = c.jobs_for("c1").unwrap();
        assert_eq!(
            stmt.sql,
            "SELECT id, title, salary, equity FROM jobs WHERE company_handle = $1 ORDER BY id"
        );
    }

    #[test]
    fn update_partial() {
        let fields = field_map! { "name" => "New", "numEmployees" => SqlValue::Null };
        let stmt = Companies::new().update("c1", &fields).unwrap();
        assert_eq!(
            stmt.sql,
            format!(
                r#"UPDATE companies SET "name"=$1, "num_employees"=$2 WHERE handle = $3 RETURNING {RETURNING}"#
            )
        );
        assert_eq!(
            stmt.values,
            vec![SqlValue::from("New"), SqlValue::Null, SqlValue::from("c1")]
        );
    }

    #[test]
    fn update_rejects_handle_change() {
        let fields = field_map! { "handle" => "c1-new" };
        assert_eq!(
            Companies::new().update("c1", &fields),
            Err(BuildError::UnknownField("handle".to_string()))
        );
    }

    #[test]
    fn update_lenient_config_passes_through() {
        let c = Companies::with_config(BuilderConfig::new());
        let stmt = c.update("c1", &field_map! { "handle" => "c9" }).unwrap();
        assert!(stmt.sql.starts_with(r#"UPDATE companies SET "handle"=$1 WHERE handle = $2"#));
    }

    #[test]
    fn update_no_data() {
        assert_eq!(
            Companies::new().update("c1", &FieldMap::new()),
            Err(BuildError::NoData)
        );
    }

    #[test]
    fn update_from_json_body() {
        let body = serde_json::json!({"logoUrl": "http://new.img", "description": "D"});
        let fields = FieldMap::try_from(body).unwrap();
        let stmt = Companies::new().update("c2", &fields).unwrap();
        assert!(stmt.sql.contains(r#"SET "logo_url"=$1, "description"=$2 WHERE handle = $3"#));
    }

    #[test]
    fn remove_company() {
        let stmt = Companies::new().remove("c1").unwrap();
        assert_eq!(
            stmt.sql,
            "DELETE FROM companies WHERE handle = $1 RETURNING handle"
        );
    }

    #[test]
    fn update_aliases_cover_updatable_fields() {
        let a = update_aliases();
        assert_eq!(a.get("numEmployees"), Some("num_employees"));
        assert_eq!(a.get("logoUrl"), Some("logo_url"));
        assert!(!a.contains("handle"));
    }

    #[test]
    fn company_row_round_trips_camel_case() {
        let c = Company {
            handle: "c1".into(),
            name: "C1".into(),
            description: "Desc1".into(),
            num_employees: Some(1),
            logo_url: None,
        };
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["numEmployees"], 1);
        assert!(json["logoUrl"].is_null());
    }
}
