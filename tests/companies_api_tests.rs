//! Contract tests for the company response and payload shapes.
//!
//! Handler round trips against a live database need DATABASE_URL set and the
//! schema from schema.sql loaded; the shapes below are what those endpoints
//! serialize, verified without one.

#[cfg(test)]
mod companies_api_tests {
    use biztime::models::company::{
        CompaniesEnvelope, Company, CompanyDetail, CompanyEnvelope, CompanyListItem,
        CreateCompanyRequest, UpdateCompanyRequest,
    };
    use serde_json::json;

    #[test]
    fn company_list_shape() {
        let envelope = CompaniesEnvelope {
            companies: vec![
                CompanyListItem {
                    code: "apple".to_string(),
                    name: "Apple".to_string(),
                },
                CompanyListItem {
                    code: "ibm".to_string(),
                    name: "IBM".to_string(),
                },
            ],
        };

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "companies": [
                    {"code": "apple", "name": "Apple"},
                    {"code": "ibm", "name": "IBM"},
                ]
            })
        );
    }

    #[test]
    fn empty_company_list_is_an_empty_array() {
        let envelope = CompaniesEnvelope { companies: vec![] };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({"companies": []}));
    }

    #[test]
    fn company_detail_embeds_invoice_ids() {
        let company = Company {
            code: "apple".to_string(),
            name: "Apple".to_string(),
            description: Some("Maker of iPhone".to_string()),
        };

        let detail = CompanyDetail::from_parts(company, vec![1, 2, 3]);
        let value = serde_json::to_value(CompanyEnvelope { company: detail }).unwrap();

        assert_eq!(
            value,
            json!({
                "company": {
                    "code": "apple",
                    "name": "Apple",
                    "description": "Maker of iPhone",
                    "invoices": [1, 2, 3],
                }
            })
        );
    }

    #[test]
    fn company_detail_with_no_invoices_keeps_the_empty_array() {
        let company = Company {
            code: "apple".to_string(),
            name: "Apple".to_string(),
            description: Some("Maker of iPhone".to_string()),
        };

        let detail = CompanyDetail::from_parts(company, vec![]);
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["invoices"], json!([]));
    }

    #[test]
    fn null_description_round_trips() {
        let company = Company {
            code: "ibm".to_string(),
            name: "IBM".to_string(),
            description: None,
        };

        let value = serde_json::to_value(&company).unwrap();
        assert_eq!(value["description"], serde_json::Value::Null);
    }

    #[test]
    fn create_payload_accepts_missing_description() {
        let payload: CreateCompanyRequest =
            serde_json::from_str(r#"{"code": "apple", "name": "Apple"}"#).unwrap();

        assert_eq!(payload.code, "apple");
        assert_eq!(payload.name, "Apple");
        assert_eq!(payload.description, None);
    }

    #[test]
    fn update_payload_never_carries_a_code() {
        let payload: UpdateCompanyRequest =
            serde_json::from_str(r#"{"name": "AppleEdit", "description": "New description"}"#)
                .unwrap();

        assert_eq!(payload.name, "AppleEdit");
        assert_eq!(payload.description.as_deref(), Some("New description"));
    }
}
