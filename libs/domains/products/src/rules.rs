//! Per-route validation rule lists.
//!
//! Each route declares the ordered rules the [`axum_helpers::validate`]
//! middleware enforces before its handler runs. Every rule is checked
//! independently, so a response lists one entry per violated rule.

use axum_helpers::validate::{Check, FieldRule};

/// Routes addressing a single product: the path id must be an integer.
pub const PRODUCT_ID: &[FieldRule] =
    &[FieldRule::path("id", Check::Integer, "ID must be a number")];

/// `POST /products` body rules.
pub const CREATE_PRODUCT: &[FieldRule] = &[
    FieldRule::body("name", Check::NotEmpty, "Name cannot be empty"),
    FieldRule::body("price", Check::Numeric, "Price must be a number"),
    FieldRule::body("price", Check::NotEmpty, "Price cannot be empty"),
    FieldRule::body("price", Check::GreaterThanZero, "Price must be greater than 0"),
];

/// `PUT /products/{id}` rules: the id plus the full body overwrite.
pub const UPDATE_PRODUCT: &[FieldRule] = &[
    FieldRule::path("id", Check::Integer, "ID must be a number"),
    FieldRule::body("name", Check::NotEmpty, "Name cannot be empty"),
    FieldRule::body("price", Check::Numeric, "Price must be a number"),
    FieldRule::body("price", Check::NotEmpty, "Price cannot be empty"),
    FieldRule::body("price", Check::GreaterThanZero, "Price must be greater than 0"),
    FieldRule::body("availability", Check::Boolean, "Availability must be a boolean"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::validate::evaluate;
    use serde_json::json;

    #[test]
    fn create_rules_report_four_errors_for_an_empty_body() {
        let errors = evaluate(CREATE_PRODUCT, &[], &json!({}));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn create_rules_report_two_errors_for_a_non_numeric_price() {
        let body = json!({ "name": "Testing Price", "price": "Not a number" });
        let errors = evaluate(CREATE_PRODUCT, &[], &body);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].msg, "Price must be a number");
        assert_eq!(errors[1].msg, "Price must be greater than 0");
    }

    #[test]
    fn create_rules_report_one_error_for_a_zero_price() {
        let body = json!({ "name": "Testing Price", "price": 0 });
        let errors = evaluate(CREATE_PRODUCT, &[], &body);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, "Price must be greater than 0");
    }

    #[test]
    fn update_rules_report_five_errors_for_an_empty_body() {
        let errors = evaluate(UPDATE_PRODUCT, &[("id", "1")], &json!({}));
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn id_rule_rejects_non_numeric_ids() {
        let errors = evaluate(PRODUCT_ID, &[("id", "hola")], &json!({}));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, "ID must be a number");
    }
}
