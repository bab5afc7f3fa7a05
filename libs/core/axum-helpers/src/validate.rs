//! Declarative request validation.
//!
//! Routes declare an ordered list of [`FieldRule`]s; the [`enforce_rules`]
//! middleware evaluates every rule against the incoming request and
//! short-circuits with `400 {"errors": [...]}` listing one entry per
//! violated rule. Rules are plain data, so a route's validation contract
//! is readable in one place and every rule is evaluated the same way.

use crate::errors::AppError;
use axum::{
    body::{to_bytes, Body},
    extract::{FromRequestParts, RawPathParams, Request},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Largest request body the validation middleware will buffer.
const BODY_LIMIT: usize = 1024 * 1024;

/// Where a rule looks for its field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// JSON request body
    Body,
    /// Path parameter
    Path,
}

impl Location {
    fn as_str(self) -> &'static str {
        match self {
            Location::Body => "body",
            Location::Path => "params",
        }
    }
}

/// Predicate applied to a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    /// Present, non-null, and not the empty string
    NotEmpty,
    /// A JSON number
    Numeric,
    /// A numeric value strictly greater than zero
    GreaterThanZero,
    /// A JSON boolean
    Boolean,
    /// Parses as an integer
    Integer,
}

/// One declarative validation rule: a field, where to find it, the check to
/// apply, and the message reported when the check fails.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub field: &'static str,
    pub location: Location,
    pub check: Check,
    pub message: &'static str,
}

impl FieldRule {
    /// Rule over a JSON body field.
    pub const fn body(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            field,
            location: Location::Body,
            check,
            message,
        }
    }

    /// Rule over a path parameter.
    pub const fn path(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            field,
            location: Location::Path,
            check,
            message,
        }
    }
}

/// A single failed rule, as reported to the client.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct RuleViolation {
    /// Field the rule applies to
    pub field: String,
    /// "body" or "params"
    pub location: String,
    /// Message declared on the rule
    pub msg: String,
}

/// Body returned when one or more rules fail.
///
/// # JSON Example
///
/// ```json
/// { "errors": [{ "field": "price", "location": "body", "msg": "Price must be a number" }] }
/// ```
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<RuleViolation>,
}

/// Evaluate every rule independently, in declaration order.
///
/// Returns one violation per failed rule; an empty vec means the request
/// passed. Missing fields fail every check except where noted on [`Check`].
pub fn evaluate(
    rules: &[FieldRule],
    params: &[(&str, &str)],
    body: &Value,
) -> Vec<RuleViolation> {
    rules
        .iter()
        .filter(|rule| {
            let passed = match rule.location {
                Location::Body => check_body(rule.check, body.get(rule.field)),
                Location::Path => check_param(
                    rule.check,
                    params
                        .iter()
                        .find(|(name, _)| *name == rule.field)
                        .map(|(_, value)| *value),
                ),
            };
            !passed
        })
        .map(|rule| RuleViolation {
            field: rule.field.to_string(),
            location: rule.location.as_str().to_string(),
            msg: rule.message.to_string(),
        })
        .collect()
}

fn check_body(check: Check, value: Option<&Value>) -> bool {
    match check {
        Check::NotEmpty => match value {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        },
        Check::Numeric => matches!(value, Some(Value::Number(_))),
        Check::GreaterThanZero => value.and_then(Value::as_f64).is_some_and(|n| n > 0.0),
        Check::Boolean => matches!(value, Some(Value::Bool(_))),
        Check::Integer => value.and_then(Value::as_i64).is_some(),
    }
}

fn check_param(check: Check, value: Option<&str>) -> bool {
    let Some(raw) = value else {
        return false;
    };

    match check {
        Check::NotEmpty => !raw.is_empty(),
        Check::Numeric => raw.parse::<f64>().is_ok(),
        Check::GreaterThanZero => raw.parse::<f64>().is_ok_and(|n| n > 0.0),
        Check::Boolean => raw.parse::<bool>().is_ok(),
        Check::Integer => raw.parse::<i64>().is_ok(),
    }
}

/// Middleware factory enforcing a rule list.
///
/// The returned middleware buffers the request body once, evaluates the
/// rules, and either responds `400` with every violation or passes the
/// request (body restored) to the next stage.
///
/// # Usage
///
/// ```ignore
/// use axum::{middleware, routing::post, Router};
/// use axum_helpers::validate::{enforce_rules, Check, FieldRule};
///
/// const CREATE: &[FieldRule] =
///     &[FieldRule::body("name", Check::NotEmpty, "Name cannot be empty")];
///
/// let app: Router = Router::new()
///     .route("/", post(create))
///     .layer(middleware::from_fn(enforce_rules(CREATE)));
/// ```
pub fn enforce_rules(
    rules: &'static [FieldRule],
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Response> + Send>>
+ Clone {
    move |req: Request, next: Next| Box::pin(enforce(rules, req, next))
}

async fn enforce(rules: &'static [FieldRule], req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    let raw_params = RawPathParams::from_request_parts(&mut parts, &()).await;
    let params: Vec<(&str, &str)> = raw_params
        .as_ref()
        .map(|p| p.iter().collect())
        .unwrap_or_default();

    let bytes = match to_bytes(body, BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return AppError::BadRequest("Failed to read request body".to_string()).into_response()
        }
    };

    let needs_body = rules.iter().any(|rule| rule.location == Location::Body);
    let body_json: Value = if needs_body && !bytes.is_empty() {
        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(_) => {
                return AppError::BadRequest("Request body must be valid JSON".to_string())
                    .into_response()
            }
        }
    } else {
        Value::Object(Default::default())
    };

    let errors = evaluate(rules, &params, &body_json);
    if !errors.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorResponse { errors }),
        )
            .into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RULES: &[FieldRule] = &[
        FieldRule::body("title", Check::NotEmpty, "Title cannot be empty"),
        FieldRule::body("amount", Check::Numeric, "Amount must be a number"),
        FieldRule::body("amount", Check::NotEmpty, "Amount cannot be empty"),
        FieldRule::body("amount", Check::GreaterThanZero, "Amount must be greater than 0"),
        FieldRule::body("active", Check::Boolean, "Active must be a boolean"),
    ];

    const ID_RULE: &[FieldRule] = &[FieldRule::path("id", Check::Integer, "ID must be a number")];

    #[test]
    fn empty_body_fails_every_rule() {
        let errors = evaluate(RULES, &[], &json!({}));
        assert_eq!(errors.len(), 5);
        assert_eq!(errors[0].msg, "Title cannot be empty");
        assert_eq!(errors[0].location, "body");
    }

    #[test]
    fn valid_body_passes() {
        let body = json!({ "title": "ok", "amount": 9.5, "active": true });
        assert!(evaluate(RULES, &[], &body).is_empty());
    }

    #[test]
    fn non_numeric_amount_fails_numeric_and_positive_checks() {
        let body = json!({ "title": "ok", "amount": "lots", "active": false });
        let errors = evaluate(RULES, &[], &body);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].msg, "Amount must be a number");
        assert_eq!(errors[1].msg, "Amount must be greater than 0");
    }

    #[test]
    fn zero_amount_fails_only_positive_check() {
        let body = json!({ "title": "ok", "amount": 0, "active": true });
        let errors = evaluate(RULES, &[], &body);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, "Amount must be greater than 0");
    }

    #[test]
    fn null_and_empty_string_count_as_empty() {
        let body = json!({ "title": "", "amount": null, "active": true });
        let errors = evaluate(RULES, &[], &body);
        assert!(errors.iter().any(|e| e.msg == "Title cannot be empty"));
        assert!(errors.iter().any(|e| e.msg == "Amount cannot be empty"));
    }

    #[test]
    fn integer_path_param() {
        assert!(evaluate(ID_RULE, &[("id", "42")], &json!({})).is_empty());

        let errors = evaluate(ID_RULE, &[("id", "hola")], &json!({}));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, "ID must be a number");
        assert_eq!(errors[0].location, "params");

        // fractional ids are not integers
        assert_eq!(evaluate(ID_RULE, &[("id", "1.5")], &json!({})).len(), 1);

        // missing param fails the rule
        assert_eq!(evaluate(ID_RULE, &[], &json!({})).len(), 1);
    }
}
