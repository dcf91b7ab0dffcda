//! # Request payloads and their validation
//!
//! Both auth payloads are parsed from a raw [`serde_json::Value`] rather than
//! deserialised directly, so that every problem in the body is reported
//! against the field it belongs to instead of failing on the first serde
//! error. The rules are shared with the client, which runs them before
//! submitting the sign-up form.
//!
//! | Field | Rule |
//! |-------|------|
//! | `email` | required string, a syntactically valid address ([`is_valid_email`]) |
//! | `password` | required string, at least [`MIN_PASSWORD_LEN`] characters |
//! | `name` | optional string (sign-up only) |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const MIN_PASSWORD_LEN: usize = 6;

/// A single validation problem, reported as part of a 400 response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// `POST /api/auth/signup` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SignUpRequest {
    pub fn from_json(value: &Value) -> Result<Self, Vec<FieldError>> {
        let object = as_object(value)?;
        let mut errors = Vec::new();

        let email = email_field(object, &mut errors);
        let password = password_field(object, &mut errors);
        let name = match object.get("name") {
            None => None,
            Some(Value::String(name)) => Some(name.clone()),
            Some(_) => {
                errors.push(FieldError::new("name", "Expected string"));
                None
            }
        };

        match (email, password) {
            (Some(email), Some(password)) if errors.is_empty() => Ok(Self {
                email,
                password,
                name,
            }),
            _ => Err(errors),
        }
    }

    /// Run the same checks on an already-typed request.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        Self::from_json(&serde_json::json!(self)).map(|_| ())
    }
}

/// Credential sign-in body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

impl CredentialsRequest {
    pub fn from_json(value: &Value) -> Result<Self, Vec<FieldError>> {
        let object = as_object(value)?;
        let mut errors = Vec::new();

        let email = email_field(object, &mut errors);
        let password = password_field(object, &mut errors);

        match (email, password) {
            (Some(email), Some(password)) => Ok(Self { email, password }),
            _ => Err(errors),
        }
    }
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, Vec<FieldError>> {
    value
        .as_object()
        .ok_or_else(|| vec![FieldError::new("body", "Expected object")])
}

fn email_field(object: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<String> {
    match object.get("email") {
        Some(Value::String(email)) if is_valid_email(email) => Some(email.clone()),
        Some(Value::String(_)) => {
            errors.push(FieldError::new("email", "Invalid email address"));
            None
        }
        None => {
            errors.push(FieldError::new("email", "Required"));
            None
        }
        Some(_) => {
            errors.push(FieldError::new("email", "Expected string"));
            None
        }
    }
}

fn password_field(object: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<String> {
    match object.get("password") {
        Some(Value::String(password)) if password.chars().count() >= MIN_PASSWORD_LEN => {
            Some(password.clone())
        }
        Some(Value::String(_)) => {
            errors.push(FieldError::new(
                "password",
                "Password must be at least 6 characters",
            ));
            None
        }
        None => {
            errors.push(FieldError::new("password", "Required"));
            None
        }
        Some(_) => {
            errors.push(FieldError::new("password", "Expected string"));
            None
        }
    }
}

/// Lowercased, trimmed form used as the user directory key.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Syntactic email check: `local@domain.tld`.
///
/// The local part may contain letters, digits and `_ ' + - .`, must not start
/// or end with a dot and must not contain `..`. The domain needs at least two
/// labels of letters, digits and hyphens (no leading hyphen) and an alphabetic
/// top-level label of two or more characters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    let local_ok = !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_'+-.".contains(c));
    if !local_ok {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        label
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));

    labels_ok && tld_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("first.last+habits@mail.example.org"));
        assert!(is_valid_email("o'neil@example.io"));
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "not-an-email",
            "@example.com",
            "ada@",
            "ada@example",
            "ada@@example.com",
            ".ada@example.com",
            "ada..l@example.com",
            "ada@-example.com",
            "ada@example.c",
            "ada@exa mple.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn test_signup_ok() {
        let req = SignUpRequest::from_json(&json!({
            "email": "ada@example.com",
            "password": "secret1",
        }))
        .unwrap();
        assert_eq!(req.email, "ada@example.com");
        assert!(req.name.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_signup_collects_all_errors() {
        let errors = SignUpRequest::from_json(&json!({
            "email": "nope",
            "password": "123",
            "name": 7,
        }))
        .unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["email", "password", "name"]);
        assert_eq!(errors[0].message, "Invalid email address");
    }

    #[test]
    fn test_signup_missing_fields() {
        let errors = SignUpRequest::from_json(&json!({})).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.message == "Required"));

        let errors = SignUpRequest::from_json(&json!(["ada@example.com"])).unwrap_err();
        assert_eq!(errors[0].field, "body");
    }

    #[test]
    fn test_credentials_request() {
        assert!(CredentialsRequest::from_json(&json!({
            "email": "ada@example.com",
            "password": "secret1",
        }))
        .is_ok());
        assert!(CredentialsRequest::from_json(&json!({
            "email": "ada@example.com",
            "password": "short",
        }))
        .is_err());
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
    }
}
