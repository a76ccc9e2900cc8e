/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Input validation
//!
//! Every public API operation checks its arguments here before a request is
//! built. A failed check returns [`AppError::InvalidArgument`] whose message
//! names the field and the violated rule.

use crate::constants::{ALLOWED_FILE_TYPES, ALLOWED_MIME_TYPES, MAX_FILE_SIZE_BYTES};
use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;
use url::Url;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]{1,64}@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

/// Validation rule applied to a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidateType {
    /// A syntactically valid email address
    Email,
    /// A string that is non-empty after trimming
    Text,
    /// A password; strings must be non-empty after trimming
    Password,
    /// Any value; strings must be non-empty after trimming
    NotEmpty,
    /// A non-empty JSON object or array
    Array,
    /// An absolute URL with a host
    Url,
    /// Path to an existing CV file of an allowed type, at most 2MB
    File,
}

impl ValidateType {
    /// Wire name of the rule
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Text => "text",
            Self::Password => "password",
            Self::NotEmpty => "not_empty",
            Self::Array => "array",
            Self::Url => "url",
            Self::File => "file",
        }
    }
}

impl fmt::Display for ValidateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validates `value` against `rule`, naming `field` in the error message
///
/// # Examples
/// ```
/// use serde_json::json;
/// use talentscope_client::utils::validator::{validate, ValidateType};
///
/// assert!(validate("email", &json!("user@example.com"), ValidateType::Email).is_ok());
/// let err = validate("email", &json!("nope"), ValidateType::Email).unwrap_err();
/// assert_eq!(err.to_string(), "Invalid email address.");
/// ```
pub fn validate(field: &str, value: &Value, rule: ValidateType) -> Result<(), AppError> {
    let valid = match rule {
        ValidateType::Email => value.as_str().is_some_and(is_email),
        ValidateType::Text => value.as_str().is_some_and(|s| !s.trim().is_empty()),
        // Only strings are inspected; other JSON types pass.
        ValidateType::Password | ValidateType::NotEmpty => {
            value.as_str().is_none_or(|s| !s.trim().is_empty())
        }
        ValidateType::Array => match value {
            Value::Object(map) => !map.is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => false,
        },
        ValidateType::Url => value.as_str().is_some_and(is_absolute_url),
        ValidateType::File => value.as_str().is_some_and(|s| is_allowed_file(Path::new(s))),
    };

    if valid {
        Ok(())
    } else {
        Err(AppError::InvalidArgument(failure_message(field, rule)))
    }
}

/// Validates a set of fields in declaration order
///
/// Each rule requires its field to be present in `data`; the first rule that
/// fails determines the returned error.
pub fn validate_multiple(
    data: &Map<String, Value>,
    rules: &[(&str, ValidateType)],
) -> Result<(), AppError> {
    for (field, rule) in rules {
        let value = data.get(*field).ok_or_else(|| {
            AppError::InvalidArgument(format!("Missing required field: {field}"))
        })?;
        validate(field, value, *rule)?;
    }
    Ok(())
}

/// Builds the field map passed to [`validate_multiple`] from string arguments
#[must_use]
pub fn string_fields(fields: &[(&str, &str)]) -> Map<String, Value> {
    fields
        .iter()
        .map(|(name, value)| ((*name).to_string(), Value::String((*value).to_string())))
        .collect()
}

fn failure_message(field: &str, rule: ValidateType) -> String {
    match rule {
        ValidateType::Email => format!("Invalid {field} address."),
        ValidateType::Text => format!("{field} must be a non-empty string."),
        ValidateType::Password | ValidateType::NotEmpty => format!("{field} cannot be empty."),
        ValidateType::Array => format!("{field} must be a non-empty array."),
        ValidateType::Url => format!("Invalid {field} URL."),
        ValidateType::File => format!(
            "{field} must be a valid file of type {} and not exceed 2MB.",
            ALLOWED_FILE_TYPES.join(", ")
        ),
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, _)) = value.rsplit_once('@') else {
        return false;
    };
    EMAIL_REGEX.is_match(value)
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
}

fn is_absolute_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| url.has_host())
}

fn is_allowed_file(path: &Path) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() || metadata.len() > MAX_FILE_SIZE_BYTES {
        return false;
    }
    mime_guess::from_path(path)
        .iter()
        .any(|mime| ALLOWED_MIME_TYPES.contains(&mime.essence_str()))
}
