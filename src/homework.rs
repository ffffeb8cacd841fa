// src/homework.rs
//! Validation of the homework API payload and rendering of status messages.
//!
//! The API is third-party and loosely documented, so nothing is read from the
//! decoded JSON without first checking that it exists and has the right type.

use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::verdict::Verdict;

/// JSON type name used in schema error messages.
pub fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check the top-level response and return its `homeworks` array unchanged.
pub fn check_response(response: &Value) -> Result<&[Value], SchemaError> {
    tracing::debug!("checking API response shape");

    let obj = response.as_object().ok_or(SchemaError::NotAMapping {
        found: json_type_name(response),
    })?;
    let homeworks = obj
        .get("homeworks")
        .ok_or(SchemaError::MissingKey("homeworks"))?;
    if !obj.contains_key("current_date") {
        return Err(SchemaError::MissingKey("current_date"));
    }
    let list = homeworks.as_array().ok_or(SchemaError::WrongType {
        key: "homeworks",
        expected: "array",
        found: json_type_name(homeworks),
    })?;

    tracing::debug!(count = list.len(), "API response shape ok");
    Ok(list)
}

/// Typed view of one homework record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkStatus {
    pub homework_name: String,
    pub verdict: Verdict,
    pub reviewer_comment: String,
}

impl HomeworkStatus {
    /// Notification body, HTML parse mode.
    pub fn render(&self) -> String {
        format!(
            "<b>Изменился статус проверки работы:</b> \n\n\"{}\".\n\n{}\n\n<b>Комментарий ревьюера:</b> \n\n<i>{}</i>",
            self.homework_name,
            self.verdict.text(),
            self.reviewer_comment
        )
    }
}

// Strings verbatim, anything else as its JSON text.
fn status_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn string_field<'a>(
    obj: &'a Map<String, Value>,
    key: &'static str,
) -> Result<Option<&'a str>, SchemaError> {
    match obj.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(SchemaError::WrongType {
            key,
            expected: "string",
            found: json_type_name(other),
        }),
    }
}

/// Decode one record. A missing `status` wins over a missing `homework_name`,
/// and any status outside the verdict table is `UnknownVerdict` regardless of
/// the other fields.
///
/// A missing or `null` `reviewer_comment` becomes an empty comment.
pub fn parse_status(record: &Value) -> Result<HomeworkStatus, SchemaError> {
    tracing::debug!("parsing homework record");

    let obj = record.as_object().ok_or(SchemaError::NotAMapping {
        found: json_type_name(record),
    })?;
    let status = obj.get("status").ok_or(SchemaError::MissingKey("status"))?;
    let verdict = match status {
        Value::String(s) => Verdict::from_keyword(s),
        _ => None,
    }
    .ok_or_else(|| SchemaError::UnknownVerdict(status_text(status)))?;
    let homework_name =
        string_field(obj, "homework_name")?.ok_or(SchemaError::MissingKey("homework_name"))?;
    let reviewer_comment = match obj.get("reviewer_comment") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(SchemaError::WrongType {
                key: "reviewer_comment",
                expected: "string",
                found: json_type_name(other),
            })
        }
    };

    tracing::debug!(homework = homework_name, status = verdict.keyword(), "new homework status");
    Ok(HomeworkStatus {
        homework_name: homework_name.to_string(),
        verdict,
        reviewer_comment,
    })
}

/// Validate one record and render it as a notification.
pub fn format_status(record: &Value) -> Result<String, SchemaError> {
    parse_status(record).map(|s| s.render())
}
