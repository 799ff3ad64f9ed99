//! Lenient JSON intake for collaborator-authored data.
//!
//! The narrative layer hands the core JSON it wrote itself: mutation lists,
//! quest and location definitions, intent records and skill rulings. A bad
//! entry inside a list is reported and skipped; only a document that cannot
//! be read at all is an error.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::action::SkillRuling;
use crate::error::{ErrorSeverity, GameError};
use crate::intent::Intent;
use crate::mutation::{MalformedEntry, Mutation, MutationReport, apply_decoded};
use crate::state::{GameState, Location, Quest};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },

    #[error("missing field '{0}'")]
    MissingField(&'static str),
}

impl GameError for DecodeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Json(_) => "DECODE_JSON",
            Self::UnexpectedShape { .. } => "DECODE_UNEXPECTED_SHAPE",
            Self::MissingField(_) => "DECODE_MISSING_FIELD",
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn into_array(value: Value) -> Result<Vec<Value>, DecodeError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(DecodeError::UnexpectedShape {
            expected: "array",
            found: kind_of(&other),
        }),
    }
}

fn into_object(value: Value) -> Result<Map<String, Value>, DecodeError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::UnexpectedShape {
            expected: "object",
            found: kind_of(&other),
        }),
    }
}

/// Decodes one mutation entry, keeping the op tag for reporting on failure.
pub fn decode_mutation(value: Value) -> Result<Mutation, MalformedEntry> {
    let op = value.get("op").and_then(Value::as_str).map(str::to_string);
    serde_json::from_value(value).map_err(|error| MalformedEntry {
        op,
        reason: error.to_string(),
    })
}

fn decode_mutation_list(value: Value) -> Result<Vec<Result<Mutation, MalformedEntry>>, DecodeError> {
    Ok(into_array(value)?.into_iter().map(decode_mutation).collect())
}

/// Decodes an authored mutation list entry by entry.
pub fn decode_mutations(json: &str) -> Result<Vec<Result<Mutation, MalformedEntry>>, DecodeError> {
    decode_mutation_list(serde_json::from_str(json)?)
}

/// Decodes and applies an authored mutation list.
///
/// Malformed entries appear in the report in their original position.
pub fn apply_authored(state: &mut GameState, json: &str) -> Result<MutationReport, DecodeError> {
    let entries = decode_mutations(json)?;
    Ok(apply_decoded(state, entries))
}

pub fn decode_quest(json: &str) -> Result<Quest, DecodeError> {
    let quest: Quest = serde_json::from_str(json)?;
    if quest.id.trim().is_empty() {
        return Err(DecodeError::MissingField("id"));
    }
    Ok(quest)
}

pub fn decode_location(json: &str) -> Result<Location, DecodeError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads an intent record, tolerating the looseness of generated JSON.
///
/// Numbers given as strings are parsed, `null` reads as absent, and fields
/// the record does not define are kept as strings in `extra`.
pub fn decode_intent(json: &str) -> Result<Intent, DecodeError> {
    let mut fields = into_object(serde_json::from_str(json)?)?;
    let tag = fields
        .remove("intent")
        .as_ref()
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(DecodeError::MissingField("intent"))?;

    let mut intent = Intent::new(tag.as_str());
    intent.target = take_string(&mut fields, "target");
    intent.recipient = take_string(&mut fields, "recipient");
    intent.target_on = take_string(&mut fields, "target_on");
    intent.skill = take_string(&mut fields, "skill");
    intent.duration = take_integer(&mut fields, "duration");
    intent.dc = take_integer(&mut fields, "dc").and_then(|dc| i32::try_from(dc).ok());
    intent.action_description = take_string(&mut fields, "action_description").unwrap_or_default();
    intent.extra = fields
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key, stringify(value)))
        .collect::<BTreeMap<_, _>>();
    Ok(intent)
}

/// Reads a referee ruling; consequence lists decode entry by entry.
pub fn decode_skill_ruling(json: &str) -> Result<SkillRuling, DecodeError> {
    let mut fields = into_object(serde_json::from_str(json)?)?;
    let is_possible = fields
        .remove("is_possible")
        .and_then(|v| v.as_bool())
        .unwrap_or(true);

    let mut consequences = |key: &str| -> Result<Vec<Result<Mutation, MalformedEntry>>, DecodeError> {
        match fields.remove(key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(list) => decode_mutation_list(list),
        }
    };
    let on_success = consequences("on_success")?;
    let on_failure = consequences("on_failure")?;

    Ok(SkillRuling {
        is_possible,
        reasoning: take_string(&mut fields, "reasoning"),
        skill: take_string(&mut fields, "skill"),
        dc: take_integer(&mut fields, "dc").and_then(|dc| i32::try_from(dc).ok()),
        on_success,
        on_failure,
    })
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn take_integer(fields: &mut Map<String, Value>, key: &str) -> Option<i64> {
    match fields.remove(key)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn stringify(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
