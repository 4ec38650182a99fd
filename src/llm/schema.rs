// ABOUTME: Response schemas for structured AI output, in the Gemini schema dialect
// ABOUTME: The same schema constrains generation and validates the returned JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

//! # Response Schemas
//!
//! A [`ResponseSchema`] is sent with a generation request so the model answers
//! with JSON of a fixed shape. Models do not always comply, so the same schema
//! is checked again against the returned document with [`ResponseSchema::validate`].

use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};
use thiserror::Error;

/// Shape of a JSON value the model must produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseSchema {
    /// JSON string
    String,
    /// JSON integer (no fractional part)
    Integer,
    /// JSON array whose items all match the inner schema
    Array(Box<ResponseSchema>),
    /// JSON object with named properties
    Object(ObjectSchema),
}

/// Properties of an object schema, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectSchema {
    properties: Vec<(String, ResponseSchema)>,
    required: Vec<String>,
}

impl ObjectSchema {
    /// Empty object schema
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: Vec::new(),
            required: Vec::new(),
        }
    }

    /// Add a property that must be present
    #[must_use]
    pub fn required(mut self, name: impl Into<String>, schema: ResponseSchema) -> Self {
        let name = name.into();
        self.required.push(name.clone());
        self.properties.push((name, schema));
        self
    }

    /// Add a property that may be omitted
    #[must_use]
    pub fn optional(mut self, name: impl Into<String>, schema: ResponseSchema) -> Self {
        self.properties.push((name.into(), schema));
        self
    }

    /// Names of the required properties
    #[must_use]
    pub fn required_names(&self) -> &[String] {
        &self.required
    }

    fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

/// A returned document does not match the schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    /// A required property is absent
    #[error("missing required field '{path}'")]
    MissingField {
        /// Dotted path of the missing field
        path: String,
    },
    /// A value has the wrong JSON type
    #[error("field '{path}' should be {expected}, found {found}")]
    WrongType {
        /// Dotted path of the offending value (`$` for the root)
        path: String,
        /// Type the schema asks for
        expected: &'static str,
        /// Type actually present
        found: &'static str,
    },
}

impl ResponseSchema {
    /// Array of `items`
    #[must_use]
    pub fn array_of(items: Self) -> Self {
        Self::Array(Box::new(items))
    }

    /// Schema name used in Gemini's `type` field
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Integer => "INTEGER",
            Self::Array(_) => "ARRAY",
            Self::Object(_) => "OBJECT",
        }
    }

    /// Render as a Gemini `responseSchema` document
    #[must_use]
    pub fn to_gemini_json(&self) -> Value {
        match self {
            Self::String | Self::Integer => json!({ "type": self.type_name() }),
            Self::Array(items) => json!({
                "type": self.type_name(),
                "items": items.to_gemini_json(),
            }),
            Self::Object(object) => {
                let properties: Map<String, Value> = object
                    .properties
                    .iter()
                    .map(|(name, schema)| (name.clone(), schema.to_gemini_json()))
                    .collect();
                let ordering: Vec<&str> =
                    object.properties.iter().map(|(name, _)| name.as_str()).collect();
                json!({
                    "type": self.type_name(),
                    "properties": properties,
                    "required": object.required,
                    "propertyOrdering": ordering,
                })
            }
        }
    }

    /// Check a parsed document against this schema
    ///
    /// Extra object properties are ignored. Integers must not carry a
    /// fractional part.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaViolation`] found, depth first.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaViolation> {
        self.validate_at("$", value)
    }

    fn validate_at(&self, path: &str, value: &Value) -> Result<(), SchemaViolation> {
        match (self, value) {
            (Self::String, Value::String(_)) => Ok(()),
            (Self::Integer, Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(()),
            (Self::Array(items), Value::Array(values)) => {
                for (index, item) in values.iter().enumerate() {
                    items.validate_at(&format!("{path}[{index}]"), item)?;
                }
                Ok(())
            }
            (Self::Object(object), Value::Object(fields)) => {
                for (name, schema) in &object.properties {
                    let field_path = if path == "$" {
                        name.clone()
                    } else {
                        format!("{path}.{name}")
                    };
                    match fields.get(name) {
                        Some(Value::Null) | None if object.is_required(name) => {
                            return Err(SchemaViolation::MissingField { path: field_path });
                        }
                        Some(Value::Null) | None => {}
                        Some(field) => schema.validate_at(&field_path, field)?,
                    }
                }
                Ok(())
            }
            _ => Err(SchemaViolation::WrongType {
                path: path.to_owned(),
                expected: self.json_kind(),
                found: json_kind_of(value),
            }),
        }
    }

    const fn json_kind(&self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Integer => "an integer",
            Self::Array(_) => "an array",
            Self::Object(_) => "an object",
        }
    }
}

impl Serialize for ResponseSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_gemini_json().serialize(serializer)
    }
}

const fn json_kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Schema for a leftover recipe: `title`, `emoji`, `ingredients[]`, `steps[]`
#[must_use]
pub fn recipe_schema() -> ResponseSchema {
    ResponseSchema::Object(
        ObjectSchema::new()
            .required("title", ResponseSchema::String)
            .required("emoji", ResponseSchema::String)
            .required("ingredients", ResponseSchema::array_of(ResponseSchema::String))
            .required("steps", ResponseSchema::array_of(ResponseSchema::String)),
    )
}

/// Schema for a trivia question: `question`, `options[]`, `correctIndex`, `explanation`
#[must_use]
pub fn quiz_schema() -> ResponseSchema {
    ResponseSchema::Object(
        ObjectSchema::new()
            .required("question", ResponseSchema::String)
            .required("options", ResponseSchema::array_of(ResponseSchema::String))
            .required("correctIndex", ResponseSchema::Integer)
            .required("explanation", ResponseSchema::String),
    )
}
