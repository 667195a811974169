use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// What the registry publishes for each tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filler: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertySchema>,
    #[serde(default)]
    pub required: Vec<String>,
}

impl InputSchema {
    pub fn object() -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    pub fn property(mut self, name: &str, schema: PropertySchema, required: bool) -> Self {
        self.properties.insert(name.to_string(), schema);
        if required {
            self.required.push(name.to_string());
        }
        self
    }

    /// Checks required fields, value types and enum membership.
    pub fn validate(&self, args: &Value) -> Result<(), AppError> {
        let obj = match args {
            Value::Object(obj) => obj,
            Value::Null if self.required.is_empty() => return Ok(()),
            _ => {
                return Err(AppError::InvalidArguments(
                    "arguments must be a JSON object".to_string(),
                ))
            }
        };

        for required in &self.required {
            if !obj.contains_key(required) {
                return Err(AppError::InvalidArguments(format!(
                    "missing required field: {required}"
                )));
            }
        }

        for (name, value) in obj {
            if let Some(prop) = self.properties.get(name) {
                prop.validate(name, value)?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub prop_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl PropertySchema {
    pub fn string(description: impl Into<String>) -> Self {
        Self {
            prop_type: "string".to_string(),
            description: Some(description.into()),
            enum_values: None,
        }
    }

    pub fn enum_type(description: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            prop_type: "string".to_string(),
            description: Some(description.into()),
            enum_values: Some(values),
        }
    }

    fn validate(&self, name: &str, value: &Value) -> Result<(), AppError> {
        let type_ok = match self.prop_type.as_str() {
            "string" => value.is_string(),
            "number" => value.is_number(),
            "boolean" => value.is_boolean(),
            "array" => value.is_array(),
            "object" => value.is_object(),
            _ => true,
        };
        if !type_ok {
            return Err(AppError::InvalidArguments(format!(
                "field '{name}' must be of type '{}'",
                self.prop_type
            )));
        }

        if let (Some(allowed), Some(s)) = (&self.enum_values, value.as_str()) {
            if !allowed.iter().any(|v| v == s) {
                return Err(AppError::InvalidArguments(format!(
                    "field '{name}' must be one of: [{}], got '{s}'",
                    allowed.join(", ")
                )));
            }
        }

        Ok(())
    }
}
