use crate::utils::error::{DrillError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A titled item carrying a rating, e.g. a book review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedItem {
    pub title: String,
    pub rating: f64,
}

impl RatedItem {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            title: title.into(),
            rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// How `format_string` should change the case of its input.
///
/// `Default` is what callers get when they say nothing, and it uppercases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum CaseMode {
    ForceUpper,
    ForceLower,
    #[default]
    Default,
}

impl CaseMode {
    /// Maps an optional boolean flag onto a mode: absent means `Default`.
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => CaseMode::ForceUpper,
            Some(false) => CaseMode::ForceLower,
            None => CaseMode::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseMode::ForceUpper => "upper",
            CaseMode::ForceLower => "lower",
            CaseMode::Default => "default",
        }
    }
}

impl From<Option<bool>> for CaseMode {
    fn from(flag: Option<bool>) -> Self {
        Self::from_flag(flag)
    }
}

impl FromStr for CaseMode {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upper" => Ok(CaseMode::ForceUpper),
            "lower" => Ok(CaseMode::ForceLower),
            "default" => Ok(CaseMode::Default),
            _ => Err(DrillError::InvalidConfigValueError {
                field: "case".to_string(),
                value: s.to_string(),
                reason: "Valid modes: upper, lower, default".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for CaseMode {
    type Error = DrillError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CaseMode> for &'static str {
    fn from(mode: CaseMode) -> Self {
        mode.as_str()
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either text or a number; nothing else.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Narrows an arbitrary JSON value. Anything other than a string or a
/// representable number is rejected.
impl TryFrom<serde_json::Value> for Value {
    type Error = DrillError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(s) => Ok(Value::Text(s)),
            serde_json::Value::Number(ref n) => {
                n.as_f64()
                    .map(Value::Number)
                    .ok_or(DrillError::TypeMismatch {
                        expected: "string or number",
                        found: "number out of range",
                    })
            }
            other => Err(DrillError::TypeMismatch {
                expected: "string or number",
                found: json_kind(&other),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    make: String,
    year: i32,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            year,
        }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn get_info(&self) -> String {
        format!("Make: {}, Year: {}", self.make, self.year)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Make: {}, Year: {}", self.make, self.year)
    }
}

/// A `Vehicle` with a model name. The base record is embedded, not inherited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    vehicle: Vehicle,
    model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, year: i32, model: impl Into<String>) -> Self {
        Self {
            vehicle: Vehicle::new(make, year),
            model: model.into(),
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn get_info(&self) -> String {
        self.vehicle.get_info()
    }

    pub fn get_model(&self) -> String {
        format!("Model: {}", self.model)
    }
}

impl AsRef<Vehicle> for Car {
    fn as_ref(&self) -> &Vehicle {
        &self.vehicle
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Model: {}", self.vehicle, self.model)
    }
}
