use crate::config::ClimateConfig;
use crate::schema::error::{JsonKind, SchemaViolation};
use crate::types::model::ClimateModel;
use crate::types::variable::Variable;
use log::warn;
use serde_json::{Map, Value};

const ROOT: &str = "$";
const TIME: &str = "time";

const NUMBER_FIELDS: [&str; 4] = ["latitude", "longitude", "generationtime_ms", "elevation"];
const INTEGER_FIELDS: [&str; 1] = ["utc_offset_seconds"];
const STRING_FIELDS: [&str; 2] = ["timezone", "timezone_abbreviation"];

/// Expected shape of a climate API response.
///
/// The per-series keys are generated from the cross product of the requested
/// variables and models, so the schema always matches the request that was
/// sent.
///
/// # Examples
///
/// ```
/// use meteo_climate::{ClimateModel, ResponseSchema, Variable};
///
/// let schema = ResponseSchema::new(&Variable::ALL, &ClimateModel::ALL);
/// assert_eq!(schema.series_keys().len(), 21);
/// assert!(!schema.validate(&serde_json::json!({ "daily": {} })));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSchema {
    series_keys: Vec<String>,
}

impl ResponseSchema {
    pub fn new(variables: &[Variable], models: &[ClimateModel]) -> Self {
        let series_keys = models
            .iter()
            .flat_map(|model| variables.iter().map(|variable| variable.column_for(*model)))
            .collect();
        Self { series_keys }
    }

    pub fn from_config(config: &ClimateConfig) -> Self {
        Self::new(&config.variables, &config.models)
    }

    /// Every `<variable>_<model>` key required in `daily` and `daily_units`.
    pub fn series_keys(&self) -> &[String] {
        &self.series_keys
    }

    /// Checks `body` and reports the first violated constraint.
    pub fn check(&self, body: &Value) -> Result<(), SchemaViolation> {
        let root = expect_object(body, ROOT)?;

        for field in NUMBER_FIELDS {
            expect_kind(require(root, ROOT, field)?, &join(ROOT, field), JsonKind::Number)?;
        }
        for field in INTEGER_FIELDS {
            expect_kind(require(root, ROOT, field)?, &join(ROOT, field), JsonKind::Integer)?;
        }
        for field in STRING_FIELDS {
            expect_kind(require(root, ROOT, field)?, &join(ROOT, field), JsonKind::String)?;
        }

        self.check_units(require(root, ROOT, "daily_units")?)?;
        self.check_daily(require(root, ROOT, "daily")?)
    }

    /// Advisory form of [`ResponseSchema::check`]: logs the violation and returns `false`.
    pub fn validate(&self, body: &Value) -> bool {
        match self.check(body) {
            Ok(()) => true,
            Err(violation) => {
                warn!("Data does not match schema: {}", violation);
                false
            }
        }
    }

    fn check_units(&self, units: &Value) -> Result<(), SchemaViolation> {
        let path = join(ROOT, "daily_units");
        let units = expect_object(units, &path)?;
        for key in std::iter::once(TIME).chain(self.series_keys.iter().map(String::as_str)) {
            expect_kind(require(units, &path, key)?, &join(&path, key), JsonKind::String)?;
        }
        Ok(())
    }

    fn check_daily(&self, daily: &Value) -> Result<(), SchemaViolation> {
        let path = join(ROOT, "daily");
        let daily = expect_object(daily, &path)?;

        let time_path = join(&path, TIME);
        let time = expect_array(require(daily, &path, TIME)?, &time_path)?;
        for (index, item) in time.iter().enumerate() {
            expect_kind(item, &format!("{}[{}]", time_path, index), JsonKind::String)?;
        }

        for key in &self.series_keys {
            let series_path = join(&path, key);
            let series = expect_array(require(daily, &path, key)?, &series_path)?;
            for (index, item) in series.iter().enumerate() {
                expect_kind(
                    item,
                    &format!("{}[{}]", series_path, index),
                    JsonKind::NumberOrNull,
                )?;
            }
        }
        Ok(())
    }
}

fn join(parent: &str, key: &str) -> String {
    format!("{}.{}", parent, key)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn matches_kind(value: &Value, kind: JsonKind) -> bool {
    match kind {
        JsonKind::Number => value.is_number(),
        JsonKind::Integer => value.is_i64() || value.is_u64(),
        JsonKind::String => value.is_string(),
        JsonKind::Object => value.is_object(),
        JsonKind::Array => value.is_array(),
        JsonKind::NumberOrNull => value.is_number() || value.is_null(),
    }
}

fn wrong_type(value: &Value, path: &str, expected: JsonKind) -> SchemaViolation {
    SchemaViolation::WrongType {
        path: path.to_string(),
        expected,
        found: kind_name(value),
    }
}

fn expect_kind(value: &Value, path: &str, kind: JsonKind) -> Result<(), SchemaViolation> {
    if matches_kind(value, kind) {
        Ok(())
    } else {
        Err(wrong_type(value, path, kind))
    }
}

fn expect_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, SchemaViolation> {
    value
        .as_object()
        .ok_or_else(|| wrong_type(value, path, JsonKind::Object))
}

fn expect_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, SchemaViolation> {
    value
        .as_array()
        .ok_or_else(|| wrong_type(value, path, JsonKind::Array))
}

fn require<'a>(
    object: &'a Map<String, Value>,
    path: &str,
    key: &str,
) -> Result<&'a Value, SchemaViolation> {
    object.get(key).ok_or_else(|| SchemaViolation::MissingField {
        path: join(path, key),
    })
}
