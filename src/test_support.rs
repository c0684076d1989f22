//! Payload fixtures shared by the unit tests.

use crate::types::model::ClimateModel;
use crate::types::variable::Variable;
use serde_json::{json, Map, Value};

/// Models that never report soil moisture in the fixture.
pub const NO_SOIL_MODELS: [ClimateModel; 3] = [
    ClimateModel::FgoalsF3H,
    ClimateModel::HiramSitHr,
    ClimateModel::Nicam168S,
];

pub const SAMPLE_DAYS: [&str; 4] = ["1950-01-01", "1950-07-01", "1951-01-01", "1951-07-01"];

fn unit(variable: Variable) -> &'static str {
    match variable {
        Variable::Temperature => "°C",
        Variable::Precipitation => "mm",
        Variable::SoilMoisture => "m³/m³",
    }
}

fn series(variable: Variable, model_index: usize) -> Vec<f64> {
    let offset = model_index as f64;
    match variable {
        Variable::Temperature => vec![8.0 + offset, 24.0 + offset, 9.0 + offset, 25.0 + offset],
        Variable::Precipitation => vec![2.0, 0.0, 3.5, 0.5],
        Variable::SoilMoisture => vec![0.30, 0.18, 0.32, 0.20],
    }
}

/// A complete, schema-valid response for every model and variable.
pub fn sample_response() -> Value {
    let mut daily = Map::new();
    let mut units = Map::new();
    daily.insert("time".into(), json!(SAMPLE_DAYS));
    units.insert("time".into(), json!("iso8601"));

    for (index, model) in ClimateModel::ALL.into_iter().enumerate() {
        for variable in Variable::ALL {
            let key = variable.column_for(model);
            let values = if variable == Variable::SoilMoisture && NO_SOIL_MODELS.contains(&model) {
                json!([null, null, null, null])
            } else {
                json!(series(variable, index))
            };
            daily.insert(key.clone(), values);
            units.insert(key, json!(unit(variable)));
        }
    }

    json!({
        "latitude": 40.4,
        "longitude": -3.7,
        "generationtime_ms": 12.5,
        "utc_offset_seconds": 0,
        "timezone": "GMT",
        "timezone_abbreviation": "GMT",
        "elevation": 651.0,
        "daily_units": units,
        "daily": daily,
    })
}
