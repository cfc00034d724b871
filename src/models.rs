use serde_json::Value;

use crate::error::WatchError;

#[derive(Debug, Clone)]
pub struct HomeworkRecord {
    pub homework_name: String,
    pub status: String,
}

impl HomeworkRecord {
    pub fn from_value(value: &Value) -> Result<Self, WatchError> {
        let homework_name = value
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or(WatchError::MissingField("homework_name"))?;
        let status = value
            .get("status")
            .and_then(Value::as_str)
            .ok_or(WatchError::MissingField("status"))?;

        Ok(Self {
            homework_name: homework_name.to_string(),
            status: status.to_string(),
        })
    }
}
