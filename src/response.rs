use serde_json::Value;

use crate::error::WatchError;

#[derive(Debug)]
pub struct ValidatedResponse {
    pub homework: Value,
    pub current_date: Option<i64>,
}

pub fn extract_homework(response: &Value) -> Result<ValidatedResponse, WatchError> {
    let map = response.as_object().ok_or(WatchError::NotAnObject)?;

    if !map.contains_key("homeworks") {
        return Err(WatchError::MissingField("homeworks"));
    }
    if !map.contains_key("current_date") {
        return Err(WatchError::MissingField("current_date"));
    }

    let homeworks = map["homeworks"].as_array().ok_or(WatchError::NotAList)?;
    let homework = homeworks.first().cloned().ok_or(WatchError::EmptyList)?;

    Ok(ValidatedResponse {
        homework,
        current_date: map["current_date"].as_i64(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_first_homework() {
        let response = json!({
            "homeworks": [
                {"homework_name": "proj1", "status": "approved"},
                {"homework_name": "proj0", "status": "rejected"}
            ],
            "current_date": 1000
        });
        let validated = extract_homework(&response).unwrap();
        assert_eq!(validated.homework["homework_name"], "proj1");
        assert_eq!(validated.current_date, Some(1000));
    }

    #[test]
    fn test_root_not_an_object() {
        let err = extract_homework(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, WatchError::NotAnObject));
    }

    #[test]
    fn test_missing_homeworks_key() {
        let err = extract_homework(&json!({"current_date": 1000})).unwrap_err();
        assert!(matches!(err, WatchError::MissingField("homeworks")));
    }

    #[test]
    fn test_missing_current_date_key() {
        let err = extract_homework(&json!({"homeworks": []})).unwrap_err();
        assert!(matches!(err, WatchError::MissingField("current_date")));
    }

    #[test]
    fn test_homeworks_not_a_list() {
        let response = json!({"homeworks": {"homework_name": "proj1"}, "current_date": 1000});
        let err = extract_homework(&response).unwrap_err();
        assert!(matches!(err, WatchError::NotAList));
    }

    #[test]
    fn test_empty_homework_list() {
        let response = json!({"homeworks": [], "current_date": 1000});
        let err = extract_homework(&response).unwrap_err();
        assert!(matches!(err, WatchError::EmptyList));
    }

    #[test]
    fn test_non_integer_current_date_yields_none() {
        let response = json!({
            "homeworks": [{"homework_name": "proj1", "status": "approved"}],
            "current_date": "soon"
        });
        let validated = extract_homework(&response).unwrap();
        assert_eq!(validated.current_date, None);
    }
}
