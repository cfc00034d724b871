use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::WatchError;
use crate::models::HomeworkRecord;

pub static HOMEWORK_STATUSES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "approved",
            "Работа проверена: ревьюеру всё понравилось. Ура!",
        ),
        ("reviewing", "Работа взята на проверку ревьюером."),
        ("rejected", "Работа проверена: у ревьюера есть замечания."),
    ])
});

pub fn format_status(homework: &HomeworkRecord) -> Result<String, WatchError> {
    let verdict = HOMEWORK_STATUSES
        .get(homework.status.as_str())
        .ok_or_else(|| WatchError::UnknownStatus(homework.status.clone()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework.homework_name, verdict
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, status: &str) -> HomeworkRecord {
        HomeworkRecord {
            homework_name: name.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_format_approved() {
        let message = format_status(&record("proj1", "approved")).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"proj1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_format_is_deterministic() {
        let homework = record("proj1", "reviewing");
        assert_eq!(
            format_status(&homework).unwrap(),
            format_status(&homework).unwrap()
        );
    }

    #[test]
    fn test_every_catalog_status_formats() {
        for status in HOMEWORK_STATUSES.keys() {
            assert!(format_status(&record("proj1", status)).is_ok());
        }
    }

    #[test]
    fn test_unknown_status_fails() {
        let err = format_status(&record("proj1", "weird")).unwrap_err();
        match err {
            WatchError::UnknownStatus(status) => assert_eq!(status, "weird"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
