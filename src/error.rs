use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Ошибка соединения с API: {0}")]
    Transport(String),

    #[error("Таймаут запроса к API: {0}")]
    Timeout(String),

    #[error("Статус ответа не равен 200: {0}")]
    HttpStatus(StatusCode),

    #[error("Ответ API не формата JSON: {0}")]
    Decode(String),

    #[error("Ответ API не является словарём")]
    NotAnObject,

    #[error("В ответе не найден ключ \"{0}\"")]
    MissingField(&'static str),

    #[error("Под ключом \"homeworks\" пришёл не список")]
    NotAList,

    #[error("Список домашних работ пуст")]
    EmptyList,

    #[error("Статус работы не найден: {0}")]
    UnknownStatus(String),

    #[error("Ошибка отправки сообщения в Telegram: {0}")]
    Delivery(String),
}
