use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiforgeError {
    #[error("empty completion: no text to parse")] EmptyInput,
    #[error("malformed completion: {0}")] MalformedResponse(String),
    #[error("plan failed validation:\n{}", .errors.join("\n"))] Schema { errors: Vec<String> },
    #[error("unknown component kind: {0}")] UnknownKind(String),
    #[error("provider error: {0}")] Provider(String),
    #[error("safety violation: {0}")] Safety(String),
}
