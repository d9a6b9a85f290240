use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("no current card: the session is empty")]
    NoCurrentCard,
}
