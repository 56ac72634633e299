use clinic_types::PaginationError;

#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid page request: {0}")]
    Pagination(#[from] PaginationError),
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("{field} refers to unknown id {id}")]
    UnknownReference { field: &'static str, id: i64 },
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("failed to read seed file: {0}")]
    SeedRead(std::io::Error),
    #[error("invalid seed file: {0}")]
    SeedParse(String),
}

pub type ClinicResult<T> = std::result::Result<T, ClinicError>;
