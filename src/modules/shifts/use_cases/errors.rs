use thiserror::Error;

use crate::modules::shifts::core::ports::StoreError;
use crate::modules::shifts::core::validation::ValidationError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
