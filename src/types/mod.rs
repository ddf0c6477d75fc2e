use thiserror::Error;

mod colors;
mod credentials;
mod ids;

pub use colors::*;
pub use credentials::*;
pub use ids::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid block ID format: {0}")]
    InvalidId(String),

    #[error("Invalid gist token: {reason}")]
    InvalidGistToken { reason: String },

    #[error("Invalid gist ID: {reason}")]
    InvalidGistId { reason: String },
}
