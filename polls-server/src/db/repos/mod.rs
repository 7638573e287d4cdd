//! Repository implementations for database access
//!
//! Repositories borrow a single connection (see [`super::DbSession`]) for
//! the duration of one unit of work.

pub mod options;
pub mod polls;

pub use options::{OptionRepo, PollOption};
pub use polls::{Poll, PollRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} with id {id} not found")]
    NotFound { resource: &'static str, id: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_id() {
        let err = DbError::NotFound {
            resource: "Poll",
            id: 42,
        };
        assert_eq!(err.to_string(), "Poll with id 42 not found");
    }
}
