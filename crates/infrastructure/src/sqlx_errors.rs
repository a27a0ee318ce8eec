use gatehouse_core::AppError;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Maps a sqlx failure into the application error taxonomy.
pub(crate) fn map_sqlx_error(error: sqlx::Error, action: &str) -> AppError {
    match &error {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => {
            AppError::Unavailable(format!("failed to {action}: {error}"))
        }
        sqlx::Error::Database(database_error)
            if database_error.code().as_deref() == Some(UNIQUE_VIOLATION) =>
        {
            AppError::Conflict(format!("failed to {action}: {}", database_error.message()))
        }
        sqlx::Error::Database(database_error)
            if database_error.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) =>
        {
            AppError::Validation(format!(
                "failed to {action}: referenced record does not exist"
            ))
        }
        _ => AppError::Internal(format!("failed to {action}: {error}")),
    }
}

#[cfg(test)]
mod tests {
    use gatehouse_core::AppError;

    use super::map_sqlx_error;

    #[test]
    fn pool_failures_are_unavailable() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut, "list roles"),
            AppError::Unavailable(message) if message.starts_with("failed to list roles")
        ));
    }

    #[test]
    fn decode_failures_are_internal() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound, "update role"),
            AppError::Internal(_)
        ));
    }
}
