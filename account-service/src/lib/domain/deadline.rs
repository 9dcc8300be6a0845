use std::future::Future;
use std::time::Duration;

use crate::user::errors::RepositoryError;

/// Bound a store call by `limit`. An elapsed deadline becomes `RepositoryError::Timeout`.
pub async fn within<T, F>(limit: Duration, call: F) -> Result<T, RepositoryError>
where
    F: Future<Output = Result<T, RepositoryError>>,
{
    tokio::time::timeout(limit, call)
        .await
        .map_err(|_| RepositoryError::Timeout)?
}
