/// Boxed driver error, so mocks and alternative drivers can report failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("database connection failed")]
    Connect(#[source] BoxError),
    #[error("relation size query failed")]
    Query(#[source] BoxError),
    #[error("database connection did not shut down cleanly")]
    Close(#[source] BoxError),
}

impl DatabaseError {
    pub fn connect(e: impl Into<BoxError>) -> Self {
        Self::Connect(e.into())
    }
    pub fn query(e: impl Into<BoxError>) -> Self {
        Self::Query(e.into())
    }
    pub fn close(e: impl Into<BoxError>) -> Self {
        Self::Close(e.into())
    }
}
