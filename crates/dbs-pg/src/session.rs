use super::*;

/// Acquires database sessions.
///
/// Implementations decide whether a session is a fresh connection or a
/// pooled one; callers only ever see [`Session`].
#[async_trait::async_trait]
pub trait Connect: Send + Sync {
    type Session: Session;
    async fn connect(&self, config: &Config) -> Result<Self::Session, DatabaseError>;
}

/// An open database session.
///
/// Callers must [`close`](Session::close) every session they acquire,
/// whether or not the query succeeded.
#[async_trait::async_trait]
pub trait Session: Send {
    /// Largest relations first, at most `limit` of them.
    async fn relations(&mut self, limit: usize) -> Result<Vec<RelationSize>, DatabaseError>;
    /// Releases the session.
    async fn close(self) -> Result<(), DatabaseError>;
}

#[async_trait::async_trait]
impl<C> Connect for std::sync::Arc<C>
where
    C: Connect,
{
    type Session = C::Session;
    async fn connect(&self, config: &Config) -> Result<Self::Session, DatabaseError> {
        self.as_ref().connect(config).await
    }
}
