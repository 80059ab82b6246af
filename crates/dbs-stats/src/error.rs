use dbs_pg::DatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error("cannot resolve local hostname")]
    Hostname(#[source] std::io::Error),
}
