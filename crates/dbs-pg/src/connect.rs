use super::*;
use dbs_core::CONNECT_TIMEOUT;
use tokio::task::JoinHandle;
use tokio_postgres::Client;
use tokio_postgres::NoTls;

/// Unpooled connector: every [`Connect::connect`] opens a new connection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Postgres {
    /// Driver options for the four config fields, bounded by [`CONNECT_TIMEOUT`].
    pub fn options(config: &Config) -> tokio_postgres::Config {
        let mut options = tokio_postgres::Config::new();
        options
            .dbname(&config.database)
            .user(&config.user)
            .password(&config.password)
            .host(&config.host)
            .application_name("db-stats")
            .connect_timeout(CONNECT_TIMEOUT);
        options
    }
}

#[async_trait::async_trait]
impl Connect for Postgres {
    type Session = PgSession;
    async fn connect(&self, config: &Config) -> Result<PgSession, DatabaseError> {
        log::debug!("connecting to {} at {}", config.database, config.host);
        let (client, connection) = Self::options(config)
            .connect(NoTls)
            .await
            .map_err(DatabaseError::connect)?;
        let connection = tokio::spawn(connection);
        Ok(PgSession { client, connection })
    }
}

/// One live connection and the task driving its socket.
pub struct PgSession {
    client: Client,
    connection: JoinHandle<Result<(), PgErr>>,
}

#[async_trait::async_trait]
impl Session for PgSession {
    async fn relations(&mut self, limit: usize) -> Result<Vec<RelationSize>, DatabaseError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = self
            .client
            .query(RELATIONS, &[&limit])
            .await
            .map_err(DatabaseError::query)?;
        log::debug!("fetched {} relations", rows.len());
        rows.iter()
            .map(RelationSize::try_from)
            .collect::<Result<Vec<_>, PgErr>>()
            .map_err(DatabaseError::query)
    }
    async fn close(self) -> Result<(), DatabaseError> {
        drop(self.client);
        match self.connection.await {
            Ok(result) => result.map_err(DatabaseError::close),
            Err(e) => Err(DatabaseError::close(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_postgres::config::Host;

    fn config() -> Config {
        Config::parse("mydb:stats:secret:db.internal").unwrap()
    }

    #[test]
    fn options_carry_config_fields() {
        let options = Postgres::options(&config());
        assert_eq!(options.get_dbname(), Some("mydb"));
        assert_eq!(options.get_user(), Some("stats"));
        assert_eq!(options.get_password(), Some(&b"secret"[..]));
        assert_eq!(
            options.get_hosts(),
            &[Host::Tcp(String::from("db.internal"))]
        );
    }
    #[test]
    fn options_bound_connect_time() {
        let options = Postgres::options(&config());
        assert_eq!(options.get_connect_timeout(), Some(&CONNECT_TIMEOUT));
    }
}
