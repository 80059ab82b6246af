use super::*;
use dbs_core::RELATION_LIMIT;
use std::sync::Arc;

/// Produces a fresh [`Report`] per call.
#[async_trait::async_trait]
pub trait Stats: Send + Sync {
    async fn get_stats(&self) -> Result<Report, StatsError>;
}

/// Reports on the configured database through connector `C`, naming the
/// responding host via `H`.
pub struct Reporter<C, H = System> {
    config: Arc<Config>,
    connector: C,
    host: H,
}

impl<C, H> Reporter<C, H>
where
    C: Connect,
    H: Hostname,
{
    pub fn new(config: Arc<Config>, connector: C, host: H) -> Self {
        Self {
            config,
            connector,
            host,
        }
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[async_trait::async_trait]
impl<C, H> Stats for Reporter<C, H>
where
    C: Connect,
    H: Hostname,
{
    /// The session is closed before anything is rendered, whether or not the
    /// query succeeded. A failed query is returned as an error, never as an
    /// empty listing.
    async fn get_stats(&self) -> Result<Report, StatsError> {
        let mut session = self.connector.connect(&self.config).await?;
        let fetched = session.relations(RELATION_LIMIT).await;
        if let Err(e) = session.close().await {
            log::warn!("{}", e);
        }
        let mut relations = fetched?;
        relations.truncate(RELATION_LIMIT);
        let host = self.host.hostname().map_err(StatsError::Hostname)?;
        Ok(Report {
            database: self.config.database.clone(),
            relations,
            host,
        })
    }
}

#[async_trait::async_trait]
impl<S> Stats for Arc<S>
where
    S: Stats + ?Sized,
{
    async fn get_stats(&self) -> Result<Report, StatsError> {
        self.as_ref().get_stats().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbs_pg::DatabaseError;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    #[derive(Clone, Copy, PartialEq)]
    enum Fault {
        None,
        Connect,
        Query,
        Close,
    }

    struct Mock {
        rows: Vec<RelationSize>,
        fault: Fault,
        closes: Arc<AtomicUsize>,
    }

    struct MockSession {
        rows: Vec<RelationSize>,
        fault: Fault,
        closes: Arc<AtomicUsize>,
    }

    impl Mock {
        fn new(rows: Vec<RelationSize>, fault: Fault) -> Self {
            Self {
                rows,
                fault,
                closes: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait::async_trait]
    impl Connect for Mock {
        type Session = MockSession;
        async fn connect(&self, _: &Config) -> Result<MockSession, DatabaseError> {
            match self.fault {
                Fault::Connect => Err(DatabaseError::connect("connection refused")),
                _ => Ok(MockSession {
                    rows: self.rows.clone(),
                    fault: self.fault,
                    closes: self.closes.clone(),
                }),
            }
        }
    }

    #[async_trait::async_trait]
    impl Session for MockSession {
        async fn relations(&mut self, _: usize) -> Result<Vec<RelationSize>, DatabaseError> {
            match self.fault {
                Fault::Query => Err(DatabaseError::query("connection reset mid-fetch")),
                _ => Ok(self.rows.clone()),
            }
        }
        async fn close(self) -> Result<(), DatabaseError> {
            self.closes.fetch_add(1, Ordering::SeqCst);
            match self.fault {
                Fault::Close => Err(DatabaseError::close("broken pipe")),
                _ => Ok(()),
            }
        }
    }

    fn config() -> Arc<Config> {
        Arc::new(Config::parse("mydb:stats:secret:localhost").unwrap())
    }

    fn rows(n: usize) -> Vec<RelationSize> {
        (0..n)
            .map(|i| RelationSize {
                name: format!("public.t{}", i),
                size: format!("{} kB", n - i),
            })
            .collect()
    }

    #[tokio::test]
    async fn renders_exact_report() {
        let rows = vec![
            RelationSize::from(("public.users", "16 kB")),
            RelationSize::from(("public.orders", "8 kB")),
        ];
        let mock = Mock::new(rows, Fault::None);
        let closes = mock.closes.clone();
        let reporter = Reporter::new(config(), mock, "host1");
        let report = reporter.get_stats().await.unwrap();
        assert_eq!(
            report.to_string(),
            "DATABASE: mydb\n * public.users - 16 kB\n * public.orders - 8 kB\n\nResponse from: host1\n"
        );
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }
    #[tokio::test]
    async fn keeps_first_twenty_in_order() {
        let all = rows(25);
        let reporter = Reporter::new(config(), Mock::new(all.clone(), Fault::None), "host1");
        let report = reporter.get_stats().await.unwrap();
        assert_eq!(report.relations.len(), RELATION_LIMIT);
        assert_eq!(report.relations, all[..RELATION_LIMIT].to_vec());
    }
    #[tokio::test]
    async fn does_not_resort() {
        let rows = vec![
            RelationSize::from(("public.small", "8 kB")),
            RelationSize::from(("public.large", "1024 MB")),
        ];
        let reporter = Reporter::new(config(), Mock::new(rows.clone(), Fault::None), "host1");
        assert_eq!(reporter.get_stats().await.unwrap().relations, rows);
    }
    #[tokio::test]
    async fn query_failure_closes_and_propagates() {
        let mock = Mock::new(rows(3), Fault::Query);
        let closes = mock.closes.clone();
        let reporter = Reporter::new(config(), mock, "host1");
        match reporter.get_stats().await {
            Err(StatsError::Database(DatabaseError::Query(_))) => {}
            other => panic!("expected query error, got {:?}", other),
        }
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }
    #[tokio::test]
    async fn connect_failure_propagates() {
        let mock = Mock::new(rows(3), Fault::Connect);
        let closes = mock.closes.clone();
        let reporter = Reporter::new(config(), mock, "host1");
        assert!(matches!(
            reporter.get_stats().await,
            Err(StatsError::Database(DatabaseError::Connect(_)))
        ));
        assert_eq!(closes.load(Ordering::SeqCst), 0);
    }
    #[tokio::test]
    async fn close_failure_after_fetch_still_reports() {
        let mock = Mock::new(rows(2), Fault::Close);
        let closes = mock.closes.clone();
        let reporter = Reporter::new(config(), mock, "host1");
        assert_eq!(reporter.get_stats().await.unwrap().relations.len(), 2);
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }
    #[tokio::test]
    async fn connects_per_call() {
        let mock = Arc::new(Mock::new(rows(1), Fault::None));
        let closes = mock.closes.clone();
        let reporter = Reporter::new(config(), mock, "host1");
        reporter.get_stats().await.unwrap();
        reporter.get_stats().await.unwrap();
        assert_eq!(closes.load(Ordering::SeqCst), 2);
    }
    #[tokio::test]
    async fn hostname_failure_propagates() {
        struct Unresolvable;
        impl Hostname for Unresolvable {
            fn hostname(&self) -> std::io::Result<String> {
                Err(std::io::Error::other("no hostname"))
            }
        }
        let mock = Mock::new(rows(1), Fault::None);
        let closes = mock.closes.clone();
        let reporter = Reporter::new(config(), mock, Unresolvable);
        assert!(matches!(
            reporter.get_stats().await,
            Err(StatsError::Hostname(_))
        ));
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }
}
