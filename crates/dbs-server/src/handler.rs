use dbs_stats::Stats;
use dbs_stats::StatsError;

/// The parts of an inbound request worth logging. None affect the response.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub method: String,
    pub path: String,
}

/// Status, headers and body, independent of any HTTP framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

impl Response {
    pub fn text(body: String) -> Self {
        Self {
            status: 200,
            headers: vec![
                ("Content-Type", String::from("text/plain")),
                ("Content-Length", body.len().to_string()),
            ],
            body,
        }
    }
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Answers any request with a freshly computed report.
pub async fn handle<S>(stats: &S, request: &Request) -> Result<Response, StatsError>
where
    S: Stats + ?Sized,
{
    log::debug!("{} {}", request.method, request.path);
    stats
        .get_stats()
        .await
        .map(|report| Response::text(report.to_string()))
}
