use super::*;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use actix_web::http::StatusCode;
use dbs_stats::StatsError;
use std::fmt::Display;
use std::fmt::Formatter;

/// A failed report. Clients get a bare 500; the cause is only logged.
#[derive(Debug)]
pub struct Fault(pub StatsError);

impl Display for Fault {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let error: &dyn std::error::Error = &self.0;
        let chain = std::iter::successors(Some(error), |e| e.source())
            .map(ToString::to_string)
            .collect::<Vec<String>>()
            .join(": ");
        write!(f, "{}", chain)
    }
}

impl ResponseError for Fault {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
    fn error_response(&self) -> HttpResponse {
        HttpResponse::InternalServerError().finish()
    }
}

impl From<&HttpRequest> for Request {
    fn from(req: &HttpRequest) -> Self {
        Self {
            method: req.method().to_string(),
            path: req.path().to_string(),
        }
    }
}

impl From<Response> for HttpResponse {
    fn from(response: Response) -> Self {
        let status =
            StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut builder = HttpResponse::build(status);
        for header in response.headers {
            builder.insert_header(header);
        }
        builder.body(response.body)
    }
}

/// Catch-all route: method, path, headers and body are all ignored.
pub async fn respond<S>(stats: web::Data<S>, req: HttpRequest) -> Result<HttpResponse, Fault>
where
    S: Stats + 'static,
{
    handle(stats.get_ref(), &Request::from(&req))
        .await
        .map(HttpResponse::from)
        .map_err(Fault)
        .inspect_err(|e| log::error!("{} {} failed: {}", req.method(), req.path(), e))
}
