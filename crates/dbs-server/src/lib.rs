//! HTTP surface for the relation size report.
//!
//! Every request, whatever its method, path or body, is answered with the
//! current report as `text/plain`.
//!
//! ## Submodules
//!
//! - [`handler`] — Framework-independent `handle(request) -> response`
//! - [`http`] — actix-web adapter and server loop

pub mod handler;
pub mod http;

pub use handler::*;
pub use http::Fault;

use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use dbs_stats::Stats;

/// Serves `stats` on `bind` until the server is stopped.
pub async fn run<S>(stats: S, bind: &str, workers: usize) -> Result<(), std::io::Error>
where
    S: Stats + 'static,
{
    let stats = web::Data::new(stats);
    log::info!("serving relation sizes on {}", bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .app_data(stats.clone())
            .default_service(web::to(http::respond::<S>))
    })
    .workers(workers)
    .bind(bind)?
    .run()
    .await
}
