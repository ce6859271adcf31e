use actix_files::Files;
use actix_web::web::{Data, PathConfig};
use actix_web::{App, HttpServer};
use tracing::{info, Level};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::fmt::format::FmtSpan;

use advent_server::config::AppConfig;
use advent_server::error::Error;

#[actix_web::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_span_events(FmtSpan::NEW)
        .compact()
        .init();

    let config = AppConfig::advent_2022()?;
    for dir in [&config.static_dir, &config.assets_dir] {
        if !dir.is_dir() {
            return Err(Error::StaticDirDoesNotExist { path: dir.clone() });
        }
    }
    info!(
        "serving {} from {} to {}",
        config.available_types().join(", "),
        config.window.first_day,
        config.window.last_public_day
    );

    let data = Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(PathConfig::default().error_handler(|err, _req| {
                // format path errors with custom format
                Error::InvalidPath(err).into()
            }))
            .app_data(data.clone())
            .wrap(TracingLogger::default())
            .service(Files::new("/static", &data.static_dir))
            .service(Files::new("/assets", &data.assets_dir))
            .configure(advent_server::routes)
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await?;

    Ok(())
}
