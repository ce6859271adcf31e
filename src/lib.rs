use actix_web::web::{self, ServiceConfig};
use actix_web::ResponseError;

pub mod config;
pub mod entry;
pub mod error;
pub mod gate;
pub mod pages;

pub use error::Error;

/// The calendar route table, shared between `main` and the integration tests.
/// Static mounts are registered by the caller so tests can point them at
/// throwaway directories.
pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(entry::endpoints::index)
        .service(entry::endpoints::get_current_entry)
        .service(entry::endpoints::get_entry_by_day)
        .default_service(web::to(|| async { Error::PathDoesNotExist.error_response() }));
}
