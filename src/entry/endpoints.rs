use actix_web::http::header;
use actix_web::web::{Data, Path};
use actix_web::{get, HttpResponse};

use crate::config::{AppConfig, ContentType};
use crate::error::Error;
use crate::gate::{self, Gate};
use crate::pages;

use super::manager;

#[get("/")]
#[tracing::instrument(skip(config))]
async fn index(config: Data<AppConfig>) -> HttpResponse {
    redirect_to_type(config.default_type())
}

#[get("/{content_type}")]
#[tracing::instrument(skip(config))]
async fn get_current_entry(
    config: Data<AppConfig>,
    params: Path<String>,
) -> Result<HttpResponse, Error> {
    let slug = params.into_inner();

    let content_type = config.content_type(&slug)?;

    match gate::permitted_day(config.clock.today(), &config.window) {
        Gate::Day(day) => {
            let entry = manager::load_entry(&config, content_type, day).await?;
            Ok(pages::item_response(&entry))
        }
        Gate::BeforeWindow | Gate::AfterWindow => Ok(message("out of range")),
    }
}

#[get("/{content_type}/{day}")]
#[tracing::instrument(skip(config))]
async fn get_entry_by_day(
    config: Data<AppConfig>,
    params: Path<(String, u32)>,
) -> Result<HttpResponse, Error> {
    let (slug, day) = params.into_inner();

    let content_type = config.content_type(&slug)?;
    if day < 1 || day > config.window.last_content_day_of_month() {
        return Err(Error::DayDoesNotExist { day });
    }

    match gate::permitted_day(config.clock.today(), &config.window) {
        Gate::Day(permitted) if day <= permitted => {
            let entry = manager::load_entry(&config, content_type, day).await?;
            Ok(pages::item_response(&entry))
        }
        Gate::AfterWindow => Ok(message("too late")),
        // not yet unlocked, or the window has not opened: back to the gated root
        Gate::Day(_) | Gate::BeforeWindow => Ok(redirect_to_type(content_type)),
    }
}

fn redirect_to_type(content_type: &ContentType) -> HttpResponse {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, format!("/{}", content_type.slug)))
        .finish()
}

fn message(text: &str) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "message": text }))
}
