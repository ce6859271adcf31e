use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::Error;

/// One themed category of daily content.
#[derive(Clone, Debug)]
pub struct ContentType {
    pub slug: String,
    pub label: String,
}

/// The date range the calendar is publicly reachable and unlocks content in.
///
/// Ordered by construction: `first_day <= last_content_day <= last_public_day`.
#[derive(Clone, Copy, Debug)]
pub struct CampaignWindow {
    pub first_day: NaiveDate,
    pub last_content_day: NaiveDate,
    pub last_public_day: NaiveDate,
}

impl CampaignWindow {
    pub fn new(
        first_day: NaiveDate,
        last_content_day: NaiveDate,
        last_public_day: NaiveDate,
    ) -> Result<CampaignWindow, Error> {
        if first_day > last_content_day || last_content_day > last_public_day {
            return Err(Error::InvalidCampaignWindow {
                first_day,
                last_content_day,
                last_public_day,
            });
        }

        Ok(CampaignWindow {
            first_day,
            last_content_day,
            last_public_day,
        })
    }

    /// A window within the December of the given year.
    pub fn december(
        year: i32,
        first_day: u32,
        last_content_day: u32,
        last_public_day: u32,
    ) -> Result<CampaignWindow, Error> {
        let day = |day: u32| {
            NaiveDate::from_ymd_opt(year, 12, day).ok_or(Error::InvalidCampaignDay { year, day })
        };

        CampaignWindow::new(day(first_day)?, day(last_content_day)?, day(last_public_day)?)
    }

    /// The day-of-month content stops changing on.
    pub fn last_content_day_of_month(&self) -> u32 {
        self.last_content_day.day()
    }
}

/// Source of "today" for the date gate.
#[derive(Clone, Copy, Debug)]
pub enum Clock {
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Immutable service configuration, built once at startup and shared with the
/// route layer through `web::Data`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub window: CampaignWindow,
    pub content_types: Vec<ContentType>,
    pub assets_dir: PathBuf,
    pub static_dir: PathBuf,
    pub clock: Clock,
}

impl AppConfig {
    /// The December 2022 campaign: public and unlocking content Dec 1 - Dec 31.
    pub fn advent_2022() -> Result<AppConfig, Error> {
        Ok(AppConfig {
            window: CampaignWindow::december(2022, 1, 31, 31)?,
            content_types: vec![ContentType {
                slug: "simpsons".to_string(),
                label: "The Simpsons".to_string(),
            }],
            assets_dir: PathBuf::from("assets"),
            static_dir: PathBuf::from("static"),
            clock: Clock::System,
        })
    }

    /// The content type `/` redirects to. The allow-list is non-empty by
    /// construction.
    pub fn default_type(&self) -> &ContentType {
        &self.content_types[0]
    }

    pub fn content_type(&self, slug: &str) -> Result<&ContentType, Error> {
        self.content_types
            .iter()
            .find(|content_type| content_type.slug == slug)
            .ok_or_else(|| Error::TypeDoesNotExist {
                requested: slug.to_string(),
                available: self.available_types(),
            })
    }

    pub fn available_types(&self) -> Vec<String> {
        self.content_types
            .iter()
            .map(|content_type| content_type.slug.clone())
            .collect()
    }
}
