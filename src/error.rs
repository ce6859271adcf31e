use std::fmt::{Debug, Display};
use std::io::Error as IoError;
use std::path::PathBuf;

use actix_web::error::PathError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Error {
    // 400
    #[serde(serialize_with = "display")]
    InvalidPath(PathError),

    // 404
    PathDoesNotExist,
    TypeDoesNotExist {
        requested: String,
        available: Vec<String>,
    },
    DayDoesNotExist {
        day: u32,
    },
    ContentNotAvailable {
        content_type: String,
        day: u32,
    },

    // 500
    AmbiguousImage {
        content_type: String,
        day: u32,
        matches: Vec<String>,
    },
    InvalidCampaignDay {
        year: i32,
        day: u32,
    },
    InvalidCampaignWindow {
        first_day: NaiveDate,
        last_content_day: NaiveDate,
        last_public_day: NaiveDate,
    },
    StaticDirDoesNotExist {
        path: PathBuf,
    },
    #[serde(serialize_with = "display")]
    IoError(IoError),
}

impl Error {
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidPath(_) => "E4001000",
            Error::PathDoesNotExist => "E4041000",
            Error::TypeDoesNotExist { .. } => "E4041001",
            Error::DayDoesNotExist { .. } => "E4041002",
            Error::ContentNotAvailable { .. } => "E4041003",
            Error::AmbiguousImage { .. } => "E5001000",
            Error::InvalidCampaignDay { .. } => "E5001001",
            Error::InvalidCampaignWindow { .. } => "E5001002",
            Error::StaticDirDoesNotExist { .. } => "E5001003",
            Error::IoError(_) => "E5001004",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Error::InvalidPath(_) => "The given path could not be parsed",
            Error::PathDoesNotExist => "The requested path does not exist",
            Error::TypeDoesNotExist { .. } => "The requested content type does not exist",
            Error::DayDoesNotExist { .. } => "The requested day is not part of the calendar",
            Error::ContentNotAvailable { .. } => {
                "The content for the requested day is not available"
            }
            Error::AmbiguousImage { .. } => {
                "The requested day has more than one image file on disk"
            }
            Error::InvalidCampaignDay { .. } => "The configured campaign day is not a valid date",
            Error::InvalidCampaignWindow { .. } => "The configured campaign window is not ordered",
            Error::StaticDirDoesNotExist { .. } => {
                "The configured static directory does not exist"
            }
            Error::IoError(_) => "An error occurred during an I/O operation",
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Error::PathDoesNotExist => StatusCode::NOT_FOUND,
            Error::TypeDoesNotExist { .. } => StatusCode::NOT_FOUND,
            Error::DayDoesNotExist { .. } => StatusCode::NOT_FOUND,
            Error::ContentNotAvailable { .. } => StatusCode::NOT_FOUND,
            Error::AmbiguousImage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::InvalidCampaignDay { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::InvalidCampaignWindow { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::StaticDirDoesNotExist { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        #[derive(Serialize)]
        struct Dummy<'a> {
            error_code: &'static str,
            error_message: &'static str,
            error_meta: &'a Error,
        }

        HttpResponse::build(self.status_code()).json(&Dummy {
            error_code: self.error_code(),
            error_message: self.error_message(),
            error_meta: self,
        })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(self, f)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Error {
        Error::IoError(error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidPath(err) => Some(err),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

fn display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
