use chrono::{Datelike, NaiveDate};

use crate::config::CampaignWindow;

/// Which day's content, if any, is viewable today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    BeforeWindow,
    AfterWindow,
    Day(u32),
}

/// Once past the last content day but still within the public window, the gate
/// keeps reporting the last content day so the final entry stays visible.
pub fn permitted_day(today: NaiveDate, window: &CampaignWindow) -> Gate {
    if today < window.first_day {
        return Gate::BeforeWindow;
    }
    if today > window.last_public_day {
        return Gate::AfterWindow;
    }
    if today > window.last_content_day {
        return Gate::Day(window.last_content_day_of_month());
    }

    Gate::Day(today.day())
}
