pub mod endpoints;
pub mod manager;
pub mod store;

/// The quote+image pair unlocked for one calendar day of one content type.
#[derive(Clone, Debug)]
pub struct DayEntry {
    pub type_slug: String,
    pub type_label: String,
    pub day: u32,
    pub quote: String,
    pub image_url: String,
}

/// Day-of-month as the zero-padded directory name content is keyed by.
pub fn day_tag(day: u32) -> String {
    format!("{:02}", day)
}
