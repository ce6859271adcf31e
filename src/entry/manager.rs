use crate::config::{AppConfig, ContentType};
use crate::error::Error;

use super::store::{self, ImageLookup};
use super::{day_tag, DayEntry};

/// Loads the quote and image for one day, read fresh from disk.
///
/// Missing content surfaces as `ContentNotAvailable` and more than one image
/// file as `AmbiguousImage`, so authoring mistakes fail a single request
/// instead of the process.
#[tracing::instrument(skip(config))]
pub async fn load_entry(
    config: &AppConfig,
    content_type: &ContentType,
    day: u32,
) -> Result<DayEntry, Error> {
    let tag = day_tag(day);

    let quote = store::read_quote(&config.assets_dir, &content_type.slug, &tag)
        .await?
        .ok_or_else(|| Error::ContentNotAvailable {
            content_type: content_type.slug.clone(),
            day,
        })?;

    let image = match store::find_image(&config.assets_dir, &content_type.slug, &tag).await? {
        ImageLookup::ExactlyOne(name) => name,
        ImageLookup::Missing => {
            return Err(Error::ContentNotAvailable {
                content_type: content_type.slug.clone(),
                day,
            })
        }
        ImageLookup::Ambiguous(matches) => {
            return Err(Error::AmbiguousImage {
                content_type: content_type.slug.clone(),
                day,
                matches,
            })
        }
    };

    Ok(DayEntry {
        type_slug: content_type.slug.clone(),
        type_label: content_type.label.clone(),
        day,
        quote,
        image_url: format!("/assets/{}/{}/{}", content_type.slug, tag, image),
    })
}
