use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Outcome of looking for the single `image*` file of a day directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageLookup {
    ExactlyOne(String),
    Missing,
    Ambiguous(Vec<String>),
}

fn day_dir(assets_dir: &Path, slug: &str, day_tag: &str) -> PathBuf {
    assets_dir.join(slug).join(day_tag)
}

/// Full text of the day's quote file with leading whitespace stripped, or
/// `None` when the file is absent. Content is read fresh on every call.
#[tracing::instrument]
pub async fn read_quote(
    assets_dir: &Path,
    slug: &str,
    day_tag: &str,
) -> Result<Option<String>, Error> {
    let path = day_dir(assets_dir, slug, day_tag).join("quote.txt");

    match tokio::fs::read_to_string(&path).await {
        Ok(text) => Ok(Some(text.trim_start().to_string())),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(Error::IoError(err)),
    }
}

/// Lists the day directory for file names starting with `image`. Multiplicity
/// is reported, not assumed: callers decide what zero or many matches mean.
#[tracing::instrument]
pub async fn find_image(
    assets_dir: &Path,
    slug: &str,
    day_tag: &str,
) -> Result<ImageLookup, Error> {
    let dir = day_dir(assets_dir, slug, day_tag);

    let mut entries = match tokio::fs::read_dir(&dir).await {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(ImageLookup::Missing),
        Err(err) => return Err(Error::IoError(err)),
    };

    let mut matches = vec![];
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with("image") {
            matches.push(name);
        }
    }
    matches.sort();

    match matches.len() {
        0 => Ok(ImageLookup::Missing),
        1 => Ok(ImageLookup::ExactlyOne(matches.remove(0))),
        _ => Ok(ImageLookup::Ambiguous(matches)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_day_file(assets: &TempDir, day_tag: &str, name: &str, contents: &str) {
        let dir = assets.path().join("simpsons").join(day_tag);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), contents).unwrap();
    }

    #[tokio::test]
    async fn read_quote_strips_leading_whitespace() {
        let assets = TempDir::new().unwrap();
        write_day_file(&assets, "05", "quote.txt", "\n  Do it for her.\n");

        let quote = read_quote(assets.path(), "simpsons", "05").await.unwrap();

        assert_eq!(quote, Some("Do it for her.\n".to_string()));
    }

    #[tokio::test]
    async fn read_quote_reports_missing_file_as_none() {
        let assets = TempDir::new().unwrap();

        let quote = read_quote(assets.path(), "simpsons", "05").await.unwrap();

        assert_eq!(quote, None);
    }

    #[tokio::test]
    async fn find_image_returns_single_match() {
        let assets = TempDir::new().unwrap();
        write_day_file(&assets, "05", "quote.txt", "quote");
        write_day_file(&assets, "05", "image.png", "png");

        let lookup = find_image(assets.path(), "simpsons", "05").await.unwrap();

        assert_eq!(lookup, ImageLookup::ExactlyOne("image.png".to_string()));
    }

    #[tokio::test]
    async fn find_image_ignores_other_files() {
        let assets = TempDir::new().unwrap();
        write_day_file(&assets, "05", "quote.txt", "quote");
        write_day_file(&assets, "05", "notes.txt", "notes");

        let lookup = find_image(assets.path(), "simpsons", "05").await.unwrap();

        assert_eq!(lookup, ImageLookup::Missing);
    }

    #[tokio::test]
    async fn find_image_reports_missing_directory() {
        let assets = TempDir::new().unwrap();

        let lookup = find_image(assets.path(), "simpsons", "05").await.unwrap();

        assert_eq!(lookup, ImageLookup::Missing);
    }

    #[tokio::test]
    async fn find_image_reports_multiple_matches_in_order() {
        let assets = TempDir::new().unwrap();
        write_day_file(&assets, "05", "image.png", "png");
        write_day_file(&assets, "05", "image.jpg", "jpg");

        let lookup = find_image(assets.path(), "simpsons", "05").await.unwrap();

        assert_eq!(
            lookup,
            ImageLookup::Ambiguous(vec!["image.jpg".to_string(), "image.png".to_string()])
        );
    }
}
