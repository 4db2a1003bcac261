//! Turns wallhaven pages into domain records.
//!
//! These functions are synchronous and never hold parsed documents across an `.await`.
use once_cell::sync::Lazy;
use regex::Regex;
use walldrop_common::wallpaper::{
    category::Category, purity::Purity, resolution::Resolution, Subscriptions, Wallpaper,
};

use crate::error::ExtractorError;
use crate::extractor_config::ServerConfig;
use crate::html::{select_attr, Document, Node};

const TAG_CONTAINER: &str = r#"div[data-storage-id="tagsubscriptions"]"#;
const TAG_NAME: &str = "span.tagname";
const RESULT_ENTRY: &str = "figure.thumb";
const PREVIEW_LINK: &str = "a.preview";
const RESOLUTION: &str = "span.wall-res";
const FAVORITES: &str = ".wall-favs";
const PNG_MARKER: &str = "span.png";
const FORM_TOKEN: &str = r#"input[name="_token"]"#;

static THUMB_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"thumb thumb-(?P<id>[0-9a-z]+) thumb-(?P<purity>sfw|sketchy|nsfw) thumb-(?P<category>general|anime|people)",
    )
    .unwrap()
});

/// Extracts every tag name from the subscriptions page.
pub fn subscribed_tags(html: &str) -> Result<Subscriptions, ExtractorError> {
    let doc = Document::parse(html);

    let Some(container) = doc.select_first(TAG_CONTAINER)? else {
        return Err(ExtractorError::parse(
            "subscriptions page has no tag subscription list",
        ));
    };

    let subs = container
        .select(TAG_NAME)?
        .iter()
        .map(|node| node.text().trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect();

    Ok(subs)
}

/// Maps every result entry of a search page into a [`Wallpaper`].
pub fn search_results(html: &str, config: &ServerConfig) -> Result<Vec<Wallpaper>, ExtractorError> {
    let doc = Document::parse(html);
    let link_prefix = config.wallpaper_url_prefix();

    doc.select(RESULT_ENTRY)?
        .into_iter()
        .map(|entry| map_entry(entry, &link_prefix, config))
        .collect()
}

fn map_entry(
    entry: Node<'_>,
    link_prefix: &str,
    config: &ServerConfig,
) -> Result<Wallpaper, ExtractorError> {
    let href = entry
        .select_first(PREVIEW_LINK)?
        .and_then(|link| link.attr("href"))
        .ok_or_else(|| ExtractorError::parse("search entry has no preview link"))?;

    let id = href
        .strip_prefix(link_prefix)
        .filter(|id| !id.is_empty() && !id.contains('/'))
        .ok_or_else(|| ExtractorError::parse(format!("unexpected wallpaper link: {}", href)))?;

    let class = entry.attr("class").unwrap_or_default();
    let caps = THUMB_CLASS
        .captures(class)
        .ok_or_else(|| ExtractorError::parse(format!("unexpected entry class: {}", class)))?;

    if &caps["id"] != id {
        return Err(ExtractorError::parse(format!(
            "entry class id {} doesn't match link id {}",
            &caps["id"], id
        )));
    }

    let purity: Purity = caps["purity"].parse()?;
    let category: Category = caps["category"].parse()?;

    let resolution: Resolution = entry
        .select_first(RESOLUTION)?
        .map(|node| node.text())
        .ok_or_else(|| ExtractorError::parse(format!("entry {} has no resolution", id)))?
        .parse()?;

    let favorites = entry
        .select_first(FAVORITES)?
        .map_or(0, |node| leading_number(&node.text()));

    let ext = if entry.select_first(PNG_MARKER)?.is_some() {
        "png"
    } else {
        "jpg"
    };

    Ok(Wallpaper {
        id: id.to_string(),
        purity,
        category,
        resolution,
        favorites,
        image_url: config.image_url(id, ext),
    })
}

/// Lenient integer parse: the leading digits of the trimmed text, or 0 when there are none.
fn leading_number(text: &str) -> u64 {
    let digits: String = text
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    digits.parse().unwrap_or(0)
}

/// Extracts the form token the login endpoint expects alongside the credentials.
pub fn form_token(html: &str) -> Option<String> {
    select_attr(html, FORM_TOKEN, "value")
        .ok()?
        .into_iter()
        .find(|token| !token.is_empty())
}
