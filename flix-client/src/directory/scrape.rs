//! HTML extraction for the city directory page.
//!
//! Expected markup:
//!
//! ```html
//! <div class="alphabet-item">
//!   <h3 class="alphabet-title">A</h3>
//!   <ul>
//!     <li class="alphabet-list-item"><a href="/bus/aachen">Aachen</a></li>
//!   </ul>
//! </div>
//! ```

use html_escape::decode_html_entities;
use tl::{HTMLTag, NodeHandle, Parser, ParserOptions};
use tracing::warn;

use super::{DirectoryEntry, DirectorySection};

/// Path prefix of city links.
const CITY_PATH_PREFIX: &str = "/bus/";

/// The directory page does not have the expected structure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScrapeError {
    /// The document could not be parsed at all
    #[error("malformed HTML: {0}")]
    Html(String),

    /// A letter section has no title heading
    #[error("directory section {section} has no title")]
    MissingTitle { section: usize },

    /// A city link has no target
    #[error("city link {name:?} under {letter:?} has no href")]
    MissingHref { letter: String, name: String },
}

/// Extract the letter sections from the directory page.
///
/// List items without a link are skipped. A page with no sections yields
/// an empty list.
pub fn parse_directory(html: &str) -> Result<Vec<DirectorySection>, ScrapeError> {
    let dom = tl::parse(html, ParserOptions::default())
        .map_err(|e| log_scrape_error(ScrapeError::Html(format!("{e:?}"))))?;
    let parser = dom.parser();

    let Some(items) = dom.query_selector(".alphabet-item") else {
        return Ok(Vec::new());
    };

    let section_tags: Vec<&HTMLTag> = items
        .filter_map(|h| h.get(parser).and_then(|n| n.as_tag()))
        .filter(|t| t.name().as_utf8_str() == "div")
        .collect();

    let mut sections = Vec::with_capacity(section_tags.len());
    for (index, tag) in section_tags.into_iter().enumerate() {
        sections.push(parse_section(index, tag, parser)?);
    }

    Ok(sections)
}

fn parse_section<'a>(
    index: usize,
    section: &HTMLTag<'a>,
    parser: &Parser<'a>,
) -> Result<DirectorySection, ScrapeError> {
    let letter = matching_tags(section, parser, ".alphabet-title", "h3")
        .first()
        .and_then(|h| h.get(parser))
        .map(|n| decoded_text(&n.inner_text(parser)))
        .ok_or_else(|| log_scrape_error(ScrapeError::MissingTitle { section: index }))?;

    let mut entries = Vec::new();
    for item in matching_tags(section, parser, ".alphabet-list-item", "li") {
        let Some(item) = item.get(parser).and_then(|n| n.as_tag()) else {
            continue;
        };
        let Some(link) = matching_tags(item, parser, "a", "a").first().copied() else {
            continue;
        };
        let Some(link) = link.get(parser).and_then(|n| n.as_tag()) else {
            continue;
        };

        let name = decoded_text(&link.inner_text(parser));
        let href = link
            .attributes()
            .get("href")
            .flatten()
            .map(|b| decode_html_entities(&b.as_utf8_str()).into_owned())
            .ok_or_else(|| {
                log_scrape_error(ScrapeError::MissingHref {
                    letter: letter.clone(),
                    name: name.clone(),
                })
            })?;

        entries.push(DirectoryEntry {
            name,
            slug: slug_from_href(&href),
        });
    }

    Ok(DirectorySection { letter, entries })
}

/// Descendants of `tag` matching `selector` whose element name is `name`.
fn matching_tags<'a>(
    tag: &HTMLTag<'a>,
    parser: &Parser<'a>,
    selector: &str,
    name: &str,
) -> Vec<NodeHandle> {
    tag.query_selector(parser, selector)
        .map(|handles| {
            handles
                .filter(|h| {
                    h.get(parser)
                        .and_then(|n| n.as_tag())
                        .is_some_and(|t| t.name().as_utf8_str() == name)
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Text content with entity references resolved and surrounding
/// whitespace removed. `tl` hands back raw markup.
fn decoded_text(raw: &str) -> String {
    decode_html_entities(raw).trim().to_string()
}

/// `/bus/berlin` → `berlin`. Links to other paths keep their path without
/// the leading slash.
fn slug_from_href(href: &str) -> String {
    match href.split_once(CITY_PATH_PREFIX) {
        Some((_, slug)) => slug.to_string(),
        None => href.trim_start_matches('/').to_string(),
    }
}

fn log_scrape_error(err: ScrapeError) -> ScrapeError {
    warn!(error = %err, "failed to scrape city directory");
    err
}
