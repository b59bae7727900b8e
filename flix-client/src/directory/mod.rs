//! The public city directory (`/bus` on the website).
//!
//! The page lists every city under a letter heading. Markup handling is
//! confined to [`scrape`]; the rest of the crate sees only
//! [`DirectorySection`]s through a [`DirectorySource`].

mod listing;
mod scrape;
mod source;

pub use listing::{cities_by_letter, flatten, unique_letters};
pub use scrape::{ScrapeError, parse_directory};
pub use source::{DirectorySource, WebDirectory};

/// One city link in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub slug: String,
}

/// All entries listed under one heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySection {
    pub letter: String,
    pub entries: Vec<DirectoryEntry>,
}
