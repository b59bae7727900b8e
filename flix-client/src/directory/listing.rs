//! Read-only projections over scraped directory entries.

use std::collections::BTreeSet;

use crate::domain::ScrapedCity;

use super::DirectorySection;

/// Flatten sections into one list of cities, in page order.
pub fn flatten(sections: Vec<DirectorySection>) -> Vec<ScrapedCity> {
    sections
        .into_iter()
        .flat_map(|section| {
            let letter = section.letter;
            section.entries.into_iter().map(move |entry| ScrapedCity {
                name: entry.name,
                slug: entry.slug,
                letter: letter.clone(),
            })
        })
        .collect()
}

/// Cities listed under `letter`, compared case-insensitively.
pub fn cities_by_letter(cities: &[ScrapedCity], letter: &str) -> Vec<ScrapedCity> {
    let wanted = letter.to_uppercase();
    cities
        .iter()
        .filter(|c| c.letter.to_uppercase() == wanted)
        .cloned()
        .collect()
}

/// Distinct letters that have at least one city.
pub fn unique_letters(cities: &[ScrapedCity]) -> BTreeSet<String> {
    cities.iter().map(|c| c.letter.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::DirectoryEntry;

    fn entry(name: &str) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            slug: name.to_lowercase(),
        }
    }

    fn sections() -> Vec<DirectorySection> {
        vec![
            DirectorySection {
                letter: "A".to_string(),
                entries: vec![entry("Aachen"), entry("Amsterdam")],
            },
            DirectorySection {
                letter: "B".to_string(),
                entries: vec![entry("Berlin")],
            },
            DirectorySection {
                letter: "C".to_string(),
                entries: Vec::new(),
            },
        ]
    }

    #[test]
    fn flatten_keeps_page_order() {
        let cities = flatten(sections());
        let names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Aachen", "Amsterdam", "Berlin"]);
        assert_eq!(cities[2].letter, "B");
        assert_eq!(cities[2].slug, "berlin");
    }

    #[test]
    fn by_letter_is_case_insensitive() {
        let cities = flatten(sections());

        let upper = cities_by_letter(&cities, "A");
        let lower = cities_by_letter(&cities, "a");
        assert_eq!(upper.len(), 2);
        assert_eq!(upper, lower);

        assert!(cities_by_letter(&cities, "C").is_empty());
        assert!(cities_by_letter(&cities, "AB").is_empty());
    }

    #[test]
    fn unique_letters_skip_empty_sections() {
        let letters = unique_letters(&flatten(sections()));
        assert_eq!(
            letters.into_iter().collect::<Vec<_>>(),
            ["A".to_string(), "B".to_string()]
        );
    }
}
