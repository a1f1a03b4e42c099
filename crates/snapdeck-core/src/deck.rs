//! Deck content model: the ordered sections a viewport snaps between,
//! plus the nav links that address them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One full-viewport content block among an ordered sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Unique identifier, addressable from nav links and the start fragment
    pub id: String,
    /// Heading rendered at the top of the section
    pub title: String,
    /// Body text, one entry per paragraph
    #[serde(default)]
    pub body: Vec<String>,
}

/// A clickable nav label paired with a target section identifier.
///
/// The target is not required to name an existing section; resolution
/// happens at click time (see `App::activate_link`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

/// An ordered collection of sections with its nav links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default = "default_deck_title")]
    pub title: String,
    #[serde(rename = "section")]
    pub sections: Vec<Section>,
    #[serde(rename = "nav", default)]
    pub nav_links: Vec<NavLink>,
}

fn default_deck_title() -> String {
    "snapdeck".to_string()
}

impl Deck {
    /// Load and validate a deck from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate a deck from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut deck: Deck =
            toml::from_str(content).map_err(|e| Error::Deck(e.to_string()))?;
        deck.validate()?;
        deck.ensure_nav_links();
        Ok(deck)
    }

    /// Built-in deck used when no file is given
    pub fn sample() -> Self {
        let mut deck = Self {
            title: "snapdeck".to_string(),
            sections: vec![
                Section {
                    id: "intro".to_string(),
                    title: "Welcome".to_string(),
                    body: vec![
                        "A deck of full-screen sections, one viewport at a time.".to_string(),
                        "Scroll, click a nav link, or use the arrow keys.".to_string(),
                    ],
                },
                Section {
                    id: "about".to_string(),
                    title: "About".to_string(),
                    body: vec![
                        "Each section fills the terminal; transitions are animated.".to_string(),
                        "The indicator at the bottom always points somewhere useful.".to_string(),
                    ],
                },
                Section {
                    id: "work".to_string(),
                    title: "Work".to_string(),
                    body: vec![
                        "Write your own deck as a TOML file with [[section]] tables.".to_string(),
                        "Run `snapdeck sections <file>` to list what it contains.".to_string(),
                    ],
                },
                Section {
                    id: "contact".to_string(),
                    title: "Contact".to_string(),
                    body: vec![
                        "Press q to leave.".to_string(),
                        "The indicator wraps back to the top from here.".to_string(),
                    ],
                },
            ],
            nav_links: Vec::new(),
        };
        deck.ensure_nav_links();
        deck
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Index of the section with the given identifier
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(Error::Deck("deck has no sections".to_string()));
        }
        for (i, section) in self.sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(Error::Deck(format!("section {} has an empty id", i)));
            }
            if self.sections[..i].iter().any(|s| s.id == section.id) {
                return Err(Error::Deck(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }
        Ok(())
    }

    /// Derive one nav link per section when the deck declares none
    fn ensure_nav_links(&mut self) {
        if self.nav_links.is_empty() {
            self.nav_links = self
                .sections
                .iter()
                .map(|s| NavLink {
                    label: s.title.clone(),
                    target: s.id.clone(),
                })
                .collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_deck_valid() {
        let deck = Deck::sample();
        assert_eq!(deck.len(), 4);
        assert_eq!(deck.sections[0].id, "intro");
        assert_eq!(deck.nav_links.len(), 4);
        assert_eq!(deck.nav_links[1].target, "about");
    }

    #[test]
    fn test_parse_deck_with_explicit_nav() {
        let deck = Deck::from_toml(
            r#"
            title = "demo"

            [[section]]
            id = "one"
            title = "One"
            body = ["first"]

            [[section]]
            id = "two"
            title = "Two"

            [[nav]]
            label = "Start"
            target = "one"
            "#,
        )
        .unwrap();
        assert_eq!(deck.title, "demo");
        assert_eq!(deck.len(), 2);
        // Explicit nav links are kept as-is, not padded per section
        assert_eq!(deck.nav_links.len(), 1);
        assert_eq!(deck.section_index("two"), Some(1));
        assert_eq!(deck.section_index("missing"), None);
    }

    #[test]
    fn test_derived_nav_links() {
        let deck = Deck::from_toml(
            r#"
            [[section]]
            id = "solo"
            title = "Solo"
            "#,
        )
        .unwrap();
        assert_eq!(deck.nav_links.len(), 1);
        assert_eq!(deck.nav_links[0].label, "Solo");
        assert_eq!(deck.nav_links[0].target, "solo");
    }

    #[test]
    fn test_empty_deck_rejected() {
        let err = Deck::from_toml("title = \"empty\"\nsection = []").unwrap_err();
        assert!(matches!(err, Error::Deck(_)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Deck::from_toml(
            r#"
            [[section]]
            id = "dup"
            title = "A"

            [[section]]
            id = "dup"
            title = "B"
            "#,
        );
        assert!(matches!(result, Err(Error::Deck(_))));
    }

    #[test]
    fn test_blank_id_rejected() {
        let result = Deck::from_toml(
            r#"
            [[section]]
            id = "  "
            title = "Blank"
            "#,
        );
        assert!(matches!(result, Err(Error::Deck(_))));
    }
}
