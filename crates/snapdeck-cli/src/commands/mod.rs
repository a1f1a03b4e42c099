use std::path::PathBuf;

use anyhow::Result;

use snapdeck_core::Deck;

pub mod run;
pub mod sections;

/// Load a deck file, or the built-in sample when none is given
pub fn load_deck(path: Option<&PathBuf>) -> Result<Deck> {
    match path {
        Some(p) => Ok(Deck::load(p)?),
        None => Ok(Deck::sample()),
    }
}
