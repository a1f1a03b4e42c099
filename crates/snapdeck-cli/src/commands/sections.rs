use std::path::PathBuf;

use anyhow::Result;

pub fn run(deck_path: Option<PathBuf>) -> Result<()> {
    let deck = super::load_deck(deck_path.as_ref())?;

    println!("{} ({} sections)", deck.title, deck.len());
    for (i, section) in deck.sections.iter().enumerate() {
        println!("  {}. #{}  {}", i + 1, section.id, section.title);
    }

    Ok(())
}
