pub mod config;
pub mod deck;
pub mod error;
pub mod navigator;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use deck::{Deck, NavLink, Section};
pub use error::{Error, Result};
pub use navigator::{HintDirection, Navigator, UiProjection, WheelOutcome};
