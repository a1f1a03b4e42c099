//! Smooth scrolling for section transitions.
//!
//! - `easing` - pure easing and interpolation math
//! - `config` - `ScrollConfig` utilities (re-exported from snapdeck-core)
//! - `animation` - the `ScrollAnimator` controller driven once per frame
//!
//! The navigator decides *where* the viewport goes; this module only moves
//! it there. Starting a new animation replaces any active one, mirroring
//! how the navigator re-arms its settle deadline.

pub mod animation;
pub mod config;
pub mod easing;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
