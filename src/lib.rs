//! A mid-level, opionated library for laying out word-wrapped, multi-colour
//! text on tri-colour e-paper displays.
//!
//! Raw message text may contain inline `RED{…}` markup; the engine parses
//! it, word-wraps the markup-stripped text to a pixel width budget using real
//! font metrics, optionally searches for the largest font size that fits a
//! height budget, and hands back centred, per-segment positioned lines ready
//! for an external renderer. The engine never touches pixels itself.

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Utility functions and structures to lay out colour-tagged message text
pub mod layout;

mod markup;
pub use markup::*;

mod units;
pub use units::*;

mod wrap;
pub use wrap::*;

/// Re-export [owned_ttf_parser], mostly for callers implementing their own
/// [FontProvider] on top of faces they already hold
pub use owned_ttf_parser;
