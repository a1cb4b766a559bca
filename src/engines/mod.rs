//! Concrete logging engines the adapters sit on
//!
//! Each engine owns its encoding, its level filter and its [`Destination`].

pub mod destination;
pub mod json;
pub mod logfmt;
pub mod text;

pub use destination::{Destination, SharedBuffer};
pub use json::{Event, JsonEngine};
pub use logfmt::{Leveled, LogfmtEngine};
pub use text::TextEngine;
