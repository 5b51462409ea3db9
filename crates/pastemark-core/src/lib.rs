//! pastemark-core - theme data model and block structure
//!
//! This crate provides the data structures shared by the pastemark
//! conversion engine and by theme data sources: ordered inline style maps,
//! the fourteen-role theme record, decorative background overrides, and the
//! block structure produced by the Markdown scanner.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──scan──▶ ┌────────────┐
//!                           │ Vec<Block> │ ──render + Theme──▶ HTML String
//!                           └────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use pastemark_core::StyleMap;
//!
//! let map = StyleMap::from([("backgroundColor", "#fff"), ("padding", "1em 0")]);
//! assert_eq!(map.to_css(), "background-color: #fff; padding: 1em 0");
//! ```

mod block;
mod style;
mod theme;

pub use block::Block;
pub use style::StyleMap;
pub use theme::{Background, Role, Theme, ThemeColors, ThemeError, ThemeStyles};
