//! # pastemark
//!
//! Convert Markdown to a self-contained, inline-styled HTML fragment.
//!
//! Some rich-text paste targets (notably WeChat-style publishing editors)
//! strip stylesheets and `<style>` blocks and honor only inline `style`
//! attributes. This crate renders a constrained Markdown subset against a
//! named visual theme so that every element carries its own style string,
//! rooted in a single `<section>` with zero external style dependencies.
//!
//! ## Design
//!
//! Conversion is a pure function of `(markdown, theme, background)`: a line
//! scanner produces a block sequence, and a renderer walks it, resolving
//! inline markup per text run. Code block content never reaches the inline
//! rules, and themes are validated once at registration, so rendering
//! itself cannot fail.
//!
//! ## Example
//!
//! ```rust
//! use pastemark::{render, StyleMap, ThemeRegistry};
//!
//! let registry = ThemeRegistry::with_builtins();
//! let theme = registry.default_theme().unwrap();
//!
//! let html = render("# Hello\n\nSome **bold** text.", theme, &StyleMap::new());
//! assert!(html.starts_with("<section style=\""));
//! assert!(html.contains("<h1 style=\""));
//! ```

mod inline;
mod registry;
mod render;
mod scanner;
pub mod themes;

pub use pastemark_core::{
    Background, Block, Role, StyleMap, Theme, ThemeColors, ThemeError, ThemeStyles,
};
pub use registry::ThemeRegistry;
pub use render::render;
pub use scanner::scan;

/// Error type for theme registration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The theme failed validation
    #[error(transparent)]
    Invalid(#[from] ThemeError),

    /// A theme with this id is already registered
    #[error("a theme with id '{0}' is already registered")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
