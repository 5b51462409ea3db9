//! Read-only theme registry with registration-time validation.

use indexmap::IndexMap;

use pastemark_core::Theme;

use crate::RegistryError;

/// Validated themes keyed by id, in registration order.
///
/// Validation happens here, once, so a theme that reaches the renderer can
/// never fail mid-render. The first registered theme is the default.
#[derive(Debug, Default)]
pub struct ThemeRegistry {
    themes: IndexMap<String, Theme>,
}

impl ThemeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            themes: IndexMap::new(),
        }
    }

    /// Create a registry pre-loaded with the built-in themes.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for theme in crate::themes::builtin_themes() {
            registry
                .register(theme)
                .expect("built-in themes pass validation");
        }
        registry
    }

    /// Validate and add a theme. Fails on an unstyled role, an
    /// unserializable declaration, or a duplicate id; the registry is
    /// unchanged on failure.
    pub fn register(&mut self, theme: Theme) -> crate::Result<()> {
        theme.validate()?;
        if self.themes.contains_key(&theme.id) {
            return Err(RegistryError::DuplicateId(theme.id.clone()));
        }
        tracing::debug!(theme = %theme.id, "registered theme");
        self.themes.insert(theme.id.clone(), theme);
        Ok(())
    }

    /// Look up a theme by id.
    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.get(id)
    }

    /// The default theme: the first one registered.
    pub fn default_theme(&self) -> Option<&Theme> {
        self.themes.values().next()
    }

    /// Registered themes in registration order.
    pub fn themes(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
