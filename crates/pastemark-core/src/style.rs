//! Ordered inline style maps and their CSS serialization.

use indexmap::IndexMap;

/// An ordered mapping from CSS property name to literal value.
///
/// Keys may be written in camelCase (`backgroundColor`) or kebab-case
/// (`background-color`); serialization always emits kebab-case. Iteration
/// and serialization follow insertion order, which only affects how the
/// declarations are laid out, never what they mean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StyleMap(IndexMap<String, String>);

impl StyleMap {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the value for a property, by the key it was inserted under.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Insert a declaration, replacing any existing value for the property.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    /// Declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge `overrides` on top of this map, override wins on collision.
    /// Overridden properties keep their original position; properties new
    /// to the map append in override order.
    pub fn merged(&self, overrides: &StyleMap) -> StyleMap {
        let mut merged = self.0.clone();
        for (property, value) in &overrides.0 {
            merged.insert(property.clone(), value.clone());
        }
        StyleMap(merged)
    }

    /// Serialize to an inline `style` attribute value: `key: value` pairs
    /// joined by `"; "`, keys converted to kebab-case, no trailing separator.
    pub fn to_css(&self) -> String {
        let mut css = String::with_capacity(self.0.len() * 24);
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                css.push_str("; ");
            }
            push_kebab(&mut css, key);
            css.push_str(": ");
            css.push_str(value);
        }
        css
    }
}

impl<const N: usize> From<[(&str, &str); N]> for StyleMap {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Append `key` with every ASCII uppercase letter rewritten as `-` plus its
/// lowercase form (`backgroundColor` → `background-color`). Total over any
/// key; kebab-case input passes through unchanged.
fn push_kebab(out: &mut String, key: &str) {
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_camel_case_keys_to_kebab_case() {
        let map = StyleMap::from([("borderLeft", "4px solid #c86442")]);
        assert_eq!(map.to_css(), "border-left: 4px solid #c86442");
    }

    #[test]
    fn kebab_case_keys_pass_through() {
        let map = StyleMap::from([("background-color", "#fff")]);
        assert_eq!(map.to_css(), "background-color: #fff");
    }

    #[test]
    fn joins_declarations_with_semicolon_space() {
        let map = StyleMap::from([("padding", "1em 0"), ("backgroundColor", "#fff")]);
        assert_eq!(map.to_css(), "padding: 1em 0; background-color: #fff");
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut map = StyleMap::new();
        map.insert("zIndex", "10");
        map.insert("color", "#000");
        assert_eq!(map.to_css(), "z-index: 10; color: #000");
    }

    #[test]
    fn empty_map_serializes_to_empty_string() {
        assert_eq!(StyleMap::new().to_css(), "");
    }

    #[test]
    fn merged_override_wins_on_collision() {
        let base = StyleMap::from([("backgroundColor", "#fff"), ("color", "#000")]);
        let over = StyleMap::from([("backgroundColor", "#000")]);
        let merged = base.merged(&over);
        assert_eq!(merged.get("backgroundColor"), Some("#000"));
        assert_eq!(merged.get("color"), Some("#000"));
    }

    #[test]
    fn merged_with_empty_override_is_identity() {
        let base = StyleMap::from([("padding", "1em")]);
        assert_eq!(base.merged(&StyleMap::new()), base);
    }

    #[test]
    fn merged_appends_new_override_keys_in_order() {
        let base = StyleMap::from([("color", "#000")]);
        let over = StyleMap::from([("backgroundSize", "30px 30px"), ("backgroundRepeat", "repeat")]);
        assert_eq!(
            base.merged(&over).to_css(),
            "color: #000; background-size: 30px 30px; background-repeat: repeat"
        );
    }

    #[test]
    fn insert_replaces_an_existing_value() {
        let mut map = StyleMap::from([("color", "#000")]);
        map.insert("color", "#111");
        assert_eq!(map.to_css(), "color: #111");
    }
}
