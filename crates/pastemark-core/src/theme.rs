//! Themes: per-role style tables, identity, and registration-time validation.

use thiserror::Error;

use crate::style::StyleMap;

/// The fourteen element roles a theme must style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Container,
    H1,
    H2,
    H3,
    Paragraph,
    Blockquote,
    InlineCode,
    CodeBlock,
    UnorderedList,
    OrderedList,
    ListItem,
    Strong,
    HorizontalRule,
    Image,
}

impl Role {
    pub const ALL: [Role; 14] = [
        Role::Container,
        Role::H1,
        Role::H2,
        Role::H3,
        Role::Paragraph,
        Role::Blockquote,
        Role::InlineCode,
        Role::CodeBlock,
        Role::UnorderedList,
        Role::OrderedList,
        Role::ListItem,
        Role::Strong,
        Role::HorizontalRule,
        Role::Image,
    ];

    /// Stable name used in validation errors and theme data files.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Container => "container",
            Role::H1 => "h1",
            Role::H2 => "h2",
            Role::H3 => "h3",
            Role::Paragraph => "paragraph",
            Role::Blockquote => "blockquote",
            Role::InlineCode => "inline-code",
            Role::CodeBlock => "code-block",
            Role::UnorderedList => "unordered-list",
            Role::OrderedList => "ordered-list",
            Role::ListItem => "list-item",
            Role::Strong => "strong",
            Role::HorizontalRule => "horizontal-rule",
            Role::Image => "image",
        }
    }
}

/// Inline style tables for every supported element role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "kebab-case", deny_unknown_fields)
)]
pub struct ThemeStyles {
    pub container: StyleMap,
    pub h1: StyleMap,
    pub h2: StyleMap,
    pub h3: StyleMap,
    pub paragraph: StyleMap,
    pub blockquote: StyleMap,
    pub inline_code: StyleMap,
    pub code_block: StyleMap,
    pub unordered_list: StyleMap,
    pub ordered_list: StyleMap,
    pub list_item: StyleMap,
    pub strong: StyleMap,
    pub horizontal_rule: StyleMap,
    pub image: StyleMap,
}

impl ThemeStyles {
    /// Look up the style table for a role.
    pub fn role(&self, role: Role) -> &StyleMap {
        match role {
            Role::Container => &self.container,
            Role::H1 => &self.h1,
            Role::H2 => &self.h2,
            Role::H3 => &self.h3,
            Role::Paragraph => &self.paragraph,
            Role::Blockquote => &self.blockquote,
            Role::InlineCode => &self.inline_code,
            Role::CodeBlock => &self.code_block,
            Role::UnorderedList => &self.unordered_list,
            Role::OrderedList => &self.ordered_list,
            Role::ListItem => &self.list_item,
            Role::Strong => &self.strong,
            Role::HorizontalRule => &self.horizontal_rule,
            Role::Image => &self.image,
        }
    }

    /// All roles paired with their style tables, in declaration order.
    pub fn roles(&self) -> impl Iterator<Item = (Role, &StyleMap)> {
        Role::ALL.iter().map(move |&role| (role, self.role(role)))
    }
}

/// Palette summary used by surrounding UI chrome (pickers, swatches).
/// The renderer itself reads only `styles`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeColors {
    pub primary: String,
    pub background: String,
    pub text: String,
}

/// A named bundle of inline-style declarations for every element role.
/// Immutable once constructed; the engine never mutates a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
    pub styles: ThemeStyles,
}

impl Theme {
    /// Check that every role is actually styled and that every declaration
    /// can be carried inside a double-quoted `style` attribute.
    ///
    /// Presence of all fourteen role fields is enforced by the type; an
    /// empty table is the data-driven equivalent of a missing role and is
    /// rejected the same way. Runs at registration time so the renderer
    /// never sees an invalid theme.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for (role, styles) in self.styles.roles() {
            if styles.is_empty() {
                return Err(ThemeError::MissingRole {
                    theme: self.id.clone(),
                    role: role.as_str(),
                });
            }
            for (property, value) in styles.iter() {
                if !attribute_safe(property) || !attribute_safe(value) {
                    return Err(ThemeError::UnserializableValue {
                        theme: self.id.clone(),
                        role: role.as_str(),
                        property: property.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// A decorative backdrop applied over a theme's container style. The empty
/// `css` map is the identity override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Background {
    pub id: String,
    pub name: String,
    pub css: StyleMap,
}

/// Errors surfaced when a theme is validated for registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A role has no style declarations at all.
    #[error("theme '{theme}' is missing styles for role '{role}'")]
    MissingRole { theme: String, role: &'static str },

    /// A declaration cannot be represented inside a `style` attribute.
    #[error("theme '{theme}' role '{role}' has an unserializable value for property '{property}'")]
    UnserializableValue {
        theme: String,
        role: &'static str,
        property: String,
    },
}

fn attribute_safe(s: &str) -> bool {
    !s.chars().any(|c| c == '"' || c.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_theme() -> Theme {
        let decl = || StyleMap::from([("color", "#000")]);
        Theme {
            id: "test".into(),
            name: "Test".into(),
            description: String::new(),
            colors: ThemeColors::default(),
            styles: ThemeStyles {
                container: decl(),
                h1: decl(),
                h2: decl(),
                h3: decl(),
                paragraph: decl(),
                blockquote: decl(),
                inline_code: decl(),
                code_block: decl(),
                unordered_list: decl(),
                ordered_list: decl(),
                list_item: decl(),
                strong: decl(),
                horizontal_rule: decl(),
                image: decl(),
            },
        }
    }

    #[test]
    fn valid_theme_passes_validation() {
        assert_eq!(minimal_theme().validate(), Ok(()));
    }

    #[test]
    fn empty_role_fails_naming_the_role() {
        let mut theme = minimal_theme();
        theme.styles.blockquote = StyleMap::new();
        assert_eq!(
            theme.validate(),
            Err(ThemeError::MissingRole {
                theme: "test".into(),
                role: "blockquote",
            })
        );
    }

    #[test]
    fn double_quote_in_value_fails_validation() {
        let mut theme = minimal_theme();
        theme
            .styles
            .paragraph
            .insert("fontFamily", "\"Comic Sans MS\"");
        assert_eq!(
            theme.validate(),
            Err(ThemeError::UnserializableValue {
                theme: "test".into(),
                role: "paragraph",
                property: "fontFamily".into(),
            })
        );
    }

    #[test]
    fn newline_in_value_fails_validation() {
        let mut theme = minimal_theme();
        theme.styles.h1.insert("content", "a\nb");
        assert!(matches!(
            theme.validate(),
            Err(ThemeError::UnserializableValue { .. })
        ));
    }

    #[test]
    fn roles_cover_all_fourteen() {
        assert_eq!(Role::ALL.len(), 14);
        assert_eq!(minimal_theme().styles.roles().count(), 14);
    }

    #[test]
    fn role_names_are_distinct() {
        let mut names: Vec<&str> = Role::ALL.iter().map(|r| r.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 14);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn theme_survives_a_json_round_trip() {
        let theme = minimal_theme();
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_styles_missing_a_role_are_rejected() {
        let err = serde_json::from_str::<ThemeStyles>(r#"{"container": {}}"#).unwrap_err();
        assert!(err.to_string().contains("missing field"));
    }
}
