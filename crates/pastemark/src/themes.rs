//! Built-in themes and backgrounds.
//!
//! Static configuration tables; the engine itself only ever consumes the
//! resulting [`Theme`] and [`Background`] values, and nothing here is
//! special-cased — callers can register their own themes alongside or
//! instead of these.

use pastemark_core::{Background, StyleMap, Theme, ThemeColors, ThemeStyles};

/// Font stack that renders consistently inside Chinese-language publishing
/// editors while degrading cleanly elsewhere.
const FONT_STACK: &str = "'PingFang SC', -apple-system-font, BlinkMacSystemFont, 'Helvetica Neue', 'Hiragino Sans GB', 'Microsoft YaHei UI', 'Microsoft YaHei', Arial, sans-serif";

/// All built-in themes, default first.
pub fn builtin_themes() -> Vec<Theme> {
    vec![pure_elegant(), retro_story()]
}

/// All built-in backgrounds; the first is the empty identity override.
pub fn builtin_backgrounds() -> Vec<Background> {
    vec![
        Background {
            id: "none".into(),
            name: "None".into(),
            css: StyleMap::new(),
        },
        Background {
            id: "grid-yellow".into(),
            name: "Yellow grid".into(),
            css: StyleMap::from([
                ("backgroundColor", "#fdf8e8"),
                (
                    "backgroundImage",
                    "linear-gradient(rgba(180, 160, 100, 0.25) 1px, transparent 1px), linear-gradient(90deg, rgba(180, 160, 100, 0.25) 1px, transparent 1px)",
                ),
                ("backgroundSize", "30px 30px"),
                ("backgroundRepeat", "repeat"),
                ("boxShadow", "inset 0 0 20px rgba(180, 140, 80, 0.1)"),
            ]),
        },
        Background {
            id: "grid-white".into(),
            name: "White grid".into(),
            css: StyleMap::from([
                ("backgroundColor", "#ffffff"),
                (
                    "backgroundImage",
                    "linear-gradient(rgba(200, 200, 200, 0.35) 1px, transparent 1px), linear-gradient(90deg, rgba(200, 200, 200, 0.35) 1px, transparent 1px)",
                ),
                ("backgroundSize", "28px 28px"),
                ("backgroundRepeat", "repeat"),
                ("boxShadow", "inset 0 0 20px rgba(0, 0, 0, 0.03)"),
            ]),
        },
    ]
}

/// Solid warm-paper palette with a terracotta accent; the most conservative
/// of the built-ins and therefore the default.
fn pure_elegant() -> Theme {
    Theme {
        id: "pure-elegant".into(),
        name: "Pure Elegant".into(),
        description: "Classic solid-color layout that survives every paste target".into(),
        colors: ThemeColors {
            primary: "#c86442".into(),
            background: "#faf9f5".into(),
            text: "#222222".into(),
        },
        styles: ThemeStyles {
            container: StyleMap::from([
                ("padding", "30px 20px"),
                ("backgroundColor", "#faf9f5"),
                ("color", "#222222"),
                ("lineHeight", "1.75"),
                ("maxWidth", "100%"),
                ("margin", "0 auto"),
                ("boxSizing", "border-box"),
                ("fontFamily", FONT_STACK),
                ("borderRadius", "12px"),
                ("display", "block"),
                ("minHeight", "500px"),
            ]),
            h1: StyleMap::from([
                ("margin", "1.5em 0 0.75em 0"),
                ("padding", "0.8em 1em"),
                ("backgroundColor", "#c86442"),
                ("fontSize", "20px"),
                ("fontWeight", "bold"),
                ("lineHeight", "1.4"),
                ("color", "#ffffff"),
                ("textAlign", "center"),
                ("borderRadius", "8px"),
            ]),
            h2: StyleMap::from([
                ("margin", "2em 0 0.75em 0"),
                ("padding", "0 0 0.5em 12px"),
                ("borderLeft", "4px solid #c86442"),
                ("borderBottom", "1px dashed #c86442"),
                ("fontSize", "18px"),
                ("fontWeight", "bold"),
                ("color", "#3f3f3f"),
            ]),
            h3: StyleMap::from([
                ("fontSize", "17px"),
                ("fontWeight", "bold"),
                ("margin", "1.5em 0 0.5em 0"),
                ("color", "#c86442"),
            ]),
            paragraph: StyleMap::from([
                ("marginBottom", "1.2em"),
                ("fontSize", "15px"),
                ("color", "#222222"),
                ("textAlign", "justify"),
                ("letterSpacing", "0.05em"),
                ("lineHeight", "1.8"),
            ]),
            blockquote: StyleMap::from([
                ("borderLeft", "3px solid #c86442"),
                ("padding", "15px 20px"),
                ("margin", "20px 0"),
                ("background", "#fcf2ee"),
                ("color", "#666666"),
                ("fontSize", "14px"),
                ("borderRadius", "4px"),
            ]),
            inline_code: StyleMap::from([
                ("background", "#f3f4f6"),
                ("padding", "2px 4px"),
                ("borderRadius", "3px"),
                ("fontSize", "13px"),
                ("color", "#c86442"),
            ]),
            code_block: StyleMap::from([
                ("background", "#2d2d2d"),
                ("color", "#cccccc"),
                ("padding", "15px"),
                ("borderRadius", "8px"),
                ("marginBottom", "20px"),
                ("fontSize", "13px"),
                ("overflowX", "auto"),
            ]),
            unordered_list: StyleMap::from([
                ("paddingLeft", "20px"),
                ("marginBottom", "1.2em"),
                ("listStyleType", "disc"),
            ]),
            ordered_list: StyleMap::from([
                ("paddingLeft", "20px"),
                ("marginBottom", "1.2em"),
            ]),
            list_item: StyleMap::from([
                ("marginBottom", "6px"),
                ("fontSize", "15px"),
                ("color", "#333333"),
            ]),
            strong: StyleMap::from([("color", "#c86442"), ("fontWeight", "bold")]),
            horizontal_rule: StyleMap::from([
                ("border", "none"),
                ("height", "1px"),
                ("margin", "2em 0"),
                (
                    "background",
                    "linear-gradient(to right, rgba(200, 100, 66, 0), rgba(200, 100, 66, 0.6), rgba(200, 100, 66, 0))",
                ),
            ]),
            image: StyleMap::from([
                ("maxWidth", "100%"),
                ("borderRadius", "8px"),
                ("margin", "15px 0"),
                ("display", "block"),
            ]),
        },
    }
}

/// Serif long-form reading theme on warm paper tones.
fn retro_story() -> Theme {
    Theme {
        id: "retro-story".into(),
        name: "Retro Story".into(),
        description: "Serif type and warm paper for long-form reading".into(),
        colors: ThemeColors {
            primary: "#78350f".into(),
            background: "#fdfaf6".into(),
            text: "#451a03".into(),
        },
        styles: ThemeStyles {
            container: StyleMap::from([
                ("padding", "40px 25px"),
                ("backgroundColor", "#fdfaf6"),
                ("color", "#451a03"),
                ("lineHeight", "2"),
                ("fontFamily", "'Noto Serif SC', serif"),
                ("borderRadius", "12px"),
                ("minHeight", "500px"),
            ]),
            h1: StyleMap::from([
                ("fontSize", "24px"),
                ("textAlign", "center"),
                ("fontWeight", "700"),
                ("marginBottom", "40px"),
                ("border", "3px double #78350f"),
                ("padding", "15px"),
            ]),
            h2: StyleMap::from([
                ("fontSize", "19px"),
                ("fontWeight", "700"),
                ("textAlign", "center"),
                ("margin", "2em 0 1.5em 0"),
                ("borderBottom", "1px solid #78350f"),
                ("paddingBottom", "5px"),
            ]),
            h3: StyleMap::from([
                ("fontSize", "17px"),
                ("fontWeight", "700"),
                ("fontStyle", "italic"),
                ("marginTop", "1.5em"),
            ]),
            paragraph: StyleMap::from([
                ("marginBottom", "1.8em"),
                ("fontSize", "16px"),
                ("textIndent", "2em"),
            ]),
            blockquote: StyleMap::from([
                ("border", "1px solid #d97706"),
                ("padding", "20px"),
                ("margin", "30px 10px"),
                ("fontStyle", "italic"),
                ("background", "#fffbeb"),
            ]),
            inline_code: StyleMap::from([
                ("background", "#fef3c7"),
                ("color", "#92400e"),
                ("padding", "2px 4px"),
            ]),
            code_block: StyleMap::from([
                ("background", "#451a03"),
                ("color", "#fef3c7"),
                ("padding", "20px"),
                ("borderRadius", "4px"),
            ]),
            unordered_list: StyleMap::from([("paddingLeft", "25px")]),
            ordered_list: StyleMap::from([("paddingLeft", "25px")]),
            list_item: StyleMap::from([("marginBottom", "12px")]),
            strong: StyleMap::from([
                ("color", "#92400e"),
                ("borderBottom", "1px solid #92400e"),
            ]),
            horizontal_rule: StyleMap::from([
                ("border", "none"),
                ("borderTop", "1px solid #d97706"),
                ("margin", "50px 0"),
            ]),
            image: StyleMap::from([("maxWidth", "100%"), ("filter", "sepia(20%)")]),
        },
    }
}
