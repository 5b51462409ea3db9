//! Renderer from scanned blocks to a self-contained HTML fragment.

use pastemark_core::{Block, StyleMap, Theme};

use crate::inline;
use crate::scanner;

/// Fixed declaration for the inner `<code>` of a code block; paste targets
/// reliably honor an explicit monospace stack.
const CODE_BLOCK_FONT: &str =
    "font-family: Menlo, Monaco, Consolas, Courier New, monospace; display: block; white-space: pre-wrap;";

/// Convert Markdown to a single `<section>`-rooted HTML fragment in which
/// every element carries its own inline `style` attribute.
///
/// `background` is merged over the theme's container style, override wins
/// on collision; pass an empty map for no override. The call is pure and
/// never fails: malformed Markdown degrades to literal text, and empty
/// input yields an empty styled `<section>`.
pub fn render(markdown: &str, theme: &Theme, background: &StyleMap) -> String {
    let blocks = scanner::scan(markdown);
    tracing::trace!(
        input_len = markdown.len(),
        blocks = blocks.len(),
        theme = %theme.id,
        "rendering document"
    );

    let mut body = String::with_capacity(markdown.len() * 2);
    for block in &blocks {
        render_block(block, theme, &mut body);
    }

    let container = theme.styles.container.merged(background);
    format!(
        "<section style=\"{}\">{}</section>",
        container.to_css(),
        body
    )
}

/// Append one block's HTML. Blocks are self-spacing through their own
/// margins, so no separator is emitted between them.
fn render_block(block: &Block, theme: &Theme, out: &mut String) {
    let styles = &theme.styles;
    match block {
        Block::Heading { level, text } => {
            let style = match *level {
                1 => &styles.h1,
                2 => &styles.h2,
                _ => &styles.h3,
            };
            push_tag(out, &format!("h{level}"), style, &inline::resolve(text, styles));
        }

        Block::Paragraph(text) => {
            push_tag(out, "p", &styles.paragraph, &inline::resolve(text, styles));
        }

        Block::Blockquote(text) => {
            push_tag(
                out,
                "blockquote",
                &styles.blockquote,
                &inline::resolve(text, styles),
            );
        }

        Block::CodeBlock { code } => {
            out.push_str("<pre style=\"");
            out.push_str(&styles.code_block.to_css());
            out.push_str("\"><code style=\"");
            out.push_str(CODE_BLOCK_FONT);
            out.push_str("\">");
            out.push_str(code);
            out.push_str("</code></pre>");
        }

        Block::List { ordered, items } => {
            let (tag, style) = if *ordered {
                ("ol", &styles.ordered_list)
            } else {
                ("ul", &styles.unordered_list)
            };
            out.push_str("<");
            out.push_str(tag);
            out.push_str(" style=\"");
            out.push_str(&style.to_css());
            out.push_str("\">");
            for item in items {
                push_tag(out, "li", &styles.list_item, &inline::resolve(item, styles));
            }
            out.push_str("</");
            out.push_str(tag);
            out.push_str(">");
        }

        Block::HorizontalRule => {
            out.push_str("<hr style=\"");
            out.push_str(&styles.horizontal_rule.to_css());
            out.push_str("\" />");
        }

        Block::Image { alt, src } => {
            out.push_str("<img src=\"");
            out.push_str(src);
            out.push_str("\" alt=\"");
            out.push_str(alt);
            out.push_str("\" style=\"");
            out.push_str(&styles.image.to_css());
            out.push_str("\" />");
        }
    }
}

fn push_tag(out: &mut String, tag: &str, style: &StyleMap, content: &str) {
    out.push_str("<");
    out.push_str(tag);
    out.push_str(" style=\"");
    out.push_str(&style.to_css());
    out.push_str("\">");
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">");
}
