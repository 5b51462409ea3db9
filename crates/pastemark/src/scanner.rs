//! Line scanner producing the block structure of a Markdown document.

use once_cell::sync::Lazy;
use regex::Regex;

use pastemark_core::Block;

static IMAGE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^!\[(.*?)\]\((.*?)\)$").unwrap());

/// Scan Markdown source into an ordered block sequence.
///
/// Single pass over the lines, linear in the input size. Fenced code
/// regions are consumed before any other classification, so their content
/// is never re-interpreted as headings, emphasis or list items. An
/// unterminated fence runs to the end of the input.
///
/// Malformed markup never fails; anything unrecognized falls through to a
/// paragraph.
pub fn scan(markdown: &str) -> Vec<Block> {
    let normalized = markdown.replace("\r\n", "\n");
    let mut blocks: Vec<Block> = Vec::new();
    let mut items: Vec<String> = Vec::new();

    let mut lines = normalized.lines();
    while let Some(line) = lines.next() {
        if line.starts_with("```") {
            // Text after the fence marker is an info string; languages are
            // not rendered, so it is discarded.
            flush_list(&mut blocks, &mut items);
            let mut code_lines: Vec<&str> = Vec::new();
            for code_line in lines.by_ref() {
                if code_line.trim() == "```" {
                    break;
                }
                code_lines.push(code_line);
            }
            // Reaching the end of input without a closing fence lands here
            // too: the remainder of the document is the code content.
            blocks.push(Block::CodeBlock {
                code: code_lines.join("\n").trim().to_string(),
            });
            continue;
        }

        if let Some(text) = line.strip_prefix("* ").or_else(|| line.strip_prefix("- ")) {
            items.push(text.to_string());
            continue;
        }

        // Any non-item line ends a pending list run.
        flush_list(&mut blocks, &mut items);

        if line.trim().is_empty() {
            continue;
        }

        // Longest heading marker first; four or more stay literal text.
        if let Some(text) = line.strip_prefix("### ") {
            blocks.push(Block::Heading {
                level: 3,
                text: text.to_string(),
            });
        } else if let Some(text) = line.strip_prefix("## ") {
            blocks.push(Block::Heading {
                level: 2,
                text: text.to_string(),
            });
        } else if let Some(text) = line.strip_prefix("# ") {
            blocks.push(Block::Heading {
                level: 1,
                text: text.to_string(),
            });
        } else if let Some(text) = line.strip_prefix("> ") {
            blocks.push(Block::Blockquote(text.to_string()));
        } else if line == "---" {
            blocks.push(Block::HorizontalRule);
        } else if let Some(caps) = IMAGE_LINE.captures(line.trim()) {
            blocks.push(Block::Image {
                alt: caps[1].to_string(),
                src: caps[2].to_string(),
            });
        } else {
            blocks.push(Block::Paragraph(line.trim().to_string()));
        }
    }
    flush_list(&mut blocks, &mut items);

    blocks
}

fn flush_list(blocks: &mut Vec<Block>, items: &mut Vec<String>) {
    if !items.is_empty() {
        blocks.push(Block::List {
            ordered: false,
            items: std::mem::take(items),
        });
    }
}
