use crate::block::{Block, Run};
use crate::style::{ParagraphStyle, TITLE_STYLE};

/// Render blocks as a plain-text preview
pub fn render_text(blocks: &[Block]) -> String {
    let mut out = String::new();
    // consecutive list items share one numbering
    let mut list_number = 0;

    for block in blocks {
        if block.paragraph_style() == Some(ParagraphStyle::ListNumbered) {
            list_number += 1;
        } else {
            list_number = 0;
        }
        emit_block(block, list_number, &mut out);
    }

    out
}

fn emit_block(block: &Block, list_number: usize, out: &mut String) {
    match block {
        Block::Title { text } => {
            out.push_str(text);
            if TITLE_STYLE.underline {
                out.push('\n');
                out.push_str(&"=".repeat(text.chars().count()));
            }
            out.push_str("\n\n");
        }
        Block::Heading { text } => {
            out.push_str("### ");
            out.push_str(text.trim());
            out.push_str("\n\n");
        }
        Block::Paragraph { runs, .. } => {
            let body = runs_to_text(runs);
            let body = body.trim_end_matches('\n');
            if body.trim().is_empty() {
                out.push('\n');
                return;
            }
            if block.paragraph_style() == Some(ParagraphStyle::Quote) {
                prefix_lines(body, "> ", "> ", out);
            } else {
                out.push_str(body);
            }
            out.push_str("\n\n");
        }
        Block::ListItem { runs } => {
            let marker = format!("{list_number}. ");
            let indent = " ".repeat(marker.len());
            prefix_lines(runs_to_text(runs).trim_end_matches('\n'), &marker, &indent, out);
            out.push('\n');
        }
        Block::Preformatted { runs } => {
            out.push_str(runs_to_text(runs).trim_end_matches('\n'));
            out.push_str("\n\n");
        }
    }
}

fn runs_to_text(runs: &[Run]) -> String {
    let mut text = String::new();
    for run in runs {
        match run {
            Run::PlainText {
                text: t,
                line_break,
                ..
            } => {
                text.push_str(t);
                if *line_break {
                    text.push('\n');
                }
            }
            Run::Hyperlink { text: t, url } => {
                text.push_str(t);
                text.push_str(" <");
                text.push_str(url);
                text.push('>');
            }
        }
    }
    text
}

fn prefix_lines(body: &str, first: &str, rest: &str, out: &mut String) {
    for (i, line) in body.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(if i == 0 { first } else { rest });
        out.push_str(line);
    }
}
