mod block;
mod config;
mod converter;
mod document;
mod element;
mod formatter;
mod style;
mod text;
mod tokenizer;

pub use block::{Block, ParagraphKind, Run};
pub use config::{Config, ConfigError};
pub use converter::{ConvertError, Converter};
pub use document::{Document, Issue, Rule, RuleSet, RuleSourceError};
pub use element::{Element, IGNORED};
pub use style::{
    BlockKind, BreakOnClose, ElementStyle, Formatter, Newlines, ParagraphStyle,
    RunStyle, SEPARATOR_WIDTH, TITLE_STYLE, style_of,
};
pub use text::render_text;
pub use tokenizer::{Token, tokenize};

/// Convert a single markup fragment into blocks, discarding recoverable
/// errors after logging them.
pub fn convert(markup: &str) -> Vec<Block> {
    let mut converter = Converter::new();
    converter.convert_markup(markup);
    converter.into_blocks()
}

/// Load a rule file, sort it by name and convert it into one document.
pub fn convert_rule_file(path: &std::path::Path) -> Result<Document, RuleSourceError> {
    let mut rules = RuleSet::load(path)?;
    rules.sort_by_name();
    Ok(Document::from_rules(&rules.rules))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn bundled_rules_convert_cleanly() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("rules/java.toml");
        let doc = convert_rule_file(&path).unwrap();

        assert!(doc.issues.is_empty(), "{:?}", doc.issues);
        assert_eq!(
            doc.blocks[0],
            Block::Title {
                text: "Cookies should be \"secure\"".to_string()
            }
        );

        let titles = doc
            .blocks
            .iter()
            .filter(|b| matches!(b, Block::Title { .. }))
            .count();
        assert_eq!(titles, 2);
        assert!(doc.blocks.iter().any(|b| matches!(b, Block::Preformatted { .. })));
        assert!(doc.blocks.iter().flat_map(|b| b.runs()).any(|r| matches!(
            r,
            Run::Hyperlink { url, .. } if url == "https://cwe.mitre.org/data/definitions/89"
        )));
    }

    #[test]
    fn strong_stays_in_paragraph() {
        let blocks = convert("<p>a <strong>b</strong> c</p>");
        assert_eq!(blocks.len(), 1);
        assert!(matches!(
            &blocks[0].runs()[1],
            Run::PlainText { text, bold: true, font_family: "Arial", .. } if text == "b"
        ));
    }
}
