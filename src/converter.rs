use log::{debug, trace, warn};
use thiserror::Error;

use crate::block::{Block, ParagraphKind, Run};
use crate::element::{Element, href};
use crate::formatter;
use crate::style::{BODY_STYLE, BreakOnClose, Formatter, style_of};
use crate::tokenizer::{Token, tokenize};

/// Recoverable problems found while converting one rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("invalid markup state: {0}")]
    InvalidMarkupState(String),

    #[error("markup ended with unclosed elements: {}", .open.join(", "))]
    UnclosedElements { open: Vec<String> },
}

/// Replays markup tokens against a stack of open elements and collects the
/// resulting blocks.
///
/// One converter holds the state of one document: create a new one per
/// document, and call [`Converter::finish_rule`] between rules.
#[derive(Debug, Default)]
pub struct Converter {
    stack: Vec<Element>,
    blocks: Vec<Block>,
    // index into `blocks` of the block receiving runs
    current: Option<usize>,
    link_url: Option<String>,
    separator: Option<String>,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open elements.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn current_block(&self) -> Option<&Block> {
        self.current.and_then(|i| self.blocks.get(i))
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Emit the header block that precedes a rule's body.
    pub fn push_title(&mut self, name: &str) {
        self.blocks.push(Block::Title {
            text: name.to_string(),
        });
    }

    /// Convert one rule's markup, then close out the rule.
    ///
    /// Errors are per token and never stop the conversion; every one found is
    /// returned.
    pub fn convert_markup(&mut self, markup: &str) -> Vec<ConvertError> {
        let mut errors = Vec::new();

        for token in tokenize(markup) {
            if let Err(e) = self.process(token) {
                debug!("skipping token {:?}: {e}", token.as_str());
                errors.push(e);
            }
        }

        if let Err(e) = self.finish_rule() {
            errors.push(e);
        }

        errors
    }

    /// Apply a single token.
    pub fn process(&mut self, token: Token<'_>) -> Result<(), ConvertError> {
        trace!("token {:?} at depth {}", token.as_str(), self.stack.len());
        match token {
            Token::TagOpen {
                name,
                attributes,
                self_closing,
                ..
            } => {
                self.open(name, attributes, self_closing);
                Ok(())
            }
            Token::TagClose { name, .. } => {
                self.close(name);
                Ok(())
            }
            Token::Text(text) => self.text(text),
        }
    }

    /// Check the stack drained, then reset per-rule state so the next rule
    /// starts from an empty stack.
    pub fn finish_rule(&mut self) -> Result<(), ConvertError> {
        self.link_url = None;
        self.current = None;
        if self.stack.is_empty() {
            return Ok(());
        }

        let open: Vec<String> = self.stack.drain(..).map(|e| e.name().to_string()).collect();
        warn!("markup ended with {} open element(s): {}", open.len(), open.join(", "));
        Err(ConvertError::UnclosedElements { open })
    }

    fn open(&mut self, name: &str, attributes: &str, self_closing: bool) {
        if name.starts_with('!') || name.starts_with('?') {
            debug!("skipping declaration <{name}>");
            return;
        }

        let element = Element::from_name(name);
        if element.is_ignored() {
            trace!("ignoring <{name}>");
            return;
        }
        if self_closing {
            debug!("skipping self-closing <{name}/>");
            return;
        }

        if element == Element::A {
            self.link_url = href(attributes).map(str::to_string);
            if self.link_url.is_none() {
                debug!("anchor without href: {attributes:?}");
            }
        }

        if self.stack.is_empty() {
            if let Some(kind) = style_of(&element).starts {
                self.blocks.push(kind.open());
                self.current = Some(self.blocks.len() - 1);
            }
        }

        self.stack.push(element);
    }

    fn close(&mut self, name: &str) {
        let element = Element::from_name(name);

        // A list end leaves an empty paragraph behind even though `ul` is
        // otherwise ignored. Inside an open element it takes over as the
        // current block so later text lands after it.
        if element == Element::Ul {
            self.blocks.push(Block::paragraph(ParagraphKind::Normal));
            if !self.stack.is_empty() {
                self.current = Some(self.blocks.len() - 1);
            }
        }
        if element.is_ignored() {
            return;
        }

        if self.stack.last() != Some(&element) {
            debug!(
                "unbalanced </{name}>, innermost open element is {:?}",
                self.stack.last().map(Element::name)
            );
            return;
        }

        self.break_on_close(&element);
        self.stack.pop();

        if element == Element::A {
            self.link_url = None;
        }
        if self.stack.is_empty() {
            self.current = None;
        }
    }

    fn break_on_close(&mut self, element: &Element) {
        let wanted = match style_of(element).break_on_close {
            BreakOnClose::Never => false,
            BreakOnClose::Always => true,
            // only the element directly beneath is inspected
            BreakOnClose::OutsideQuote => {
                let below = self.stack.len().checked_sub(2).map(|i| &self.stack[i]);
                below != Some(&Element::Blockquote)
            }
        };

        if wanted {
            if let Some(block) = self.current_mut() {
                block.break_line(&BODY_STYLE);
            }
        }
    }

    fn text(&mut self, text: &str) -> Result<(), ConvertError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let Some(top) = self.stack.last() else {
            debug!("dropping text outside any element: {:?}", text.trim());
            return Ok(());
        };
        if self.current.is_none() {
            debug!("dropping text with no open block: {:?}", text.trim());
            return Ok(());
        }

        match style_of(top).formatter {
            Formatter::Plain(style, newlines) => {
                let run = formatter::plain(text, &style, newlines);
                self.append([run]);
            }
            Formatter::Preformatted => {
                let separator = self.separator.get_or_insert_with(formatter::separator_line);
                let runs = formatter::preformatted(text, separator);
                self.append(runs);
            }
            Formatter::Hyperlink => {
                let runs = formatter::hyperlink(text, self.link_url.as_deref())?;
                self.append(runs);
            }
            Formatter::Discard => {
                debug!("dropping text inside <{}>: {:?}", top.name(), text.trim());
            }
        }

        Ok(())
    }

    fn append(&mut self, runs: impl IntoIterator<Item = Run>) {
        if let Some(block) = self.current_mut() {
            for run in runs {
                block.push(run);
            }
        }
    }

    fn current_mut(&mut self) -> Option<&mut Block> {
        self.current.and_then(|i| self.blocks.get_mut(i))
    }
}
