use crate::style::{ParagraphStyle, RunStyle};

/// Inline runs of formatted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    PlainText {
        text: String,
        font_family: &'static str,
        size_pt: u8,
        bold: bool,
        italic: bool,
        underline: bool,
        /// Followed by a forced line break
        line_break: bool,
    },
    /// Rendered blue and underlined
    Hyperlink {
        text: String,
        url: String,
    },
}

impl Run {
    pub fn plain(text: impl Into<String>, style: &RunStyle) -> Self {
        Run::PlainText {
            text: text.into(),
            font_family: style.font_family,
            size_pt: style.size_pt,
            bold: style.bold,
            italic: style.italic,
            underline: style.underline,
            line_break: false,
        }
    }

    /// A plain run that ends its line.
    pub fn line(text: impl Into<String>, style: &RunStyle) -> Self {
        Run::plain(text, style).with_line_break()
    }

    fn with_line_break(self) -> Self {
        match self {
            Run::PlainText {
                text,
                font_family,
                size_pt,
                bold,
                italic,
                underline,
                ..
            } => Run::PlainText {
                text,
                font_family,
                size_pt,
                bold,
                italic,
                underline,
                line_break: true,
            },
            link => link,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Run::PlainText { text, .. } | Run::Hyperlink { text, .. } => text,
        }
    }

    pub fn ends_line(&self) -> bool {
        matches!(self, Run::PlainText { line_break: true, .. })
    }
}

/// Paragraph look for `Block::Paragraph`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphKind {
    Normal,
    Quote,
}

/// Block-level units of the output document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Rule name header, emitted by the caller before each rule's body
    Title { text: String },
    Heading { text: String },
    Paragraph { style: ParagraphKind, runs: Vec<Run> },
    ListItem { runs: Vec<Run> },
    Preformatted { runs: Vec<Run> },
}

impl Block {
    pub fn paragraph(style: ParagraphKind) -> Self {
        Block::Paragraph {
            style,
            runs: Vec::new(),
        }
    }

    /// Paragraph style of a body block; titles carry their own fixed style.
    pub fn paragraph_style(&self) -> Option<ParagraphStyle> {
        match self {
            Block::Title { .. } => None,
            Block::Heading { .. } => Some(ParagraphStyle::Heading),
            Block::Paragraph {
                style: ParagraphKind::Quote,
                ..
            } => Some(ParagraphStyle::Quote),
            Block::Paragraph { .. } | Block::Preformatted { .. } => Some(ParagraphStyle::Normal),
            Block::ListItem { .. } => Some(ParagraphStyle::ListNumbered),
        }
    }

    pub fn runs(&self) -> &[Run] {
        match self {
            Block::Title { .. } | Block::Heading { .. } => &[],
            Block::Paragraph { runs, .. } | Block::ListItem { runs } | Block::Preformatted { runs } => {
                runs.as_slice()
            }
        }
    }

    /// Append a run. Headings and titles only keep the run's text.
    pub(crate) fn push(&mut self, run: Run) {
        match self {
            Block::Title { text } | Block::Heading { text } => text.push_str(run.text()),
            Block::Paragraph { runs, .. } | Block::ListItem { runs } | Block::Preformatted { runs } => {
                runs.push(run)
            }
        }
    }

    /// End the current line: the last run gains a forced break, or an empty
    /// break run is appended when there is no run to carry it.
    pub(crate) fn break_line(&mut self, style: &RunStyle) {
        let runs = match self {
            Block::Title { .. } | Block::Heading { .. } => return,
            Block::Paragraph { runs, .. } | Block::ListItem { runs } | Block::Preformatted { runs } => {
                runs
            }
        };

        match runs.pop() {
            Some(last @ Run::PlainText { line_break: false, .. }) => {
                runs.push(last.with_line_break())
            }
            Some(last) => {
                runs.push(last);
                runs.push(Run::line("", style));
            }
            None => runs.push(Run::line("", style)),
        }
    }
}
