//! Static formatting policy for each supported element.
//!
//! Nothing here has control flow beyond the lookup itself; the converter
//! decides when a block opens or a run is appended and asks this table how.

use crate::block::{Block, ParagraphKind};
use crate::element::Element;

const CALIBRI: &str = "Calibri";
const ARIAL: &str = "Arial";

/// Character formatting applied to a plain run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStyle {
    pub font_family: &'static str,
    pub size_pt: u8,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

pub const BODY_STYLE: RunStyle = RunStyle {
    font_family: CALIBRI,
    size_pt: 11,
    bold: false,
    italic: false,
    underline: false,
};

pub const HEADING_STYLE: RunStyle = RunStyle {
    bold: true,
    italic: true,
    ..BODY_STYLE
};

pub const CODE_STYLE: RunStyle = RunStyle {
    font_family: ARIAL,
    bold: true,
    ..BODY_STYLE
};

/// Separator lines framing preformatted content
pub const PRE_SEPARATOR_STYLE: RunStyle = RunStyle {
    font_family: ARIAL,
    ..BODY_STYLE
};

/// Preformatted body lines
pub const PRE_BODY_STYLE: RunStyle = RunStyle {
    font_family: ARIAL,
    size_pt: 9,
    ..BODY_STYLE
};

/// Rule name headers
pub const TITLE_STYLE: RunStyle = RunStyle {
    font_family: "Calibri Light",
    size_pt: 14,
    bold: true,
    italic: false,
    underline: true,
};

/// Width of the dashed line above and below preformatted content.
pub const SEPARATOR_WIDTH: usize = 120;

/// Paragraph style of an emitted block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Normal,
    Heading,
    Quote,
    ListNumbered,
}

/// Which block an element opens when it arrives on an empty stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Quote,
    Heading,
    ListItem,
    Preformatted,
}

impl BlockKind {
    pub fn open(self) -> Block {
        match self {
            BlockKind::Paragraph => Block::paragraph(ParagraphKind::Normal),
            BlockKind::Quote => Block::paragraph(ParagraphKind::Quote),
            BlockKind::Heading => Block::Heading {
                text: String::new(),
            },
            BlockKind::ListItem => Block::ListItem { runs: Vec::new() },
            BlockKind::Preformatted => Block::Preformatted { runs: Vec::new() },
        }
    }
}

/// How newlines inside a text run are normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Newlines {
    ToSpace,
    Remove,
}

/// Formatter invoked for text whose innermost open element is this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    Plain(RunStyle, Newlines),
    Preformatted,
    Hyperlink,
    /// Text is dropped
    Discard,
}

/// Line break appended to the current block when the element closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakOnClose {
    Never,
    Always,
    /// Only when the element is not directly inside a `blockquote`
    OutsideQuote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementStyle {
    pub starts: Option<BlockKind>,
    pub formatter: Formatter,
    pub break_on_close: BreakOnClose,
}

static P: ElementStyle = ElementStyle {
    starts: Some(BlockKind::Paragraph),
    formatter: Formatter::Plain(BODY_STYLE, Newlines::ToSpace),
    break_on_close: BreakOnClose::OutsideQuote,
};

static BLOCKQUOTE: ElementStyle = ElementStyle {
    starts: Some(BlockKind::Quote),
    formatter: Formatter::Plain(BODY_STYLE, Newlines::ToSpace),
    break_on_close: BreakOnClose::Always,
};

static LI: ElementStyle = ElementStyle {
    starts: Some(BlockKind::ListItem),
    formatter: Formatter::Plain(BODY_STYLE, Newlines::Remove),
    break_on_close: BreakOnClose::Never,
};

static H2: ElementStyle = ElementStyle {
    starts: Some(BlockKind::Heading),
    formatter: Formatter::Plain(HEADING_STYLE, Newlines::Remove),
    break_on_close: BreakOnClose::Never,
};

static PRE: ElementStyle = ElementStyle {
    starts: Some(BlockKind::Preformatted),
    formatter: Formatter::Preformatted,
    break_on_close: BreakOnClose::Always,
};

static INLINE_CODE: ElementStyle = ElementStyle {
    starts: None,
    formatter: Formatter::Plain(CODE_STYLE, Newlines::Remove),
    break_on_close: BreakOnClose::Never,
};

static ANCHOR: ElementStyle = ElementStyle {
    starts: None,
    formatter: Formatter::Hyperlink,
    break_on_close: BreakOnClose::Never,
};

static INERT: ElementStyle = ElementStyle {
    starts: None,
    formatter: Formatter::Discard,
    break_on_close: BreakOnClose::Never,
};

/// Look up the policy for an element.
pub fn style_of(element: &Element) -> &'static ElementStyle {
    match element {
        Element::P => &P,
        Element::Blockquote => &BLOCKQUOTE,
        Element::Li => &LI,
        Element::H2 => &H2,
        Element::Pre => &PRE,
        Element::Strong | Element::Code => &INLINE_CODE,
        Element::A => &ANCHOR,
        Element::Br | Element::Ul | Element::Unsupported(_) => &INERT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Element::P, Some(ParagraphStyle::Normal))]
    #[case(Element::Blockquote, Some(ParagraphStyle::Quote))]
    #[case(Element::Li, Some(ParagraphStyle::ListNumbered))]
    #[case(Element::H2, Some(ParagraphStyle::Heading))]
    #[case(Element::Pre, Some(ParagraphStyle::Normal))]
    #[case(Element::Strong, None)]
    #[case(Element::Code, None)]
    #[case(Element::A, None)]
    #[case(Element::Unsupported("em".to_string()), None)]
    fn paragraph_styles(#[case] element: Element, #[case] expected: Option<ParagraphStyle>) {
        let block = style_of(&element).starts.map(BlockKind::open);
        assert_eq!(block.and_then(|b| b.paragraph_style()), expected);
    }

    #[test]
    fn inline_code_is_bold_arial() {
        for element in [Element::Strong, Element::Code] {
            let Formatter::Plain(run, _) = style_of(&element).formatter else {
                panic!("{element:?} should format plain runs");
            };
            assert_eq!(run.font_family, "Arial");
            assert_eq!(run.size_pt, 11);
            assert!(run.bold);
            assert!(!run.italic);
        }
    }

    #[test]
    fn heading_is_bold_italic_calibri() {
        assert_eq!(
            style_of(&Element::H2).formatter,
            Formatter::Plain(
                RunStyle {
                    font_family: "Calibri",
                    size_pt: 11,
                    bold: true,
                    italic: true,
                    underline: false,
                },
                Newlines::Remove
            )
        );
    }

    #[test]
    fn preformatted_sizes() {
        assert_eq!(PRE_BODY_STYLE.size_pt, 9);
        assert_eq!(PRE_SEPARATOR_STYLE.size_pt, 11);
        assert_eq!(PRE_BODY_STYLE.font_family, "Arial");
    }

    #[test]
    fn title_style() {
        assert_eq!(TITLE_STYLE.font_family, "Calibri Light");
        assert_eq!(TITLE_STYLE.size_pt, 14);
        assert!(TITLE_STYLE.bold && TITLE_STYLE.underline);
    }

    #[test]
    fn close_breaks() {
        assert_eq!(style_of(&Element::P).break_on_close, BreakOnClose::OutsideQuote);
        assert_eq!(style_of(&Element::Blockquote).break_on_close, BreakOnClose::Always);
        assert_eq!(style_of(&Element::Pre).break_on_close, BreakOnClose::Always);
        assert_eq!(style_of(&Element::Li).break_on_close, BreakOnClose::Never);
    }

    #[test]
    fn ignored_elements_are_inert() {
        assert_eq!(style_of(&Element::Br), &INERT);
        assert_eq!(style_of(&Element::Ul), &INERT);
    }
}
