//! Run builders for the text that arrives while an element is innermost.

use html_escape::decode_html_entities;

use crate::block::Run;
use crate::converter::ConvertError;
use crate::style::{
    BODY_STYLE, Newlines, PRE_BODY_STYLE, PRE_SEPARATOR_STYLE, RunStyle, SEPARATOR_WIDTH,
};

/// The dashed line framing preformatted content.
pub fn separator_line() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// A single plain run with newlines normalized and entities decoded.
pub fn plain(text: &str, style: &RunStyle, newlines: Newlines) -> Run {
    let text = match newlines {
        Newlines::ToSpace => text.replace('\n', " "),
        Newlines::Remove => text.replace('\n', ""),
    };
    Run::plain(decode_html_entities(&text), style)
}

/// Separator, one broken run per source line, separator.
///
/// Lines split on `\n` with a trailing `\r` stripped, so CRLF content
/// renders like LF content. Interior empty lines are kept; a single trailing
/// newline does not add an empty last line.
pub fn preformatted(text: &str, separator: &str) -> Vec<Run> {
    let mut runs = vec![Run::plain(separator, &PRE_SEPARATOR_STYLE)];
    runs.extend(
        text.lines()
            .map(|line| Run::line(decode_html_entities(line), &PRE_BODY_STYLE)),
    );
    runs.push(Run::plain(separator, &PRE_SEPARATOR_STYLE));
    runs
}

/// A hyperlink to the pending anchor target followed by a spacer run.
pub fn hyperlink(text: &str, url: Option<&str>) -> Result<[Run; 2], ConvertError> {
    let url = url.ok_or_else(|| {
        ConvertError::InvalidMarkupState(format!("link text {:?} has no anchor target", text.trim()))
    })?;

    Ok([
        Run::Hyperlink {
            text: text.replace('\n', ""),
            url: url.to_string(),
        },
        Run::plain(" ", &BODY_STYLE),
    ])
}
