use log::trace;

/// A lexical unit of rule markup. Every variant borrows the exact source
/// slice it was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `<name attributes>` or `<name/>`
    TagOpen {
        name: &'a str,
        attributes: &'a str,
        self_closing: bool,
        raw: &'a str,
    },
    /// `</name>`
    TagClose { name: &'a str, raw: &'a str },
    /// Character data between tags, untouched. May be whitespace only.
    Text(&'a str),
}

impl<'a> Token<'a> {
    /// The source text this token covers.
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::TagOpen { raw, .. } | Token::TagClose { raw, .. } => raw,
            Token::Text(text) => text,
        }
    }

    /// Classify a complete `<...>` slice.
    fn tag(raw: &'a str) -> Self {
        let inner = raw
            .strip_prefix('<')
            .and_then(|s| s.strip_suffix('>'))
            .unwrap_or(raw);

        if let Some(rest) = inner.strip_prefix('/') {
            let name = rest.split_whitespace().next().unwrap_or("");
            return Token::TagClose { name, raw };
        }

        let (body, self_closing) = match inner.strip_suffix('/') {
            Some(body) => (body, true),
            None => (inner, false),
        };
        let body = body.trim_start();
        let split = body.find(char::is_whitespace).unwrap_or(body.len());
        let (name, attributes) = body.split_at(split);

        Token::TagOpen {
            name,
            attributes: attributes.trim(),
            self_closing,
            raw,
        }
    }
}

#[derive(Clone, Copy)]
enum Accumulator {
    Text(usize),
    Tag(usize),
}

/// Split markup into tag and text tokens in one left-to-right pass.
///
/// Never fails. A `<` that is never closed by `>` leaves an unterminated tag
/// which is dropped at end of input. Quotes are not special: the next `<` or
/// `>` is always structural.
pub fn tokenize(markup: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut acc = Accumulator::Text(0);

    for (pos, c) in markup.char_indices() {
        match (c, acc) {
            ('<', Accumulator::Text(start)) => {
                if pos > start {
                    tokens.push(Token::Text(&markup[start..pos]));
                }
                acc = Accumulator::Tag(pos);
            }
            ('<', Accumulator::Tag(start)) => {
                trace!("discarding unterminated tag {:?}", &markup[start..pos]);
                acc = Accumulator::Tag(pos);
            }
            ('>', Accumulator::Tag(start)) => {
                tokens.push(Token::tag(&markup[start..=pos]));
                acc = Accumulator::Text(pos + 1);
            }
            // '>' outside a tag and every other character just extend the
            // active accumulator
            _ => {}
        }
    }

    match acc {
        Accumulator::Text(start) if start < markup.len() => {
            tokens.push(Token::Text(&markup[start..]));
        }
        Accumulator::Tag(start) => {
            trace!("dropping unterminated tag {:?}", &markup[start..]);
        }
        _ => {}
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn open(raw: &str) -> Token<'_> {
        Token::tag(raw)
    }

    #[test]
    fn paragraph() {
        assert_eq!(
            tokenize("<p>Hello</p>"),
            vec![
                Token::TagOpen {
                    name: "p",
                    attributes: "",
                    self_closing: false,
                    raw: "<p>"
                },
                Token::Text("Hello"),
                Token::TagClose {
                    name: "p",
                    raw: "</p>"
                },
            ]
        );
    }

    #[test]
    fn plain_text_is_single_token() {
        assert_eq!(
            tokenize("no tags here\nat all"),
            vec![Token::Text("no tags here\nat all")]
        );
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn adjacent_tags_emit_no_empty_text() {
        let tokens = tokenize("<ul><li>a</li></ul>");
        assert_eq!(tokens.len(), 5);
        assert!(tokens.iter().all(|t| !t.as_str().is_empty()));
    }

    #[test]
    fn attributes_are_split_from_name() {
        assert_eq!(
            open("<a href=\"http://x\" rel=\"nofollow\">"),
            Token::TagOpen {
                name: "a",
                attributes: "href=\"http://x\" rel=\"nofollow\"",
                self_closing: false,
                raw: "<a href=\"http://x\" rel=\"nofollow\">"
            }
        );
    }

    #[test]
    fn newline_separates_name_from_attributes() {
        match open("<a\nhref=\"y\">") {
            Token::TagOpen {
                name, attributes, ..
            } => {
                assert_eq!(name, "a");
                assert_eq!(attributes, "href=\"y\"");
            }
            other => panic!("unexpected token {other:?}"),
        }
    }

    #[rstest]
    #[case("<br/>", "br")]
    #[case("<br />", "br")]
    #[case("<img src=\"a.png\"/>", "img")]
    fn self_closing(#[case] raw: &str, #[case] expected: &str) {
        match open(raw) {
            Token::TagOpen {
                name, self_closing, ..
            } => {
                assert_eq!(name, expected);
                assert!(self_closing);
            }
            other => panic!("unexpected token {other:?}"),
        }
    }

    #[test]
    fn unterminated_tag_is_dropped() {
        assert_eq!(
            tokenize("text <p class="),
            vec![Token::Text("text ")]
        );
    }

    #[test]
    fn stray_close_angle_is_text() {
        assert_eq!(tokenize("a > b"), vec![Token::Text("a > b")]);
    }

    #[test]
    fn restarted_tag_discards_partial() {
        assert_eq!(
            tokenize("<p <b>x"),
            vec![open("<b>"), Token::Text("x")]
        );
    }

    #[test]
    fn whitespace_is_preserved() {
        let tokens = tokenize("<pre>\n  a\n\tb\n</pre>");
        assert_eq!(tokens[1], Token::Text("\n  a\n\tb\n"));
    }

    #[rstest]
    #[case("<p>Hello</p>")]
    #[case("<h2>Noncompliant Code Example</h2>\n<pre>\nint x = 1;\n</pre>\n")]
    #[case("<p>See <a href=\"https://owasp.org\">OWASP</a> &amp; more.</p>")]
    #[case("<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>")]
    #[case("leading text <strong>bold</strong> trailing text")]
    #[case("multi-byte: <p>héllo ✓</p> ünïcode")]
    fn raw_round_trip(#[case] markup: &str) {
        let rebuilt: String = tokenize(markup).iter().map(Token::as_str).collect();
        assert_eq!(rebuilt, markup);
    }
}
