/// Markup elements the converter understands. Anything else is carried on
/// the stack as `Unsupported` so its close tag still balances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    P,
    Blockquote,
    Li,
    H2,
    Pre,
    Strong,
    Code,
    A,
    Br,
    Ul,
    Unsupported(String),
}

/// Elements with no structural or formatting effect.
pub static IGNORED: &[Element] = &[Element::Br, Element::Ul];

impl Element {
    pub fn from_name(name: &str) -> Self {
        const KNOWN: &[(&str, Element)] = &[
            ("p", Element::P),
            ("blockquote", Element::Blockquote),
            ("li", Element::Li),
            ("h2", Element::H2),
            ("pre", Element::Pre),
            ("strong", Element::Strong),
            ("code", Element::Code),
            ("a", Element::A),
            ("br", Element::Br),
            ("ul", Element::Ul),
        ];

        let name = name.trim();
        KNOWN
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, element)| element.clone())
            .unwrap_or_else(|| Element::Unsupported(name.to_string()))
    }

    pub fn is_ignored(&self) -> bool {
        IGNORED.contains(self)
    }

    pub fn name(&self) -> &str {
        match self {
            Element::P => "p",
            Element::Blockquote => "blockquote",
            Element::Li => "li",
            Element::H2 => "h2",
            Element::Pre => "pre",
            Element::Strong => "strong",
            Element::Code => "code",
            Element::A => "a",
            Element::Br => "br",
            Element::Ul => "ul",
            Element::Unsupported(name) => name,
        }
    }
}

/// Extract the link target from an anchor's attribute text.
///
/// Takes whatever follows `href="` (or `href='`) up to the matching quote.
/// The attribute name matches ASCII case-insensitively.
pub fn href(attributes: &str) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets intact
    let start = attributes.to_ascii_lowercase().find("href=")? + "href=".len();
    let rest = &attributes[start..];
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &rest[1..];
    let end = value.find(quote)?;
    Some(&value[..end])
}
