//! The fixed set of recognized HTML element names.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

macro_rules! html_tags {
    ($($variant:ident => $name:literal,)*) => {
        /// Recognized HTML element.
        ///
        /// Membership is closed: a name that is not listed here never becomes a tag,
        /// neither during token rewriting nor during tag construction.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum HtmlTag {
            $($variant,)*
        }

        impl HtmlTag {
            /// Every tag, in declaration order.
            pub const ALL: &'static [HtmlTag] = &[$(HtmlTag::$variant,)*];

            /// Canonical (lowercase) element name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(HtmlTag::$variant => $name,)*
                }
            }
        }
    };
}

html_tags! {
    Abbreviation => "abbr",
    Acronym => "acronym",
    Address => "address",
    Anchor => "a",
    Applet => "applet",
    Area => "area",
    Article => "article",
    Aside => "aside",
    Audio => "audio",
    Base => "base",
    Basefont => "basefont",
    Bdi => "bdi",
    Bdo => "bdo",
    Bgsound => "bgsound",
    Big => "big",
    Blockquote => "blockquote",
    Body => "body",
    Bold => "b",
    Break => "br",
    Button => "button",
    Caption => "caption",
    Canvas => "canvas",
    Center => "center",
    Cite => "cite",
    Code => "code",
    Colgroup => "colgroup",
    Column => "col",
    Data => "data",
    Datalist => "datalist",
    Dd => "dd",
    Define => "dfn",
    Delete => "del",
    Details => "details",
    Dialog => "dialog",
    Dir => "dir",
    Div => "div",
    Dl => "dl",
    Dt => "dt",
    Embed => "embed",
    Fieldset => "fieldset",
    Figcaption => "figcaption",
    Figure => "figure",
    Font => "font",
    Footer => "footer",
    Form => "form",
    Frame => "frame",
    Frameset => "frameset",
    Head => "head",
    Header => "header",
    Heading1 => "h1",
    Heading2 => "h2",
    Heading3 => "h3",
    Heading4 => "h4",
    Heading5 => "h5",
    Heading6 => "h6",
    Hgroup => "hgroup",
    Hr => "hr",
    Html => "html",
    Iframe => "iframe",
    Image => "img",
    Input => "input",
    Ins => "ins",
    Isindex => "isindex",
    Italic => "i",
    Kbd => "kbd",
    Keygen => "keygen",
    Label => "label",
    Legend => "legend",
    ListItem => "li",
    Main => "main",
    Mark => "mark",
    Marquee => "marquee",
    Menuitem => "menuitem",
    Meta => "meta",
    Meter => "meter",
    Nav => "nav",
    Nobreak => "nobr",
    Noembed => "noembed",
    Noscript => "noscript",
    Object => "object",
    Optgroup => "optgroup",
    Option => "option",
    Output => "output",
    Paragraph => "p",
    Param => "param",
    Emphasis => "em",
    Pre => "pre",
    Progress => "progress",
    Quote => "q",
    Rp => "rp",
    Rt => "rt",
    Ruby => "ruby",
    Strikethrough => "s",
    Samp => "samp",
    Script => "script",
    Section => "section",
    Small => "small",
    Source => "source",
    Spacer => "spacer",
    Span => "span",
    Strike => "strike",
    Strong => "strong",
    Style => "style",
    Summary => "summary",
    Svg => "svg",
    Table => "table",
    Tbody => "tbody",
    Td => "td",
    Template => "template",
    Tfoot => "tfoot",
    Th => "th",
    Thead => "thead",
    Time => "time",
    Title => "title",
    Tr => "tr",
    Track => "track",
    Tt => "tt",
    Underline => "u",
    Var => "var",
    Video => "video",
    Wbr => "wbr",
    Xmp => "xmp",
}

impl HtmlTag {
    /// Case-insensitive lookup by element name.
    pub fn from_name(name: &str) -> Option<HtmlTag> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.name().eq_ignore_ascii_case(name))
    }

    #[inline]
    pub fn is_tag_name(name: &str) -> bool {
        Self::from_name(name).is_some()
    }
}

impl fmt::Display for HtmlTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name is not part of the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a recognized HTML tag", self.0)
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for HtmlTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownTag(s.to_owned()))
    }
}

impl Serialize for HtmlTag {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.name())
    }
}
