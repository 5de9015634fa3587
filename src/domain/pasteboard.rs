//! Pasteboard name value object

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Name of a pasteboard to operate on.
///
/// The five well-known names map to the host's special-purpose
/// clipboards; any other string addresses a custom-named pasteboard,
/// created on demand by the host when first written. Parsing never
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PasteboardName {
    /// The default/system clipboard
    #[default]
    General,
    /// The search-text clipboard
    Find,
    /// The font-attributes clipboard
    Font,
    /// The ruler/paragraph-formatting clipboard
    Ruler,
    /// The drag-and-drop clipboard
    Drag,
    /// A caller-supplied custom clipboard name
    Custom(String),
}

impl FromStr for PasteboardName {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "general" => PasteboardName::General,
            "find" => PasteboardName::Find,
            "font" => PasteboardName::Font,
            "ruler" => PasteboardName::Ruler,
            "drag" => PasteboardName::Drag,
            other => PasteboardName::Custom(other.to_string()),
        })
    }
}

impl fmt::Display for PasteboardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasteboardName::General => write!(f, "general"),
            PasteboardName::Find => write!(f, "find"),
            PasteboardName::Font => write!(f, "font"),
            PasteboardName::Ruler => write!(f, "ruler"),
            PasteboardName::Drag => write!(f, "drag"),
            PasteboardName::Custom(name) => write!(f, "{}", name),
        }
    }
}
