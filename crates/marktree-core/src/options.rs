//! Configuration options for HTML serialization

/// Quote character used around attribute values unless configured otherwise
pub const DEFAULT_ATTRIBUTE_QUOTE: char = '"';

/// Options for HTML serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Character wrapped around every attribute value.
    /// Values are emitted verbatim, so a value containing this character is not escaped.
    pub attribute_quote: char,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            attribute_quote: DEFAULT_ATTRIBUTE_QUOTE,
        }
    }
}
