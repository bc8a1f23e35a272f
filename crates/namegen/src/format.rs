//! Output formatting for composed names.
//!
//! Snake and kebab styles transliterate each part to ASCII with `deunicode`,
//! lowercase it, drop punctuation, and unify word separators. Hyphens inside
//! a double-barrelled surname count as word separators.

use deunicode::deunicode;

/// Casing applied to a composed name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    /// First name and surname separated by a single space, as drawn.
    #[default]
    Plain,
    /// `lower_snake_case` ASCII.
    Snake,
    /// `lower-kebab-case` ASCII.
    Kebab,
}

impl CaseStyle {
    const fn separator(self) -> Option<char> {
        match self {
            Self::Plain => None,
            Self::Snake => Some('_'),
            Self::Kebab => Some('-'),
        }
    }
}

/// Renders a first name and surname in the requested style.
///
/// # Examples
///
/// ```
/// use namegen::{CaseStyle, format_name};
///
/// assert_eq!(format_name("José", "Ruiz", CaseStyle::Plain), "José Ruiz");
/// assert_eq!(format_name("Jane", "O'Brien-Smith", CaseStyle::Snake), "jane_obrien_smith");
/// assert_eq!(format_name("José", "Ruiz", CaseStyle::Kebab), "jose-ruiz");
/// ```
#[must_use]
pub fn format_name(first: &str, last: &str, style: CaseStyle) -> String {
    let Some(separator) = style.separator() else {
        return format!("{first} {last}");
    };
    let first_part = normalize_part(first, separator);
    let last_part = normalize_part(last, separator);
    match (first_part.is_empty(), last_part.is_empty()) {
        (false, false) => format!("{first_part}{separator}{last_part}"),
        (true, _) => last_part,
        (false, true) => first_part,
    }
}

/// Lowercases an ASCII transliteration of `part`, keeping letters and digits
/// and collapsing whitespace, hyphens and underscores into `separator`.
/// Other characters (apostrophes, dots) are dropped without splitting words.
fn normalize_part(part: &str, separator: char) -> String {
    let ascii = deunicode(part);
    let mut out = String::with_capacity(ascii.len());
    let mut pending_separator = false;

    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push(separator);
            }
            pending_separator = false;
            out.push(ch.to_ascii_lowercase());
        } else if is_word_separator(ch) {
            pending_separator = true;
        }
    }

    out
}

const fn is_word_separator(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '-' || ch == '_'
}
