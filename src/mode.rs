//! String comparison modes
//!
//! Each mode is a total order over two strings. Modes are stateless apart
//! from the case-priority direction flag, so every value here can be copied
//! and shared freely between strategies and threads.

use crate::error::{SortError, SortResult};
use std::cmp::Ordering;
use std::str::FromStr;
use unicode_general_category::{get_general_category, GeneralCategory};

/// A three-way comparison rule over a pair of strings
pub trait StringCompareMode {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Raw code-point order, so `"Apple" < "apple"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseSensitive;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitive;

/// Groups case variants of the same text together, then orders each group
/// by the case of the first differing letter.
///
/// Strings whose lowercase forms are equal but whose lengths differ (which
/// only happens when lowercasing changes the character count) compare equal
/// if no case difference exists in the overlapping prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CasePriority {
    pub lowercase_first: bool,
}

/// Compares letters only (general category L*); case is kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LettersOnly;

impl CasePriority {
    pub const fn new(lowercase_first: bool) -> Self {
        Self { lowercase_first }
    }
}

impl Default for CasePriority {
    fn default() -> Self {
        Self::new(true)
    }
}

impl StringCompareMode for CaseSensitive {
    #[inline]
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

impl StringCompareMode for CaseInsensitive {
    #[inline]
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.to_lowercase().cmp(&b.to_lowercase())
    }
}

impl StringCompareMode for CasePriority {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let cmp = a.to_lowercase().cmp(&b.to_lowercase());
        if cmp != Ordering::Equal {
            return cmp;
        }

        for (ca, cb) in a.chars().zip(b.chars()) {
            if !ca.to_lowercase().eq(cb.to_lowercase()) {
                return ca.to_lowercase().cmp(cb.to_lowercase());
            }

            let a_lower = ca.is_lowercase();
            if a_lower != cb.is_lowercase() {
                return if a_lower == self.lowercase_first {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }
        }

        Ordering::Equal
    }
}

/// Letter categories only. Letter numbers (`Ⅻ`) and combining marks such
/// as Devanagari vowel signs are Alphabetic but not letters.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

impl StringCompareMode for LettersOnly {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.chars()
            .filter(|&c| is_letter(c))
            .cmp(b.chars().filter(|&c| is_letter(c)))
    }
}

/// The built-in modes as a copyable tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardMode {
    CaseSensitive,
    CaseInsensitive,
    CasePriority { lowercase_first: bool },
    LettersOnly,
}

impl StandardMode {
    /// Case priority with lowercase variants first (`aAbB`)
    pub const CASE_PRIORITY: StandardMode = StandardMode::CasePriority {
        lowercase_first: true,
    };

    pub fn is_case_priority(&self) -> bool {
        matches!(self, StandardMode::CasePriority { .. })
    }
}

impl Default for StandardMode {
    fn default() -> Self {
        Self::CASE_PRIORITY
    }
}

impl StringCompareMode for StandardMode {
    #[inline]
    fn compare(&self, a: &str, b: &str) -> Ordering {
        match *self {
            StandardMode::CaseSensitive => CaseSensitive.compare(a, b),
            StandardMode::CaseInsensitive => CaseInsensitive.compare(a, b),
            StandardMode::CasePriority { lowercase_first } => {
                CasePriority::new(lowercase_first).compare(a, b)
            }
            StandardMode::LettersOnly => LettersOnly.compare(a, b),
        }
    }
}

impl FromStr for StandardMode {
    type Err = SortError;

    fn from_str(s: &str) -> SortResult<Self> {
        match s.to_lowercase().as_str() {
            "case-sensitive" | "sensitive" | "s" => Ok(StandardMode::CaseSensitive),
            "case-insensitive" | "insensitive" | "i" => Ok(StandardMode::CaseInsensitive),
            "case-priority" | "priority" | "p" => Ok(StandardMode::CASE_PRIORITY),
            "letters-only" | "letters" | "l" => Ok(StandardMode::LettersOnly),
            _ => Err(SortError::parse_error(&format!("unknown compare mode: {s}"))),
        }
    }
}

impl std::fmt::Display for StandardMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StandardMode::CaseSensitive => "case-sensitive",
            StandardMode::CaseInsensitive => "case-insensitive",
            StandardMode::CasePriority { .. } => "case-priority",
            StandardMode::LettersOnly => "letters-only",
        };
        write!(f, "{name}")
    }
}
