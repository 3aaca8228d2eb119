//! Sort strategies
//!
//! A [`SortStrategy`] compares two items of one type. Strategies are
//! immutable once built, so a single instance may be shared by any number
//! of sorters, including across threads.

use crate::mode::{StandardMode, StringCompareMode};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::sync::Arc;

/// Three-way comparison of two items.
pub trait SortStrategy<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, S: SortStrategy<T> + ?Sized> SortStrategy<T> for Arc<S> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

impl<T: ?Sized, S: SortStrategy<T> + ?Sized> SortStrategy<T> for &'static S {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

/// Orders strings with a [`StringCompareMode`], optionally ignoring quote
/// characters and reversing the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphabeticStrategy<M = StandardMode> {
    mode: M,
    reverse: bool,
    ignore_quotes: bool,
}

impl<M: StringCompareMode> AlphabeticStrategy<M> {
    /// Ascending order with quote characters ignored
    pub fn new(mode: M) -> Self {
        Self {
            mode,
            reverse: false,
            ignore_quotes: true,
        }
    }

    /// Reverse the mode's result
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Strip `'` and `"` from both operands before comparing
    pub fn with_ignore_quotes(mut self, ignore_quotes: bool) -> Self {
        self.ignore_quotes = ignore_quotes;
        self
    }

    pub fn mode(&self) -> &M {
        &self.mode
    }

    pub fn reverse(&self) -> bool {
        self.reverse
    }

    pub fn ignore_quotes(&self) -> bool {
        self.ignore_quotes
    }

    /// Compare two strings with this strategy's pre- and post-processing
    pub fn compare_str(&self, a: &str, b: &str) -> Ordering {
        let cmp = if self.ignore_quotes {
            self.mode.compare(&strip_quotes(a), &strip_quotes(b))
        } else {
            self.mode.compare(a, b)
        };

        if self.reverse {
            cmp.reverse()
        } else {
            cmp
        }
    }
}

impl<M: StringCompareMode + Default> Default for AlphabeticStrategy<M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}

impl<T, M> SortStrategy<T> for AlphabeticStrategy<M>
where
    T: AsRef<str> + ?Sized,
    M: StringCompareMode,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.compare_str(a.as_ref(), b.as_ref())
    }
}

fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

/// Remove every single and double quote character, borrowing when there are none
pub fn strip_quotes(s: &str) -> Cow<'_, str> {
    if s.contains(is_quote) {
        Cow::Owned(s.chars().filter(|&c| !is_quote(c)).collect())
    } else {
        Cow::Borrowed(s)
    }
}

/// Strategy backed by a comparison closure.
#[derive(Clone, Copy)]
pub struct FnStrategy<F>(F);

/// Wrap a closure as a strategy, e.g. to order structured items by one field
pub fn from_fn<T: ?Sized, F>(f: F) -> FnStrategy<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    FnStrategy(f)
}

impl<T: ?Sized, F> SortStrategy<T> for FnStrategy<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> std::fmt::Debug for FnStrategy<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnStrategy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{CaseInsensitive, CaseSensitive};

    #[test]
    fn test_defaults() {
        let strategy = AlphabeticStrategy::new(CaseSensitive);
        assert!(!strategy.reverse());
        assert!(strategy.ignore_quotes());

        let strategy: AlphabeticStrategy = AlphabeticStrategy::default();
        assert_eq!(*strategy.mode(), StandardMode::CASE_PRIORITY);
    }

    #[test]
    fn test_strip_quotes_only_touches_quotes() {
        assert_eq!(strip_quotes("'Cherry'"), "Cherry");
        assert_eq!(strip_quotes("\"Don't\", she said."), "Dont, she said.");
        assert_eq!(strip_quotes("`back` ticks"), "`back` ticks");
        assert!(matches!(strip_quotes("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_ignore_quotes() {
        let strategy = AlphabeticStrategy::new(CaseSensitive);
        assert_eq!(strategy.compare_str("'apple'", "apple"), Ordering::Equal);
        assert_eq!(strategy.compare_str("\"Banana\"", "apple"), Ordering::Less);

        let strategy = strategy.with_ignore_quotes(false);
        assert_eq!(strategy.compare_str("'apple'", "apple"), Ordering::Less);
        assert_eq!(strategy.compare_str("\"Banana\"", "'apple'"), Ordering::Less);
    }

    #[test]
    fn test_reverse_keeps_equal() {
        let strategy = AlphabeticStrategy::new(CaseInsensitive).with_reverse(true);
        assert_eq!(strategy.compare_str("apple", "banana"), Ordering::Greater);
        assert_eq!(strategy.compare_str("banana", "apple"), Ordering::Less);
        assert_eq!(strategy.compare_str("Apple", "apple"), Ordering::Equal);
    }

    #[test]
    fn test_strategy_over_string_types() {
        let strategy = AlphabeticStrategy::new(StandardMode::CaseSensitive);
        let a = String::from("Apple");
        let b = String::from("apple");
        assert_eq!(SortStrategy::<String>::compare(&strategy, &a, &b), Ordering::Less);
        assert_eq!(SortStrategy::<str>::compare(&strategy, "b", "a"), Ordering::Greater);
        assert_eq!(SortStrategy::<&str>::compare(&strategy, &"a", &"a"), Ordering::Equal);
    }

    #[test]
    fn test_shared_strategy() {
        let shared = Arc::new(AlphabeticStrategy::new(StandardMode::CaseSensitive));
        let clone = Arc::clone(&shared);
        assert_eq!(
            SortStrategy::<str>::compare(&clone, "Apple", "apple"),
            Ordering::Less
        );
        assert_eq!(Arc::strong_count(&shared), 2);
    }

    #[test]
    fn test_from_fn() {
        let by_len = from_fn(|a: &String, b: &String| a.len().cmp(&b.len()));
        assert_eq!(
            by_len.compare(&"ab".to_string(), &"abc".to_string()),
            Ordering::Less
        );
    }
}
