//! Capability traits consumed by the search engine.

use std::sync::Arc;

/// Read-only prefix and word membership queries over a dictionary.
///
/// The search engine prunes a branch the moment its word stops being a
/// prefix of any dictionary word, and emits a result whenever the word is
/// itself a complete dictionary word.
///
/// Implementations are built once before a search starts and are read
/// concurrently by every worker without synchronization, hence the
/// `Send + Sync` bound. Both queries are total over strings: an
/// implementation never fails, it answers `false`.
pub trait PrefixIndex: Send + Sync {
    /// Whether `s` is a prefix of at least one word (including the word
    /// equal to `s`).
    fn is_prefix(&self, s: &str) -> bool;

    /// Whether `s` is exactly a word in the dictionary.
    fn is_word(&self, s: &str) -> bool;
}

impl<T: PrefixIndex + ?Sized> PrefixIndex for &T {
    fn is_prefix(&self, s: &str) -> bool {
        (**self).is_prefix(s)
    }

    fn is_word(&self, s: &str) -> bool {
        (**self).is_word(s)
    }
}

impl<T: PrefixIndex + ?Sized> PrefixIndex for Arc<T> {
    fn is_prefix(&self, s: &str) -> bool {
        (**self).is_prefix(s)
    }

    fn is_word(&self, s: &str) -> bool {
        (**self).is_word(s)
    }
}

impl<T: PrefixIndex + ?Sized> PrefixIndex for Box<T> {
    fn is_prefix(&self, s: &str) -> bool {
        (**self).is_prefix(s)
    }

    fn is_word(&self, s: &str) -> bool {
        (**self).is_word(s)
    }
}

// Compile-time assertion: PrefixIndex must be object safe.
const _: fn() = || {
    let _: Option<&dyn PrefixIndex> = None;
};

#[cfg(test)]
mod tests {
    use super::*;

    struct Only(&'static str);

    impl PrefixIndex for Only {
        fn is_prefix(&self, s: &str) -> bool {
            self.0.starts_with(s)
        }

        fn is_word(&self, s: &str) -> bool {
            self.0 == s
        }
    }

    #[test]
    fn arc_dyn_delegates() {
        let index: Arc<dyn PrefixIndex> = Arc::new(Only("CAT"));
        assert!(index.is_prefix("CA"));
        assert!(index.is_word("CAT"));
        assert!(!index.is_word("CA"));
    }

    #[test]
    fn reference_delegates() {
        let only = Only("AT");
        let by_ref: &dyn PrefixIndex = &only;
        assert!((&by_ref).is_prefix("A"));
        assert!(!(&by_ref).is_prefix("T"));
    }
}
