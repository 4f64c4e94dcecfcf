use crate::wordlist::index::WordQuery;

/// An immutable word list over which membership and prefix queries run as
/// binary searches.
///
/// The backing sequence must already be in ascending codepoint order when it
/// is handed to [`WordIndex::build`]; the index stores it as given and never
/// re-sorts. Handing it an unsorted sequence makes query results unreliable,
/// not merely slow. Duplicate entries are harmless. There are no mutation
/// operations, so a built index can serve any number of concurrent readers.
pub struct WordIndex {
    words: Vec<String>,
}

impl WordIndex {
    /// Wraps an already-sorted sequence of words. Performs no sorting and no
    /// validation; ascending order is the caller's contract.
    pub fn build(words: Vec<String>) -> WordIndex {
        WordIndex { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordQuery for WordIndex {
    fn contains_word(&self, word: &str) -> bool {
        let mut low = 0;
        let mut high = self.words.len();
        while low < high {
            let mid = low + (high - low) / 2;
            match word.cmp(self.words[mid].as_str()) {
                std::cmp::Ordering::Equal => return true,
                std::cmp::Ordering::Less => high = mid,
                std::cmp::Ordering::Greater => low = mid + 1,
            }
        }
        false
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        // Every entry sharing `prefix` sits in one contiguous run of the
        // sorted list. Testing starts_with before narrowing means the search
        // lands inside that run whenever it exists, even though the middle
        // entry would compare greater than the bare prefix.
        let mut low = 0;
        let mut high = self.words.len();
        while low < high {
            let mid = low + (high - low) / 2;
            let entry = self.words[mid].as_str();
            if entry.starts_with(prefix) {
                return true;
            }
            if prefix < entry {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        false
    }
}
