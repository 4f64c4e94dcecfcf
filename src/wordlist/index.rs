/// Query surface the permutation search prunes against. Implementors must
/// answer both questions without failing; a miss is `false`, never an error.
pub trait WordQuery {
    /// Is `word` an entry, exactly?
    fn contains_word(&self, word: &str) -> bool;

    /// Does at least one entry start with `prefix`? The empty prefix matches
    /// every entry, so this is true for any non-empty collection.
    fn has_prefix(&self, prefix: &str) -> bool;
}
