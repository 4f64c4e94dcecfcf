use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::permutations::searchconfig::SearchConfig;
use crate::wordlist::index::WordQuery;

/// Backtracking search over the arrangements of a letter multiset.
///
/// Exhaustive mode enumerates every distinct arrangement; pruned mode walks
/// the same tree but abandons any branch whose accumulated prefix is not a
/// prefix of some dictionary entry, which bounds the walk by the prefix
/// structure actually present in the dictionary instead of by n!.
///
/// Both modes collect into an accumulator created fresh per call, so the
/// same search value can be queried repeatedly and concurrently with
/// identical results.
pub struct PermutationSearch {
    letters: Vec<char>,
}

impl PermutationSearch {
    /// Validates that `letters` contains only letters. Callers normalize to
    /// lowercase first; queries are defined over lowercase only. The empty
    /// string is accepted and yields the single empty arrangement.
    pub fn new(letters: &str) -> Result<PermutationSearch> {
        if let Some(found) = letters.chars().find(|c| !c.is_alphabetic()) {
            return Err(Error::InvalidCharacter { found });
        }
        Ok(PermutationSearch {
            letters: letters.chars().collect(),
        })
    }

    pub fn letters(&self) -> String {
        self.letters.iter().collect()
    }

    /// Every distinct arrangement of the letters, with no pruning. Useful as
    /// a correctness oracle and when no dictionary is available. Guarded by
    /// `config.max_letters` because the output grows factorially.
    pub fn all_permutations(&self, config: &SearchConfig) -> Result<BTreeSet<String>> {
        if self.letters.len() > config.max_letters {
            return Err(Error::TooManyLetters {
                count: self.letters.len(),
                limit: config.max_letters,
            });
        }
        let mut arrangements = BTreeSet::new();
        let mut remaining = self.letters.clone();
        let mut prefix = String::with_capacity(self.letters.len());
        permute(&mut prefix, &mut remaining, None, &mut arrangements);
        Ok(arrangements)
    }

    /// Every dictionary word formed by using all of the letters exactly
    /// once. The traversal prunes on `has_prefix` only; completed
    /// arrangements that survive are then filtered through `contains_word`,
    /// since an interior prefix must stay explorable even when it is not
    /// itself a word.
    pub fn find_words<W: WordQuery>(&self, index: &W) -> BTreeSet<String> {
        let mut arrangements = BTreeSet::new();
        let mut remaining = self.letters.clone();
        let mut prefix = String::with_capacity(self.letters.len());
        permute(&mut prefix, &mut remaining, Some(index), &mut arrangements);

        arrangements
            .into_iter()
            .filter(|arrangement| index.contains_word(arrangement))
            .collect()
    }
}

/// One frame of the traversal: `prefix` holds the letters chosen so far,
/// `remaining` the multiset still to place. The prune check runs once per
/// frame, before any child is generated; its outcome depends only on the
/// prefix, not on which letter comes next. The empty prefix is trivially a
/// prefix of everything and skips the check.
fn permute(
    prefix: &mut String,
    remaining: &mut Vec<char>,
    prune: Option<&dyn WordQuery>,
    out: &mut BTreeSet<String>,
) {
    if let Some(index) = prune {
        if !prefix.is_empty() && !index.has_prefix(prefix) {
            return;
        }
    }

    if remaining.is_empty() {
        out.insert(prefix.clone());
        return;
    }

    for i in 0..remaining.len() {
        // A letter value already tried at this frame would rebuild the same
        // subtree from a different occurrence.
        if remaining[..i].contains(&remaining[i]) {
            continue;
        }
        let letter = remaining.remove(i);
        prefix.push(letter);
        permute(prefix, remaining, prune, out);
        prefix.pop();
        remaining.insert(i, letter);
    }
}
