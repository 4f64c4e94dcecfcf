use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::error::{Error, Result};
use crate::wordlist::index::WordQuery;
use crate::wordlist::word_index::WordIndex;

/// A word list loaded from disk, normalized to lowercase and sorted so that
/// the [`WordIndex`] precondition always holds.
pub struct Wordlist {
    index: WordIndex,
}

#[derive(TypedBuilder)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => line.split(delimiter).nth(self.word_column.unwrap_or(0)),
        }
    }
}

impl Wordlist {
    pub fn from_file(path: &Path, format: FileFormat) -> Result<Wordlist> {
        let file = File::open(path).map_err(|source| Error::WordlistRead {
            path: path.to_path_buf(),
            source,
        })?;
        let buf_reader = BufReader::new(file);

        let mut words: Vec<String> = vec![];
        let mut failures: usize = 0;

        let start = Instant::now();
        for line in buf_reader.lines() {
            match line {
                Ok(line) => {
                    if line.is_empty() {
                        continue;
                    }
                    match format.parse_line(&line) {
                        Some(word) => {
                            let word = normalize(word);
                            if !word.is_empty() {
                                words.push(word);
                            }
                        }
                        None => failures += 1,
                    }
                }
                Err(_e) => {
                    failures += 1;
                }
            }
        }

        // Sorting here is what lets WordIndex::build skip it.
        words.sort();
        words.dedup();

        println!(
            "Read {} words in {}s [{} failures]",
            words.len(),
            start.elapsed().as_secs_f64(),
            failures
        );

        Ok(Wordlist {
            index: WordIndex::build(words),
        })
    }

    pub fn word_index(&self) -> &WordIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl WordQuery for Wordlist {
    fn contains_word(&self, word: &str) -> bool {
        self.index.contains_word(word)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        self.index.has_prefix(prefix)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::wordlist::index::WordQuery;
    use crate::wordlist::wordlist::{FileFormat, Wordlist};

    #[test]
    fn parse_line_plain_format_takes_whole_line() {
        let format = FileFormat::builder().build();
        assert_eq!(format.parse_line("hello"), Some("hello"));
    }

    #[test]
    fn parse_line_delimited_format_takes_word_column() {
        let format = FileFormat::builder().delimiter('\t').word_column(1).build();
        assert_eq!(format.parse_line("42\thello\t9"), Some("hello"));
        assert_eq!(format.parse_line("42"), None);
    }

    #[test]
    fn loads_normalizes_and_sorts_a_file() {
        let mut path = std::env::temp_dir();
        path.push("anagram_tools_wordlist_test.txt");
        {
            let mut file = std::fs::File::create(&path).unwrap();
            write!(file, "Tac\n\ncat\nact\n").unwrap();
        }

        let wordlist = Wordlist::from_file(&path, FileFormat::builder().build()).unwrap();
        assert_eq!(wordlist.len(), 3);
        assert!(wordlist.contains_word("tac"));
        assert!(wordlist.contains_word("act"));
        assert!(wordlist.has_prefix("ca"));
        assert!(!wordlist.contains_word("Tac"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::path::PathBuf::from("/nonexistent/word_list.txt");
        assert!(Wordlist::from_file(&path, FileFormat::builder().build()).is_err());
    }
}
