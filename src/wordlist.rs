pub mod index;
pub mod word_index;
pub mod wordlist;
