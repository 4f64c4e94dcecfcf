pub mod alphabet;
pub mod error;
pub mod permutations;
pub mod wordlist;
