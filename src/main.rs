use structopt::StructOpt;

use anagram_tools::error::{Error, Result};
use anagram_tools::permutations::search::PermutationSearch;
use anagram_tools::wordlist::wordlist::{FileFormat, Wordlist};

/// Find every word in a word list that uses all of the given letters
/// exactly once.
#[derive(StructOpt)]
struct Cli {
    /// The path to the word list, one word per line
    #[structopt(parse(from_os_str))]
    path: std::path::PathBuf,
    /// The letters to rearrange
    letters: String,
}

fn run(args: Cli) -> Result<()> {
    let wordlist = Wordlist::from_file(args.path.as_path(), FileFormat::builder().build())?;

    let letters = args.letters.to_lowercase();
    if letters.is_empty() {
        return Err(Error::NoLetters);
    }

    let search = PermutationSearch::new(&letters)?;
    let words = search.find_words(&wordlist);

    match words.len() {
        0 => println!("No words found"),
        1 => println!("Found 1 word:"),
        n => println!("Found {} words:", n),
    }
    for word in &words {
        println!("   {}", word);
    }
    Ok(())
}

fn main() {
    let args = Cli::from_args();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
