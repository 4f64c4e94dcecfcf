pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Lowercases and strips everything outside a-z. Word lists and letter
/// input both pass through here so that all comparisons run over a single
/// canonical case.
pub fn normalize(s: &str) -> String {
    s.to_ascii_lowercase()
        .chars()
        .filter(|&x| ALPHABET.contains(&(x as u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn normalize_lowercases_and_strips() {
        assert_eq!(normalize("Hello, World!"), "helloworld");
        assert_eq!(normalize("TAC"), "tac");
        assert_eq!(normalize("123"), "");
    }
}
