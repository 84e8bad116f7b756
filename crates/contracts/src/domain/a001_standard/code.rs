use std::fmt;

/// Structural key shared by the same skill across grades: the category
/// letters and trailing number of a standard code.
///
/// `ELAGSE5RL1` and `ELAGSE3RL1` both carry the key `RL-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProgressionKey {
    pub letters: String,
    pub number: u32,
}

impl ProgressionKey {
    /// Parses a code shaped `<prefix letters><grade digits><letters><digits>`.
    ///
    /// Matching is done on the trimmed, upper-cased code. Returns `None` for
    /// anything else, including codes with a sub-item suffix (`...L4A`) or a
    /// non-numeric grade (`...KRL1`).
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim().to_uppercase();
        let bytes = code.as_bytes();

        let mut end = bytes.len();
        let number_start = scan_back(bytes, end, |b| b.is_ascii_digit());
        if number_start == end {
            return None;
        }
        let number: u32 = code[number_start..end].parse().ok()?;

        end = number_start;
        let letters_start = scan_back(bytes, end, |b| b.is_ascii_uppercase());
        if letters_start == end {
            return None;
        }
        let letters = code[letters_start..end].to_string();

        end = letters_start;
        let grade_start = scan_back(bytes, end, |b| b.is_ascii_digit());
        if grade_start == end {
            return None;
        }

        if !bytes[..grade_start].iter().all(|b| b.is_ascii_uppercase()) {
            return None;
        }

        Some(Self { letters, number })
    }
}

impl fmt::Display for ProgressionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.letters, self.number)
    }
}

fn scan_back(bytes: &[u8], end: usize, pred: impl Fn(u8) -> bool) -> usize {
    let mut start = end;
    while start > 0 && pred(bytes[start - 1]) {
        start -= 1;
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(letters: &str, number: u32) -> ProgressionKey {
        ProgressionKey {
            letters: letters.to_string(),
            number,
        }
    }

    #[test]
    fn test_parse_standard_codes() {
        assert_eq!(ProgressionKey::parse("ELAGSE5RL1"), Some(key("RL", 1)));
        assert_eq!(ProgressionKey::parse("ELAGSE3RL1"), Some(key("RL", 1)));
        assert_eq!(ProgressionKey::parse("ELAGSE5W2"), Some(key("W", 2)));
        assert_eq!(ProgressionKey::parse("ELAGSE11SL10"), Some(key("SL", 10)));
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(ProgressionKey::parse("  elagse5rl1 "), Some(key("RL", 1)));
    }

    #[test]
    fn test_parse_without_prefix() {
        assert_eq!(ProgressionKey::parse("5RI3"), Some(key("RI", 3)));
    }

    #[test]
    fn test_parse_rejects_malformed_codes() {
        assert_eq!(ProgressionKey::parse(""), None);
        assert_eq!(ProgressionKey::parse("ELAGSE5L4a"), None);
        assert_eq!(ProgressionKey::parse("ELAGSEKRL1"), None);
        assert_eq!(ProgressionKey::parse("RL1"), None);
        assert_eq!(ProgressionKey::parse("ELA-GSE5RL1"), None);
        assert_eq!(ProgressionKey::parse("12345"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(key("RL", 1).to_string(), "RL-1");
    }
}
