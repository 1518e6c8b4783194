//! Transform - run-length encoding of one term into its successor
//!
//! "1211" reads as one 1, one 2, two 1s, so it becomes "111221".
//! Run lengths are written out in full decimal, so a run of eleven 1s
//! becomes "111".

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{AudioactiveError, Result};

/// Iterator over maximal runs of identical characters as `(char, length)`
pub struct Runs<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Runs<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            chars: s.chars().peekable(),
        }
    }
}

impl Iterator for Runs<'_> {
    type Item = (char, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.chars.next()?;
        let mut len = 1;
        while self.chars.next_if_eq(&ch).is_some() {
            len += 1;
        }
        Some((ch, len))
    }
}

/// Look-and-say successor of `s`
///
/// Any characters are accepted; only the empty string is rejected.
pub fn transform(s: &str) -> Result<String> {
    if s.is_empty() {
        return Err(AudioactiveError::InvalidInput(
            "cannot transform an empty string".to_string(),
        ));
    }
    Ok(encode_runs(s))
}

/// Run-length encode without the emptiness check
pub(crate) fn encode_runs(s: &str) -> String {
    // Successors of alphabet terms are ~1.3x longer
    let mut out = String::with_capacity(s.len() + s.len() / 2 + 2);
    for (ch, len) in Runs::new(s) {
        match char::from_digit(len as u32, 10) {
            Some(digit) if len < 10 => out.push(digit),
            _ => out.push_str(&len.to_string()),
        }
        out.push(ch);
    }
    out
}

/// Inverse of [`transform`] for encodings whose counts are single digits
///
/// Reads `s` as `(count, symbol)` pairs. Fails on empty or odd-length
/// input and on a count that is not a digit in 1..=9.
pub fn decode(s: &str) -> Result<String> {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() || chars.len() % 2 != 0 {
        return Err(AudioactiveError::InvalidInput(format!(
            "encoding must be a non-empty sequence of (count, symbol) pairs, got {} characters",
            chars.len()
        )));
    }

    let mut out = String::new();
    for pair in chars.chunks(2) {
        let count = pair[0]
            .to_digit(10)
            .filter(|&n| n > 0)
            .ok_or_else(|| AudioactiveError::InvalidInput(format!("invalid run count {:?}", pair[0])))?;
        for _ in 0..count {
            out.push(pair[1]);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_transform_canonical_terms() {
        assert_eq!(transform("1").unwrap(), "11");
        assert_eq!(transform("11").unwrap(), "21");
        assert_eq!(transform("21").unwrap(), "1211");
        assert_eq!(transform("1211").unwrap(), "111221");
        assert_eq!(transform("111221").unwrap(), "312211");
    }

    #[test]
    fn test_transform_empty_is_invalid_input() {
        let err = transform("").unwrap_err();
        assert!(matches!(err, AudioactiveError::InvalidInput(_)));
    }

    #[test]
    fn test_transform_multi_digit_run() {
        assert_eq!(transform("11111111111").unwrap(), "111");
        assert_eq!(transform("11111111112").unwrap(), "10112");
        assert_eq!(transform(&"3".repeat(123)).unwrap(), "1233");
    }

    #[test]
    fn test_transform_any_characters() {
        assert_eq!(transform("aab").unwrap(), "2a1b");
        assert_eq!(transform("0000").unwrap(), "40");
    }

    #[test]
    fn test_hydrogen_is_fixed_point() {
        assert_eq!(transform("22").unwrap(), "22");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("312211").unwrap(), "111221");
        assert!(decode("").is_err());
        assert!(decode("312").is_err());
        assert!(decode("01").is_err());
        assert!(decode("x1").is_err());
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_transform(s in "[1-3]{1,9}") {
            let encoded = transform(&s).unwrap();
            prop_assert_eq!(decode(&encoded).unwrap(), s);
        }

        #[test]
        fn prop_adjacent_runs_never_share_a_digit(s in "[1-3]{1,9}") {
            let encoded: Vec<char> = transform(&s).unwrap().chars().collect();
            prop_assert_eq!(encoded.len() % 2, 0);
            for pair in encoded.chunks(2).collect::<Vec<_>>().windows(2) {
                prop_assert_ne!(pair[0][1], pair[1][1]);
            }
        }
    }
}
