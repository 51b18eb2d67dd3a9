use rustc_hash::FxHashMap;

use crate::error::CodeFormatError;

/// Variable-length binary code table.
///
/// The default table is deliberately ambiguous (some codes are prefixes of
/// other codes), so a bit string usually admits several complete decodings;
/// [`CodeTable::decodings`] enumerates all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeTable {
    codes: FxHashMap<String, char>,
    longest_code: usize,
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new([
            ("0", 'A'),
            ("00", 'B'),
            ("001", 'C'),
            ("010", 'D'),
            ("0010", 'E'),
            ("0100", 'F'),
            ("0110", 'G'),
            ("0001", 'H'),
        ])
    }
}

impl CodeTable {
    pub fn new<'a>(codes: impl IntoIterator<Item = (&'a str, char)>) -> Self {
        let codes: FxHashMap<String, char> = codes
            .into_iter()
            .map(|(bits, letter)| (bits.to_owned(), letter))
            .collect();
        let longest_code = codes.keys().map(String::len).max().unwrap_or(0);

        Self {
            codes,
            longest_code,
        }
    }

    /// Enumerates every complete decoding of the bit string, in order of the
    /// code length consumed at each position. The empty string has no
    /// decodings. Memoized over the start offset, so each suffix of the
    /// input is decoded at most once.
    pub fn decodings(&self, bits: &str) -> Result<Vec<String>, CodeFormatError> {
        if let Some((position, character)) = bits
            .char_indices()
            .find(|&(_, character)| character != '0' && character != '1')
        {
            return Err(CodeFormatError::NonBinaryDigit {
                position,
                character,
            });
        }

        if bits.is_empty() {
            return Ok(Vec::new());
        }

        let mut memo: Vec<Option<Vec<String>>> = vec![None; bits.len()];
        Ok(self.decode_from(bits, 0, &mut memo))
    }

    fn decode_from(
        &self,
        bits: &str,
        start: usize,
        memo: &mut Vec<Option<Vec<String>>>,
    ) -> Vec<String> {
        if let Some(cached) = &memo[start] {
            return cached.clone();
        }

        let mut sequences = Vec::new();
        let furthest = bits.len().min(start + self.longest_code);

        for end in start + 1..=furthest {
            let Some(&letter) = self.codes.get(&bits[start..end]) else {
                continue;
            };

            if end == bits.len() {
                sequences.push(letter.to_string());
            } else {
                for suffix in self.decode_from(bits, end, memo) {
                    sequences.push(format!("{letter}{suffix}"));
                }
            }
        }

        memo[start] = Some(sequences.clone());
        sequences
    }
}
