use crate::error::{Result, SimulationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference alphabet for the DNI checksum letter. The eight-digit
/// prefix modulo 23 indexes into this table.
const CHECKSUM_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

const DNI_LEN: usize = 9;
const PREFIX_LEN: usize = 8;

/// A validated Spanish national identifier: eight digits followed by
/// the checksum letter, stored normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Dni(String);

impl Dni {
    /// Parses and validates an identifier.
    ///
    /// The checksum letter is matched case-insensitively. Malformed
    /// shapes are reported as distinct errors: a character count other
    /// than nine is `InvalidLength`, a non-digit prefix or non-letter
    /// suffix is `InvalidFormat`, and a letter that does not match the
    /// table is `ChecksumMismatch`.
    pub fn parse(input: &str) -> Result<Self> {
        let chars: Vec<char> = input.chars().collect();
        if chars.len() != DNI_LEN {
            return Err(SimulationError::InvalidLength);
        }
        if !chars[..PREFIX_LEN].iter().all(|c| c.is_ascii_digit()) {
            return Err(SimulationError::InvalidFormat);
        }
        let prefix: u32 = chars[..PREFIX_LEN]
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| SimulationError::InvalidFormat)?;

        let letter = chars[PREFIX_LEN].to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(SimulationError::InvalidFormat);
        }
        if letter != checksum_letter(prefix) {
            return Err(SimulationError::ChecksumMismatch);
        }

        let mut normalized: String = chars[..PREFIX_LEN].iter().collect();
        normalized.push(letter);
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Dni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Dni {
    type Error = SimulationError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

/// Returns the expected checksum letter for a numeric prefix.
pub fn checksum_letter(prefix: u32) -> char {
    CHECKSUM_LETTERS[(prefix % 23) as usize] as char
}

/// Boolean view of the checksum: `Ok(true)` when the letter matches,
/// `Ok(false)` when it does not, and an error when the input is not
/// even shaped like an identifier.
pub fn is_valid(input: &str) -> Result<bool> {
    match Dni::parse(input) {
        Ok(_) => Ok(true),
        Err(SimulationError::ChecksumMismatch) => Ok(false),
        Err(e) => Err(e),
    }
}
