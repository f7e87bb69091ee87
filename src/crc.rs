//! # CRC-8 Implementation
//!
//! Bitwise CRC-8 over a single 2-byte sensor word.
//!
//! **Initial Value**: 0xFF
//! **Polynomial**: caller-supplied (Sensirion sensors use 0x31, x^8 + x^5 + x^4 + 1)
//!
//! No reflection and no final XOR.

use tracing::{debug, warn};

use crate::error::{Crc8Error, Result};

/// Sensirion CRC-8 polynomial (x^8 + x^5 + x^4 + 1)
pub const SENSIRION_POLYNOMIAL: u8 = 0x31;

/// Initial accumulator value
pub const CRC8_INIT: u8 = 0xFF;

/// Number of bytes in a checksummed word
pub const WORD_SIZE: usize = 2;

/// Calculate the CRC-8 of a 2-byte word
///
/// The accumulator is a `u8`, so every left shift drops the bit shifted out
/// of bit 7. The loop always runs exactly 16 bit-rounds.
///
/// # Arguments
///
/// * `data` - The two data bytes, in transmission order
/// * `polynomial` - Generator polynomial with the x^8 term implicit
///
/// # Returns
///
/// * `u8` - Calculated CRC-8 checksum
///
/// # Examples
///
/// ```
/// use sensirion_crc8::crc::{crc8, SENSIRION_POLYNOMIAL};
///
/// assert_eq!(crc8([0xBE, 0xEF], SENSIRION_POLYNOMIAL), 0x92);
/// ```
pub const fn crc8(data: [u8; WORD_SIZE], polynomial: u8) -> u8 {
    let mut result = CRC8_INIT;
    let mut i = 0;

    while i < WORD_SIZE {
        result ^= data[i];

        let mut bit = 0;
        while bit < 8 {
            if (result & 0x80) != 0 {
                result = (result << 1) ^ polynomial;
            } else {
                result <<= 1;
            }
            bit += 1;
        }

        i += 1;
    }

    result
}

/// Calculate the CRC-8 of a byte slice that must hold exactly one word
///
/// # Errors
///
/// Returns [`Crc8Error::InvalidInputLength`] if `data` is not exactly 2 bytes
/// long. No prefix of a longer slice is ever checksummed.
///
/// # Examples
///
/// ```
/// use sensirion_crc8::crc::crc8_checked;
///
/// assert_eq!(crc8_checked(&[0xBE, 0xEF], 0x31)?, 0x92);
/// assert!(crc8_checked(&[0xBE], 0x31).is_err());
/// # Ok::<(), sensirion_crc8::error::Crc8Error>(())
/// ```
pub fn crc8_checked(data: &[u8], polynomial: u8) -> Result<u8> {
    let word: [u8; WORD_SIZE] = data.try_into().map_err(|_| {
        debug!("Rejecting CRC-8 input of {} bytes", data.len());
        Crc8Error::InvalidInputLength {
            expected: WORD_SIZE,
            actual: data.len(),
        }
    })?;

    Ok(crc8(word, polynomial))
}

/// Calculate the CRC-8 of a 16-bit value sent big-endian
///
/// # Examples
///
/// ```
/// use sensirion_crc8::crc::crc8_word;
///
/// assert_eq!(crc8_word(0xBEEF, 0x31), 0x92);
/// ```
pub const fn crc8_word(word: u16, polynomial: u8) -> u8 {
    crc8(word.to_be_bytes(), polynomial)
}

/// Check a received checksum byte against its 2-byte word
///
/// # Errors
///
/// Returns [`Crc8Error::ChecksumMismatch`] carrying the computed (`expected`)
/// and received (`actual`) checksums when they differ.
pub fn verify(data: [u8; WORD_SIZE], checksum: u8, polynomial: u8) -> Result<()> {
    let calculated = crc8(data, polynomial);

    if calculated != checksum {
        warn!(
            "CRC mismatch for word {:02X?}: expected 0x{:02X}, got 0x{:02X}",
            data, calculated, checksum
        );
        return Err(Crc8Error::ChecksumMismatch {
            expected: calculated,
            actual: checksum,
        });
    }

    Ok(())
}
