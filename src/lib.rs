//! # Sensirion CRC-8 Library
//!
//! CRC-8 checksum for 2-byte words read from Sensirion sensors (SCD4x, SHT4x).
//!
//! Every data word a sensor transmits is followed by a CRC byte computed with
//! an initial value of 0xFF and, on these parts, the generator polynomial 0x31.
//! The polynomial is always passed explicitly.

pub mod config;
pub mod crc;
pub mod error;

pub use crc::{crc8, crc8_checked, crc8_word, verify, SENSIRION_POLYNOMIAL};
pub use error::{Crc8Error, Result};
