//! Bech32 encoding with the BIP-173 checksum.
//!
//! Only the encoding direction is implemented: bytes are regrouped into 5-bit
//! symbols, a 6-symbol BCH checksum over GF(32) is computed over the expanded
//! human-readable part and the data, and every symbol is mapped through
//! [`CHARSET`].
//!
//! 5-bit symbols are carried as [`U5`] so a value outside `0..32` can never
//! reach the alphabet lookup.

use std::fmt;

use xerror::lnurl::{Bech32Error, BitConversionError};

/// Bech32 alphabet, indexed by symbol value.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Separates the human-readable part from the data part.
pub const SEPARATOR: char = '1';

/// Number of checksum symbols appended to the data.
pub const CHECKSUM_LENGTH: usize = 6;

/// BCH generator coefficients, one per bit of the 5-bit value shifted out of
/// the checksum register on each step.
pub const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Residue constant of classic Bech32. Bech32m uses a different one.
const BECH32_CONST: u32 = 1;

/// Low 25 bits of the checksum register survive each shift.
const REGISTER_MASK: u32 = 0x01ff_ffff;

const SYMBOL_MASK: u32 = 0x1f;

/// A single 5-bit value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U5(u8);

impl U5 {
    pub const MAX: u8 = 31;

    pub fn try_from_u8(value: u8) -> Result<U5, Bech32Error> {
        if value > Self::MAX {
            return Err(Bech32Error::InvalidSymbol(value));
        }
        Ok(U5(value))
    }

    pub fn to_u8(self) -> u8 {
        self.0
    }

    pub fn to_char(self) -> char {
        CHARSET[usize::from(self.0)] as char
    }

    // keeps the low 5 bits
    fn from_masked(value: u32) -> U5 {
        U5((value & SYMBOL_MASK) as u8)
    }
}

impl TryFrom<u8> for U5 {
    type Error = Bech32Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        U5::try_from_u8(value)
    }
}

impl From<U5> for u8 {
    fn from(value: U5) -> Self {
        value.0
    }
}

/// Human-readable part of a Bech32 string.
///
/// Every character must be ASCII so that it splits into a 3-bit high group
/// and a 5-bit low group for checksum mixing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hrp<'a>(&'a str);

impl<'a> Hrp<'a> {
    /// The namespace used by LNURL strings.
    pub const LNURL: Hrp<'static> = Hrp("lnurl");

    pub fn new(hrp: &'a str) -> Result<Hrp<'a>, Bech32Error> {
        if hrp.is_empty() {
            return Err(Bech32Error::EmptyHrp);
        }
        if let Some(c) = hrp.chars().find(|c| !c.is_ascii()) {
            return Err(Bech32Error::InvalidHrpChar(c));
        }
        Ok(Hrp(hrp))
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// High 3 bits of every character, a zero separator, then the low 5 bits
    /// of every character.
    pub fn expand(&self) -> Vec<U5> {
        let bytes = self.0.as_bytes();
        let mut expanded = Vec::with_capacity(bytes.len() * 2 + 1);
        expanded.extend(bytes.iter().map(|&c| U5::from_masked(u32::from(c) >> 5)));
        expanded.push(U5(0));
        expanded.extend(bytes.iter().map(|&c| U5::from_masked(u32::from(c))));
        expanded
    }
}

impl fmt::Display for Hrp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Repacks `from_bits`-wide values into `to_bits`-wide values, reading the
/// input as one MSB-first bitstream.
///
/// With `pad` set, leftover bits are left-aligned into a final zero-filled
/// group. Without it, leftover bits must be fewer than `from_bits` and all
/// zero, otherwise information would be lost.
///
/// Both widths must be between 1 and 8.
pub fn convert_bits(data: &[u8], from_bits: u8, to_bits: u8, pad: bool) -> Result<Vec<u8>, BitConversionError> {
    if !(1..=8).contains(&from_bits) || !(1..=8).contains(&to_bits) {
        return Err(BitConversionError::InvalidWidth { from_bits, to_bits });
    }

    let max_value: u32 = (1 << to_bits) - 1;
    // the accumulator never holds more than this many unconsumed bits
    let max_acc: u32 = (1 << (from_bits + to_bits - 1)) - 1;

    let mut acc: u32 = 0;
    let mut bits: u8 = 0;
    let mut converted = Vec::with_capacity(data.len() * usize::from(from_bits) / usize::from(to_bits) + 1);

    for &value in data {
        if u32::from(value) >> from_bits != 0 {
            return Err(BitConversionError::ValueOutOfRange { value, from_bits });
        }
        acc = ((acc << from_bits) | u32::from(value)) & max_acc;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            converted.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            converted.push(((acc << (to_bits - bits)) & max_value) as u8);
        }
    } else if bits >= from_bits {
        return Err(BitConversionError::ExcessPadding { bits });
    } else if (acc << (to_bits - bits)) & max_value != 0 {
        return Err(BitConversionError::NonZeroPadding);
    }

    Ok(converted)
}

/// Regroups bytes into padded 5-bit symbols.
pub fn to_base32(bytes: &[u8]) -> Result<Vec<U5>, BitConversionError> {
    let groups = convert_bits(bytes, 8, 5, true)?;
    Ok(groups.into_iter().map(|group| U5::from_masked(u32::from(group))).collect())
}

/// BCH checksum register over GF(32).
pub fn polymod(values: &[U5]) -> u32 {
    let mut chk: u32 = 1;
    for value in values {
        let top = chk >> 25;
        chk = ((chk & REGISTER_MASK) << 5) ^ u32::from(value.0);
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

/// Six checksum symbols for `data` under `hrp`, most significant first.
pub fn create_checksum(hrp: &Hrp<'_>, data: &[U5]) -> [U5; CHECKSUM_LENGTH] {
    let mut values = hrp.expand();
    values.reserve(data.len() + CHECKSUM_LENGTH);
    values.extend_from_slice(data);
    values.extend_from_slice(&[U5(0); CHECKSUM_LENGTH]);

    let residue = polymod(&values) ^ BECH32_CONST;

    let mut checksum = [U5(0); CHECKSUM_LENGTH];
    for (i, symbol) in checksum.iter_mut().enumerate() {
        *symbol = U5::from_masked(residue >> (5 * (CHECKSUM_LENGTH - 1 - i)));
    }
    checksum
}

/// `hrp`, the separator, then the data and checksum symbols mapped through
/// [`CHARSET`]. Output is lowercase apart from whatever case `hrp` carries.
///
/// No total length limit is applied.
pub fn encode(hrp: &Hrp<'_>, data: &[U5]) -> String {
    let checksum = create_checksum(hrp, data);

    let mut encoded = String::with_capacity(hrp.len() + 1 + data.len() + CHECKSUM_LENGTH);
    encoded.push_str(hrp.as_str());
    encoded.push(SEPARATOR);
    encoded.extend(data.iter().chain(checksum.iter()).map(|symbol| symbol.to_char()));
    encoded
}
