use err_derive::Error;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum BitConversionError {
    #[error(display = "Value {} does not fit in {} bits.", value, from_bits)]
    ValueOutOfRange { value: u8, from_bits: u8 },
    #[error(display = "{} bits were left unconsumed after regrouping.", bits)]
    ExcessPadding { bits: u8 },
    #[error(display = "Input does not end on a group boundary, non-zero padding would be dropped.")]
    NonZeroPadding,
    #[error(display = "Unsupported group widths {} -> {}.", from_bits, to_bits)]
    InvalidWidth { from_bits: u8, to_bits: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum Bech32Error {
    #[error(display = "Human-readable part is empty.")]
    EmptyHrp,
    #[error(display = "Human-readable part contains non-ASCII character {:?}.", _0)]
    InvalidHrpChar(char),
    #[error(display = "Value {} is not a 5-bit symbol.", _0)]
    InvalidSymbol(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum AddressError {
    #[error(display = "Please enter a lightning address.")]
    EmptyAddress,
    #[error(display = "Invalid lightning address format. Use: username@domain.com")]
    InvalidAddressFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum LnurlError {
    #[error(display = "{}", _0)]
    Address(AddressError),
    #[error(display = "Failed to convert bits: {}", _0)]
    BitConversion(BitConversionError),
    #[error(display = "Failed to encode LNURL: {}", _0)]
    Bech32(Bech32Error),
}

impl From<AddressError> for LnurlError {
    fn from(err: AddressError) -> Self {
        LnurlError::Address(err)
    }
}

impl From<BitConversionError> for LnurlError {
    fn from(err: BitConversionError) -> Self {
        LnurlError::BitConversion(err)
    }
}

impl From<Bech32Error> for LnurlError {
    fn from(err: Bech32Error) -> Self {
        LnurlError::Bech32(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum QrError {
    #[error(display = "Data is too long to fit in a QR code.")]
    DataTooLong,
    #[error(display = "Failed to generate QR code: {}", _0)]
    Generation(String),
    #[error(display = "Failed to encode QR image: {}", _0)]
    Image(String),
    #[error(display = "Unknown QR format {:?}, expected text, svg or png.", _0)]
    UnknownFormat(String),
}
