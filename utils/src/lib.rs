pub mod bech32;
pub mod config;
pub mod lnurl;
pub mod qr;
pub mod xlogging;
