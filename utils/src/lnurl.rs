use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use xerror::lnurl::{AddressError, LnurlError};

use crate::bech32::{self, Hrp};

pub const LIGHTNING_SCHEME: &str = "lightning:";

const WELL_KNOWN_LNURLP: &str = ".well-known/lnurlp";

/// A `username@domain` lightning address.
///
/// Neither part is escaped or validated beyond being non-empty, so anything
/// the user typed ends up in the LUD16 url as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightningAddress {
    pub username: String,
    pub domain: String,
}

impl LightningAddress {
    /// `https://{domain}/.well-known/lnurlp/{username}`
    pub fn lud16_url(&self) -> String {
        format!("https://{}/{}/{}", self.domain, WELL_KNOWN_LNURLP, self.username)
    }
}

impl FromStr for LightningAddress {
    type Err = AddressError;

    fn from_str(address: &str) -> Result<Self, Self::Err> {
        if address.is_empty() {
            return Err(AddressError::EmptyAddress);
        }
        let parts: Vec<&str> = address.split('@').collect();
        match parts.as_slice() {
            [username, domain] if !username.is_empty() && !domain.is_empty() => Ok(LightningAddress {
                username: username.to_string(),
                domain: domain.to_string(),
            }),
            _ => Err(AddressError::InvalidAddressFormat),
        }
    }
}

impl fmt::Display for LightningAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.username, self.domain)
    }
}

pub fn resolve(address: &str) -> Result<String, AddressError> {
    Ok(address.parse::<LightningAddress>()?.lud16_url())
}

/// Bech32-encodes the utf-8 bytes of `url` under the `lnurl` prefix and
/// upper-cases the result.
pub fn encode_lnurl(url: &str) -> Result<String, LnurlError> {
    let data = bech32::to_base32(url.as_bytes())?;
    Ok(bech32::encode(&Hrp::LNURL, &data).to_uppercase())
}

pub fn with_lightning_prefix(lnurl: &str) -> String {
    format!("{}{}", LIGHTNING_SCHEME, lnurl)
}

/// Drops a leading `lightning:` scheme, in any case.
pub fn strip_lightning_prefix(value: &str) -> &str {
    match value.get(..LIGHTNING_SCHEME.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(LIGHTNING_SCHEME) => &value[LIGHTNING_SCHEME.len()..],
        _ => value,
    }
}

fn display_value(lnurl: &str, include_prefix: bool) -> String {
    if include_prefix {
        with_lightning_prefix(lnurl)
    } else {
        lnurl.to_string()
    }
}

/// Result of converting one lightning address.
///
/// `value` is what gets shown, copied and rendered as a QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub address: String,
    pub lud16_url: String,
    pub lnurl: String,
    pub include_prefix: bool,
    pub value: String,
}

impl Conversion {
    /// Toggles the `lightning:` prefix without re-encoding.
    pub fn with_prefix(mut self, include_prefix: bool) -> Self {
        self.include_prefix = include_prefix;
        self.value = display_value(&self.lnurl, include_prefix);
        self
    }
}

pub fn convert(address: &str, include_prefix: bool) -> Result<Conversion, LnurlError> {
    let parsed = address.parse::<LightningAddress>()?;
    let lud16_url = parsed.lud16_url();
    let lnurl = encode_lnurl(&lud16_url)?;
    Ok(Conversion {
        address: parsed.to_string(),
        value: display_value(&lnurl, include_prefix),
        lud16_url,
        lnurl,
        include_prefix,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedUrl {
    pub url: String,
    pub lnurl: String,
    pub value: String,
}

pub fn encode_url(url: &str, include_prefix: bool) -> Result<EncodedUrl, LnurlError> {
    let lnurl = encode_lnurl(url)?;
    Ok(EncodedUrl {
        url: url.to_string(),
        value: display_value(&lnurl, include_prefix),
        lnurl,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::bech32::{FromBase32, ToBase32};
    use proptest::prelude::*;

    const SATOSHI_URL: &str = "https://example.com/.well-known/lnurlp/satoshi";
    const SATOSHI_LNURL: &str =
        "LNURL1DP68GURN8GHJ7ETCV9KHQMR99E3K7MF09EMK2MRV944KUMMHDCHKCMN4WFK8QTMNV96X7UMGDYW3AD68";

    #[test]
    fn resolves_lightning_address() {
        assert_eq!(
            resolve("alice@example.com").unwrap(),
            "https://example.com/.well-known/lnurlp/alice"
        );
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert_eq!(resolve("no-at-sign"), Err(AddressError::InvalidAddressFormat));
        assert_eq!(resolve("a@b@c"), Err(AddressError::InvalidAddressFormat));
        assert_eq!(resolve("@example.com"), Err(AddressError::InvalidAddressFormat));
        assert_eq!(resolve("alice@"), Err(AddressError::InvalidAddressFormat));
        assert_eq!(resolve("@"), Err(AddressError::InvalidAddressFormat));
        assert_eq!(resolve(""), Err(AddressError::EmptyAddress));
    }

    #[test]
    fn address_parts_pass_through_unescaped() {
        let address: LightningAddress = "Al ice@Example.COM".parse().unwrap();
        assert_eq!(address.username, "Al ice");
        assert_eq!(address.domain, "Example.COM");
        assert_eq!(address.lud16_url(), "https://Example.COM/.well-known/lnurlp/Al ice");
        assert_eq!(address.to_string(), "Al ice@Example.COM");
    }

    #[test]
    fn pinned_lnurl_vector() {
        assert_eq!(encode_lnurl(SATOSHI_URL).unwrap(), SATOSHI_LNURL);
    }

    #[test]
    fn lud01_sample_vector() {
        let url = "https://service.com/api?q=3fc3645b439ce8e7f2553a69e5267081d96dcd340693afabe04be7b0ccd178df";
        assert_eq!(
            encode_lnurl(url).unwrap(),
            "LNURL1DP68GURN8GHJ7UM9WFMXJCM99E3K7MF0V9CXJ0M385EKVCENXC6R2C35XVUKXEFCV5MKVV34X5EKZD3EV56NYD3HXQURZEPEXEJXXEPNXSCRVWFNV9NXZCN9XQ6XYEFHVGCXXCMYXYMNSERXFQ5FNS"
        );
    }

    #[test]
    fn pinned_vector_decodes_with_reference() {
        let (hrp, data) = ::bech32::decode(&SATOSHI_LNURL.to_lowercase()).unwrap();
        assert_eq!(hrp, "lnurl");
        let bytes = Vec::<u8>::from_base32(&data).unwrap();
        assert_eq!(bytes, SATOSHI_URL.as_bytes());
    }

    #[test]
    fn lnurl_is_never_mixed_case() {
        let encoded = encode_lnurl("https://Example.com/.well-known/lnurlp/Bob").unwrap();
        assert_eq!(encoded, encoded.to_uppercase());
        assert!(encoded.starts_with("LNURL1"));
    }

    #[test]
    fn convert_runs_full_pipeline() {
        let conversion = convert("satoshi@example.com", false).unwrap();
        assert_eq!(conversion.address, "satoshi@example.com");
        assert_eq!(conversion.lud16_url, SATOSHI_URL);
        assert_eq!(conversion.lnurl, SATOSHI_LNURL);
        assert_eq!(conversion.value, SATOSHI_LNURL);
        assert!(!conversion.include_prefix);

        let prefixed = conversion.clone().with_prefix(true);
        assert_eq!(prefixed.value, format!("lightning:{}", SATOSHI_LNURL));
        assert_eq!(prefixed.lnurl, conversion.lnurl);
        assert_eq!(prefixed.with_prefix(false), conversion);
    }

    #[test]
    fn convert_surfaces_address_errors() {
        assert_eq!(
            convert("a@b@c", true),
            Err(LnurlError::Address(AddressError::InvalidAddressFormat))
        );
        assert_eq!(convert("", true), Err(LnurlError::Address(AddressError::EmptyAddress)));
    }

    #[test]
    fn encode_url_honours_prefix() {
        let encoded = encode_url(SATOSHI_URL, true).unwrap();
        assert_eq!(encoded.lnurl, SATOSHI_LNURL);
        assert_eq!(encoded.value, with_lightning_prefix(SATOSHI_LNURL));
        assert_eq!(encoded.url, SATOSHI_URL);
    }

    #[test]
    fn strip_prefix_ignores_case_and_leaves_bare_values() {
        assert_eq!(strip_lightning_prefix("LIGHTNING:LNURL1ABC"), "LNURL1ABC");
        assert_eq!(strip_lightning_prefix("lightning:LNURL1ABC"), "LNURL1ABC");
        assert_eq!(strip_lightning_prefix("LNURL1ABC"), "LNURL1ABC");
        assert_eq!(strip_lightning_prefix("light"), "light");
    }

    #[test]
    fn conversion_serializes_for_clients() {
        let conversion = convert("satoshi@example.com", true).unwrap();
        let json = serde_json::to_value(&conversion).unwrap();
        assert_eq!(json["lud16_url"], SATOSHI_URL);
        assert_eq!(json["value"], format!("lightning:{}", SATOSHI_LNURL));
    }

    proptest! {
        #[test]
        fn prefix_toggle_round_trips(username in "[a-z0-9._-]{1,24}", domain in "[a-z0-9-]{1,20}\\.[a-z]{2,6}") {
            let lnurl = encode_lnurl(&resolve(&format!("{}@{}", username, domain)).unwrap()).unwrap();
            let prefixed = with_lightning_prefix(&lnurl);
            prop_assert!(prefixed.starts_with(LIGHTNING_SCHEME));
            prop_assert_eq!(strip_lightning_prefix(&prefixed), lnurl.as_str());
        }

        #[test]
        fn lnurl_matches_reference(path in "[a-zA-Z0-9/._~-]{0,40}") {
            let url = format!("https://example.com/{}", path);
            let expected = ::bech32::encode("lnurl", url.as_bytes().to_base32()).unwrap().to_uppercase();
            prop_assert_eq!(encode_lnurl(&url).unwrap(), expected);
        }
    }
}
