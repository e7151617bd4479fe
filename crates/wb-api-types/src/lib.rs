use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported browser wallet extensions. Extending support means adding a
/// variant here and registering an adapter for it at startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    Keplr,
    Leap,
}

impl WalletKind {
    /// Registry lookup key; matches the name the extension publishes under.
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletKind::Keplr => "keplr",
            WalletKind::Leap => "leap",
        }
    }
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signature scheme reported by the wallet for an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SignatureAlgorithm {
    Secp256k1,
    Ed25519,
    Sr25519,
}

/// One account as enumerated by an offline signer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountInfo {
    pub address: String,
    pub algo: SignatureAlgorithm,
    pub pub_key: Vec<u8>,
}

/// Public key material as projected by the wallet extension for a chain.
///
/// Untrusted input: the extension owns the private key and we only ever
/// see this read-only view. Callers must run [`KeyMaterial::validate`]
/// before relying on any field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyMaterial {
    pub name: String,
    pub algo: SignatureAlgorithm,
    pub pub_key: Vec<u8>,
    pub address: Vec<u8>,
    pub bech32_address: String,
    pub is_hardware: bool,
}

impl KeyMaterial {
    /// Check the projection is usable: non-empty key bytes and an address
    /// that decodes as bech32 under the expected account prefix.
    pub fn validate(&self, expected_prefix: &str) -> Result<()> {
        if self.pub_key.is_empty() {
            return Err(anyhow!("key material has no public key bytes"));
        }
        if self.bech32_address.trim().is_empty() {
            return Err(anyhow!("key material has no bech32 address"));
        }

        let (hrp, data) = bech32::decode(&self.bech32_address)
            .map_err(|err| anyhow!("bech32 address does not decode: {err}"))?;

        if data.is_empty() {
            return Err(anyhow!("bech32 address carries no payload"));
        }
        if hrp.as_str() != expected_prefix {
            return Err(anyhow!(
                "address prefix '{}' does not match chain prefix '{expected_prefix}'",
                hrp.as_str()
            ));
        }

        Ok(())
    }
}

// ── Display helpers ──

/// Shorten a string for display by cutting out its middle.
///
/// Strings of `max_len` or fewer characters come back unchanged. Longer
/// input is reduced to exactly `max_len` characters including a single
/// `separator`, with an odd leftover character going to the front half.
/// An empty separator falls back to `"..."`.
pub fn truncate_middle(full: &str, max_len: usize, separator: &str) -> String {
    let char_count = full.chars().count();
    if full.is_empty() || char_count <= max_len {
        return full.to_owned();
    }

    let separator = if separator.is_empty() { "..." } else { separator };
    let sep_len = separator.chars().count();

    let chars_to_show = max_len.saturating_sub(sep_len);
    let front_chars = chars_to_show.div_ceil(2);
    let back_chars = chars_to_show / 2;

    let front: String = full.chars().take(front_chars).collect();
    let back: String = full.chars().skip(char_count - back_chars).collect();

    format!("{front}{separator}{back}")
}

/// Address/hash display form: 15 characters with a `...` midsection.
pub fn truncate_hash(hash: &str) -> String {
    truncate_middle(hash, 15, "...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bech32::{Bech32, Hrp};

    fn sample_address(prefix: &str) -> String {
        let hrp = Hrp::parse(prefix).expect("valid hrp");
        bech32::encode::<Bech32>(hrp, &[7_u8; 20]).expect("encodable payload")
    }

    fn sample_key(prefix: &str) -> KeyMaterial {
        KeyMaterial {
            name: "primary".to_owned(),
            algo: SignatureAlgorithm::Secp256k1,
            pub_key: vec![2_u8; 33],
            address: vec![7_u8; 20],
            bech32_address: sample_address(prefix),
            is_hardware: false,
        }
    }

    #[test]
    fn truncate_returns_short_input_unchanged() {
        assert_eq!(truncate_middle("nibi1abc", 15, "..."), "nibi1abc");
        assert_eq!(truncate_middle("", 15, "..."), "");
        let exactly = "123456789012345";
        assert_eq!(truncate_middle(exactly, 15, "..."), exactly);
    }

    #[test]
    fn truncate_produces_requested_length_with_one_separator() {
        let full = "nibi1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5lzv7xu";
        let out = truncate_middle(full, 15, "...");
        assert_eq!(out.chars().count(), 15);
        assert_eq!(out.matches("...").count(), 1);
        assert_eq!(out, "nibi1q...lzv7xu");

        // odd remainder goes to the front half
        let out = truncate_middle(full, 16, "...");
        assert_eq!(out.chars().count(), 16);
        assert!(out.starts_with("nibi1qy"));
        assert!(out.ends_with("lzv7xu"));
    }

    #[test]
    fn truncate_empty_separator_falls_back_to_ellipsis() {
        let out = truncate_middle("abcdefghijklmnopqrstuvwxyz", 11, "");
        assert_eq!(out, "abcd...wxyz");
    }

    #[test]
    fn truncate_hash_uses_fifteen_char_default() {
        let hash = "0123456789abcdef0123456789abcdef";
        let out = truncate_hash(hash);
        assert_eq!(out.chars().count(), 15);
        assert_eq!(out, "012345...abcdef");
    }

    #[test]
    fn key_material_validates_with_matching_prefix() {
        let key = sample_key("nibiru");
        assert!(key.validate("nibiru").is_ok());
    }

    #[test]
    fn key_material_rejects_wrong_prefix() {
        let key = sample_key("cosmos");
        let err = key.validate("nibiru").unwrap_err();
        assert!(err.to_string().contains("prefix"));
    }

    #[test]
    fn key_material_rejects_empty_fields() {
        let mut key = sample_key("nibiru");
        key.pub_key.clear();
        assert!(key.validate("nibiru").is_err());

        let mut key = sample_key("nibiru");
        key.bech32_address = "  ".to_owned();
        assert!(key.validate("nibiru").is_err());

        let mut key = sample_key("nibiru");
        key.bech32_address = "nibiru1notbech32!!!".to_owned();
        assert!(key.validate("nibiru").is_err());
    }
}
