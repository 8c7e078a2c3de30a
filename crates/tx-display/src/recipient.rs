use serde::{Deserialize, Serialize};

use crate::address::validate_address;
use crate::error::TxDisplayError;

/// Suffix that classifies a recipient string as an ENS name.
pub const ENS_SUFFIX: &str = ".eth";

/// Address the built-in demo resolver hands back for every ENS name.
///
/// A well-formed EIP-55 address so that downstream validation accepts
/// resolver output. Demo flow only.
pub const DEMO_RESOLVED_ADDRESS: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

/// A classified transfer target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// The address funds would go to.
    pub address: String,
    /// The ENS name the user typed, when they typed one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ens_name: Option<String>,
}

/// Whether `recipient` looks like an ENS name: a non-empty label followed
/// by `.eth`, any casing.
pub fn is_ens_name(recipient: &str) -> bool {
    let name = recipient.trim();
    name.len() > ENS_SUFFIX.len() && name.to_ascii_lowercase().ends_with(ENS_SUFFIX)
}

/// Turns an ENS name into an address.
pub trait NameResolver {
    fn resolve(&self, name: &str) -> Result<String, TxDisplayError>;
}

/// Resolver that maps every name to one fixed address.
///
/// Stands in for a real on-chain lookup in the demo flow; production
/// callers inject their own [`NameResolver`].
#[derive(Debug, Clone)]
pub struct StaticResolver {
    address: String,
}

impl StaticResolver {
    pub fn new(address: impl Into<String>) -> Self {
        StaticResolver {
            address: address.into(),
        }
    }
}

impl Default for StaticResolver {
    fn default() -> Self {
        StaticResolver::new(DEMO_RESOLVED_ADDRESS)
    }
}

impl NameResolver for StaticResolver {
    fn resolve(&self, _name: &str) -> Result<String, TxDisplayError> {
        Ok(self.address.clone())
    }
}

/// Classifies a recipient string without validating it — the permissive
/// demo entry point.
///
/// ENS names take the [`DEMO_RESOLVED_ADDRESS`] placeholder; anything else
/// passes through as a raw address untouched.
pub fn parse_recipient(recipient: &str) -> Recipient {
    if is_ens_name(recipient) {
        Recipient {
            address: DEMO_RESOLVED_ADDRESS.to_string(),
            ens_name: Some(recipient.to_string()),
        }
    } else {
        Recipient {
            address: recipient.to_string(),
            ens_name: None,
        }
    }
}

/// Classifies and checks a recipient: ENS names go through `resolver`,
/// raw addresses must pass [`validate_address`].
pub fn resolve_recipient(
    recipient: &str,
    resolver: &dyn NameResolver,
) -> Result<Recipient, TxDisplayError> {
    if is_ens_name(recipient) {
        let address = resolver.resolve(recipient.trim())?;
        return Ok(Recipient {
            address,
            ens_name: Some(recipient.to_string()),
        });
    }

    if !validate_address(recipient)? {
        return Err(TxDisplayError::InvalidAddress(
            "checksum does not match".into(),
        ));
    }
    Ok(Recipient {
        address: recipient.to_string(),
        ens_name: None,
    })
}
