use thiserror::Error;

/// A CIDR the caller handed over that cannot be split into prefix and length.
///
/// This is a contract violation on the caller's side and is kept apart from
/// ordinary input validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpPrefixError {
    #[error("CIDR '{0}' not in prefix/length format")]
    MissingSeparator(String),

    #[error("CIDR '{0}' contains more than one '/'")]
    ExtraSeparator(String),

    #[error("CIDR '{cidr}' has invalid prefix length '{length}'")]
    InvalidLength { cidr: String, length: String },
}

/// Splits a CIDR on its single `/` into the textual (prefix, length) pair.
pub fn split_cidr(cidr: &str) -> Result<(&str, &str), IpPrefixError> {
    let (prefix, length) = cidr
        .split_once('/')
        .ok_or_else(|| IpPrefixError::MissingSeparator(cidr.to_string()))?;

    if length.contains('/') {
        return Err(IpPrefixError::ExtraSeparator(cidr.to_string()));
    }

    Ok((prefix, length))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpPrefix {
    pub prefix: String,
    pub length: u8,
}

impl IpPrefix {
    /// Splits and validates a CIDR. The length must fit the address family:
    /// at most 32 for IPv4, at most 128 for IPv6.
    pub fn parse(cidr: &str) -> Result<Self, IpPrefixError> {
        let (prefix, raw_length) = split_cidr(cidr)?;
        let invalid_length = || IpPrefixError::InvalidLength {
            cidr: cidr.to_string(),
            length: raw_length.to_string(),
        };

        let length = raw_length.parse::<u8>().map_err(|_| invalid_length())?;
        let max_length = if prefix.contains(':') { 128 } else { 32 };
        if length > max_length {
            return Err(invalid_length());
        }

        Ok(Self {
            prefix: prefix.to_string(),
            length,
        })
    }
}
