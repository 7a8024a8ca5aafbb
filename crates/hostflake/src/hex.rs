use crate::{Error, HostedId, Result, to_timestamp};
use core::fmt;
use std::time::SystemTime;

/// A trait for types that can be encoded to and decoded from lowercase
/// hexadecimal strings.
///
/// Encoding uses default hex formatting: no `0x` prefix, no fixed width, and
/// leading zero nibbles dropped. This is the interchange form used by logs
/// and any wire/text context.
pub trait HexExt: Sized {
    /// Converts this type into its raw `u64` representation.
    fn to_raw_u64(&self) -> u64;

    /// Converts a raw `u64` into this type.
    fn from_raw_u64(raw: u64) -> Self;

    /// Encodes the value as a lowercase hex string.
    fn encode(&self) -> String {
        format!("{:x}", self.to_raw_u64())
    }

    /// Decodes a hex string, accepting both uppercase and lowercase digits.
    ///
    /// # Errors
    /// - [`HexError::DecodeInvalidLen`] if the input is empty or longer than
    ///   16 nibbles (64 bits). Inputs zero-padded past 16 nibbles are
    ///   rejected even though they fit; [`HexExt::encode`] never emits them.
    /// - [`HexError::DecodeInvalidAscii`] if the input contains a non-hex
    ///   byte.
    fn decode(s: &str) -> Result<Self> {
        let raw = decode_hex(s)?;
        Ok(Self::from_raw_u64(raw))
    }
}

impl HexExt for HostedId {
    fn to_raw_u64(&self) -> u64 {
        self.to_raw()
    }

    fn from_raw_u64(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

/// Hexadecimal decoding failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HexError {
    /// The input was empty or longer than 16 nibbles.
    DecodeInvalidLen { len: usize },
    /// The input contained a byte outside `[0-9a-fA-F]`.
    DecodeInvalidAscii { byte: u8 },
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecodeInvalidLen { len } => write!(f, "invalid length: {len}"),
            Self::DecodeInvalidAscii { byte } => write!(f, "invalid ascii byte: {byte}"),
        }
    }
}

impl core::error::Error for HexError {}

impl From<HexError> for Error {
    fn from(err: HexError) -> Self {
        Self::HexError(err)
    }
}

/// Decodes up to 16 hex nibbles into a `u64`.
fn decode_hex(s: &str) -> Result<u64, HexError> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || bytes.len() > 16 {
        return Err(HexError::DecodeInvalidLen { len: bytes.len() });
    }

    let mut value: u64 = 0;
    for &byte in bytes {
        let nibble = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'f' => byte - b'a' + 10,
            b'A'..=b'F' => byte - b'A' + 10,
            _ => return Err(HexError::DecodeInvalidAscii { byte }),
        };
        value = (value << 4) | u64::from(nibble);
    }
    Ok(value)
}

/// Strict variant of [`timestamp_from_hex`]: surfaces the parse failure.
///
/// # Errors
/// Returns a [`HexError`] (wrapped in [`Error`]) when `s` is not a valid hex
/// ID string.
pub fn try_timestamp_from_hex(s: &str) -> Result<SystemTime> {
    let id = HostedId::decode(s)?;
    Ok(to_timestamp(id.duration()))
}

/// Extracts the issuing time from a hex ID string, **fail-soft**.
///
/// Unparseable input silently yields the epoch origin itself. Callers that
/// must distinguish "epoch origin because the parse failed" from "the ID was
/// legitimately issued at the origin" should use [`try_timestamp_from_hex`].
pub fn timestamp_from_hex(s: &str) -> SystemTime {
    try_timestamp_from_hex(s).unwrap_or_else(|_| to_timestamp(0))
}

/// Strict variant of [`host_code_from_hex`]: surfaces the parse failure.
///
/// # Errors
/// Returns a [`HexError`] (wrapped in [`Error`]) when `s` is not a valid hex
/// ID string.
pub fn try_host_code_from_hex(s: &str) -> Result<u64> {
    Ok(HostedId::decode(s)?.host_code())
}

/// Extracts the host code from a hex ID string, **fail-soft**.
///
/// Unparseable input silently yields 0. Callers that must distinguish "zero
/// because the parse failed" from "the encoded host code was legitimately
/// zero" should use [`try_host_code_from_hex`].
pub fn host_code_from_hex(s: &str) -> u64 {
    try_host_code_from_hex(s).unwrap_or_default()
}

/// Strict variant of [`random_from_hex`]: surfaces the parse failure.
///
/// # Errors
/// Returns a [`HexError`] (wrapped in [`Error`]) when `s` is not a valid hex
/// ID string.
pub fn try_random_from_hex(s: &str) -> Result<u64> {
    Ok(HostedId::decode(s)?.random())
}

/// Extracts the random field from a hex ID string, **fail-soft**.
///
/// Unparseable input silently yields 0; see [`try_random_from_hex`] for the
/// strict variant.
pub fn random_from_hex(s: &str) -> u64 {
    try_random_from_hex(s).unwrap_or_default()
}
