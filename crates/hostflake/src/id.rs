use core::fmt;

/// A 64-bit host-aware ID.
///
/// - 28 bits duration (seconds since [`HOSTFLAKE_EPOCH`])
/// - 16 bits host code
/// - 20 bits random
///
/// ```text
///  Bit Index:  63             36 35             20 19           0
///              +-----------------+-----------------+-------------+
///  Field:      |  duration (28)  | host code (16)  | random (20) |
///              +-----------------+-----------------+-------------+
///              |<----- MSB --------- 64 bits --------- LSB ----->|
/// ```
///
/// The three widths sum to exactly 64: there is no spare bit, and packing is
/// exact rather than a margin. Any bit pattern is a decodable ID, so
/// extraction never fails.
///
/// [`HOSTFLAKE_EPOCH`]: crate::HOSTFLAKE_EPOCH
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HostedId {
    id: u64,
}

impl HostedId {
    /// Bitmask for extracting the 28-bit duration field. Occupies bits 36
    /// through 63.
    pub const DURATION_MASK: u64 = (1 << 28) - 1;

    /// Bitmask for extracting the 16-bit host code field. Occupies bits 20
    /// through 35.
    pub const HOST_CODE_MASK: u64 = (1 << 16) - 1;

    /// Bitmask for extracting the 20-bit random field. Occupies bits 0
    /// through 19.
    pub const RANDOM_MASK: u64 = (1 << 20) - 1;

    /// Number of bits to shift the duration to its correct position (bit 36).
    pub const DURATION_SHIFT: u64 = 36;

    /// Number of bits to shift the host code to its correct position (bit 20).
    pub const HOST_CODE_SHIFT: u64 = 20;

    /// Number of bits to shift the random field (bit 0).
    pub const RANDOM_SHIFT: u64 = 0;

    /// Packs a `(duration, host_code, random)` triple into an ID.
    ///
    /// Every field is masked to its width before shifting. For `duration`
    /// this is indistinguishable from an unmasked shift: bits above the 28th
    /// would fall off the top of the `u64` anyway. Once elapsed seconds
    /// exceed `2^28 - 1`, the duration field wraps silently; this is an
    /// intrinsic property of the fixed-width epoch encoding, and IDs issued
    /// past the wraparound point decode to a duration modulo `2^28`.
    pub const fn from(duration: u64, host_code: u64, random: u64) -> Self {
        let duration = (duration & Self::DURATION_MASK) << Self::DURATION_SHIFT;
        let host_code = (host_code & Self::HOST_CODE_MASK) << Self::HOST_CODE_SHIFT;
        let random = (random & Self::RANDOM_MASK) << Self::RANDOM_SHIFT;
        Self {
            id: duration | host_code | random,
        }
    }

    /// Extracts the duration (elapsed seconds since the epoch origin) from
    /// the packed ID.
    pub const fn duration(&self) -> u64 {
        (self.id >> Self::DURATION_SHIFT) & Self::DURATION_MASK
    }

    /// Extracts the host code from the packed ID.
    pub const fn host_code(&self) -> u64 {
        (self.id >> Self::HOST_CODE_SHIFT) & Self::HOST_CODE_MASK
    }

    /// Extracts the random field from the packed ID.
    pub const fn random(&self) -> u64 {
        (self.id >> Self::RANDOM_SHIFT) & Self::RANDOM_MASK
    }

    /// Returns the maximum possible value for the duration field.
    pub const fn max_duration() -> u64 {
        Self::DURATION_MASK
    }

    /// Returns the maximum possible value for the host code field.
    pub const fn max_host_code() -> u64 {
        Self::HOST_CODE_MASK
    }

    /// Returns the maximum possible value for the random field.
    pub const fn max_random() -> u64 {
        Self::RANDOM_MASK
    }

    /// Converts this ID into its raw `u64` representation.
    pub const fn to_raw(&self) -> u64 {
        self.id
    }

    /// Converts a raw `u64` into an ID. Never fails; every bit pattern is a
    /// valid ID.
    pub const fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }

    /// Returns the ID as a zero-padded 20-digit decimal string.
    pub fn to_padded_string(&self) -> String {
        format!("{:020}", self.id)
    }
}

impl fmt::Display for HostedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for HostedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostedId")
            .field("id", &self.id)
            .field("duration", &self.duration())
            .field("host_code", &self.host_code())
            .field("random", &self.random())
            .finish()
    }
}
