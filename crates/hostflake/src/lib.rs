//! Compact, time-ordered, host-aware 64-bit unique identifiers.
//!
//! A [`HostedId`] packs three fields into a single `u64`:
//!
//! ```text
//!  Bit Index:  63             36 35             20 19           0
//!              +-----------------+-----------------+-------------+
//!  Field:      |  duration (28)  | host code (16)  | random (20) |
//!              +-----------------+-----------------+-------------+
//!              |<----- MSB --------- 64 bits --------- LSB ----->|
//! ```
//!
//! - `duration`: seconds elapsed since [`HOSTFLAKE_EPOCH`]
//! - `host code`: process-wide identifier supplied by the caller, masked to
//!   16 bits
//! - `random`: per-call entropy, masked to 20 bits
//!
//! IDs are roughly monotonic over time, collision-resistant across hosts, and
//! reversible: the issuing time and host code can be recovered from any ID
//! without external state. Decoding needs only the fixed constants (epoch
//! origin and bit widths), never the generator that issued the ID.
//!
//! # Example
//!
//! ```
//! use hostflake::{HexExt, HostedId, HostedIdGenerator};
//!
//! let generator = HostedIdGenerator::with_host_code(7);
//! let id = generator.next_id();
//!
//! assert_eq!(id.host_code(), 7);
//! assert_eq!(HostedId::decode(&id.encode()).unwrap(), id);
//! ```
//!
//! # Guarantees and non-guarantees
//!
//! - Generation is infallible, non-blocking, and safe for unbounded
//!   concurrent callers; entropy sources are borrowed from an internal pool
//!   so no two callers ever share one.
//! - IDs issued within the same second are **not** ordered relative to each
//!   other, and the 20-bit random field is probabilistic, not unique (expect
//!   ~50% duplicate odds near 1200 IDs in one second/host bucket).
//! - The random component is not cryptographically unguessable.
//! - Elapsed seconds past 2^28 silently wrap; see [`HOSTFLAKE_EPOCH`] for the
//!   validity window.

mod error;
mod generator;
mod hex;
mod id;
mod mutex;
mod pool;
mod pooled_random;
mod rand_source;
mod time;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::hex::*;
pub use crate::id::*;
pub use crate::pool::*;
pub use crate::pooled_random::*;
pub use crate::rand_source::*;
pub use crate::time::*;
