//! Mock ledger query layer for the XEM test-network dashboards.
//!
//! Every lookup is served from an immutable table of canned responses built
//! once per process. The table sits behind [`LedgerClient`], so a real node
//! client can take its place without touching the dashboard or CLI.

pub mod cache;
pub mod client;
pub mod decode;
pub mod input;
pub mod model;
pub mod responder;
pub mod view;

mod error;

pub use cache::CachedClient;
pub use client::LedgerClient;
pub use error::{ClientError, InputError, LedgerError};
pub use responder::{CannedResponse, Endpoint, MockResponder, QueryParams};

// network constants
pub const MICRO_PER_UNIT: u64 = 1_000_000;
pub const UNIT_TICKER: &str = "XEM";
/// Nemesis block instant, 2015-03-29 00:06:25 UTC.
pub const NETWORK_EPOCH_UNIX: i64 = 1_427_587_585;
/// Same instant written as a calendar date-time (year, month, day, h, m, s).
pub const NETWORK_EPOCH_CALENDAR: (i32, u32, u32, u32, u32, u32) = (2015, 3, 29, 0, 6, 25);
pub const HASH_HEX_LEN: usize = 64;

/// Sample address as shown to users, with its display hyphens.
pub const SAMPLE_ADDRESS: &str = "NACTUS-KR5KHJ-SWT4EK-NE55M7-U74FKW-KEREEE-YSU5";
/// Sample address in the normalized form the responder matches against.
pub const SAMPLE_ADDRESS_NORMALIZED: &str = "NACTUSKR5KHJSWT4EKNE55M7U74FKWKEREEEYSU5";
pub const SAMPLE_HASH: &str = "a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4e5f6a1b2";
