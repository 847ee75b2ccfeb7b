//! On-chain reporting support: deterministic report encoding, chain
//! selector lookup, and the write boundary to the external ledger.
//!
//! The mention registry contract this targets exposes:
//!
//! ```text
//! function reportMentions(bytes32 termHash, uint256 count, uint256 timestamp) external
//! function getMentionCount(bytes32 termHash) external view returns (uint256)
//! function getLastUpdate(bytes32 termHash) external view returns (uint256)
//! ```
//!
//! Term hashes are Keccak-256 over the raw term bytes, so the same term
//! text always lands on the same storage key and a retried write upserts
//! instead of double counting.

pub mod encode;
pub mod error;
pub mod network;
pub mod writer;

pub use encode::{encode_report, term_key, ReportInstruction};
pub use error::LedgerError;
pub use network::resolve_selector;
pub use writer::{LedgerWriter, ReportTarget, SimulatedLedger};
