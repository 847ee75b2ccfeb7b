//! Deterministic encoding of a canonical observation set into ledger
//! write instructions.
//!
//! Encoding must be a pure function of its input: the external write may
//! be retried after a cancel or a transport failure, and a retry must
//! produce byte-identical calldata so the contract upserts instead of
//! double counting.

use std::sync::OnceLock;

use sha3::{Digest, Keccak256};

use mentionwatch_core::ObservationSet;

const REPORT_MENTIONS_SIGNATURE: &str = "reportMentions(bytes32,uint256,uint256)";

/// One ledger write: `reportMentions(termKey, count, timestampSeconds)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportInstruction {
    /// The term text, kept for logging and write references only — the
    /// contract sees the key, not the term.
    pub term: String,
    /// Keccak-256 of the term bytes; the contract storage key.
    pub term_key: [u8; 32],
    pub count: u64,
    /// Observation time truncated to whole seconds. Sub-second precision
    /// is deliberately discarded; second precision is the documented
    /// contract.
    pub timestamp_secs: u64,
}

impl ReportInstruction {
    /// Lowercase hex rendering of the term key, for logs and assertions.
    #[must_use]
    pub fn term_key_hex(&self) -> String {
        self.term_key.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// ABI-encoded calldata for `reportMentions(bytes32,uint256,uint256)`:
    /// 4-byte selector followed by three 32-byte words (term key, count,
    /// timestamp; integers big-endian, left-padded).
    #[must_use]
    pub fn calldata(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(4 + 3 * 32);
        data.extend_from_slice(&report_mentions_selector());
        data.extend_from_slice(&self.term_key);
        data.extend_from_slice(&abi_word(self.count));
        data.extend_from_slice(&abi_word(self.timestamp_secs));
        data
    }
}

/// Keccak-256 hash of a term's raw bytes — the ledger storage key.
///
/// Pure function of the term text: equal terms always produce equal keys,
/// which is what makes ledger writes idempotent upserts.
#[must_use]
pub fn term_key(term: &str) -> [u8; 32] {
    Keccak256::digest(term.as_bytes()).into()
}

/// Map a canonical observation set to one write instruction per term,
/// preserving term order.
#[must_use]
pub fn encode_report(canonical: &ObservationSet) -> Vec<ReportInstruction> {
    canonical
        .observations
        .iter()
        .map(|obs| ReportInstruction {
            term: obs.term.clone(),
            term_key: term_key(&obs.term),
            count: obs.count,
            // Observation times are always post-epoch; the fallback is unreachable.
            timestamp_secs: u64::try_from(obs.observed_at.timestamp()).unwrap_or(0),
        })
        .collect()
}

fn report_mentions_selector() -> [u8; 4] {
    static SELECTOR: OnceLock<[u8; 4]> = OnceLock::new();
    *SELECTOR.get_or_init(|| {
        let digest = Keccak256::digest(REPORT_MENTIONS_SIGNATURE.as_bytes());
        [digest[0], digest[1], digest[2], digest[3]]
    })
}

/// A 32-byte big-endian ABI word holding a `u64`.
fn abi_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}
