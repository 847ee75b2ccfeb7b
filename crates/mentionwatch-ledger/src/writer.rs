//! The write boundary to the external ledger.
//!
//! The pipeline hands an ordered batch of instructions plus the target to
//! a [`LedgerWriter`]; what happens past that seam (signing, broadcast,
//! confirmation) belongs to the collaborator behind it. The in-tree
//! [`SimulatedLedger`] logs what a real writer would broadcast and hands
//! back synthetic references, which keeps the pipeline runnable end to end
//! without chain credentials.

use mentionwatch_core::EvmConfig;

use crate::encode::ReportInstruction;
use crate::error::LedgerError;

/// Where a report batch goes: resolved chain selector plus the contract
/// coordinates from config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTarget {
    pub chain_selector: u64,
    pub contract_address: String,
    pub gas_limit: u64,
}

impl ReportTarget {
    #[must_use]
    pub fn from_config(evm: &EvmConfig, chain_selector: u64) -> Self {
        Self {
            chain_selector,
            contract_address: evm.contract_address.clone(),
            gas_limit: evm.gas_limit,
        }
    }
}

/// Submits encoded report instructions to the ledger.
///
/// Implementations must treat the instruction batch as immutable and
/// return one opaque write reference per instruction, in order.
pub trait LedgerWriter {
    /// # Errors
    ///
    /// Returns [`LedgerError`] if the batch could not be submitted. The
    /// caller degrades this to a `write-failed` run outcome; it never
    /// fails the run.
    fn submit(
        &self,
        target: &ReportTarget,
        instructions: &[ReportInstruction],
    ) -> Result<Vec<String>, LedgerError>;
}

/// Ledger writer that only logs. Stands in for the real signer/broadcaster
/// in local runs and tests.
pub struct SimulatedLedger;

impl LedgerWriter for SimulatedLedger {
    fn submit(
        &self,
        target: &ReportTarget,
        instructions: &[ReportInstruction],
    ) -> Result<Vec<String>, LedgerError> {
        let mut references = Vec::with_capacity(instructions.len());
        for instruction in instructions {
            let calldata = instruction.calldata();
            let calldata_prefix: String = calldata[..16.min(calldata.len())]
                .iter()
                .map(|b| format!("{b:02x}"))
                .collect();
            tracing::info!(
                term = %instruction.term,
                count = instruction.count,
                term_key = %instruction.term_key_hex(),
                chain_selector = target.chain_selector,
                contract = %target.contract_address,
                gas_limit = target.gas_limit,
                calldata_prefix = %calldata_prefix,
                "simulated ledger write"
            );
            references.push(format!("simulated-tx-{}", instruction.term));
        }
        Ok(references)
    }
}
