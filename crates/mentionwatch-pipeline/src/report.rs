//! The conditional reporting step.

use mentionwatch_core::{EvmConfig, ObservationSet};
use mentionwatch_ledger::{encode_report, resolve_selector, LedgerWriter, ReportTarget};

/// What became of the reporting step. Skips are outcomes, not errors — the
/// run succeeds either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Reporting is not configured or explicitly disabled.
    Disabled,
    /// The configured chain selector name is unknown.
    NetworkNotFound,
    /// The ledger writer failed; nothing was confirmed written.
    WriteFailed,
    /// All instructions were handed off; one write reference per term.
    Submitted(Vec<String>),
}

impl ReportOutcome {
    /// The summary tag for this outcome.
    #[must_use]
    pub fn tag(&self) -> String {
        match self {
            ReportOutcome::Disabled => "disabled".to_string(),
            ReportOutcome::NetworkNotFound => "network-not-found".to_string(),
            ReportOutcome::WriteFailed => "write-failed".to_string(),
            ReportOutcome::Submitted(references) => references.join(","),
        }
    }
}

/// Encode the canonical result and hand it to the ledger writer, gated on
/// the EVM config.
///
/// Skip conditions, in order: no `evm` block or `enabled: false` →
/// [`ReportOutcome::Disabled`]; unresolvable chain selector →
/// [`ReportOutcome::NetworkNotFound`]. A writer error degrades to
/// [`ReportOutcome::WriteFailed`] with an error log.
pub fn report_mentions<W: LedgerWriter>(
    evm: Option<&EvmConfig>,
    canonical: &ObservationSet,
    writer: &W,
) -> ReportOutcome {
    let Some(evm) = evm.filter(|e| e.enabled) else {
        tracing::info!("on-chain reporting disabled");
        return ReportOutcome::Disabled;
    };

    let Some(chain_selector) = resolve_selector(&evm.chain_selector_name) else {
        tracing::warn!(
            chain = %evm.chain_selector_name,
            "network not found; skipping on-chain report"
        );
        return ReportOutcome::NetworkNotFound;
    };

    let target = ReportTarget::from_config(evm, chain_selector);
    let instructions = encode_report(canonical);

    for instruction in &instructions {
        tracing::info!(
            term = %instruction.term,
            count = instruction.count,
            term_key = %instruction.term_key_hex(),
            "reporting mentions on-chain"
        );
    }

    match writer.submit(&target, &instructions) {
        Ok(references) => ReportOutcome::Submitted(references),
        Err(e) => {
            tracing::error!(error = %e, "ledger write failed; run continues");
            ReportOutcome::WriteFailed
        }
    }
}
