//! End-to-end pipeline tests against a wiremock search API, with a
//! recording ledger double standing in for the chain writer.

use std::sync::Mutex;

use mentionwatch_core::{ApiKind, EvmConfig, SearchConfig, Secrets, WorkflowConfig};
use mentionwatch_ledger::{LedgerError, LedgerWriter, ReportInstruction, ReportTarget};
use mentionwatch_pipeline::run_once;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Ledger double: records every submitted batch, optionally failing.
#[derive(Default)]
struct RecordingLedger {
    submissions: Mutex<Vec<(ReportTarget, Vec<ReportInstruction>)>>,
    fail: bool,
}

impl RecordingLedger {
    fn failing() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }

    fn recorded_instructions(&self) -> Vec<ReportInstruction> {
        self.submissions
            .lock()
            .unwrap()
            .iter()
            .flat_map(|(_, instructions)| instructions.clone())
            .collect()
    }
}

impl LedgerWriter for RecordingLedger {
    fn submit(
        &self,
        target: &ReportTarget,
        instructions: &[ReportInstruction],
    ) -> Result<Vec<String>, LedgerError> {
        if self.fail {
            return Err(LedgerError::Write("broadcast rejected".to_string()));
        }
        self.submissions
            .lock()
            .unwrap()
            .push((target.clone(), instructions.to_vec()));
        Ok(instructions
            .iter()
            .map(|i| format!("tx-{}", i.term))
            .collect())
    }
}

fn config(endpoint: &str, api_type: ApiKind, terms: &[&str], evm: Option<EvmConfig>) -> WorkflowConfig {
    WorkflowConfig {
        schedule: "0 */5 * * * *".to_string(),
        search: SearchConfig {
            terms: terms.iter().map(ToString::to_string).collect(),
            window_minutes: 60,
            api_endpoint: endpoint.to_string(),
            api_type,
            bearer_token: None,
        },
        evm,
    }
}

fn evm(enabled: bool, chain: &str) -> EvmConfig {
    EvmConfig {
        enabled,
        chain_selector_name: chain.to_string(),
        contract_address: "0x1111111111111111111111111111111111111111".to_string(),
        gas_limit: 500_000,
    }
}

async fn mock_search_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn twitter_without_token_completes_with_mock_data() {
    let server = mock_search_server().await;
    let config = config(&server.uri(), ApiKind::Twitter, &["chainlink", "LINK"], None);
    let ledger = RecordingLedger::default();

    let summary = run_once(&config, &Secrets::default(), 3, &ledger)
        .await
        .expect("missing credentials must not fail the run");

    // Mock formula: chainlink -> 153, LINK -> 58.
    assert_eq!(summary.total_mentions, 211);
    assert_eq!(summary.terms.len(), 2);
    assert_eq!(summary.terms[0].term, "chainlink");
    assert_eq!(summary.terms[0].count, 153);
    assert_eq!(summary.reporting_outcome, "disabled");
}

#[tokio::test]
async fn executor_fanout_agrees_with_a_single_executor() {
    let server = mock_search_server().await;
    let config = config(&server.uri(), ApiKind::Mock, &["chainlink", "$LINK"], None);
    let ledger = RecordingLedger::default();

    let many = run_once(&config, &Secrets::default(), 5, &ledger)
        .await
        .unwrap();
    let one = run_once(&config, &Secrets::default(), 1, &ledger)
        .await
        .unwrap();

    assert_eq!(many.total_mentions, one.total_mentions);
    assert_eq!(many.terms, one.terms);
}

#[tokio::test]
async fn disabled_reporting_writes_nothing() {
    let server = mock_search_server().await;
    let config = config(
        &server.uri(),
        ApiKind::Mock,
        &["chainlink"],
        Some(evm(false, "ethereum-testnet-sepolia")),
    );
    let ledger = RecordingLedger::default();

    let summary = run_once(&config, &Secrets::default(), 3, &ledger)
        .await
        .unwrap();

    assert_eq!(summary.reporting_outcome, "disabled");
    assert_eq!(summary.total_mentions, 153);
    assert_eq!(ledger.submission_count(), 0);
}

#[tokio::test]
async fn unknown_network_skips_with_tag_and_writes_nothing() {
    let server = mock_search_server().await;
    let config = config(
        &server.uri(),
        ApiKind::Mock,
        &["chainlink"],
        Some(evm(true, "no-such-network")),
    );
    let ledger = RecordingLedger::default();

    let summary = run_once(&config, &Secrets::default(), 3, &ledger)
        .await
        .unwrap();

    assert_eq!(summary.reporting_outcome, "network-not-found");
    assert_eq!(summary.total_mentions, 153);
    assert_eq!(ledger.submission_count(), 0);
}

#[tokio::test]
async fn enabled_reporting_submits_one_instruction_per_term() {
    let server = mock_search_server().await;
    let config = config(
        &server.uri(),
        ApiKind::Mock,
        &["chainlink", "LINK"],
        Some(evm(true, "ethereum-testnet-sepolia")),
    );
    let ledger = RecordingLedger::default();

    let summary = run_once(&config, &Secrets::default(), 3, &ledger)
        .await
        .unwrap();

    assert_eq!(summary.reporting_outcome, "tx-chainlink,tx-LINK");

    let instructions = ledger.recorded_instructions();
    assert_eq!(instructions.len(), 2);
    assert_eq!(instructions[0].term, "chainlink");
    assert_eq!(instructions[0].count, summary.terms[0].count);
    assert_ne!(instructions[0].term_key, instructions[1].term_key);

    let (target, _) = &ledger.submissions.lock().unwrap()[0];
    assert_eq!(target.chain_selector, 16_015_286_601_757_825_753);
    assert_eq!(target.gas_limit, 500_000);
}

#[tokio::test]
async fn ledger_failure_degrades_to_write_failed() {
    let server = mock_search_server().await;
    let config = config(
        &server.uri(),
        ApiKind::Mock,
        &["chainlink"],
        Some(evm(true, "ethereum-testnet-sepolia")),
    );
    let ledger = RecordingLedger::failing();

    let summary = run_once(&config, &Secrets::default(), 3, &ledger)
        .await
        .expect("a writer failure must not fail the run");

    assert_eq!(summary.reporting_outcome, "write-failed");
    assert_eq!(summary.total_mentions, 153);
}

#[tokio::test]
async fn empty_term_list_aborts_before_collect() {
    let server = MockServer::start().await;
    // No mocks mounted: a request would 404, but validation must stop the
    // run before any request is issued.
    let config = config(&server.uri(), ApiKind::Mock, &[], None);
    let ledger = RecordingLedger::default();

    let result = run_once(&config, &Secrets::default(), 3, &ledger).await;
    assert!(result.is_err());
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn live_run_reports_on_exactly_the_first_five_terms() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": { "result_count": 4 }
        })))
        .expect(5)
        .mount(&server)
        .await;

    let mut config = config(
        &server.uri(),
        ApiKind::Twitter,
        &["t1", "t2", "t3", "t4", "t5", "t6", "t7", "t8"],
        Some(evm(true, "ethereum-testnet-sepolia")),
    );
    config.search.bearer_token = Some("test-token".to_string());
    let ledger = RecordingLedger::default();

    let summary = run_once(&config, &Secrets::default(), 1, &ledger)
        .await
        .unwrap();

    assert_eq!(summary.terms.len(), 5);
    assert_eq!(summary.total_mentions, 20);
    assert_eq!(ledger.recorded_instructions().len(), 5);
}

#[tokio::test]
async fn summary_serializes_as_a_flat_object() {
    let server = mock_search_server().await;
    let config = config(&server.uri(), ApiKind::Mock, &["chainlink"], None);
    let ledger = RecordingLedger::default();

    let summary = run_once(&config, &Secrets::default(), 3, &ledger)
        .await
        .unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["totalMentions"], 153);
    assert_eq!(json["reportingOutcome"], "disabled");
    assert!(json["timestamp"].as_str().unwrap().contains('T'));
}
