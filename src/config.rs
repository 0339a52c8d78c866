// Copyright (C) 2025 The rsk-smoke-tests project.
//
// config.rs file belongs to the rsk-smoke-tests project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Connection configuration for the regtest node under test.
//!
//! These are test-tuning values for a local RSKj regtest instance, not
//! inferred business rules; targeting a different network means changing
//! this record, not the provider.

use std::time::Duration;

/// Default RSKj regtest JSON-RPC endpoint.
pub const REGTEST_RPC_URL: &str = "http://127.0.0.1:4444";

/// Declared network name for the regtest chain.
pub const REGTEST_CHAIN_NAME: &str = "rsk_regtest";

/// Chain id RSKj reports in regtest mode.
pub const REGTEST_CHAIN_ID: u64 = 33;

/// Receipt polling interval matching the regtest block cadence. RSK blocks
/// arrive half as often as Ethereum's, so the usual 4s default is doubled.
pub const REGTEST_POLLING_INTERVAL: Duration = Duration::from_secs(8);

/// Per-request budget for ordinary RPC calls.
pub const DEFAULT_CASE_TIMEOUT: Duration = Duration::from_secs(15);

/// Budget for contract deployment confirmation.
pub const EXTENDED_CASE_TIMEOUT: Duration = Duration::from_secs(45);

/// Configuration record passed into the provider constructor.
///
/// `receipt_substitutions` is the response-normalization step applied to
/// every receipt payload before parsing: for each `(target, source)` pair
/// the value of `source` replaces `target`. RSKj returns a pre-Byzantium
/// `root` field with a shape the receipt model rejects, so the regtest
/// default maps `root` from `logsBloom` (the same workaround ethers.js
/// applied in PR #952).
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Declared network name.
    pub chain_name: String,

    /// Declared chain identifier; validated against the node.
    pub chain_id: u64,

    /// Interval between receipt polls.
    pub polling_interval: Duration,

    /// Client-level timeout applied to every HTTP request.
    pub request_timeout: Duration,

    /// Receipt field substitutions, `(target, source)` pairs.
    pub receipt_substitutions: Vec<(String, String)>,
}

impl ProviderConfig {
    /// Configuration for a local RSKj regtest node.
    pub fn regtest() -> Self {
        Self::default()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            rpc_url: REGTEST_RPC_URL.to_string(),
            chain_name: REGTEST_CHAIN_NAME.to_string(),
            chain_id: REGTEST_CHAIN_ID,
            polling_interval: REGTEST_POLLING_INTERVAL,
            request_timeout: DEFAULT_CASE_TIMEOUT,
            receipt_substitutions: vec![("root".to_string(), "logsBloom".to_string())],
        }
    }
}
