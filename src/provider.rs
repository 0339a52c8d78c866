// Copyright (C) 2025 The rsk-smoke-tests project.
//
// provider.rs file belongs to the rsk-smoke-tests project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The connection handle to the node's JSON-RPC endpoint.

use crate::config::ProviderConfig;
use crate::error::{Result, RpcError};
use crate::models::{parse_quantity, RpcRequest, RpcResponse, TransactionReceipt, TransactionRequest};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;
use url::Url;

/// HTTP JSON-RPC 2.0 provider for a single node endpoint.
///
/// Created once per test run. Immutable after creation except for the
/// polling interval, which is overridden post-construction to match the
/// target node's block time.
pub struct JsonRpcProvider {
    base_address: Url,
    http_client: Client,
    config: ProviderConfig,
}

impl JsonRpcProvider {
    /// Connects to the endpoint described by `config`.
    ///
    /// "Connect" here only builds the handle; the first RPC call is what
    /// actually touches the node.
    pub fn connect(config: ProviderConfig) -> Result<Self> {
        let base_address = Url::parse(&config.rpc_url)?;
        let http_client = Client::builder().timeout(config.request_timeout).build()?;

        debug!(
            url = %base_address,
            chain = %config.chain_name,
            chain_id = config.chain_id,
            "created provider"
        );

        Ok(Self {
            base_address,
            http_client,
            config,
        })
    }

    /// The configuration this handle was built with.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Overrides the receipt polling interval.
    pub fn set_polling_interval(&mut self, interval: Duration) {
        self.config.polling_interval = interval;
    }

    /// Sends a raw JSON-RPC request and returns the `result` member.
    ///
    /// A `null` result is returned as `Value::Null`; an `error` member is
    /// surfaced as [`RpcError::Rpc`].
    pub async fn send(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        let request = RpcRequest::new(method, params);
        debug!(method, "sending JSON-RPC request");

        let response = self
            .http_client
            .post(self.base_address.clone())
            .json(&request)
            .send()
            .await?;

        let content = response.text().await?;
        let response: RpcResponse = serde_json::from_str(&content)?;

        if let Some(error) = response.error {
            return Err(RpcError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        Ok(response.result.unwrap_or(Value::Null))
    }

    /// Queries `eth_chainId` and parses the hexadecimal response.
    pub async fn chain_id(&self) -> Result<u64> {
        let result = self.send("eth_chainId", vec![]).await?;
        let hex = result
            .as_str()
            .ok_or_else(|| RpcError::invalid_response("eth_chainId: expected string"))?;
        parse_quantity(hex)
    }

    /// Verifies the node's reported chain id against the declared one.
    ///
    /// Downstream operations are not guaranteed meaningful on a mismatch,
    /// so this must fail loudly rather than pass silently.
    pub async fn ensure_declared_chain_id(&self) -> Result<u64> {
        let actual = self.chain_id().await?;
        if actual != self.config.chain_id {
            return Err(RpcError::ChainIdMismatch {
                expected: self.config.chain_id,
                actual,
            });
        }
        Ok(actual)
    }

    /// Queries the current block height.
    pub async fn block_number(&self) -> Result<u64> {
        let result = self.send("eth_blockNumber", vec![]).await?;
        let hex = result
            .as_str()
            .ok_or_else(|| RpcError::invalid_response("eth_blockNumber: expected string"))?;
        parse_quantity(hex)
    }

    /// Forces the regtest node to mine one block immediately.
    pub async fn evm_mine(&self) -> Result<()> {
        self.send("evm_mine", vec![]).await?;
        Ok(())
    }

    /// Lists the accounts the node controls.
    pub async fn accounts(&self) -> Result<Vec<String>> {
        let result = self.send("eth_accounts", vec![]).await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Submits a transaction for node-side signing and returns its hash.
    pub async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String> {
        let result = self
            .send("eth_sendTransaction", vec![serde_json::to_value(tx)?])
            .await?;
        result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| RpcError::invalid_response("eth_sendTransaction: expected tx hash"))
    }

    /// Executes a read-only call against the latest block.
    pub async fn call(&self, tx: &TransactionRequest) -> Result<String> {
        let result = self
            .send("eth_call", vec![serde_json::to_value(tx)?, json!("latest")])
            .await?;
        result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| RpcError::invalid_response("eth_call: expected return data"))
    }

    /// Fetches the receipt for `tx_hash`, normalized per the configured
    /// field substitutions. `None` while the transaction is pending.
    pub async fn get_transaction_receipt(
        &self,
        tx_hash: &str,
    ) -> Result<Option<TransactionReceipt>> {
        let result = self
            .send("eth_getTransactionReceipt", vec![json!(tx_hash)])
            .await?;
        if result.is_null() {
            return Ok(None);
        }
        TransactionReceipt::from_value(result, &self.config.receipt_substitutions).map(Some)
    }

    /// Polls for the receipt of `tx_hash` until `timeout` elapses.
    pub async fn wait_for_receipt(
        &self,
        tx_hash: &str,
        timeout: Duration,
    ) -> Result<TransactionReceipt> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(receipt) = self.get_transaction_receipt(tx_hash).await? {
                return Ok(receipt);
            }
            if Instant::now() >= deadline {
                return Err(RpcError::ReceiptTimeout(timeout));
            }
            tokio::time::sleep(self.config.polling_interval).await;
        }
    }
}
