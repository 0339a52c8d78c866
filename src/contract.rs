// Copyright (C) 2025 The rsk-smoke-tests project.
//
// contract.rs file belongs to the rsk-smoke-tests project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Contract deployment and interaction through the provider.

use crate::abi::{self, Token};
use crate::artifact::ContractArtifact;
use crate::config::{DEFAULT_CASE_TIMEOUT, EXTENDED_CASE_TIMEOUT};
use crate::error::{Result, RpcError};
use crate::models::{TransactionReceipt, TransactionRequest};
use crate::signer::Signer;
use tracing::info;

/// Deployable contract template: artifact bound to a signer.
pub struct ContractFactory {
    artifact: ContractArtifact,
    signer: Signer,
}

impl ContractFactory {
    /// Binds `artifact` to the account that will deploy it.
    pub fn new(artifact: ContractArtifact, signer: Signer) -> Self {
        Self { artifact, signer }
    }

    /// Deploys the contract with no constructor arguments and awaits
    /// on-chain confirmation.
    pub async fn deploy(&self) -> Result<DeployedContract> {
        let tx = TransactionRequest {
            data: Some(self.artifact.bytecode.clone()),
            ..Default::default()
        };

        let tx_hash = self.signer.send_transaction(tx).await?;
        info!(%tx_hash, "submitted deployment transaction");

        let receipt = self
            .signer
            .provider()
            .wait_for_receipt(&tx_hash, EXTENDED_CASE_TIMEOUT)
            .await?;

        let address = receipt.contract_address.clone().ok_or_else(|| {
            RpcError::invalid_response("deployment receipt carries no contract address")
        })?;
        info!(%address, "contract deployed");

        Ok(DeployedContract {
            address,
            artifact: self.artifact.clone(),
            signer: self.signer.clone(),
        })
    }
}

/// Handle to a deployed contract.
///
/// Exposes the artifact's functions as query (read-only) and command
/// (state-mutating) operations. No explicit teardown; the handle just
/// goes out of scope.
pub struct DeployedContract {
    address: String,
    artifact: ContractArtifact,
    signer: Signer,
}

impl DeployedContract {
    /// On-chain address of the deployed instance.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Read-only accessor call; returns the raw return data.
    pub async fn query(&self, function: &str, args: &[Token]) -> Result<String> {
        let entry = self.artifact.function(function)?;
        let tx = TransactionRequest {
            to: Some(self.address.clone()),
            data: Some(abi::encode_call(entry, args)?),
            ..Default::default()
        };
        let value = self.signer.provider().call(&tx).await?;
        info!(function, %value, "contract query returned");
        Ok(value)
    }

    /// Read-only accessor call decoded as an unsigned integer.
    pub async fn query_uint(&self, function: &str, args: &[Token]) -> Result<u64> {
        let value = self.query(function, args).await?;
        abi::decode_uint64(&value)
    }

    /// State-mutating call; awaits the transaction receipt.
    pub async fn command(&self, function: &str, args: &[Token]) -> Result<TransactionReceipt> {
        let entry = self.artifact.function(function)?;
        let tx = TransactionRequest {
            to: Some(self.address.clone()),
            data: Some(abi::encode_call(entry, args)?),
            ..Default::default()
        };
        let tx_hash = self.signer.send_transaction(tx).await?;
        let receipt = self
            .signer
            .provider()
            .wait_for_receipt(&tx_hash, DEFAULT_CASE_TIMEOUT)
            .await?;
        info!(function, %tx_hash, "contract command confirmed");
        Ok(receipt)
    }
}
