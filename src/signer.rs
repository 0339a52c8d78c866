// Copyright (C) 2025 The rsk-smoke-tests project.
//
// signer.rs file belongs to the rsk-smoke-tests project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Signer capability bound to a node-controlled account.

use crate::error::{Result, RpcError};
use crate::models::TransactionRequest;
use crate::provider::JsonRpcProvider;
use std::sync::Arc;

/// Authorization capability for state-changing calls.
///
/// Regtest accounts are unlocked on the node, so signing happens node-side;
/// this handle only pins the `from` address, the way
/// `provider.getSigner(index)` does in ethers.js.
#[derive(Clone)]
pub struct Signer {
    provider: Arc<JsonRpcProvider>,
    address: String,
}

impl Signer {
    /// Resolves the account at `index` from the node's account list.
    pub async fn from_account_index(
        provider: Arc<JsonRpcProvider>,
        index: usize,
    ) -> Result<Self> {
        let accounts = provider.accounts().await?;
        let address = accounts.get(index).cloned().ok_or_else(|| {
            RpcError::invalid_response(format!(
                "node exposes {} accounts, no account at index {index}",
                accounts.len()
            ))
        })?;
        Ok(Self { provider, address })
    }

    /// The account address this signer authorizes for.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The provider the signer was obtained from.
    pub fn provider(&self) -> &Arc<JsonRpcProvider> {
        &self.provider
    }

    /// Submits `tx` from this signer's account.
    pub async fn send_transaction(&self, mut tx: TransactionRequest) -> Result<String> {
        tx.from = Some(self.address.clone());
        self.provider.send_transaction(&tx).await
    }
}
