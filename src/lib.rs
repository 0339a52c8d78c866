// Copyright (C) 2025 The rsk-smoke-tests project.
//
// lib.rs file belongs to the rsk-smoke-tests project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! RSKj regtest smoke-test harness
//!
//! This crate provides the thin JSON-RPC client surface needed to smoke-test
//! an RSKj node in regtest mode: a provider over HTTP JSON-RPC 2.0, a signer
//! capability bound to a node account, contract artifact loading, and the
//! deploy/query/command contract handles. The smoke-test sequences themselves
//! live under `tests/`.

pub mod abi;
pub mod artifact;
pub mod config;
pub mod contract;
pub mod error;
pub mod models;
pub mod provider;
pub mod signer;

pub use abi::Token;
pub use artifact::ContractArtifact;
pub use config::ProviderConfig;
pub use contract::{ContractFactory, DeployedContract};
pub use error::{Result, RpcError};
pub use provider::JsonRpcProvider;
pub use signer::Signer;

// Re-export commonly used wire types
pub use models::{
    RpcRequest, RpcResponse, RpcResponseError, TransactionReceipt, TransactionRequest,
};
