// Copyright (C) 2025 The rsk-smoke-tests project.
//
// artifact.rs file belongs to the rsk-smoke-tests project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Static contract artifact: interface definition plus deploy bytecode.

use crate::error::{Result, RpcError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Compiled contract descriptor loaded from a JSON artifact file.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    /// Ordered interface definition.
    pub abi: Vec<AbiEntry>,

    /// Deploy bytecode as a hex string.
    pub bytecode: String,
}

/// One entry of the interface definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiEntry {
    /// Entry kind: `function`, `constructor`, `event`, ...
    #[serde(rename = "type")]
    pub kind: String,

    /// Entry name; constructors have none.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub inputs: Vec<AbiParam>,

    #[serde(default)]
    pub outputs: Vec<AbiParam>,

    #[serde(default)]
    pub state_mutability: Option<String>,
}

/// Parameter of an interface entry.
#[derive(Debug, Clone, Deserialize)]
pub struct AbiParam {
    #[serde(default)]
    pub name: String,

    /// Canonical type name, e.g. `uint256`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl ContractArtifact {
    /// Loads and parses an artifact file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses an artifact from its JSON text.
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Looks up a function entry by name.
    pub fn function(&self, name: &str) -> Result<&AbiEntry> {
        self.abi
            .iter()
            .find(|entry| entry.kind == "function" && entry.name.as_deref() == Some(name))
            .ok_or_else(|| RpcError::abi(format!("no function {name:?} in artifact abi")))
    }
}

impl AbiEntry {
    /// Canonical signature, e.g. `set(uint256)`.
    pub fn signature(&self) -> String {
        let name = self.name.as_deref().unwrap_or_default();
        let types: Vec<&str> = self.inputs.iter().map(|p| p.kind.as_str()).collect();
        format!("{}({})", name, types.join(","))
    }
}
