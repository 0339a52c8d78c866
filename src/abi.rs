// Copyright (C) 2025 The rsk-smoke-tests project.
//
// abi.rs file belongs to the rsk-smoke-tests project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Call-payload building for artifact functions.
//!
//! Covers the argument shapes the smoke contracts use: static 32-byte words
//! for unsigned integers, booleans and addresses. Dynamic types are out of
//! scope for this harness.

use crate::artifact::AbiEntry;
use crate::error::{Result, RpcError};
use sha3::{Digest, Keccak256};

/// Argument value for a contract call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Unsigned integer, any `uint<N>` ABI type.
    Uint(u128),
    /// Boolean.
    Bool(bool),
    /// 20-byte account address.
    Address([u8; 20]),
}

/// Computes Keccak-256 of the input data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// First four bytes of the Keccak-256 hash of a canonical signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Encodes a call to `function` as `0x`-prefixed calldata.
pub fn encode_call(function: &AbiEntry, args: &[Token]) -> Result<String> {
    if args.len() != function.inputs.len() {
        return Err(RpcError::abi(format!(
            "{} takes {} argument(s), got {}",
            function.signature(),
            function.inputs.len(),
            args.len()
        )));
    }

    let mut data = selector(&function.signature()).to_vec();
    for (param, arg) in function.inputs.iter().zip(args) {
        data.extend_from_slice(&encode_word(&param.kind, arg)?);
    }

    Ok(format!("0x{}", hex::encode(data)))
}

fn encode_word(kind: &str, arg: &Token) -> Result<[u8; 32]> {
    let mut word = [0u8; 32];
    match (kind, arg) {
        (k, Token::Uint(value)) if k.starts_with("uint") => {
            word[16..].copy_from_slice(&value.to_be_bytes());
        }
        ("bool", Token::Bool(value)) => {
            word[31] = u8::from(*value);
        }
        ("address", Token::Address(bytes)) => {
            word[12..].copy_from_slice(bytes);
        }
        (k, arg) => {
            return Err(RpcError::abi(format!(
                "cannot encode {arg:?} as ABI type {k:?}"
            )));
        }
    }
    Ok(word)
}

/// Decodes a single unsigned-integer return word.
pub fn decode_uint64(data: &str) -> Result<u64> {
    let hex = data.strip_prefix("0x").unwrap_or(data);
    if hex.is_empty() {
        return Err(RpcError::abi("empty return data".to_string()));
    }
    let trimmed = hex.trim_start_matches('0');
    if trimmed.len() > 16 {
        return Err(RpcError::abi(format!(
            "return value {data:?} does not fit in u64"
        )));
    }
    if trimmed.is_empty() {
        return Ok(0);
    }
    u64::from_str_radix(trimmed, 16)
        .map_err(|e| RpcError::abi(format!("bad return data {data:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ContractArtifact;

    fn artifact() -> ContractArtifact {
        ContractArtifact::parse(
            r#"{
                "abi": [
                    {"type": "function", "name": "get", "inputs": [],
                     "outputs": [{"name": "", "type": "uint256"}], "stateMutability": "view"},
                    {"type": "function", "name": "set",
                     "inputs": [{"name": "_value", "type": "uint256"}],
                     "outputs": [], "stateMutability": "nonpayable"}
                ],
                "bytecode": "0x00"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn selectors_match_known_values() {
        // Canonical solidity selectors for the storage example contract.
        assert_eq!(selector("get()"), [0x6d, 0x4c, 0xe6, 0x3c]);
        assert_eq!(selector("set(uint256)"), [0x60, 0xfe, 0x47, 0xb1]);
    }

    #[test]
    fn encodes_uint_argument_as_padded_word() {
        let artifact = artifact();
        let data = encode_call(artifact.function("set").unwrap(), &[Token::Uint(999)]).unwrap();
        assert_eq!(
            data,
            "0x60fe47b100000000000000000000000000000000000000000000000000000000000003e7"
        );
    }

    #[test]
    fn encodes_zero_argument_call_as_bare_selector() {
        let artifact = artifact();
        let data = encode_call(artifact.function("get").unwrap(), &[]).unwrap();
        assert_eq!(data, "0x6d4ce63c");
    }

    #[test]
    fn argument_count_mismatch_is_rejected() {
        let artifact = artifact();
        assert!(encode_call(artifact.function("set").unwrap(), &[]).is_err());
        assert!(encode_call(artifact.function("get").unwrap(), &[Token::Uint(1)]).is_err());
    }

    #[test]
    fn argument_type_mismatch_is_rejected() {
        let artifact = artifact();
        let result = encode_call(artifact.function("set").unwrap(), &[Token::Bool(true)]);
        assert!(result.is_err());
    }

    #[test]
    fn decodes_uint_return_word() {
        let word = "0x00000000000000000000000000000000000000000000000000000000000003e7";
        assert_eq!(decode_uint64(word).unwrap(), 999);
        assert_eq!(decode_uint64("0x0").unwrap(), 0);
    }

    #[test]
    fn decode_rejects_oversized_and_empty_values() {
        let too_big = format!("0x{}", "ff".repeat(32));
        assert!(decode_uint64(&too_big).is_err());
        assert!(decode_uint64("0x").is_err());
    }
}
