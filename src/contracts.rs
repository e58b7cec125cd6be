// src/contracts.rs
//! Per-network contract deployments and the ABIs shared across them.

use ethers::abi::{parse_abi, Abi};
use once_cell::sync::Lazy;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("Contract {0} not found")]
    UnknownContract(String),
    #[error("Contract {0} not deployed on chain {1}")]
    NotDeployed(String, u64),
}

/// Deployment table: contract name -> (chain id, address).
/// Example entries; replace with the host application's contracts.
const CONTRACT_ADDRESSES: &[(&str, &[(u64, &str)])] = &[(
    "EXAMPLE_CONTRACT",
    &[
        (84532, "0x0000000000000000000000000000000000000000"),
        (8453, "0x0000000000000000000000000000000000000000"),
    ],
)];

/// Address of a named contract on the given chain.
pub fn contract_address(name: &str, chain_id: u64) -> Result<&'static str, ContractError> {
    let (_, deployments) = CONTRACT_ADDRESSES
        .iter()
        .find(|(contract, _)| *contract == name)
        .ok_or_else(|| ContractError::UnknownContract(name.to_string()))?;

    deployments
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, address)| *address)
        .ok_or_else(|| ContractError::NotDeployed(name.to_string(), chain_id))
}

pub fn is_contract_deployed(name: &str, chain_id: u64) -> bool {
    contract_address(name, chain_id).is_ok()
}

/// ERC-20 fragments in human-readable form.
pub const ERC20_ABI: &[&str] = &[
    "function name() view returns (string)",
    "function symbol() view returns (string)",
    "function decimals() view returns (uint8)",
    "function totalSupply() view returns (uint256)",
    "function balanceOf(address owner) view returns (uint256)",
    "function transfer(address to, uint256 amount) returns (bool)",
    "function allowance(address owner, address spender) view returns (uint256)",
    "function approve(address spender, uint256 amount) returns (bool)",
    "function transferFrom(address from, address to, uint256 amount) returns (bool)",
    "event Transfer(address indexed from, address indexed to, uint256 value)",
    "event Approval(address indexed owner, address indexed spender, uint256 value)",
];

/// ERC-721 fragments in human-readable form.
pub const ERC721_ABI: &[&str] = &[
    "function name() view returns (string)",
    "function symbol() view returns (string)",
    "function tokenURI(uint256 tokenId) view returns (string)",
    "function ownerOf(uint256 tokenId) view returns (address)",
    "function balanceOf(address owner) view returns (uint256)",
    "function safeTransferFrom(address from, address to, uint256 tokenId)",
    "function transferFrom(address from, address to, uint256 tokenId)",
    "function approve(address to, uint256 tokenId)",
    "function setApprovalForAll(address operator, bool approved)",
    "function getApproved(uint256 tokenId) view returns (address)",
    "function isApprovedForAll(address owner, address operator) view returns (bool)",
    "event Transfer(address indexed from, address indexed to, uint256 indexed tokenId)",
    "event Approval(address indexed owner, address indexed approved, uint256 indexed tokenId)",
    "event ApprovalForAll(address indexed owner, address indexed operator, bool approved)",
];

pub static ERC20: Lazy<Abi> =
    Lazy::new(|| parse_abi(ERC20_ABI).expect("Hardcoded ERC-20 ABI should always parse"));

pub static ERC721: Lazy<Abi> =
    Lazy::new(|| parse_abi(ERC721_ABI).expect("Hardcoded ERC-721 ABI should always parse"));
