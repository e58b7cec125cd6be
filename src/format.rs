// src/format.rs
//! Display formatting and unit conversion for addresses and token amounts.
//!
//! Conversion failures never propagate: every helper falls back to a safe
//! default ("0", zero, or false) and logs the cause.

use std::str::FromStr;

use anyhow::{Context, Result};
use ethers::types::{Address, U256};
use ethers::utils::{format_ether, format_units, parse_ether, parse_units};
use rust_decimal::Decimal;
use tracing::warn;

pub const DEFAULT_ADDRESS_START_LEN: usize = 6;
pub const DEFAULT_ADDRESS_END_LEN: usize = 4;
pub const DEFAULT_DISPLAY_DECIMALS: u32 = 4;

/// Truncate an address for display with the default 6/4 split,
/// e.g. `0x742d...f44e`.
pub fn format_address(address: &str) -> String {
    format_address_with(address, DEFAULT_ADDRESS_START_LEN, DEFAULT_ADDRESS_END_LEN)
}

/// Truncate an address for display. Inputs no longer than
/// `start_len + end_len` pass through unchanged; empty input stays empty.
pub fn format_address_with(address: &str, start_len: usize, end_len: usize) -> String {
    if address.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= start_len + end_len {
        return address.to_string();
    }
    let start: String = chars[..start_len].iter().collect();
    let end: String = chars[chars.len() - end_len..].iter().collect();
    format!("{}...{}", start, end)
}

/// Format a base-unit amount for display with the default four display
/// decimals.
pub fn format_token_amount(amount: U256, decimals: u32) -> String {
    format_token_amount_with(amount, decimals, DEFAULT_DISPLAY_DECIMALS)
}

/// Format a base-unit amount for display.
///
/// Policy: exact zero renders `"0"`; anything below 0.0001 renders
/// `"< 0.0001"`; below one, `display_decimals` fixed places; below a
/// thousand, two fixed places; everything else as a thousands-grouped
/// integer.
pub fn format_token_amount_with(amount: U256, decimals: u32, display_decimals: u32) -> String {
    match token_amount_display(amount, decimals, display_decimals) {
        Ok(text) => text,
        Err(err) => {
            warn!(%err, %amount, decimals, "failed to format token amount");
            "0".to_string()
        }
    }
}

fn token_amount_display(amount: U256, decimals: u32, display_decimals: u32) -> Result<String> {
    if amount.is_zero() {
        return Ok("0".to_string());
    }

    let formatted = format_units(amount, decimals).context("base-unit conversion failed")?;
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (formatted.as_str(), ""),
    };

    if int_part == "0" {
        let leading_zeros = frac_part.chars().take_while(|c| *c == '0').count();
        if leading_zeros >= 4 {
            return Ok("< 0.0001".to_string());
        }
        let value = Decimal::from_str(&formatted).context("display conversion failed")?;
        let rounded = value.round_dp(display_decimals);
        return Ok(format!("{:.prec$}", rounded, prec = display_decimals as usize));
    }

    if int_part.len() <= 3 {
        let value = Decimal::from_str(&formatted).context("display conversion failed")?;
        return Ok(format!("{:.2}", value.round_dp(2)));
    }

    Ok(group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Parse a human-readable decimal amount into base units. Invalid input
/// yields zero.
pub fn parse_token_amount(amount: &str, decimals: u32) -> U256 {
    match parse_units(amount, decimals) {
        Ok(value) => value.into(),
        Err(err) => {
            warn!(%err, amount, decimals, "failed to parse token amount");
            U256::zero()
        }
    }
}

/// Address validity as defined by the chain library's parser.
pub fn is_valid_address(address: &str) -> bool {
    Address::from_str(address).is_ok()
}

/// Convert a decimal wei string to an ether string. Invalid input yields
/// `"0"`.
pub fn wei_to_ether(wei: &str) -> String {
    match U256::from_dec_str(wei) {
        Ok(value) => format_ether(value),
        Err(err) => {
            warn!(%err, wei, "failed to convert wei to ether");
            "0".to_string()
        }
    }
}

/// Convert an ether string to wei. Invalid input yields zero.
pub fn ether_to_wei(ether: &str) -> U256 {
    match parse_ether(ether) {
        Ok(value) => value,
        Err(err) => {
            warn!(%err, ether, "failed to convert ether to wei");
            U256::zero()
        }
    }
}
