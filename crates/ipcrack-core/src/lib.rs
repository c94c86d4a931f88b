//! Core search logic for the ipcrack IPv4 preimage brute-forcer.
//!
//! This crate provides pure Rust implementations of:
//! - Allocation-free dotted-decimal encoding of 32-bit addresses
//! - A single-block SHA-256 compression engine for short messages
//! - Target digest matching against raw SHA-256 state words
//! - Static partitioning of the address space across workers
//! - The per-worker scan loop with cooperative cancellation

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod encode;
pub mod partition;
pub mod search;
pub mod sha256;
pub mod table;
pub mod target;

pub use encode::{address_text, Encoder};
pub use partition::{partition, ADDRESS_SPACE};
pub use search::{search_range, Match};
pub use sha256::{compress_block, state_to_bytes, Backend};
pub use target::{Target, TargetError};
