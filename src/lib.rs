//! HAL for a ChaCha20 pipeline accelerator exposed as an AXI4-Lite slave.
//!
//! The device encrypts one 64 byte block per request through a simple
//! register handshake: load key/nonce/counter, write the plaintext block,
//! pulse the start line, poll the done bit under a bounded budget, read the
//! ciphertext block back. This crate drives that handshake; the cipher
//! itself is opaque hardware.
//!
//! # Example
//!
//! ```no_run
//! use chacha_pipeline_hal::{AxiLite, ChaChaPipeline, CipherState};
//!
//! // Base address of the slave's register window, from the block design.
//! let bus = unsafe { AxiLite::new(0x43C0_0000) };
//! let mut chacha = ChaChaPipeline::new(bus);
//!
//! chacha.load(&CipherState::from_bytes(&[0; 32], &[0; 12], 1));
//!
//! if let Some(result) = chacha.encrypt_message(b"hello") {
//!     match result {
//!         // Render with `{}`: 8 hex digits per word, 4 words per line.
//!         Ok(_ciphertext) => {}
//!         // Recoverable; submit the next message.
//!         Err(_timeout) => {}
//!     }
//! }
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

pub mod block;
pub mod bus;
pub mod pipeline;
pub mod poll;
pub mod regs;

pub use crate::block::Block;
pub use crate::bus::{AxiLite, RegisterBus};
pub use crate::pipeline::{ChaChaPipeline, CipherState, Error};
