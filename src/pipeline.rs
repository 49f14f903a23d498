//! HAL interface to the ChaCha20 pipeline accelerator.
//!
//! The accelerator transforms one 64 byte block per handshake: the driver
//! loads key, nonce and counter once per session, writes a plaintext block,
//! pulses the start line and polls the status register until the done bit
//! rises, then reads the ciphertext block back.

use core::sync::atomic::{compiler_fence, Ordering};

use void::Void;

use crate::block::Block;
use crate::bus::RegisterBus;
use crate::poll::poll_until;
use crate::regs;

/// Default number of status polls before a handshake is declared timed out.
///
/// Chosen empirically to bound worst case wait without a hardware timer;
/// tune with [`ChaChaPipeline::set_poll_budget`] for a slower bus.
pub const DEFAULT_POLL_BUDGET: u32 = 1_000_000;

/// Key, nonce and initial block counter configured into the device.
///
/// Set once per session; block transforms never modify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CipherState {
    /// 256 bit key as 8 little endian words.
    pub key: [u32; regs::KEY_WORDS],
    /// 96 bit nonce as 3 little endian words.
    pub nonce: [u32; regs::NONCE_WORDS],
    /// Initial block counter, conventionally 1.
    pub counter: u32,
}

impl CipherState {
    /// Packs key and nonce bytes into words, little endian.
    pub fn from_bytes(key: &[u8; 32], nonce: &[u8; 12], counter: u32) -> Self {
        let mut state = Self {
            key: [0; regs::KEY_WORDS],
            nonce: [0; regs::NONCE_WORDS],
            counter,
        };
        for (word, chunk) in state.key.iter_mut().zip(key.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        for (word, chunk) in state.nonce.iter_mut().zip(nonce.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        state
    }
}

impl Default for CipherState {
    fn default() -> Self {
        Self {
            key: [0; regs::KEY_WORDS],
            nonce: [0; regs::NONCE_WORDS],
            counter: 1,
        }
    }
}

/// Handshake error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The done bit never rose within the poll budget. Carries the last
    /// status value read; the ciphertext registers were not touched.
    Timeout {
        /// Last value read from the status register.
        status: u32,
    },
}

/// Driver for one ChaCha20 pipeline instance.
///
/// Owns the register window exclusively; every operation takes `&mut self`,
/// so a session shared between contexts must be serialized around whole
/// transforms by the caller. The device has no request identifiers and
/// interleaving two transforms corrupts both.
pub struct ChaChaPipeline<B> {
    bus: B,
    poll_budget: u32,
}

impl<B> ChaChaPipeline<B>
where
    B: RegisterBus,
{
    /// Takes ownership of the register window.
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            poll_budget: DEFAULT_POLL_BUDGET,
        }
    }

    /// Sets the status poll budget for subsequent handshakes.
    ///
    /// A budget of zero is clamped to one; a handshake always reads the
    /// status register at least once.
    pub fn set_poll_budget(&mut self, attempts: u32) {
        self.poll_budget = attempts.max(1);
    }

    /// Loads key, nonce and counter into the device.
    ///
    /// Issues the 8 key writes, then the 3 nonce writes, then the counter
    /// write. The counter goes last; the device may latch configuration on
    /// any write. Blind configuration, nothing is read back.
    pub fn load(&mut self, state: &CipherState) {
        for (i, &word) in state.key.iter().enumerate() {
            self.bus.write_register(regs::key_word(i), word);
        }
        for (i, &word) in state.nonce.iter().enumerate() {
            self.bus.write_register(regs::nonce_word(i), word);
        }
        self.bus.write_register(regs::COUNTER, state.counter);
    }

    /// Writes a plaintext block into the device, words 0 through 15 in
    /// index order. Must complete before the start pulse.
    pub fn submit_plaintext(&mut self, block: &Block) {
        for (i, &word) in block.as_words().iter().enumerate() {
            self.bus.write_register(regs::plain_word(i), word);
        }
    }

    /// Produces one rising then falling edge on the start line.
    ///
    /// The leading write of 0 drives the line low even if a previous cycle
    /// left it in an indeterminate state.
    pub fn pulse_start(&mut self) {
        // "Preceding reads and writes cannot be moved past subsequent writes."
        compiler_fence(Ordering::Release);

        self.bus.write_register(regs::CTRL, 0);
        self.bus.write_register(regs::CTRL, 1);
        self.bus.write_register(regs::CTRL, 0);
    }

    /// Reads the status register once. Bit 0 is the done flag.
    pub fn read_status(&mut self) -> u32 {
        self.bus.read_register(regs::STATUS)
    }

    /// Checks the done bit once, without blocking.
    ///
    /// To block until the transform has finished, use the `block!` macro
    /// from the `nb` crate, or [`wait_done`](Self::wait_done) for a bounded
    /// wait.
    pub fn poll_done(&mut self) -> nb::Result<(), Void> {
        if self.read_status() & regs::STATUS_DONE == 0 {
            return Err(nb::Error::WouldBlock);
        }
        Ok(())
    }

    /// Busy-polls the status register until the done bit rises or the poll
    /// budget is exhausted.
    ///
    /// Returns the final status value on completion. On timeout the last
    /// observed status is carried in the error and the ciphertext region
    /// must not be read.
    pub fn wait_done(&mut self) -> Result<u32, Error> {
        let bus = &mut self.bus;
        let polled = poll_until(
            self.poll_budget,
            || bus.read_register(regs::STATUS),
            |status| status & regs::STATUS_DONE != 0,
        );
        match polled {
            Ok(status) => {
                // "Subsequent reads cannot be moved ahead of preceding reads."
                compiler_fence(Ordering::Acquire);
                Ok(status)
            }
            Err(status) => Err(Error::Timeout { status }),
        }
    }

    /// Reads the ciphertext block out of the device, words 0 through 15 in
    /// index order.
    ///
    /// Only meaningful after [`wait_done`](Self::wait_done) reports
    /// completion; reading earlier yields stale data.
    pub fn read_ciphertext(&mut self) -> Block {
        let mut words = [0; regs::BLOCK_WORDS];
        for (i, word) in words.iter_mut().enumerate() {
            *word = self.bus.read_register(regs::cipher_word(i));
        }
        Block::from(words)
    }

    /// Runs one full handshake: submit the plaintext, pulse start, wait for
    /// the done bit, read the ciphertext back.
    ///
    /// A timeout is recoverable; the session stays configured and the next
    /// transform simply re-pulses.
    pub fn encrypt_block(&mut self, plaintext: &Block) -> Result<Block, Error> {
        self.submit_plaintext(plaintext);
        self.pulse_start();
        self.wait_done()?;
        Ok(self.read_ciphertext())
    }

    /// Encrypts one text message of up to 64 bytes.
    ///
    /// Returns `None` for an empty message without touching the device;
    /// longer input is truncated to its first 64 bytes by the block codec.
    pub fn encrypt_message(&mut self, msg: &[u8]) -> Option<Result<Block, Error>> {
        if msg.is_empty() {
            return None;
        }
        Some(self.encrypt_block(&Block::from_bytes(msg)))
    }

    /// Releases the register window.
    pub fn free(self) -> B {
        self.bus
    }
}
