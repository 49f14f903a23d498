//! Register map of the ChaCha pipeline AXI4-Lite slave.
//!
//! All registers are 32 bit wide, little endian, at 4-byte-aligned offsets
//! from the configured base address. Multi-word regions are laid out as
//! consecutive words, so element `i` of a region lives at `region + 4 * i`.

/// Control register. Bit 0 drives the start line.
pub const CTRL: usize = 0x00;

/// Status register. Bit 0 is the done flag.
pub const STATUS: usize = 0x04;

/// Initial block counter.
pub const COUNTER: usize = 0x08;

/// First of the 3 nonce words.
pub const NONCE_BASE: usize = 0x0c;

/// First of the 8 key words.
pub const KEY_BASE: usize = 0x18;

/// First of the 16 plaintext words.
pub const PLAIN_BASE: usize = 0x38;

/// First of the 16 ciphertext words.
pub const CIPHER_BASE: usize = 0x78;

/// Number of nonce words.
pub const NONCE_WORDS: usize = 3;

/// Number of key words.
pub const KEY_WORDS: usize = 8;

/// Number of words in a plaintext or ciphertext block.
pub const BLOCK_WORDS: usize = 16;

/// Done flag in the status register.
pub const STATUS_DONE: u32 = 1 << 0;

/// Offset of nonce word `i`. Valid for `i < NONCE_WORDS`.
pub const fn nonce_word(i: usize) -> usize {
    NONCE_BASE + i * 4
}

/// Offset of key word `i`. Valid for `i < KEY_WORDS`.
pub const fn key_word(i: usize) -> usize {
    KEY_BASE + i * 4
}

/// Offset of plaintext word `i`. Valid for `i < BLOCK_WORDS`.
pub const fn plain_word(i: usize) -> usize {
    PLAIN_BASE + i * 4
}

/// Offset of ciphertext word `i`. Valid for `i < BLOCK_WORDS`.
pub const fn cipher_word(i: usize) -> usize {
    CIPHER_BASE + i * 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_are_consecutive_and_do_not_overlap() {
        assert_eq!(STATUS, CTRL + 4);
        assert_eq!(COUNTER, STATUS + 4);
        assert_eq!(NONCE_BASE, COUNTER + 4);
        assert_eq!(KEY_BASE, nonce_word(NONCE_WORDS));
        assert_eq!(PLAIN_BASE, key_word(KEY_WORDS));
        assert_eq!(CIPHER_BASE, plain_word(BLOCK_WORDS));
    }

    #[test]
    fn element_offsets_step_by_one_word() {
        assert_eq!(key_word(0), KEY_BASE);
        assert_eq!(key_word(7), KEY_BASE + 28);
        assert_eq!(nonce_word(2), NONCE_BASE + 8);
        assert_eq!(plain_word(15), PLAIN_BASE + 60);
        assert_eq!(cipher_word(15), CIPHER_BASE + 60);
    }
}
