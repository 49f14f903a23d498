//! Fixed 64 byte block exchanged with the accelerator.

use core::fmt;

use crate::regs::BLOCK_WORDS;

/// Size of one block in bytes.
pub const BLOCK_BYTES: usize = 64;

/// One 64 byte block, packed as 16 little endian words.
///
/// Byte `i` of the message occupies bits `8 * (i % 4)` and up of word
/// `i / 4`, so `b"AB"` packs into word 0 as `0x0000_4241`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Block([u32; BLOCK_WORDS]);

impl Block {
    /// Packs a message into a block.
    ///
    /// Input shorter than 64 bytes is zero padded; input longer than 64
    /// bytes is silently truncated to its first 64 bytes.
    pub fn from_bytes(msg: &[u8]) -> Self {
        let mut words = [0; BLOCK_WORDS];
        let len = msg.len().min(BLOCK_BYTES);
        for (i, &byte) in msg[..len].iter().enumerate() {
            words[i / 4] |= u32::from(byte) << ((i % 4) * 8);
        }
        Self(words)
    }

    /// Unpacks the block back into bytes.
    pub fn to_bytes(&self) -> [u8; BLOCK_BYTES] {
        let mut bytes = [0; BLOCK_BYTES];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = (self.0[i / 4] >> ((i % 4) * 8)) as u8;
        }
        bytes
    }

    /// The 16 words of the block, in index order.
    pub fn as_words(&self) -> &[u32; BLOCK_WORDS] {
        &self.0
    }
}

impl From<[u32; BLOCK_WORDS]> for Block {
    fn from(words: [u32; BLOCK_WORDS]) -> Self {
        Self(words)
    }
}

/// Renders the block as 8 hex digits per word, 4 words per line.
impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.0.chunks(4).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for (j, word) in line.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:08x}", word)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::format;
    use std::vec::Vec;

    use super::*;

    #[test]
    fn bytes_round_trip_for_every_length_up_to_a_block() {
        for len in 0..=BLOCK_BYTES {
            let msg: Vec<u8> = (0..len).map(|i| (i * 7 + 3) as u8).collect();
            let bytes = Block::from_bytes(&msg).to_bytes();
            assert_eq!(&bytes[..len], &msg[..], "length {}", len);
            assert!(bytes[len..].iter().all(|&b| b == 0), "length {}", len);
        }
    }

    #[test]
    fn two_byte_message_packs_into_the_low_half_of_word_zero() {
        let block = Block::from_bytes(b"AB");
        assert_eq!(block.as_words()[0], 0x0000_4241);
        assert!(block.as_words()[1..].iter().all(|&w| w == 0));
    }

    #[test]
    fn oversized_input_is_truncated_to_the_first_block() {
        let long: Vec<u8> = (0..=64).map(|i| i as u8).collect();
        assert_eq!(Block::from_bytes(&long), Block::from_bytes(&long[..64]));
        assert_ne!(Block::from_bytes(&long), Block::from_bytes(&long[..63]));
    }

    #[test]
    fn empty_input_packs_to_the_zero_block() {
        assert_eq!(Block::from_bytes(b""), Block::from([0; BLOCK_WORDS]));
    }

    #[test]
    fn display_groups_four_words_per_line() {
        let block = Block::from([
            0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 1,
        ]);
        let rendered = format!("{}", block);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "61707865 3320646e 79622d32 6b206574");
        assert_eq!(lines[3], "00000000 00000000 00000000 00000001");
    }
}
