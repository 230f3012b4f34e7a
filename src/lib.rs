//! Columnar - Block Transposition Cipher
//!
//! Rearranges the characters of a message by writing them into a fixed
//! `rows x cols` grid row by row and reading them back column by column.
//! Decryption writes column by column and reads row by row.
//!
//! ## Transform
//!
//! ```text
//! Encrypt: Input → Segment → Fill (row-major, pad 'A') → Read (column-major) → Output
//! Decrypt: Input → Segment → Fill (column-major) → Read (row-major) → Strip trailing 'A' → Output
//! ```
//!
//! - **Segment**: split into blocks of `rows * cols` characters
//! - **Fill**: write one block into the grid, padding the last block with the filler
//! - **Read**: concatenate the grid contents in the opposite order
//! - **Strip**: drop trailing filler from the reassembled plaintext (once, not per block)
//!
//! Characters are Unicode scalar values; lengths and block sizes count
//! `char`s, not bytes.
//!
//! The shape is the only key. Decrypting with a different shape than was
//! used for encryption produces scrambled text rather than an error, and a
//! plaintext that really ends in `'A'` loses those characters on the way
//! back.
//!
//! ## Example
//!
//! ```
//! use columnar::TranspositionCipher;
//!
//! let mut cipher = TranspositionCipher::new(2, 3).unwrap();
//!
//! let encrypted = cipher.encrypt_message("HELLO");
//! assert_eq!(encrypted, "HLEOLA");
//!
//! let decrypted = cipher.decrypt_message(&encrypted);
//! assert_eq!(decrypted, "HELLO");
//! ```

pub mod cipher;
pub mod cli;
pub mod error;
pub mod grid;
pub mod pipeline;
pub mod shape;

pub use cipher::{TranspositionCipher, FILLER};
pub use error::{ColumnarError, Result};
pub use grid::Grid;
pub use shape::{BlockLayout, Shape};
