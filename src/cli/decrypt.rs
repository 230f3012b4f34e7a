use crate::cipher::TranspositionCipher;
use crate::cli::io::{read_input, Input};
use crate::error::Result;
use crate::shape::{BlockLayout, Shape};

/// Options for the decrypt command
#[derive(Debug, Clone)]
pub struct DecryptOptions {
    pub shape: Shape,
    pub keep_newline: bool,
}

/// Result of a decrypt command
#[derive(Debug, Clone)]
pub struct Decrypted {
    pub plaintext: String,
    /// Layout of the ciphertext; not aligned means the input was truncated or malformed
    pub layout: BlockLayout,
    /// Trailing filler characters removed after reassembly
    pub stripped: usize,
}

/// Decrypt `ciphertext` with a fresh cipher of the requested shape
pub fn decrypt_text(ciphertext: &str, options: &DecryptOptions) -> Result<Decrypted> {
    let mut cipher = TranspositionCipher::with_shape(options.shape)?;
    let layout = options.shape.layout(ciphertext.chars().count());
    let (plaintext, stripped) = cipher.decrypt_message_counted(ciphertext);
    Ok(Decrypted {
        plaintext,
        layout,
        stripped,
    })
}

/// Read `input` and decrypt it
pub fn decrypt_input(input: &Input, options: &DecryptOptions) -> Result<Decrypted> {
    let ciphertext = read_input(input, options.keep_newline)?;
    decrypt_text(&ciphertext, options)
}
