use crate::cipher::TranspositionCipher;
use crate::cli::io::{read_input, Input};
use crate::error::Result;
use crate::shape::{BlockLayout, Shape};

/// Options for the encrypt command
#[derive(Debug, Clone)]
pub struct EncryptOptions {
    pub shape: Shape,
    pub keep_newline: bool,
}

/// Result of an encrypt command
#[derive(Debug, Clone)]
pub struct Encrypted {
    pub ciphertext: String,
    pub layout: BlockLayout,
}

/// Encrypt `message` with a fresh cipher of the requested shape
pub fn encrypt_text(message: &str, options: &EncryptOptions) -> Result<Encrypted> {
    let mut cipher = TranspositionCipher::with_shape(options.shape)?;
    let layout = options.shape.layout(message.chars().count());
    Ok(Encrypted {
        ciphertext: cipher.encrypt_message(message),
        layout,
    })
}

/// Read `input` and encrypt it
pub fn encrypt_input(input: &Input, options: &EncryptOptions) -> Result<Encrypted> {
    let message = read_input(input, options.keep_newline)?;
    encrypt_text(&message, options)
}
