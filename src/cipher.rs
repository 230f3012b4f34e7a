use crate::error::Result;
use crate::grid::Grid;
use crate::pipeline::{segment, strip_trailing_filler};
use crate::shape::Shape;

/// Character used to pad a short final block, stripped again after decryption
pub const FILLER: char = 'A';

/// Columnar transposition cipher over a fixed `rows x cols` grid
///
/// Blocks are written into the grid row by row and read back column by
/// column. The grid is a scratch buffer owned by the instance and
/// overwritten on every block, so one instance can process any number of
/// messages.
///
/// Encryption and decryption must use the same shape. Nothing checks
/// this: decrypting with another shape yields scrambled text, not an
/// error.
#[derive(Debug, Clone)]
pub struct TranspositionCipher {
    shape: Shape,
    grid: Grid<char>,
}

impl TranspositionCipher {
    /// Create a cipher for a `rows x cols` grid
    /// Fails with `InvalidArgument` if either dimension is zero or the grid is too large
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::with_shape(Shape::new(rows, cols)?)
    }

    pub fn with_shape(shape: Shape) -> Result<Self> {
        Ok(Self {
            shape,
            grid: Grid::new(shape, FILLER)?,
        })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Characters per block
    pub fn block_len(&self) -> usize {
        self.shape.capacity()
    }

    /// Read-only view of the scratch grid as left by the last block operation
    pub fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    /// Write `text` into the grid row-major
    ///
    /// Short input is padded with [`FILLER`]; only the first
    /// `rows * cols` characters of long input are used.
    pub fn fill_block(&mut self, text: &str) {
        self.grid.fill_row_major(text.chars(), FILLER);
    }

    /// Read the grid column-major into one block of ciphertext
    pub fn encrypt_block(&self) -> String {
        self.grid.iter_column_major().collect()
    }

    /// Encrypt a message of any length
    ///
    /// The output is the concatenation of one encrypted block per
    /// `rows * cols` characters of input, the last block padded. An empty
    /// message encrypts to an empty string.
    pub fn encrypt_message(&mut self, message: &str) -> String {
        if message.is_empty() {
            return String::new();
        }

        let chars: Vec<char> = message.chars().collect();
        let mut output = String::with_capacity(self.shape.layout(chars.len()).padded_len);
        for block in segment(&chars, self.block_len()) {
            self.grid.fill_row_major(block.iter().copied(), FILLER);
            output.extend(self.grid.iter_column_major());
        }
        output
    }

    /// Undo the transposition of one block without stripping filler
    ///
    /// `block` is written column-major and read back row-major. A short
    /// block is padded with [`FILLER`] before it is placed.
    pub fn decrypt_block(&mut self, block: &str) -> String {
        self.grid.fill_column_major(block.chars(), FILLER);
        self.grid.iter_row_major().collect()
    }

    /// Decrypt a message produced by [`encrypt_message`](Self::encrypt_message)
    ///
    /// Every block is transposed back, then trailing [`FILLER`] characters
    /// are removed from the reassembled message as a whole. A plaintext
    /// that itself ended in `'A'` loses those characters.
    pub fn decrypt_message(&mut self, encrypted: &str) -> String {
        self.decrypt_message_counted(encrypted).0
    }

    /// Decrypt and also report how many trailing filler characters were stripped
    pub(crate) fn decrypt_message_counted(&mut self, encrypted: &str) -> (String, usize) {
        let chars: Vec<char> = encrypted.chars().collect();
        let mut output = String::with_capacity(encrypted.len());
        for block in segment(&chars, self.block_len()) {
            self.grid.fill_column_major(block.iter().copied(), FILLER);
            output.extend(self.grid.iter_row_major());
        }
        let stripped = strip_trailing_filler(&mut output, FILLER);
        (output, stripped)
    }
}
