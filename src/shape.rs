use crate::error::{ColumnarError, Result};
use crate::pipeline::block_count;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid dimensions shared by encryption and decryption
///
/// The shape is the whole key of the cipher: a message can only be
/// recovered with the same `rows x cols` it was encrypted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ShapeFields")]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    /// Validate and build a shape
    /// Both dimensions must be at least 1 and a grid of `rows * cols` chars must be addressable
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 {
            return Err(ColumnarError::InvalidArgument(format!(
                "rows must be at least 1, got {}",
                rows
            )));
        }
        if cols == 0 {
            return Err(ColumnarError::InvalidArgument(format!(
                "cols must be at least 1, got {}",
                cols
            )));
        }
        let bytes = rows
            .checked_mul(cols)
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<char>()));
        if !matches!(bytes, Some(b) if b <= isize::MAX as usize) {
            return Err(ColumnarError::InvalidArgument(format!(
                "grid of {}x{} cells is too large",
                rows, cols
            )));
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of characters in one block
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Block arithmetic for a message of `message_len` characters
    pub fn layout(&self, message_len: usize) -> BlockLayout {
        let capacity = self.capacity();
        let blocks = block_count(message_len, capacity);
        let padded_len = blocks * capacity;
        BlockLayout {
            shape: *self,
            capacity,
            message_len,
            blocks,
            padded_len,
            filler: padded_len - message_len,
        }
    }
}

/// Unvalidated form used when deserializing
#[derive(Deserialize)]
struct ShapeFields {
    rows: usize,
    cols: usize,
}

impl TryFrom<ShapeFields> for Shape {
    type Error = ColumnarError;
    fn try_from(fields: ShapeFields) -> Result<Self> {
        Self::new(fields.rows, fields.cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl std::str::FromStr for Shape {
    type Err = ColumnarError;
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        let (rows, cols) = lower
            .split_once('x')
            .or_else(|| lower.split_once('×'))
            .or_else(|| lower.split_once(','))
            .ok_or_else(|| ColumnarError::InvalidShape(s.to_string()))?;

        let rows: usize = rows
            .trim()
            .parse()
            .map_err(|_| ColumnarError::InvalidShape(s.to_string()))?;
        let cols: usize = cols
            .trim()
            .parse()
            .map_err(|_| ColumnarError::InvalidShape(s.to_string()))?;

        Self::new(rows, cols)
    }
}

/// How a message of a given length maps onto blocks of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockLayout {
    pub shape: Shape,
    pub capacity: usize,
    pub message_len: usize,
    pub blocks: usize,
    pub padded_len: usize,
    pub filler: usize,
}

impl BlockLayout {
    /// True when the final block needs no padding
    pub fn is_aligned(&self) -> bool {
        self.filler == 0
    }
}
