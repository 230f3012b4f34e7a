/// Split a character sequence into consecutive blocks of `block_len`
/// The last block may be shorter; callers pad it when filling a grid
pub fn segment(chars: &[char], block_len: usize) -> std::slice::Chunks<'_, char> {
    assert!(block_len > 0, "block length must be at least 1");
    chars.chunks(block_len)
}

/// Number of blocks needed for `len` characters
/// An empty message needs no blocks at all
pub fn block_count(len: usize, block_len: usize) -> usize {
    assert!(block_len > 0, "block length must be at least 1");
    len.div_ceil(block_len)
}
