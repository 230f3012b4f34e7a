/// Remove every trailing `filler` from `text`, returning how many were removed
///
/// Runs once over a whole decrypted message. A message whose real content
/// ends in `filler` loses those characters too.
pub fn strip_trailing_filler(text: &mut String, filler: char) -> usize {
    let mut stripped = 0;
    while text.ends_with(filler) {
        text.pop();
        stripped += 1;
    }
    stripped
}
