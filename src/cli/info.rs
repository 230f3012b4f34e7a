use crate::cipher::FILLER;
use crate::error::Result;
use crate::shape::{BlockLayout, Shape};

/// Describe how `text` maps onto blocks of `shape`
pub fn show_info(shape: Shape, text: &str) -> String {
    let layout = shape.layout(text.chars().count());

    let mut output = String::new();

    output.push_str("Columnar Cipher Layout\n");
    output.push_str("======================\n\n");

    output.push_str("Grid:\n");
    output.push_str(&format!("  Shape: {}\n", layout.shape));
    output.push_str(&format!("  Rows: {}\n", layout.shape.rows()));
    output.push_str(&format!("  Columns: {}\n", layout.shape.cols()));
    output.push_str(&format!("  Block size: {} chars\n", layout.capacity));
    output.push_str(&format!("  Filler: '{}'\n", FILLER));
    output.push('\n');

    output.push_str("Message:\n");
    output.push_str(&format!("  Length: {} chars\n", layout.message_len));
    output.push_str(&format!("  Blocks: {}\n", layout.blocks));
    output.push_str(&format!("  Padded length: {} chars\n", layout.padded_len));
    output.push_str(&format!("  Filler added: {}\n", layout.filler));

    if text.ends_with(FILLER) {
        output.push('\n');
        output.push_str(&format!(
            "Note: message ends in '{}'; decryption will strip it.\n",
            FILLER
        ));
    }

    output
}

/// Layout as pretty-printed JSON
pub fn info_json(shape: Shape, text: &str) -> Result<String> {
    let layout: BlockLayout = shape.layout(text.chars().count());
    Ok(serde_json::to_string_pretty(&layout)?)
}
