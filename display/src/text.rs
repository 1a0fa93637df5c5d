/// Result of a best-effort UTF-8 decode.
#[derive(Clone, Debug, PartialEq)]
pub struct LossyText {
    pub text: String,
    // Invalid byte sequences replaced with U+FFFD.
    pub substitutions: usize,
}

pub fn decode_lossy(bytes: &[u8]) -> LossyText {
    let mut text = String::with_capacity(bytes.len());
    let mut substitutions: usize = 0;

    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            text.push(char::REPLACEMENT_CHARACTER);
            substitutions += 1;
        }
    }

    LossyText {
        text,
        substitutions,
    }
}
