/// Target chunk size in characters
pub const DEFAULT_CHUNK_SIZE: usize = 1500;

/// Overlap between consecutive chunks of the same document, in characters
pub const DEFAULT_CHUNK_OVERLAP: usize = 100;

/// Text chunk
#[derive(Debug, Clone, PartialEq)]
pub struct TextChunk {
    /// Chunk text
    pub text: String,

    /// Start offset in the source text, in characters
    pub start: usize,

    /// End offset in the source text, in characters
    pub end: usize,
}

/// Split text into fixed-size chunks with overlap between neighbors
///
/// Offsets are counted in characters, never bytes, so multi-byte input
/// cannot be split inside a code point. The split is fully determined
/// by the input text and the two size parameters.
pub fn chunk_text(text: &str, max_chars: usize, overlap_chars: usize) -> Vec<TextChunk> {
    debug_assert!(overlap_chars < max_chars, "overlap must be smaller than chunk size");

    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();

    if total <= max_chars {
        // Text is short enough, return as single chunk
        return vec![TextChunk {
            text: text.to_string(),
            start: 0,
            end: total,
        }];
    }

    let mut chunks = Vec::new();
    let mut start = 0;

    loop {
        let end = (start + max_chars).min(total);
        chunks.push(TextChunk {
            text: chars[start..end].iter().collect(),
            start,
            end,
        });

        if end == total {
            break;
        }

        start = end - overlap_chars;
    }

    chunks
}
