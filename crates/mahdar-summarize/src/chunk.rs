//! Bounded chunking of long transcripts.
//!
//! Splits at sentence terminators and newline runs so a chunk boundary
//! never lands mid-word when there is any boundary to use.

/// Transcripts longer than this are chunked before summarization.
pub const MAX_SINGLE_PASS_CHARS: usize = 12_000;
/// Target chunk size in characters.
pub const CHUNK_SIZE: usize = 6_000;
/// Hard cap on the number of chunks; text beyond it is dropped.
pub const MAX_CHUNKS: usize = 6;

/// Pieces of the transcript: text runs and the separators between them,
/// both kept so sentence punctuation survives into the chunks.
fn boundary_pieces(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let is_terminator = matches!(c, '.' | '!' | '?' | '؟');
        let is_newline = c == '\n';
        if !is_terminator && !is_newline {
            continue;
        }
        if i > start {
            pieces.push(&text[start..i]);
        }
        let mut end = i + c.len_utf8();
        if is_newline {
            // consume the whole newline run as one separator
            while let Some(&(j, next)) = chars.peek() {
                if next != '\n' {
                    break;
                }
                end = j + next.len_utf8();
                chars.next();
            }
        }
        pieces.push(&text[i..end]);
        start = end;
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

#[derive(Default)]
struct ChunkAcc {
    chunks: Vec<String>,
    buf: Vec<String>,
    size: usize,
    full: bool,
}

impl ChunkAcc {
    fn flush(mut self) -> Self {
        if !self.buf.is_empty() {
            let joined = self.buf.join(" ").trim().to_string();
            if !joined.is_empty() {
                self.chunks.push(joined);
            }
            self.buf = Vec::new();
            self.size = 0;
        }
        self
    }
}

/// Fold the transcript into chunks of at most `chunk_size` characters
/// (boundary pieces permitting), capped at `max_chunks`.
pub fn chunk_text(text: &str, chunk_size: usize, max_chunks: usize) -> Vec<String> {
    let acc = boundary_pieces(text)
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .fold(ChunkAcc::default(), |mut acc, piece| {
            if acc.full {
                return acc;
            }
            let piece_len = piece.chars().count();
            if acc.size + piece_len + 1 > chunk_size {
                acc = acc.flush();
                if acc.chunks.len() >= max_chunks {
                    acc.full = true;
                    return acc;
                }
            }
            acc.buf.push(piece.to_string());
            acc.size += piece_len + 1;
            acc
        });

    let acc = if acc.chunks.len() < max_chunks && !acc.full {
        acc.flush()
    } else {
        acc
    };
    acc.chunks
}
