//! Comment preprocessor.
//!
//! The format allows `//` line comments and `/* … */` block comments.
//! Rather than teaching every parser state about them, a single pass
//! blanks comment bytes with spaces before parsing. The buffer keeps its
//! length, so every non-comment byte stays at its original offset and any
//! positions a caller recorded before parsing remain valid.
//!
//! Comment markers inside quoted literals (`"`, `'`, or back-tick) are
//! ordinary text and are left untouched.
//!
//! ## Examples
//!
//! ```rust
//! let mut buf = b"a: 1 // trailing".to_vec();
//! confit::strip_comments(&mut buf);
//! assert_eq!(&buf, b"a: 1            ");
//! ```

/// Blanks `//` and `/* … */` comments in place, skipping quoted literals.
///
/// `//` comments are blanked up to (not including) the next newline.
/// `/* … */` comments are blanked including the closing marker. An
/// unterminated `/*` is treated as ordinary text: the scan advances one
/// byte and continues, so a malformed comment does not blank the rest of
/// the file.
///
/// Blanking is byte-wise with ASCII spaces, so a buffer that held valid
/// UTF-8 still does afterwards.
pub fn strip_comments(buf: &mut [u8]) {
    let mut p = 0;

    while p < buf.len() {
        match buf[p] {
            quote @ (b'"' | b'\'' | b'`') => {
                // Skip to the matching unescaped closing quote.
                let mut e = p + 1;
                while e < buf.len() && (buf[e] != quote || buf[e - 1] == b'\\') {
                    e += 1;
                }
                p = e + 1;
            }
            b'/' if buf[p..].starts_with(b"//") => {
                let mut e = p;
                while e < buf.len() && buf[e] != b'\n' {
                    buf[e] = b' ';
                    e += 1;
                }
                p = e + 1;
            }
            b'/' if buf[p..].starts_with(b"/*") => {
                match find_block_end(buf, p + 2) {
                    Some(end) => {
                        for byte in &mut buf[p..end] {
                            *byte = b' ';
                        }
                        p = end;
                    }
                    None => p += 1,
                }
            }
            _ => p += 1,
        }
    }
}

/// Returns the offset just past the `*/` closing `start`'s block comment,
/// or `None` if the comment never closes.
fn find_block_end(buf: &[u8], start: usize) -> Option<usize> {
    let mut e = start;
    while e + 1 < buf.len() {
        if buf[e] == b'*' && buf[e + 1] == b'/' {
            return Some(e + 2);
        }
        e += 1;
    }
    None
}
