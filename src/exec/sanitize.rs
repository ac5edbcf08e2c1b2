// src/exec/sanitize.rs

//! Output cleanup for captured command output.

use std::sync::LazyLock;

use regex::Regex;

/// Everything on a line up to and including its last carriage return.
///
/// `.` never matches `\n`, so the match cannot cross a line boundary.
static CR_OVERWRITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*\r").expect("CR_OVERWRITE is a valid regex"));

/// Decode raw captured bytes and collapse in-place line rewrites.
///
/// - Invalid UTF-8 is replaced with U+FFFD instead of failing.
/// - `\r\n` becomes `\n` (a pty turns every `\n` into `\r\n`).
/// - For any line that still contains `\r`, only the text after the last
///   `\r` is kept, which is what a terminal shows after progress bars and
///   spinners have redrawn the line.
///
/// The result never contains `\r`, so applying this twice changes nothing.
pub fn clean_output(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw).replace("\r\n", "\n");
    CR_OVERWRITE.replace_all(&text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_text_after_last_carriage_return() {
        assert_eq!(clean_output(b"a\rb\rc\n"), "c\n");
    }

    #[test]
    fn normalizes_crlf_before_collapsing() {
        assert_eq!(clean_output(b"one\r\ntwo\r\n"), "one\ntwo\n");
        assert_eq!(clean_output(b"10%\r50%\r100%\r\ndone\r\n"), "100%\ndone\n");
    }

    #[test]
    fn collapses_per_line_only() {
        assert_eq!(clean_output(b"keep\nx\ry\nalso keep"), "keep\ny\nalso keep");
    }

    #[test]
    fn trailing_carriage_return_empties_the_line() {
        assert_eq!(clean_output(b"progress\r"), "");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(clean_output(b"ok \xff\xfe end\n"), "ok \u{fffd}\u{fffd} end\n");
    }

    #[test]
    fn clean_text_is_a_fixed_point() {
        let once = clean_output(b"a\r\nb\rc\r\r\nd");
        assert_eq!(clean_output(once.as_bytes()), once);
    }
}
