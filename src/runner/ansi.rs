//! Terminal escape sequence removal

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// OSC sequences (`ESC ]` … `BEL` or `ESC \`) are matched first so their
/// payload may hold any text. The second alternative covers CSI sequences
/// (`ESC [` … final byte) and short BEL-terminated forms. Both accept the
/// 7-bit and the 8-bit introducer.
const ANSI_PATTERN: &str = r"[\x1b\x{9b}]\][^\x07\x1b]*(?:\x07|\x1b\\)|[\x1b\x{9b}][\[\]()#;?]*(?:(?:(?:[a-zA-Z\d]*(?:;[a-zA-Z\d]*)*)?\x07)|(?:(?:\d{1,4}(?:;\d{0,4})*)?[\dA-PRZcf-ntqry=><~]))";

fn ansi_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ANSI_PATTERN).expect("valid regex"))
}

/// Remove every ANSI escape sequence from `text`.
///
/// The result contains no sequence at all, so stripping it again is a no-op.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    let re = ansi_regex();
    if !re.is_match(text) {
        return Cow::Borrowed(text);
    }

    // Removing one sequence can join its neighbours into another.
    let mut stripped = re.replace_all(text, "").into_owned();
    while re.is_match(&stripped) {
        stripped = re.replace_all(&stripped, "").into_owned();
    }
    Cow::Owned(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        color = { "\x1b[31mERROR\x1b[0m", "ERROR" },
        bold_green = { "\x1b[1;32mready\x1b[0m in 300ms", "ready in 300ms" },
        cursor = { "\x1b[2K\x1b[1Gcompiling", "compiling" },
        osc_title = { "\x1b]0;vite\x07listening", "listening" },
        osc_title_with_spaces = { "\x1b]0;npm run dev\x07ready", "ready" },
        osc_hyperlink = { "\x1b]8;;http://localhost:5173/\x1b\\open\x1b]8;;\x1b\\", "open" },
        eight_bit_osc = { "\u{9b}]2;title\x07done", "done" },
        joined_fragments = { "\x1b\x1b[31m[31mX", "X" },
        eight_bit_csi = { "\u{9b}33mwarn", "warn" },
        plain = { "GET /api 200", "GET /api 200" },
        empty = { "", "" },
    )]
    fn test_strip(input: &str, expected: &str) {
        assert_eq!(strip_ansi(input), expected);
    }

    #[parameterized(
        color = { "\x1b[31mERROR\x1b[0m" },
        osc_title = { "\x1b]0;npm run dev\x07ready" },
        joined_fragments = { "\x1b\x1b[31m[31mX" },
        nested_fragments = { "a\x1b[\x1b[31m1mb" },
        unterminated_osc = { "\x1b]0;no bell" },
        plain = { "ERROR" },
    )]
    fn test_strip_is_idempotent(input: &str) {
        let once = strip_ansi(input).into_owned();
        assert_eq!(strip_ansi(&once), once);
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(strip_ansi("no escapes"), Cow::Borrowed(_)));
    }
}
