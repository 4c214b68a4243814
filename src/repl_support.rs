//! Pure helpers the REPL's read loop calls into. The predicate that decides
//! whether an input line continues onto the next one is plain source-text
//! logic, so it lives here where it can be tested without a terminal.

/// `true` if `line` ends (ignoring a trailing newline) in the continuation
/// marker `` ` ``, meaning the REPL should keep accumulating lines into the
/// same entry before lexing/parsing/evaluating it.
pub fn needs_continuation(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']).ends_with('`')
}

/// Strips a trailing continuation marker (and newline) from `line`, leaving
/// the text that should actually be appended to the multi-line buffer.
pub fn strip_continuation_marker(line: &str) -> &str {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    trimmed.strip_suffix('`').unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_trailing_backtick() {
        assert!(needs_continuation("foo: Float = (add 1 2)`"));
        assert!(!needs_continuation("foo: Float = (add 1 2)"));
    }

    #[test]
    fn strips_marker_and_newline() {
        assert_eq!(strip_continuation_marker("(add 1`\n"), "(add 1");
        assert_eq!(strip_continuation_marker("(add 1 2)\n"), "(add 1 2)");
    }
}
