/// Splits a line of source text into top-level tokens.
///
/// Tokens are separated by runs of whitespace at nesting depth zero, outside
/// of quotes. `(` and `[` raise the depth, `)` and `]` lower it, and each `"`
/// toggles an in-text flag; whitespace inside an active quote or at positive
/// depth never splits a token. Brackets are not validated — malformed input
/// yields undefined depth, which callers must treat as a syntax error
/// upstream.
///
/// An all-whitespace string produces zero tokens. The function is pure and
/// performs no I/O.
///
/// # Parameters
/// - `source`: The text to split.
///
/// # Returns
/// The top-level tokens, in order, borrowing from `source`.
///
/// # Examples
/// ```
/// use curria::interpreter::lexer::separate;
///
/// assert_eq!(separate("f (1 2) \"a b\" [3 4]"),
///            vec!["f", "(1 2)", "\"a b\"", "[3 4]"]);
/// assert_eq!(separate("   "), Vec::<&str>::new());
/// ```
#[must_use]
pub fn separate(source: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0_i32;
    let mut in_text = false;
    let mut start: Option<usize> = None;

    for (index, character) in source.char_indices() {
        if character.is_whitespace() {
            if depth == 0 && !in_text {
                if let Some(begin) = start.take() {
                    parts.push(&source[begin..index]);
                }
            }
        } else if start.is_none() && depth == 0 && !in_text {
            start = Some(index);
        }

        match character {
            '(' | '[' => depth += 1,
            ')' | ']' => depth -= 1,
            '"' => in_text = !in_text,
            _ => {},
        }
    }

    if let Some(begin) = start {
        parts.push(&source[begin..]);
    }

    parts
}
