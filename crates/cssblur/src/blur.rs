//! Blurring of function-call arguments.

use crate::balanced::find_balanced;

/// Placeholder written over blurred arguments when no other character is
/// chosen.
pub const DEFAULT_BLUR_CHAR: char = '`';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlurError {
    /// A `<name>(` was found whose opening parenthesis never closes.
    #[error("no closing parenthesis matching `{function}(` at byte {offset}")]
    UnclosedParenthesis { function: String, offset: usize },
}

/// Replaces every character that is an argument to the named function-like
/// token with [`DEFAULT_BLUR_CHAR`].
///
/// This is useful before scanning text with a regex when matches inside a
/// particular function's arguments would be false positives, as with
/// `url(...)` in a stylesheet, whose argument can contain almost anything.
/// Each blurred character is replaced one-for-one, so the result has exactly
/// as many chars as `source` and offsets computed against either remain valid
/// for both.
///
/// `function_name` must be non-empty and must not itself contain `(`.
///
/// ```
/// let blurred = cssblur::blur_function_arguments("abc url(abc) abc", "url")?;
/// assert_eq!(blurred, "abc url(```) abc");
/// # Ok::<(), cssblur::BlurError>(())
/// ```
///
/// Fails with [`BlurError::UnclosedParenthesis`] when a matched call never
/// closes; no partially blurred string is returned in that case.
pub fn blur_function_arguments(source: &str, function_name: &str) -> Result<String, BlurError> {
    blur_function_arguments_with(source, function_name, DEFAULT_BLUR_CHAR)
}

/// Like [`blur_function_arguments`], with a caller-chosen placeholder.
///
/// The placeholder is a single `char`, which keeps the char-count invariant
/// intact by construction.
pub fn blur_function_arguments_with(
    source: &str,
    function_name: &str,
    blur_char: char,
) -> Result<String, BlurError> {
    let name_with_paren = format!("{function_name}(");
    if !source.contains(&name_with_paren) {
        return Ok(source.to_string());
    }

    // All searching runs against the original `source`; the result is built in
    // one forward pass, so earlier blurs never shift later offsets.
    let mut result = String::with_capacity(source.len());
    let mut cursor = 0;
    while let Some(found) = source[cursor..].find(&name_with_paren) {
        let open_paren = cursor + found + function_name.len();
        let close_paren = match find_balanced('(', ')', &source[open_paren..]) {
            Some(span) => open_paren + span.end,
            None => {
                return Err(BlurError::UnclosedParenthesis {
                    function: function_name.to_string(),
                    offset: open_paren,
                });
            }
        };
        let argument_chars = source[open_paren + 1..close_paren].chars().count();
        result.push_str(&source[cursor..open_paren + 1]);
        result.extend(std::iter::repeat(blur_char).take(argument_chars));
        // Resuming at the `)` keeps occurrences inside the blurred span from
        // matching again; the `)` itself is copied with the next segment.
        cursor = close_paren;
    }
    result.push_str(&source[cursor..]);
    Ok(result)
}
