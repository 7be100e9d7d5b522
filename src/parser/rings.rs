use super::Span;
use crate::core::{GeomResult, GeometryError};
use log::trace;

/// Strip the single pair of parentheses enclosing `body`
///
/// The body must start with `(` and its matching `)` must be the last non-whitespace
/// character. Nesting depth is unbounded; the scan keeps a stack of open positions so
/// an unmatched `(` can be reported where it was opened.
pub(crate) fn strip_parens<'a>(body: Span<'a>) -> GeomResult<Span<'a>> {
    let trimmed = body.trim();
    let text = trimmed.as_str();
    if !text.starts_with('(') {
        return Err(GeometryError::ExpectedParenthesis {
            position: trimmed.start(),
        });
    }

    let mut open: Vec<usize> = Vec::new();
    let mut close_at = None;
    for (i, b) in text.bytes().enumerate() {
        match b {
            b'(' => open.push(i),
            b')' => {
                if open.pop().is_none() {
                    return Err(GeometryError::UnbalancedParentheses {
                        position: trimmed.start() + i,
                    });
                }
                if open.is_empty() && close_at.is_none() {
                    close_at = Some(i);
                }
            }
            _ => (),
        }
    }
    if let Some(&unclosed) = open.last() {
        return Err(GeometryError::UnbalancedParentheses {
            position: trimmed.start() + unclosed,
        });
    }

    match close_at {
        Some(end) if end + 1 == text.len() => Ok(trimmed.slice(1, end)),
        Some(end) => Err(GeometryError::TrailingCharacters {
            position: trimmed.start() + end + 1,
        }),
        // Unreachable for a balanced text starting with '('
        None => Err(GeometryError::UnbalancedParentheses {
            position: trimmed.start(),
        }),
    }
}

/// Split `inner` at the commas that are not nested inside parentheses
///
/// Each piece is trimmed; empty pieces are kept so callers can decide how to report them.
pub(crate) fn split_top_level<'a>(inner: Span<'a>) -> GeomResult<Vec<Span<'a>>> {
    let text = inner.as_str();
    let mut parts = Vec::new();
    let mut depth: usize = 0;
    let mut from = 0;
    for (i, b) in text.bytes().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(GeometryError::UnbalancedParentheses {
                        position: inner.start() + i,
                    })?;
            }
            b',' if depth == 0 => {
                parts.push(inner.slice(from, i).trim());
                from = i + 1;
            }
            _ => (),
        }
    }
    if depth > 0 {
        return Err(GeometryError::UnbalancedParentheses {
            position: inner.start() + text.len(),
        });
    }
    parts.push(inner.slice(from, text.len()).trim());
    Ok(parts)
}

/// Decompose a parenthesized body into its rings or member parts
///
/// `((0 0, 1 0, 1 1, 0 0), (2 2, 3 2, 3 3, 2 2))` yields the two parenthesized rings,
/// `(((...)), ((...)))` yields one polygon body per member.
pub(crate) fn split_parts<'a>(body: Span<'a>) -> GeomResult<Vec<Span<'a>>> {
    let inner = strip_parens(body)?;
    let parts = split_top_level(inner)?;
    if let Some(empty) = parts.iter().find(|part| part.is_empty()) {
        return Err(GeometryError::EmptyCoordinate {
            position: empty.start(),
        });
    }
    trace!(
        "Split body at position {} into {} parts",
        body.start(),
        parts.len()
    );
    Ok(parts)
}
