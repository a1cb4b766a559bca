//! Message formatting shared by every adapter
//!
//! Two entry points turn heterogeneous arguments into one message string:
//! [`join_variadic`] for argument lists and [`format_template`] for
//! placeholder templates. Caller mistakes in a template show up as inline
//! markers in the rendered text, never as errors.

use std::fmt::{self, Write as _};

/// Heterogeneous argument list, rendered with `Display`
pub type Args<'a> = [&'a dyn fmt::Display];

static SPACE: &str = " ";

/// Marker for a `{}` with no argument left
pub const MISSING_MARKER: &str = "{!MISSING}";
/// Marker for a `{N}` past the end of the argument list
pub const BAD_INDEX_MARKER: &str = "{!BADINDEX}";

/// Interpose a single space value between adjacent arguments.
///
/// For `n` inputs the result has `2n - 1` entries (none for `n = 0`):
/// originals at even indices, a space at every odd index.
pub fn space_separated<'a>(args: &[&'a dyn fmt::Display]) -> Vec<&'a dyn fmt::Display> {
    if args.len() <= 1 {
        return args.to_vec();
    }

    let mut spaced: Vec<&'a dyn fmt::Display> = Vec::with_capacity(args.len() * 2 - 1);
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            spaced.push(&SPACE);
        }
        spaced.push(*arg);
    }
    spaced
}

/// Render arguments joined by exactly one space
pub fn join_variadic(args: &Args<'_>) -> String {
    let spaced = space_separated(args);
    let mut out = String::with_capacity(spaced.len() * 4);
    for value in spaced {
        let _ = write!(out, "{}", value);
    }
    out
}

/// Positional substitution of `{}` / `{N}` placeholders.
///
/// `{{` and `}}` are literal braces. Arity and syntax mistakes render as
/// `{!MISSING}`, `{!BADINDEX}`, `{!BADVERB ...}` and a trailing
/// `{!EXTRA ...}` listing unused arguments.
pub fn format_template(template: &str, args: &Args<'_>) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut used = vec![false; args.len()];
    let mut next_arg = 0usize;
    let mut rest = template;

    while let Some(pos) = rest.find(|c: char| c == '{' || c == '}') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            // lone `}` is kept as-is, `}}` collapses to one
            out.push('}');
            rest = if tail.starts_with("}}") { &tail[2..] } else { &tail[1..] };
            continue;
        }

        let Some(close) = tail.find('}') else {
            out.push_str("{!BADVERB}");
            out.push_str(tail);
            rest = "";
            break;
        };

        let placeholder = &tail[1..close];
        rest = &tail[close + 1..];

        let index = if placeholder.is_empty() {
            let index = next_arg;
            next_arg += 1;
            if index >= args.len() {
                out.push_str(MISSING_MARKER);
                continue;
            }
            index
        } else {
            match placeholder.trim().parse::<usize>() {
                Ok(index) if index < args.len() => index,
                Ok(_) => {
                    out.push_str(BAD_INDEX_MARKER);
                    continue;
                }
                Err(_) => {
                    let _ = write!(out, "{{!BADVERB {}}}", placeholder);
                    continue;
                }
            }
        };

        used[index] = true;
        let _ = write!(out, "{}", args[index]);
    }
    out.push_str(rest);

    if used.iter().any(|u| !u) {
        out.push_str("{!EXTRA ");
        let mut first = true;
        for (arg, _) in args.iter().zip(&used).filter(|(_, used)| !**used) {
            if !first {
                out.push_str(", ");
            }
            first = false;
            let _ = write!(out, "{}", arg);
        }
        out.push('}');
    }

    out
}
