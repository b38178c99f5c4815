//! Path helpers: per-segment sanitization and lexical normalization.

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

// Everything except word characters, hyphen, period and space.
static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\-. ]+").unwrap());

/// Sanitize a single path segment.
///
/// Disallowed characters are removed and surrounding whitespace trimmed. If
/// nothing survives, the original segment is returned unchanged.
pub fn sanitize_segment(segment: &str) -> String {
    clean(segment).unwrap_or_else(|| segment.to_string())
}

/// Sanitize every segment of a relative path independently.
///
/// The result has exactly as many components as the input, in the same order.
/// Non-normal components (`.`, `..`, prefixes, root) pass through untouched.
pub fn sanitize_relative(path: &Path) -> PathBuf {
    path.components()
        .map(|component| match component {
            Component::Normal(segment) => sanitize_os_segment(segment),
            other => other.as_os_str().to_os_string(),
        })
        .collect()
}

fn sanitize_os_segment(segment: &OsStr) -> OsString {
    match segment.to_str() {
        Some(s) => sanitize_segment(s).into(),
        None => clean(&segment.to_string_lossy())
            .map_or_else(|| segment.to_os_string(), OsString::from),
    }
}

fn clean(segment: &str) -> Option<String> {
    let stripped = DISALLOWED_RE.replace_all(segment, "");
    let trimmed = stripped.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// Used for destination roots, which may not exist yet and therefore cannot be
/// canonicalized.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
