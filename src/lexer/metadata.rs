//! Registration metadata for highlighter front ends.

use std::path::Path;

/// Human-readable language name.
pub const NAME: &str = "Automath";

/// Short names the language can be looked up by.
pub const ALIASES: &[&str] = &["aut"];

/// Filename patterns of Automath sources.
pub const FILENAMES: &[&str] = &["*.aut"];

/// Whether `name` refers to this language, either by name or alias.
/// Case-insensitive.
pub fn matches_name(name: &str) -> bool {
    name.eq_ignore_ascii_case(NAME) || ALIASES.iter().any(|alias| name.eq_ignore_ascii_case(alias))
}

/// Whether the final component of `path` matches one of [`FILENAMES`].
pub fn matches_filename(path: &str) -> bool {
    let Some(file_name) = Path::new(path).file_name().and_then(|name| name.to_str()) else {
        return false;
    };

    FILENAMES.iter().any(|pattern| match pattern.strip_prefix('*') {
        Some(suffix) => file_name.ends_with(suffix),
        None => file_name == *pattern,
    })
}
