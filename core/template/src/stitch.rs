//! Stitches template chunks and placeholder tokens into one parseable
//! source string, threading holes through as textual placeholders.

/// A prefix outside the sigil/keyword namespace a caller could plausibly
/// write by hand, so a placeholder can never collide with a real
/// identifier in the surrounding template text.
const PLACEHOLDER_PREFIX: &str = "__redast_hole_";

/// Builds the placeholder identifier for hole `index`.
#[must_use]
pub(crate) fn placeholder_name(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{index}")
}

/// If `name` is a hole placeholder, returns its index.
#[must_use]
pub(crate) fn placeholder_index(name: &str) -> Option<usize> {
    name.strip_prefix(PLACEHOLDER_PREFIX)?.parse().ok()
}

/// Joins `chunks` with a placeholder identifier between each pair,
/// `chunks.len() - 1` placeholders in total.
#[must_use]
pub(crate) fn stitch(chunks: &[&str]) -> String {
    let mut out = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        out.push_str(chunk);
        if i + 1 < chunks.len() {
            out.push_str(&placeholder_name(i));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{placeholder_index, placeholder_name, stitch};

    #[test]
    fn stitches_chunks_around_placeholders() {
        let stitched = stitch(&["a = ", " + 1"]);
        assert_eq!(stitched, format!("a = {}0 + 1", "__redast_hole_"));
    }

    #[test]
    fn placeholder_index_round_trips() {
        for i in 0..5 {
            assert_eq!(placeholder_index(&placeholder_name(i)), Some(i));
        }
    }

    #[test]
    fn non_placeholder_names_are_rejected() {
        assert_eq!(placeholder_index("foo"), None);
        assert_eq!(placeholder_index("__redast_hole_"), None);
        assert_eq!(placeholder_index("__redast_hole_x"), None);
    }
}
