use crate::profile;

/// Trait describing a duplicate-detection strategy over an ordered title list.
pub trait DuplicateFinder {
    /// Short name used in timing and profiling output.
    fn name(&self) -> &'static str;

    /// Return every title that occurs more than once in `titles`, compared
    /// case-insensitively. Each duplicate appears once in the result, spelled
    /// the way its first occurrence was spelled. Ordering is
    /// strategy-specific; callers that need set semantics should normalize
    /// and sort.
    fn find_duplicates(&self, titles: &[&str]) -> Vec<String>;
}

/// Lowercase a title for comparison purposes. Results returned to callers
/// keep their original casing; only equality checks go through this form.
pub fn normalize_title(title: &str) -> String {
    let _span = profile::span("core::normalize_title");
    title.to_lowercase()
}
