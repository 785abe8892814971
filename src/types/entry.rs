//! Curated teaching entry

/// One curated teaching in the knowledge base.
///
/// Entries are static data: every field borrows from the compiled-in
/// curated table and nothing is mutated after startup. `keywords` drive
/// matching; the remaining fields are display/logging content passed
/// through to the caller unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Normalized lowercase keywords (single words or short phrases)
    pub keywords: &'static [&'static str],
    /// Stable chapter/verse label, e.g. "2.47" (display and logging only)
    pub chapter: &'static str,
    /// Short source excerpt
    pub verse: &'static str,
    /// Full citation, e.g. "Bhagavad-gītā 2.47"
    pub reference: &'static str,
    /// Teaching text returned verbatim in the answer
    pub teaching: &'static str,
    /// Illustration URL
    pub image_url: &'static str,
    /// Marks the entry returned when a question carries no keyword signal
    pub fallback: bool,
}
