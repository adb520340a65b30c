use crate::Message;

/// Case-insensitive substring filter over the transcript.
///
/// An empty query returns every message in order. With a query active,
/// composing placeholders (which have no text yet) are excluded. The result
/// borrows from the transcript; the source is never mutated or reordered.
pub fn filter_transcript<'a>(transcript: &'a [Message], query: &str) -> Vec<&'a Message> {
    if query.is_empty() {
        return transcript.iter().collect();
    }
    let needle = query.to_lowercase();
    transcript
        .iter()
        .filter(|message| {
            message
                .text
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        })
        .collect()
}
