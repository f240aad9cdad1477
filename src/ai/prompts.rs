//! Prompt builder for insight generation.
//!
//! One invocation sends one fixed natural-language instruction per user,
//! embedding that user's serialized journal entries verbatim.

/// Builds the insight instruction for one user's serialized journal entries.
///
/// The instruction frames the reply in the second person, restates the three
/// fixed prompts the journal entries answer, embeds the JSON verbatim, and
/// asks for exactly three insights formatted as a bracketed list of quoted
/// strings. The reply format is requested but never parsed; callers consume
/// the raw text.
///
/// # Arguments
///
/// * `journals_json` - The user's journal entries serialized as JSON text
pub fn insight_prompt(journals_json: &str) -> String {
    format!(
        r#"You are speaking directly to the user in the second person.

The user keeps a daily journal. Each entry answers three prompts:
1. How was your mood today?
2. What do you want to remember this day by?
3. What challenges did you face?

Here are the user's journal entries, serialized as JSON:

{}

Based on these entries, give the user exactly three insights about their
behavior and patterns. Format your answer as a bracketed list of quoted
strings, for example: ['Insight 1', 'Insight 2', 'Insight 3']"#,
        journals_json
    )
}
