//! Prompt construction and response shaping for generated case text.

use case_engine::{CaseCategory, Difficulty};

/// Marker that precedes the structured answer in oracle output.
const RESPONSE_MARKER: &str = "Response:";

/// Builds the prompt asking a model for a complete case as JSON.
#[must_use]
pub fn oracle_prompt(identifier: &str) -> String {
    format!(
        concat!(
            "System: Act as an expert criminal investigator and historian. ",
            "Generate a detailed mystery investigation file in JSON format.\n",
            "Case ID: {identifier}\n",
            "Requirement: 3 paragraphs of briefing, 3 artifacts with URLs.\n",
            "Format: JSON only.\n",
            "\n",
            "Response: "
        ),
        identifier = identifier
    )
}

/// Builds the prompt asking a model to write a case briefing.
///
/// # Examples
///
/// ```
/// use case_engine::{CaseCategory, Difficulty};
/// use case_file::enrichment::case_writer_prompt;
///
/// let prompt = case_writer_prompt(
///     "The Kryptos Sculpture",
///     CaseCategory::Cryptographic,
///     Difficulty::Hard,
/// );
/// assert!(prompt.contains("Case Title: The Kryptos Sculpture"));
/// assert!(prompt.ends_with("Briefing:"));
/// ```
#[must_use]
pub fn case_writer_prompt(title: &str, category: CaseCategory, difficulty: Difficulty) -> String {
    format!(
        concat!(
            "You are a detective case file writer. Create a mysterious and engaging ",
            "case briefing for investigators.\n",
            "\n",
            "Case Title: {title}\n",
            "Category: {category}\n",
            "Difficulty: {difficulty}\n",
            "\n",
            "Write a compelling 3-paragraph briefing that:\n",
            "1. Introduces the mystery with specific details and dates\n",
            "2. Describes the puzzling evidence and unanswered questions\n",
            "3. Challenges the investigator to analyze the evidence\n",
            "\n",
            "Keep it factual, mysterious, and engaging. Write in past tense. ",
            "Do not provide solutions.\n",
            "\n",
            "Briefing:"
        ),
        title = title,
        category = category,
        difficulty = difficulty
    )
}

/// Wraps blank-line separated paragraphs in `<p>` elements.
///
/// Paragraphs are trimmed and empty ones dropped. Returns an empty string
/// when the text holds no paragraphs.
///
/// # Examples
///
/// ```
/// use case_file::enrichment::format_briefing_paragraphs;
///
/// let html = format_briefing_paragraphs("  First.\n\n\n\nSecond.  ");
/// assert_eq!(html, "<p>First.</p>\n<p>Second.</p>");
/// ```
#[must_use]
pub fn format_briefing_paragraphs(text: &str) -> String {
    text.trim()
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| format!("<p>{paragraph}</p>"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extracts the outermost JSON object from model output.
///
/// Looks at the text following the first `Response:` marker when there is
/// one, then returns the span from the first `{` to the last `}`.
#[must_use]
pub fn extract_json_object(output: &str) -> Option<&str> {
    let answer = output
        .split(RESPONSE_MARKER)
        .nth(1)
        .filter(|segment| !segment.trim().is_empty())
        .unwrap_or(output);
    let start = answer.find('{')?;
    let end = answer.rfind('}')?;
    if end < start {
        return None;
    }
    answer.get(start..=end)
}
