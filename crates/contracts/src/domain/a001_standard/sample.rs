//! Bundled sample catalog shown until (or instead of) the real data file.

use super::aggregate::StandardRecord;
use once_cell::sync::Lazy;

static FALLBACK: Lazy<Vec<StandardRecord>> = Lazy::new(|| {
    vec![
        record(
            "Grade 3",
            "Reading Literary",
            "ELAGSE3RL1",
            "Ask and answer questions to demonstrate understanding of a text, referring explicitly to the text as the basis for the answers.",
            "Students locate the part of a story that answers a question and point to it when explaining.",
            "Developing: answers literal questions with partial support from the text. Proficient: answers literal and inferential questions, referring explicitly to the text.",
            "Responses name the specific sentence or paragraph that supports the answer.",
            &[
                "SR: Which sentence from the story best shows how Maya feels about the move?",
                "CR: What lesson does the fox learn? Use details from the story to support your answer.",
            ],
        ),
        record(
            "Grade 4",
            "Reading Informational",
            "ELAGSE4RI2",
            "Determine the main idea of a text and explain how it is supported by key details; summarize the text.",
            "Summaries stay objective and keep the most important ideas in order.",
            "Developing: identifies a topic but not a main idea. Proficient: states the main idea and connects two or more key details to it.",
            "Summaries omit personal opinion and include the central idea with its key details.",
            &["SR: Which statement best tells the main idea of the article?"],
        ),
        record(
            "Grade 5",
            "Reading Literary",
            "ELAGSE5RL1",
            "Quote accurately from a text when explaining what the text says explicitly and when drawing inferences from the text.",
            "Emphasis on accurate quoting and on telling explicit statements apart from inferences.",
            "Developing: cites general parts of the text. Proficient: quotes accurately and explains how the quotation supports an inference.",
            "Student responses include quotation marks around exact text and an explanation of the inference.",
            &[
                "EBSR: Choose two quotes that best support the inference that the narrator is nervous.",
                "SR: Which quotation best shows why the character changes her mind?",
            ],
        ),
        record(
            "Grade 5",
            "Writing",
            "ELAGSE5W2",
            "Write informative/explanatory texts to examine a topic and convey ideas and information clearly.",
            "Introduce a topic clearly, group related information logically, and use precise language and domain-specific vocabulary.",
            "Developing: presents facts with limited organization. Proficient: organizes information into paragraphs with a clear introduction and conclusion.",
            "Drafts show grouped paragraphs, linking words such as 'in contrast' and 'especially', and a concluding statement.",
            &[],
        ),
        record(
            "Grade 6",
            "Language",
            "ELAGSE6L4",
            "Determine or clarify the meaning of unknown and multiple-meaning words and phrases based on grade 6 reading and content.",
            "Use context, Greek and Latin affixes and roots, and reference materials to work out word meanings.",
            "Developing: uses context for familiar words only. Proficient: combines context and word parts to determine meaning.",
            "Students annotate the context clue or root used to determine each meaning.",
            &["SR: What does the word 'reluctant' mean as it is used in paragraph 3?"],
        ),
        record(
            "Grade 7",
            "Speaking and Listening",
            "ELAGSE7SL1",
            "Engage effectively in a range of collaborative discussions with diverse partners on grade 7 topics, texts, and issues.",
            "Come to discussions prepared, follow rules for collegial discussions, and respond to others' questions with relevant observations.",
            "Developing: participates when prompted. Proficient: poses questions that elicit elaboration and acknowledges new information.",
            "Discussion logs record questions posed and how the student built on a peer's idea.",
            &[],
        ),
    ]
});

/// The six bundled sample records, in display-independent source order.
pub fn fallback_records() -> Vec<StandardRecord> {
    FALLBACK.clone()
}

#[allow(clippy::too_many_arguments)]
fn record(
    grade: &str,
    strand: &str,
    code: &str,
    description: &str,
    details: &str,
    ald: &str,
    evidence: &str,
    samples: &[&str],
) -> StandardRecord {
    StandardRecord {
        grade: grade.to_string(),
        strand: strand.to_string(),
        code: code.to_string(),
        description: Some(description.to_string()),
        details: Some(details.to_string()),
        ald: Some(ald.to_string()),
        evidence: Some(evidence.to_string()),
        samples: Some(samples.iter().map(|s| s.to_string()).collect()),
    }
}
