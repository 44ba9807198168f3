//! Keyword-based detection of the "show me my resume" intent.

/// Affirmative/view tokens checked against the lowercased message.
const VIEW_TOKENS: &[&str] = &[
    "yes",
    "yeah",
    "sure",
    "ok",
    "okay",
    "show me",
    "view",
    "see",
    "display",
    "final resume",
];

/// Returns true when the message reads as a request to view the finished
/// resume.
///
/// Plain substring matching against a fixed token list; no tokenization.
/// False positives such as "ok i disagree" or "I am not ok with it" are
/// accepted, documented behavior. Do not replace this with anything
/// smarter without a new requirement, as that silently changes observable
/// behavior.
pub fn is_resume_view_request(message: &str) -> bool {
    let lowered = message.to_lowercase();
    let lowered = lowered.trim();
    VIEW_TOKENS.iter().any(|token| lowered.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_affirmatives_match() {
        assert!(is_resume_view_request("yes"));
        assert!(is_resume_view_request("Yeah!"));
        assert!(is_resume_view_request("sure thing"));
        assert!(is_resume_view_request("Show me please"));
        assert!(is_resume_view_request("display it"));
        assert!(is_resume_view_request("the final resume, please"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_resume_view_request("OK I guess"));
        assert!(is_resume_view_request("SHOW ME"));
    }

    #[test]
    fn non_matches_return_false() {
        assert!(!is_resume_view_request(""));
        assert!(!is_resume_view_request("   "));
        assert!(!is_resume_view_request("no thanks"));
        assert!(!is_resume_view_request("maybe later"));
    }

    #[test]
    fn substring_false_positives_are_preserved() {
        // Documented quirk of the substring match, kept on purpose.
        assert!(is_resume_view_request("I am not ok with it"));
        assert!(is_resume_view_request("ok i disagree"));
    }
}
