// Shared prompt fragments. Each service that calls the generator keeps its own
// prompts.rs alongside it and appends these where needed.

/// Appended to every rewrite prompt so the reply can be written straight back into a field.
pub const PLAIN_OUTPUT_INSTRUCTION: &str = "\
    Respond with the rewritten text only. \
    Do NOT add a preamble, headings, quotes, or explanations. \
    Do NOT use markdown formatting.";

/// Keeps the model from inventing facts the candidate never claimed.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    Keep every fact from the original. \
    Do NOT invent employers, numbers, dates, or credentials that are not present.";
