pub const COMPLETION_MODEL: &str = "llama3-70b-8192";
pub const COMPLETION_TEMPERATURE: f32 = 0.7;

/// System instruction for the course creator. The visitor's prompt is
/// embedded verbatim between single quotes, without escaping.
pub fn course_outline_prompt(prompt: &str) -> String {
    format!(
        "You are a course creator AI. Create a full course outline based on this prompt: '{prompt}'. Include course title, 3–5 modules, and 2–3 lessons per module."
    )
}
