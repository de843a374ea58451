// All Gemini prompt constants for the News module. No response schema here:
// grounded calls return narrative text plus citation metadata.

/// Tech-news prompt template.
/// Replace: {role}, {years}
pub const TECH_NEWS_PROMPT_TEMPLATE: &str = r#"List 8 of the most critical tech news stories, framework updates, or industry trends specifically for a {role} developer in {years}.
Explain why each matters to their career. Use Google Search to find current data."#;

/// Fixed fallback when the grounded call legitimately returns no text.
pub const TECH_NEWS_FALLBACK: &str = "No recent updates found. Try refreshing later.";

/// Citation fallbacks for chunks missing a title or uri.
pub const SOURCE_TITLE_FALLBACK: &str = "Tech News Source";
pub const SOURCE_URI_FALLBACK: &str = "#";
