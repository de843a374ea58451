// Learning roadmap: gaps → prioritized items with curated resources, plus the
// per-resource quick-study guide. All LLM calls go through gemini.

pub mod builder;
pub mod handlers;
pub mod prompts;
pub mod study;
