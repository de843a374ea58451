// Onboarding: resume upload and text extraction. The extracted text goes back
// to the client, which embeds it into the profile it sends with later calls —
// the service itself stores nothing.

pub mod handlers;
pub mod resume;
