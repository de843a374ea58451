// Typed entities exchanged with the client and with Gemini.
// Wire names match the product JSON: camelCase fields, spelled-out enum
// variants ("Full Stack", "Mid-Level", "Not Familiar").

pub mod analysis;
pub mod assessment;
pub mod interview;
pub mod news;
pub mod profile;
pub mod roadmap;
