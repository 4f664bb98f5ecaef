//! Recommendations: ranked career shortlist and per-skill learning paths,
//! both enriched through the cached batch LLM contracts.

pub mod handlers;
