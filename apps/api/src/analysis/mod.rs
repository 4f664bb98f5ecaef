//! Skill-gap analysis: weighted per-career breakdowns plus batched AI
//! insights, snapshotted to the analyses table.

pub mod handlers;
