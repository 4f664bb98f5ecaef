//! Skill-gap matching engine: proficiency scales, the weighted match
//! calculator, and the career ranker. Pure functions over plain data — both
//! stored and AI-generated careers flow through the same code.

pub mod proficiency;
pub mod rank;
pub mod score;

pub use proficiency::{Importance, Proficiency};
pub use rank::{rank_careers, RankedCareer};
pub use score::{compute_match, MatchBreakdown, RequiredSkill, UserSkillEntry};
