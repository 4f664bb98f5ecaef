//! Career Ranker — name-overlap scoring of many careers against one user,
//! producing the top-N shortlist that feeds caching and enrichment.

use serde::Serialize;

/// A career scored by required-skill name overlap. `career` is whatever row
/// or record type the caller ranked, carried through untouched.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCareer<C> {
    pub career: C,
    /// Integer percentage, 0-100.
    pub match_score: u32,
    /// User skills that appear in the career's requirements (user order).
    pub matching_skills: Vec<String>,
    /// Required skills the user lacks (requirement order).
    pub missing_skills: Vec<String>,
}

/// Ranks careers by the fraction of their required skill names the user has.
///
/// Careers with an empty requirement list are excluded rather than scored 0:
/// a match percentage over zero requirements is undefined and such entries
/// are catalog defects, not real candidates. Ties keep first-seen input
/// order; the result is truncated to `top_n`.
pub fn rank_careers<C>(
    user_skill_names: &[String],
    careers: Vec<(C, Vec<String>)>,
    top_n: usize,
) -> Vec<RankedCareer<C>> {
    let mut ranked: Vec<RankedCareer<C>> = careers
        .into_iter()
        .filter_map(|(career, required)| {
            if required.is_empty() {
                return None;
            }

            let matching_skills: Vec<String> = user_skill_names
                .iter()
                .filter(|name| required.contains(name))
                .cloned()
                .collect();
            let missing_skills: Vec<String> = required
                .iter()
                .filter(|name| !user_skill_names.contains(name))
                .cloned()
                .collect();

            let match_score =
                ((matching_skills.len() as f64 / required.len() as f64) * 100.0).round() as u32;

            Some(RankedCareer {
                career,
                match_score,
                matching_skills,
                missing_skills,
            })
        })
        .collect();

    // Stable sort: equal scores retain input order.
    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_score_is_rounded_overlap_fraction() {
        let user = names(&["SQL", "Python"]);
        let careers = vec![("Data Analyst", names(&["SQL", "Python", "Tableau"]))];

        let ranked = rank_careers(&user, careers, 5);
        assert_eq!(ranked.len(), 1);
        // 2 of 3 -> 66.67 -> 67
        assert_eq!(ranked[0].match_score, 67);
        assert_eq!(ranked[0].matching_skills, names(&["SQL", "Python"]));
        assert_eq!(ranked[0].missing_skills, names(&["Tableau"]));
    }

    #[test]
    fn test_sorted_non_increasing_by_score() {
        let user = names(&["SQL", "Python", "Git"]);
        let careers = vec![
            ("Low", names(&["Rust", "Go", "C"])),
            ("High", names(&["SQL", "Python"])),
            ("Mid", names(&["SQL", "Kubernetes"])),
        ];

        let ranked = rank_careers(&user, careers, 5);
        let scores: Vec<u32> = ranked.iter().map(|r| r.match_score).collect();
        let mut sorted = scores.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted);
        assert_eq!(ranked[0].career, "High");
    }

    #[test]
    fn test_truncates_to_top_n() {
        let user = names(&["SQL"]);
        let careers: Vec<(String, Vec<String>)> = (0..8)
            .map(|i| (format!("career-{i}"), names(&["SQL"])))
            .collect();

        let ranked = rank_careers(&user, careers, 5);
        assert_eq!(ranked.len(), 5);
    }

    #[test]
    fn test_output_never_exceeds_input_length() {
        let user = names(&["SQL"]);
        let careers = vec![("Only", names(&["SQL"]))];
        let ranked = rank_careers(&user, careers, 5);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_career_with_no_requirements_is_excluded() {
        let user = names(&["SQL"]);
        let careers = vec![
            ("Empty", vec![]),
            ("Real", names(&["SQL"])),
        ];

        let ranked = rank_careers(&user, careers, 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].career, "Real");
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let user = names(&["SQL"]);
        let careers = vec![
            ("First", names(&["SQL", "Rust"])),
            ("Second", names(&["SQL", "Go"])),
            ("Third", names(&["SQL", "C"])),
        ];

        let ranked = rank_careers(&user, careers, 5);
        let order: Vec<&str> = ranked.iter().map(|r| r.career).collect();
        assert_eq!(order, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_no_overlap_scores_zero_but_is_listed() {
        let user = names(&["Figma"]);
        let careers = vec![("Backend", names(&["Rust", "SQL"]))];

        let ranked = rank_careers(&user, careers, 5);
        assert_eq!(ranked[0].match_score, 0);
        assert!(ranked[0].matching_skills.is_empty());
        assert_eq!(ranked[0].missing_skills.len(), 2);
    }
}
