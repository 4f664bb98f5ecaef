//! Built-in seed dataset: the skill catalog, careers with their weighted
//! requirement sets, and curated learning resources.

use crate::matching::{Importance, Proficiency, RequiredSkill};

pub struct SeedSkill {
    pub name: &'static str,
    pub category: &'static str,
    pub subcategory: &'static str,
    pub demand_score: i32,
}

pub struct SeedCareer {
    pub title: &'static str,
    pub description: &'static str,
    pub salary_range: &'static str,
    pub growth_outlook: &'static str,
    pub demand_score: i32,
    pub required_skills: Vec<RequiredSkill>,
}

pub struct SeedResource {
    pub skill_name: &'static str,
    pub title: &'static str,
    pub provider: &'static str,
    pub url: &'static str,
    pub resource_type: &'static str,
    pub difficulty: &'static str,
    pub duration: &'static str,
    pub is_free: bool,
    pub cost: Option<f64>,
    pub rating: f32,
    pub review_count: i32,
}

pub fn initial_skills() -> Vec<SeedSkill> {
    vec![
        skill("JavaScript", "Technical", "Programming", 95),
        skill("Python", "Technical", "Programming", 93),
        skill("React", "Technical", "Frontend", 90),
        skill("Node.js", "Technical", "Backend", 85),
        skill("SQL", "Technical", "Database", 88),
        skill("Git", "Tools", "Version Control", 92),
        skill("Communication", "Soft Skills", "Interpersonal", 87),
        skill("Problem Solving", "Soft Skills", "Critical Thinking", 89),
        skill("Machine Learning", "Technical", "AI/ML", 82),
        skill("Docker", "Tools", "DevOps", 78),
    ]
}

pub fn initial_careers() -> Vec<SeedCareer> {
    vec![
        SeedCareer {
            title: "Full Stack Developer",
            description: "Builds both client-side and server-side software applications.",
            salary_range: "$60,000 - $180,000",
            growth_outlook: "High Growth",
            demand_score: 95,
            required_skills: vec![
                required("JavaScript", Importance::Critical, Proficiency::Advanced, 9.0),
                required("React", Importance::Important, Proficiency::Intermediate, 7.0),
                required("Node.js", Importance::Important, Proficiency::Intermediate, 7.0),
                required("SQL", Importance::Important, Proficiency::Intermediate, 6.0),
                required("Git", Importance::Important, Proficiency::Beginner, 4.0),
            ],
        },
        SeedCareer {
            title: "Data Scientist",
            description: "Analyzes and interprets complex digital data to help organizations make decisions.",
            salary_range: "$80,000 - $200,000",
            growth_outlook: "High Growth",
            demand_score: 98,
            required_skills: vec![
                required("Python", Importance::Critical, Proficiency::Advanced, 10.0),
                required("Machine Learning", Importance::Critical, Proficiency::Intermediate, 8.0),
                required("SQL", Importance::Important, Proficiency::Intermediate, 7.0),
                required("Problem Solving", Importance::Important, Proficiency::Intermediate, 5.0),
            ],
        },
        SeedCareer {
            title: "DevOps Engineer",
            description: "Introduces processes, tools, and methodologies to balance needs throughout the software development life cycle.",
            salary_range: "$75,000 - $190,000",
            growth_outlook: "High Growth",
            demand_score: 94,
            required_skills: vec![
                required("Docker", Importance::Critical, Proficiency::Intermediate, 9.0),
                required("Git", Importance::Critical, Proficiency::Intermediate, 6.0),
                required("Python", Importance::Important, Proficiency::Intermediate, 6.0),
                required("SQL", Importance::NiceToHave, Proficiency::Beginner, 2.0),
            ],
        },
        SeedCareer {
            title: "UX Designer",
            description: "Designs products that are useful, easy to use, and delightful to interact with.",
            salary_range: "$55,000 - $160,000",
            growth_outlook: "Growing",
            demand_score: 88,
            required_skills: vec![
                required("Communication", Importance::Critical, Proficiency::Intermediate, 8.0),
                required("Problem Solving", Importance::Important, Proficiency::Intermediate, 6.0),
                required("JavaScript", Importance::NiceToHave, Proficiency::Beginner, 3.0),
            ],
        },
        SeedCareer {
            title: "Product Manager",
            description: "Identifies the customer need and the larger business objectives that a product or feature will fulfill.",
            salary_range: "$70,000 - $200,000",
            growth_outlook: "Stable",
            demand_score: 90,
            required_skills: vec![
                required("Communication", Importance::Critical, Proficiency::Advanced, 9.0),
                required("Problem Solving", Importance::Critical, Proficiency::Intermediate, 8.0),
                required("SQL", Importance::NiceToHave, Proficiency::Beginner, 3.0),
            ],
        },
    ]
}

pub fn initial_resources() -> Vec<SeedResource> {
    vec![
        SeedResource {
            skill_name: "JavaScript",
            title: "The Complete JavaScript Course 2024: From Zero to Expert!",
            provider: "Udemy",
            url: "https://www.udemy.com/course/the-complete-javascript-course/",
            resource_type: "Course",
            difficulty: "Beginner",
            duration: "69 hours",
            is_free: false,
            cost: Some(19.99),
            rating: 4.8,
            review_count: 150_000,
        },
        SeedResource {
            skill_name: "JavaScript",
            title: "JavaScript Crash Course for Beginners",
            provider: "YouTube",
            url: "https://www.youtube.com/watch?v=hdI2bqOjy3c",
            resource_type: "Video",
            difficulty: "Beginner",
            duration: "1.5 hours",
            is_free: true,
            cost: None,
            rating: 4.9,
            review_count: 50_000,
        },
        SeedResource {
            skill_name: "React",
            title: "React - The Complete Guide 2024",
            provider: "Udemy",
            url: "https://www.udemy.com/course/react-the-complete-guide-incl-redux/",
            resource_type: "Course",
            difficulty: "Intermediate",
            duration: "40 hours",
            is_free: false,
            cost: Some(19.99),
            rating: 4.7,
            review_count: 180_000,
        },
        SeedResource {
            skill_name: "Node.js",
            title: "Node.js API Masterclass (with Express & MongoDB)",
            provider: "Udemy",
            url: "https://www.udemy.com/course/nodejs-api-masterclass/",
            resource_type: "Course",
            difficulty: "Advanced",
            duration: "12 hours",
            is_free: false,
            cost: Some(19.99),
            rating: 4.7,
            review_count: 20_000,
        },
        SeedResource {
            skill_name: "Python",
            title: "Python 101",
            provider: "Coursera",
            url: "https://www.coursera.org/learn/python",
            resource_type: "Course",
            difficulty: "Beginner",
            duration: "20 hours",
            is_free: true,
            cost: None,
            rating: 4.8,
            review_count: 500_000,
        },
        SeedResource {
            skill_name: "SQL",
            title: "SQL for Data Analysis",
            provider: "Coursera",
            url: "https://www.coursera.org/learn/sql-for-data-science",
            resource_type: "Course",
            difficulty: "Beginner",
            duration: "14 hours",
            is_free: true,
            cost: None,
            rating: 4.6,
            review_count: 120_000,
        },
        SeedResource {
            skill_name: "Machine Learning",
            title: "Machine Learning Specialization",
            provider: "Coursera",
            url: "https://www.coursera.org/specializations/machine-learning-introduction",
            resource_type: "Course",
            difficulty: "Intermediate",
            duration: "3 months",
            is_free: false,
            cost: Some(49.0),
            rating: 4.9,
            review_count: 200_000,
        },
        SeedResource {
            skill_name: "Docker",
            title: "Docker Tutorial for Beginners",
            provider: "YouTube",
            url: "https://www.youtube.com/watch?v=3c-iBn73dDE",
            resource_type: "Video",
            difficulty: "Beginner",
            duration: "3 hours",
            is_free: true,
            cost: None,
            rating: 4.8,
            review_count: 80_000,
        },
        SeedResource {
            skill_name: "Git",
            title: "Git & GitHub Crash Course For Beginners",
            provider: "YouTube",
            url: "https://www.youtube.com/watch?v=Get-8k24uU",
            resource_type: "Video",
            difficulty: "Beginner",
            duration: "1 hour",
            is_free: true,
            cost: None,
            rating: 4.9,
            review_count: 100_000,
        },
    ]
}

fn skill(
    name: &'static str,
    category: &'static str,
    subcategory: &'static str,
    demand_score: i32,
) -> SeedSkill {
    SeedSkill {
        name,
        category,
        subcategory,
        demand_score,
    }
}

fn required(
    name: &str,
    importance: Importance,
    minimum_proficiency: Proficiency,
    weight: f64,
) -> RequiredSkill {
    RequiredSkill {
        skill_id: None,
        skill_name: name.to_string(),
        importance,
        minimum_proficiency,
        weight: Some(weight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_career_titles_are_unique() {
        let careers = initial_careers();
        let titles: HashSet<&str> = careers.iter().map(|c| c.title).collect();
        assert_eq!(titles.len(), careers.len());
    }

    #[test]
    fn test_every_seed_career_has_requirements() {
        // The ranker excludes requirement-less careers; seed data must never
        // ship one.
        for career in initial_careers() {
            assert!(
                !career.required_skills.is_empty(),
                "career '{}' has no required skills",
                career.title
            );
        }
    }

    #[test]
    fn test_seed_requirements_reference_cataloged_skills() {
        let catalog: HashSet<&str> = initial_skills().iter().map(|s| s.name).collect();
        for career in initial_careers() {
            for required in &career.required_skills {
                assert!(
                    catalog.contains(required.skill_name.as_str()),
                    "'{}' requires uncataloged skill '{}'",
                    career.title,
                    required.skill_name
                );
            }
        }
    }

    #[test]
    fn test_seed_weights_are_positive_and_bounded() {
        for career in initial_careers() {
            for required in &career.required_skills {
                let weight = required.weight.expect("seed skills carry explicit weights");
                assert!((1.0..=10.0).contains(&weight));
            }
        }
    }

    #[test]
    fn test_paid_resources_carry_a_cost() {
        for resource in initial_resources() {
            if !resource.is_free {
                assert!(resource.cost.is_some(), "paid '{}' lacks cost", resource.title);
            }
        }
    }
}
