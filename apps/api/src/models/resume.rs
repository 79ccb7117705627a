//! Resume Data Model: the canonical in-memory representation of a resume.
//!
//! Plain records only. Required attributes are always present (an empty string
//! is a value, not a missing field); optional attributes are `Option`.
//! Sequence order is insertion order and is display order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub description: String,
}

/// A single skill. `level` is a proficiency tier, nominally 1–5.
///
/// The bound is not enforced here: out-of-range values are stored as given and
/// each template decides how to display them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
}

/// Labels for levels 1..=5, in order.
const PROFICIENCY_LABELS: [&str; 5] = [
    "Beginner",
    "Elementary",
    "Intermediate",
    "Advanced",
    "Expert",
];

impl SkillItem {
    /// Human-readable proficiency tier. Levels above 5 read as "Expert";
    /// an absent level or 0 has no label.
    pub fn proficiency_label(&self) -> Option<&'static str> {
        match self.level {
            None | Some(0) => None,
            Some(level) => Some(PROFICIENCY_LABELS[(level.min(5) - 1) as usize]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationItem {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationItem>,
    pub experience: Vec<ExperienceItem>,
    pub skills: Vec<SkillItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<CertificationItem>>,
}

impl ResumeData {
    /// The starting point of a fresh editing session: one row in each required
    /// section so there is always something to edit.
    pub fn placeholder() -> Self {
        ResumeData {
            personal_info: PersonalInfo {
                name: "Your Name".to_string(),
                email: "email@example.com".to_string(),
                phone: "(123) 456-7890".to_string(),
                address: "City, State".to_string(),
                website: None,
                linkedin: None,
                github: None,
                summary: "Write a brief summary about your professional background, skills, and career goals.".to_string(),
            },
            education: vec![EducationItem {
                id: "1".to_string(),
                institution: "University Name".to_string(),
                degree: "Degree".to_string(),
                field: "Field of Study".to_string(),
                start_date: "20XX".to_string(),
                end_date: "20XX".to_string(),
                location: Some("City, State".to_string()),
                description: None,
            }],
            experience: vec![ExperienceItem {
                id: "1".to_string(),
                company: "Company Name".to_string(),
                position: "Job Title".to_string(),
                start_date: "20XX".to_string(),
                end_date: "Present".to_string(),
                location: Some("City, State".to_string()),
                description: "Describe your responsibilities and achievements in this role."
                    .to_string(),
            }],
            skills: vec![
                skill("1", "Skill 1", 4),
                skill("2", "Skill 2", 3),
                skill("3", "Skill 3", 5),
            ],
            projects: None,
            certifications: None,
        }
    }

    /// Projects, with an absent sequence read as zero items.
    pub fn projects(&self) -> &[ProjectItem] {
        self.projects.as_deref().unwrap_or_default()
    }

    /// Certifications, with an absent sequence read as zero items.
    pub fn certifications(&self) -> &[CertificationItem] {
        self.certifications.as_deref().unwrap_or_default()
    }

    /// Checks the structural invariants a fully populated resume must hold.
    ///
    /// Returns every violation found, not just the first.
    pub fn check_integrity(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if self.education.is_empty() {
            problems.push("education must contain at least one entry".to_string());
        }
        if self.experience.is_empty() {
            problems.push("experience must contain at least one entry".to_string());
        }
        if self.skills.is_empty() {
            problems.push("skills must contain at least one entry".to_string());
        }

        check_ids(
            "education",
            self.education.iter().map(|e| e.id.as_str()),
            &mut problems,
        );
        check_ids(
            "experience",
            self.experience.iter().map(|e| e.id.as_str()),
            &mut problems,
        );
        check_ids(
            "skills",
            self.skills.iter().map(|s| s.id.as_str()),
            &mut problems,
        );
        check_ids(
            "projects",
            self.projects().iter().map(|p| p.id.as_str()),
            &mut problems,
        );
        check_ids(
            "certifications",
            self.certifications().iter().map(|c| c.id.as_str()),
            &mut problems,
        );

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

fn skill(id: &str, name: &str, level: u8) -> SkillItem {
    SkillItem {
        id: id.to_string(),
        name: name.to_string(),
        level: Some(level),
    }
}

fn check_ids<'a>(section: &str, ids: impl Iterator<Item = &'a str>, problems: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for id in ids {
        if id.is_empty() {
            problems.push(format!("{section} contains an item with an empty id"));
        } else if !seen.insert(id) {
            problems.push(format!("{section} contains duplicate id '{id}'"));
        }
    }
}
