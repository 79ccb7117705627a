//! Reference parser backends: a deterministic fixture and an always-failing stub.

use async_trait::async_trait;

use crate::models::resume::{
    CertificationItem, EducationItem, ExperienceItem, PersonalInfo, ProjectItem, ResumeData,
    SkillItem,
};
use crate::parsing::{MediaType, ParseError, ResumeParser, UploadedDocument};

const PDF_SIGNATURE: &[u8] = b"%PDF-";
/// DOCX is a ZIP container; every archive starts with a local file header.
const ZIP_SIGNATURE: &[u8] = b"PK\x03\x04";

/// Returns a fixed resume for any well-formed document.
///
/// The only check performed is the file signature, so a body that does not
/// match its declared type is reported as malformed.
pub struct FixtureParser;

#[async_trait]
impl ResumeParser for FixtureParser {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn parse(
        &self,
        document: &UploadedDocument,
        media_type: MediaType,
    ) -> Result<ResumeData, ParseError> {
        check_signature(&document.content, media_type)?;
        Ok(sample_resume())
    }
}

/// Always fails. Used to exercise the failure path end to end.
pub struct FailingParser {
    reason: String,
}

impl FailingParser {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ResumeParser for FailingParser {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn parse(
        &self,
        _document: &UploadedDocument,
        _media_type: MediaType,
    ) -> Result<ResumeData, ParseError> {
        Err(ParseError::ParseFailure(self.reason.clone()))
    }
}

fn check_signature(content: &[u8], media_type: MediaType) -> Result<(), ParseError> {
    if content.is_empty() {
        return Err(ParseError::ParseFailure("document is empty".to_string()));
    }

    let signature = match media_type {
        MediaType::Pdf => PDF_SIGNATURE,
        MediaType::Docx => ZIP_SIGNATURE,
    };

    if content.starts_with(signature) {
        Ok(())
    } else {
        Err(ParseError::ParseFailure(format!(
            "document content does not look like {}",
            media_type.mime()
        )))
    }
}

fn sample_resume() -> ResumeData {
    ResumeData {
        personal_info: PersonalInfo {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            address: "New York, NY".to_string(),
            website: Some("johndoe.com".to_string()),
            linkedin: Some("linkedin.com/in/johndoe".to_string()),
            github: Some("github.com/johndoe".to_string()),
            summary: "Experienced software developer with a passion for creating elegant, efficient solutions.".to_string(),
        },
        education: vec![EducationItem {
            id: "1".to_string(),
            institution: "University of Technology".to_string(),
            degree: "Bachelor of Science".to_string(),
            field: "Computer Science".to_string(),
            start_date: "2015".to_string(),
            end_date: "2019".to_string(),
            location: Some("Boston, MA".to_string()),
            description: None,
        }],
        experience: vec![
            ExperienceItem {
                id: "1".to_string(),
                company: "Tech Solutions Inc.".to_string(),
                position: "Senior Software Engineer".to_string(),
                start_date: "2020".to_string(),
                end_date: "Present".to_string(),
                location: Some("New York, NY".to_string()),
                description: "Led development of cloud-based applications using React and Node.js. Implemented CI/CD pipelines and mentored junior developers.".to_string(),
            },
            ExperienceItem {
                id: "2".to_string(),
                company: "Digital Innovations".to_string(),
                position: "Software Developer".to_string(),
                start_date: "2019".to_string(),
                end_date: "2020".to_string(),
                location: Some("Boston, MA".to_string()),
                description: "Developed web applications using JavaScript and Python. Collaborated with UX designers to improve user experience.".to_string(),
            },
        ],
        skills: [
            ("1", "JavaScript", 5),
            ("2", "React", 4),
            ("3", "Node.js", 4),
            ("4", "Python", 3),
            ("5", "SQL", 4),
        ]
        .into_iter()
        .map(|(id, name, level)| SkillItem {
            id: id.to_string(),
            name: name.to_string(),
            level: Some(level),
        })
        .collect(),
        projects: Some(vec![ProjectItem {
            id: "1".to_string(),
            name: "E-Commerce Platform".to_string(),
            description: "Built a full-stack e-commerce platform with React, Node.js, and MongoDB"
                .to_string(),
            technologies: Some("React, Node.js, Express, MongoDB".to_string()),
            link: Some("github.com/johndoe/ecommerce".to_string()),
            start_date: None,
            end_date: None,
        }]),
        certifications: Some(vec![CertificationItem {
            id: "1".to_string(),
            name: "AWS Certified Developer".to_string(),
            issuer: "Amazon Web Services".to_string(),
            date: "2021".to_string(),
            link: Some("aws.amazon.com/certification/".to_string()),
        }]),
    }
}
