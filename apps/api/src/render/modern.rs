//! Modern: two-column layout with a dark sidebar. Also the fallback layout.
//!
//! Sidebar: name and headline, contact list, skills with a 5-segment
//! proficiency indicator, certifications. Main column: summary, work
//! experience, education, projects.

use crate::models::resume::{
    CertificationItem, EducationItem, ExperienceItem, PersonalInfo, ProjectItem, ResumeData,
    SkillItem,
};
use crate::render::tree::{Element, Node};
use crate::render::{date_range, optional_date_range, present, TemplateRenderer};

const SEGMENTS: u8 = 5;
const DEFAULT_HEADLINE: &str = "Professional";

pub struct ModernTemplate;

impl TemplateRenderer for ModernTemplate {
    fn render(&self, data: &ResumeData) -> Node {
        Element::new("div")
            .class("resume resume-modern")
            .child(sidebar(data))
            .child(main_column(data))
            .into()
    }
}

/// Filled segments for a skill, or `None` when no indicator is shown.
///
/// Levels above the segment count fill every segment.
pub fn filled_segments(level: Option<u8>) -> Option<u8> {
    match level {
        None | Some(0) => None,
        Some(level) => Some(level.min(SEGMENTS)),
    }
}

fn sidebar(data: &ResumeData) -> Element {
    let info = &data.personal_info;
    let headline = data
        .experience
        .first()
        .map(|job| job.position.as_str())
        .filter(|position| !position.is_empty())
        .unwrap_or(DEFAULT_HEADLINE);

    Element::new("aside")
        .class("sidebar")
        .child(
            Element::new("header")
                .class("identity")
                .child(Element::new("h1").class("name").text(info.name.as_str()))
                .child(Element::new("p").class("headline").text(headline)),
        )
        .child(contact_block(info))
        .child(skills_block(&data.skills))
        .child_opt(certifications_block(data.certifications()))
}

fn contact_block(info: &PersonalInfo) -> Element {
    let entries = [
        ("phone", Some(info.phone.as_str())),
        ("email", Some(info.email.as_str())),
        ("website", present(&info.website)),
        ("linkedin", present(&info.linkedin)),
        ("github", present(&info.github)),
        ("address", Some(info.address.as_str())),
    ];

    let items = entries.into_iter().filter_map(|(kind, value)| {
        value.map(|value| {
            Element::new("li")
                .class("contact-item")
                .attr("data-kind", kind)
                .text(value)
        })
    });

    Element::new("section")
        .class("contact")
        .child(Element::new("h2").text("Contact"))
        .child(Element::new("ul").children(items))
}

fn skills_block(skills: &[SkillItem]) -> Element {
    Element::new("section")
        .class("skills")
        .child(Element::new("h2").text("Skills"))
        .child(
            Element::new("div")
                .class("skill-list")
                .children(skills.iter().map(skill_row)),
        )
}

fn skill_row(skill: &SkillItem) -> Element {
    Element::new("div")
        .class("skill")
        .item_id(&skill.id)
        .child(Element::new("span").class("skill-name").text(skill.name.as_str()))
        .child_opt(filled_segments(skill.level).map(level_indicator))
}

fn level_indicator(filled: u8) -> Element {
    let segments = (0..SEGMENTS).map(|i| {
        Element::new("span").class(if i < filled {
            "segment segment-filled"
        } else {
            "segment segment-empty"
        })
    });

    Element::new("span")
        .class("level-indicator")
        .attr("aria-label", format!("{filled} of {SEGMENTS}"))
        .children(segments)
}

fn certifications_block(certifications: &[CertificationItem]) -> Option<Element> {
    if certifications.is_empty() {
        return None;
    }

    let items = certifications.iter().map(|cert| {
        Element::new("li")
            .class("certification")
            .item_id(&cert.id)
            .child(Element::new("h3").text(cert.name.as_str()))
            .child(
                Element::new("p")
                    .class("meta")
                    .text(format!("{} • {}", cert.issuer, cert.date)),
            )
            .child_opt(present(&cert.link).map(link))
    });

    Some(
        Element::new("section")
            .class("certifications")
            .child(Element::new("h2").text("Certifications"))
            .child(Element::new("ul").children(items)),
    )
}

fn main_column(data: &ResumeData) -> Element {
    Element::new("main")
        .class("content")
        .child(
            Element::new("section")
                .class("summary")
                .child(Element::new("h2").text("Professional Summary"))
                .child(Element::new("p").text(data.personal_info.summary.as_str())),
        )
        .child(
            Element::new("section")
                .class("experience")
                .child(Element::new("h2").text("Work Experience"))
                .child(
                    Element::new("div")
                        .class("entries")
                        .children(data.experience.iter().map(job_entry)),
                ),
        )
        .child(
            Element::new("section")
                .class("education")
                .child(Element::new("h2").text("Education"))
                .child(
                    Element::new("div")
                        .class("entries")
                        .children(data.education.iter().map(education_entry)),
                ),
        )
        .child_opt(projects_block(data.projects()))
}

fn job_entry(job: &ExperienceItem) -> Element {
    Element::new("article")
        .class("entry")
        .item_id(&job.id)
        .child(entry_header(
            &job.position,
            &job.company,
            date_range(&job.start_date, &job.end_date),
            present(&job.location),
        ))
        .child(Element::new("p").class("description").text(job.description.as_str()))
}

fn education_entry(edu: &EducationItem) -> Element {
    Element::new("article")
        .class("entry")
        .item_id(&edu.id)
        .child(entry_header(
            &format!("{} in {}", edu.degree, edu.field),
            &edu.institution,
            date_range(&edu.start_date, &edu.end_date),
            present(&edu.location),
        ))
        .child_opt(
            present(&edu.description)
                .map(|d| Element::new("p").class("description").text(d)),
        )
}

/// Title and organisation on the left, dates and location on the right.
fn entry_header(title: &str, organisation: &str, dates: String, location: Option<&str>) -> Element {
    Element::new("div")
        .class("entry-header")
        .child(
            Element::new("div")
                .class("entry-title")
                .child(Element::new("h3").text(title))
                .child(Element::new("p").class("organisation").text(organisation)),
        )
        .child(
            Element::new("div")
                .class("entry-meta")
                .child(Element::new("p").class("dates").text(dates))
                .child_opt(location.map(|l| Element::new("p").class("location").text(l))),
        )
}

fn projects_block(projects: &[ProjectItem]) -> Option<Element> {
    if projects.is_empty() {
        return None;
    }

    let items = projects.iter().map(|project| {
        let dates = optional_date_range(present(&project.start_date), present(&project.end_date));
        Element::new("article")
            .class("entry")
            .item_id(&project.id)
            .child(Element::new("h3").text(project.name.as_str()))
            .child_opt(
                present(&project.technologies)
                    .map(|t| Element::new("p").class("technologies").text(t)),
            )
            .child_opt(dates.map(|d| Element::new("p").class("dates").text(d)))
            .child(
                Element::new("p")
                    .class("description")
                    .text(project.description.as_str()),
            )
            .child_opt(present(&project.link).map(link))
    });

    Some(
        Element::new("section")
            .class("projects")
            .child(Element::new("h2").text("Projects"))
            .child(Element::new("div").class("entries").children(items)),
    )
}

fn link(href: &str) -> Element {
    Element::new("a").class("link").attr("href", href).text(href)
}
