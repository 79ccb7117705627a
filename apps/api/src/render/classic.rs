//! Classic: traditional single-column layout.
//!
//! Centered header with the name and a single contact line joined by " • ".
//! Sections follow in a fixed order: Summary, Experience, Education, Skills,
//! then Projects and Certifications when they have entries. Skills are listed
//! as "name (label)" using the proficiency vocabulary instead of a graphic.

use crate::models::resume::{
    CertificationItem, EducationItem, ExperienceItem, PersonalInfo, ProjectItem, ResumeData,
    SkillItem,
};
use crate::render::tree::{Element, Node};
use crate::render::{date_range, optional_date_range, present, TemplateRenderer};

const CONTACT_SEPARATOR: &str = " • ";

pub struct ClassicTemplate;

impl TemplateRenderer for ClassicTemplate {
    fn render(&self, data: &ResumeData) -> Node {
        Element::new("div")
            .class("resume resume-classic")
            .child(header(&data.personal_info))
            .child(
                section("summary", "Summary")
                    .child(Element::new("p").text(data.personal_info.summary.as_str())),
            )
            .child(
                section("experience", "Experience")
                    .children(data.experience.iter().map(job_entry)),
            )
            .child(
                section("education", "Education")
                    .children(data.education.iter().map(education_entry)),
            )
            .child(
                section("skills", "Skills")
                    .child(
                        Element::new("ul").children(data.skills.iter().map(skill_entry)),
                    ),
            )
            .child_opt(projects_section(data.projects()))
            .child_opt(certifications_section(data.certifications()))
            .into()
    }
}

/// The contact line: email, phone, address, then whichever links are present.
pub fn contact_line(info: &PersonalInfo) -> String {
    [
        Some(info.email.as_str()),
        Some(info.phone.as_str()),
        Some(info.address.as_str()),
        present(&info.website),
        present(&info.linkedin),
        present(&info.github),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(CONTACT_SEPARATOR)
}

/// "start - end", followed by " | location" when a location is present.
fn meta_line(start: &str, end: &str, location: Option<&str>) -> String {
    match location {
        Some(location) => format!("{} | {location}", date_range(start, end)),
        None => date_range(start, end),
    }
}

fn header(info: &PersonalInfo) -> Element {
    Element::new("header")
        .class("classic-header")
        .child(Element::new("h1").class("name").text(info.name.as_str()))
        .child(Element::new("p").class("contact-line").text(contact_line(info)))
}

fn section(class: &'static str, title: &'static str) -> Element {
    Element::new("section")
        .class(class)
        .child(Element::new("h2").text(title))
}

fn job_entry(job: &ExperienceItem) -> Element {
    Element::new("article")
        .class("entry")
        .item_id(&job.id)
        .child(
            Element::new("p")
                .class("entry-heading")
                .text(format!("{}, {}", job.position, job.company)),
        )
        .child(
            Element::new("p")
                .class("entry-meta")
                .text(meta_line(&job.start_date, &job.end_date, present(&job.location))),
        )
        .child(Element::new("p").class("description").text(job.description.as_str()))
}

fn education_entry(edu: &EducationItem) -> Element {
    Element::new("article")
        .class("entry")
        .item_id(&edu.id)
        .child(
            Element::new("p")
                .class("entry-heading")
                .text(format!("{}, {}", edu.degree, edu.field)),
        )
        .child(Element::new("p").class("institution").text(edu.institution.as_str()))
        .child(
            Element::new("p")
                .class("entry-meta")
                .text(meta_line(&edu.start_date, &edu.end_date, present(&edu.location))),
        )
        .child_opt(
            present(&edu.description)
                .map(|d| Element::new("p").class("description").text(d)),
        )
}

fn skill_entry(skill: &SkillItem) -> Element {
    let text = match skill.proficiency_label() {
        Some(label) => format!("{} ({label})", skill.name),
        None => skill.name.clone(),
    };
    Element::new("li").class("skill").item_id(&skill.id).text(text)
}

fn projects_section(projects: &[ProjectItem]) -> Option<Element> {
    if projects.is_empty() {
        return None;
    }

    let entries = projects.iter().map(|project| {
        let dates = optional_date_range(present(&project.start_date), present(&project.end_date));
        Element::new("article")
            .class("entry")
            .item_id(&project.id)
            .child(Element::new("p").class("entry-heading").text(project.name.as_str()))
            .child_opt(
                present(&project.technologies)
                    .map(|t| Element::new("p").class("technologies").text(t)),
            )
            .child_opt(dates.map(|d| Element::new("p").class("entry-meta").text(d)))
            .child(
                Element::new("p")
                    .class("description")
                    .text(project.description.as_str()),
            )
            .child_opt(present(&project.link).map(link))
    });

    Some(section("projects", "Projects").children(entries))
}

fn certifications_section(certifications: &[CertificationItem]) -> Option<Element> {
    if certifications.is_empty() {
        return None;
    }

    let items = certifications.iter().map(|cert| {
        Element::new("li")
            .class("certification")
            .item_id(&cert.id)
            .text(format!("{}, {}, {}", cert.name, cert.issuer, cert.date))
            .child_opt(present(&cert.link).map(link))
    });

    Some(
        section("certifications", "Certifications")
            .child(Element::new("ul").children(items)),
    )
}

fn link(href: &str) -> Element {
    Element::new("a").class("link").attr("href", href).text(href)
}
