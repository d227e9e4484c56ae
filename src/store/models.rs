//! Wire and storage types for the seven portfolio resource kinds.
//!
//! Each collection resource has a full document struct plus a payload
//! struct of optional fields. The same payload type backs both create
//! (`build`, which fills defaults and rejects missing required fields)
//! and update (`apply`, which merges into an existing document and
//! re-validates). Constraint checks themselves live in
//! [`super::validate`] so they stay testable without a database.
//!
//! JSON field names are camelCase — the shape the admin panel and the
//! public site already consume.

use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::validate;
use crate::errors::StoreError;

pub(crate) const DEFAULT_ACCENT_COLOR: &str = "#3b82f6";

fn now() -> String {
    Utc::now().to_rfc3339()
}

/// Require a non-blank value, trimming surrounding whitespace.
fn required(value: Option<String>, field: &'static str) -> Result<String, StoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(StoreError::Validation(format!("{field} is required"))),
    }
}

// ── Singletons ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub bio: String,
    pub short_bio: String,
    pub profile_image: String,
    pub email: String,
    pub location: String,
    pub degree: String,
    pub freelance: String,
    pub resume: String,
    pub highlights: Vec<String>,
    pub updated_at: String,
}

impl About {
    /// Default document created on first GET against an empty database.
    pub fn default_content() -> Self {
        Self {
            id: 0,
            name: "Your Name".into(),
            title: "Full Stack Developer".into(),
            tagline: "Creating seamless, scalable web applications".into(),
            bio: "I build modern web applications end to end.".into(),
            short_bio: String::new(),
            profile_image: "/assets/profile.png".into(),
            email: String::new(),
            location: String::new(),
            degree: String::new(),
            freelance: "Available".into(),
            resume: String::new(),
            highlights: Vec::new(),
            updated_at: now(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutPayload {
    pub name: Option<String>,
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub short_bio: Option<String>,
    pub profile_image: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub degree: Option<String>,
    pub freelance: Option<String>,
    pub resume: Option<String>,
    pub highlights: Option<Vec<String>>,
}

impl AboutPayload {
    /// Build a fresh document (PUT against an empty singleton).
    pub fn build(self) -> Result<About, StoreError> {
        let about = About {
            id: 0,
            name: required(self.name, "name")?,
            title: required(self.title, "title")?,
            tagline: self.tagline.unwrap_or_default(),
            bio: required(self.bio, "bio")?,
            short_bio: self.short_bio.unwrap_or_default(),
            profile_image: required(self.profile_image, "profileImage")?,
            email: self.email.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            degree: self.degree.unwrap_or_default(),
            freelance: self.freelance.unwrap_or_else(|| "Available".into()),
            resume: self.resume.unwrap_or_default(),
            highlights: self.highlights.unwrap_or_default(),
            updated_at: now(),
        };
        validate::about(&about).map_err(StoreError::Validation)?;
        Ok(about)
    }

    /// Merge into an existing document, stamping `updatedAt`.
    pub fn apply(self, about: &mut About) -> Result<(), StoreError> {
        if let Some(v) = self.name {
            about.name = v;
        }
        if let Some(v) = self.title {
            about.title = v;
        }
        if let Some(v) = self.tagline {
            about.tagline = v;
        }
        if let Some(v) = self.bio {
            about.bio = v;
        }
        if let Some(v) = self.short_bio {
            about.short_bio = v;
        }
        if let Some(v) = self.profile_image {
            about.profile_image = v;
        }
        if let Some(v) = self.email {
            about.email = v;
        }
        if let Some(v) = self.location {
            about.location = v;
        }
        if let Some(v) = self.degree {
            about.degree = v;
        }
        if let Some(v) = self.freelance {
            about.freelance = v;
        }
        if let Some(v) = self.resume {
            about.resume = v;
        }
        if let Some(v) = self.highlights {
            about.highlights = v;
        }
        about.updated_at = now();
        validate::about(about).map_err(StoreError::Validation)
    }
}

/// Call-to-action button on the hero banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cta {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CtaPayload {
    pub text: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub tagline: String,
    #[serde(rename = "primaryCTA")]
    pub primary_cta: Cta,
    #[serde(rename = "secondaryCTA")]
    pub secondary_cta: Cta,
    pub resume_link: String,
    pub show_resume_button: bool,
    pub updated_at: String,
}

impl Hero {
    pub fn default_content() -> Self {
        Self {
            id: 0,
            name: "Your Name".into(),
            title: "Full Stack Developer".into(),
            tagline: "Creating seamless, scalable web applications".into(),
            primary_cta: Cta {
                text: "Get In Touch".into(),
                link: "#contact".into(),
            },
            secondary_cta: Cta {
                text: "View Projects".into(),
                link: "#projects".into(),
            },
            resume_link: String::new(),
            show_resume_button: true,
            updated_at: now(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroPayload {
    pub name: Option<String>,
    pub title: Option<String>,
    pub tagline: Option<String>,
    #[serde(rename = "primaryCTA")]
    pub primary_cta: Option<CtaPayload>,
    #[serde(rename = "secondaryCTA")]
    pub secondary_cta: Option<CtaPayload>,
    pub resume_link: Option<String>,
    pub show_resume_button: Option<bool>,
}

impl HeroPayload {
    pub fn build(self) -> Result<Hero, StoreError> {
        let defaults = Hero::default_content();
        let mut hero = Hero {
            id: 0,
            name: required(self.name, "name")?,
            title: required(self.title, "title")?,
            tagline: required(self.tagline, "tagline")?,
            primary_cta: defaults.primary_cta,
            secondary_cta: defaults.secondary_cta,
            resume_link: self.resume_link.unwrap_or_default(),
            show_resume_button: self.show_resume_button.unwrap_or(true),
            updated_at: now(),
        };
        merge_cta(&mut hero.primary_cta, self.primary_cta);
        merge_cta(&mut hero.secondary_cta, self.secondary_cta);
        validate::hero(&hero).map_err(StoreError::Validation)?;
        Ok(hero)
    }

    pub fn apply(self, hero: &mut Hero) -> Result<(), StoreError> {
        if let Some(v) = self.name {
            hero.name = v;
        }
        if let Some(v) = self.title {
            hero.title = v;
        }
        if let Some(v) = self.tagline {
            hero.tagline = v;
        }
        merge_cta(&mut hero.primary_cta, self.primary_cta);
        merge_cta(&mut hero.secondary_cta, self.secondary_cta);
        if let Some(v) = self.resume_link {
            hero.resume_link = v;
        }
        if let Some(v) = self.show_resume_button {
            hero.show_resume_button = v;
        }
        hero.updated_at = now();
        validate::hero(hero).map_err(StoreError::Validation)
    }
}

fn merge_cta(cta: &mut Cta, payload: Option<CtaPayload>) {
    if let Some(p) = payload {
        if let Some(text) = p.text {
            cta.text = text;
        }
        if let Some(link) = p.link {
            cta.link = link;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub id: i64,
    pub email: String,
    pub location: String,
    pub phone: String,
    pub availability: String,
    pub updated_at: String,
}

impl ContactInfo {
    pub fn default_content() -> Self {
        Self {
            id: 0,
            email: "hello@example.com".into(),
            location: String::new(),
            phone: String::new(),
            availability: "Available".into(),
            updated_at: now(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfoPayload {
    pub email: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub availability: Option<String>,
}

impl ContactInfoPayload {
    pub fn build(self) -> Result<ContactInfo, StoreError> {
        let info = ContactInfo {
            id: 0,
            email: required(self.email, "email")?,
            location: self.location.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            availability: self.availability.unwrap_or_else(|| "Available".into()),
            updated_at: now(),
        };
        validate::contact_info(&info).map_err(StoreError::Validation)?;
        Ok(info)
    }

    pub fn apply(self, info: &mut ContactInfo) -> Result<(), StoreError> {
        if let Some(v) = self.email {
            info.email = v;
        }
        if let Some(v) = self.location {
            info.location = v;
        }
        if let Some(v) = self.phone {
            info.phone = v;
        }
        if let Some(v) = self.availability {
            info.availability = v;
        }
        info.updated_at = now();
        validate::contact_info(info).map_err(StoreError::Validation)
    }
}

// ── Collections ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub tech_stack: Vec<String>,
    pub category: String,
    pub live_link: String,
    pub github_link: String,
    pub featured: bool,
    pub order: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub image: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub category: Option<String>,
    pub live_link: Option<String>,
    pub github_link: Option<String>,
    pub featured: Option<bool>,
    pub order: Option<i64>,
}

impl ProjectPayload {
    pub fn build(self) -> Result<Project, StoreError> {
        let stamp = now();
        let project = Project {
            id: 0,
            title: required(self.title, "title")?,
            description: required(self.description, "description")?,
            long_description: self.long_description.unwrap_or_default(),
            image: required(self.image, "image")?,
            tech_stack: self.tech_stack.unwrap_or_default(),
            category: self.category.unwrap_or_else(|| "web".into()),
            live_link: self.live_link.unwrap_or_default(),
            github_link: self.github_link.unwrap_or_default(),
            featured: self.featured.unwrap_or(false),
            order: self.order.unwrap_or(0),
            created_at: stamp.clone(),
            updated_at: stamp,
        };
        validate::project(&project).map_err(StoreError::Validation)?;
        Ok(project)
    }

    pub fn apply(self, project: &mut Project) -> Result<(), StoreError> {
        if let Some(v) = self.title {
            project.title = v;
        }
        if let Some(v) = self.description {
            project.description = v;
        }
        if let Some(v) = self.long_description {
            project.long_description = v;
        }
        if let Some(v) = self.image {
            project.image = v;
        }
        if let Some(v) = self.tech_stack {
            project.tech_stack = v;
        }
        if let Some(v) = self.category {
            project.category = v;
        }
        if let Some(v) = self.live_link {
            project.live_link = v;
        }
        if let Some(v) = self.github_link {
            project.github_link = v;
        }
        if let Some(v) = self.featured {
            project.featured = v;
        }
        if let Some(v) = self.order {
            project.order = v;
        }
        project.updated_at = now();
        validate::project(project).map_err(StoreError::Validation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
    Other,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Tools => "tools",
            Self::Other => "other",
        }
    }
}

impl FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            "database" => Ok(Self::Database),
            "tools" => Ok(Self::Tools),
            "other" => Ok(Self::Other),
            _ => Err(format!("Invalid skill category: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub category: SkillCategory,
    pub proficiency: i64,
    pub color: String,
    pub order: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillPayload {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub proficiency: Option<i64>,
    pub color: Option<String>,
    pub order: Option<i64>,
}

impl SkillPayload {
    fn parse_category(raw: Option<String>) -> Result<Option<SkillCategory>, StoreError> {
        raw.map(|c| c.parse().map_err(StoreError::Validation))
            .transpose()
    }

    pub fn build(self) -> Result<Skill, StoreError> {
        let category = Self::parse_category(self.category)?.unwrap_or(SkillCategory::Other);
        let skill = Skill {
            id: 0,
            name: required(self.name, "name")?,
            icon: self.icon.unwrap_or_default(),
            category,
            proficiency: self.proficiency.unwrap_or(0),
            color: self.color.unwrap_or_else(|| DEFAULT_ACCENT_COLOR.into()),
            order: self.order.unwrap_or(0),
        };
        validate::skill(&skill).map_err(StoreError::Validation)?;
        Ok(skill)
    }

    pub fn apply(self, skill: &mut Skill) -> Result<(), StoreError> {
        if let Some(v) = self.name {
            skill.name = v;
        }
        if let Some(v) = self.icon {
            skill.icon = v;
        }
        if let Some(category) = Self::parse_category(self.category)? {
            skill.category = category;
        }
        if let Some(v) = self.proficiency {
            skill.proficiency = v;
        }
        if let Some(v) = self.color {
            skill.color = v;
        }
        if let Some(v) = self.order {
            skill.order = v;
        }
        validate::skill(skill).map_err(StoreError::Validation)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Social {
    pub id: i64,
    pub platform: String,
    pub url: String,
    pub icon: String,
    pub color: String,
    pub order: i64,
    pub active: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialPayload {
    pub platform: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub order: Option<i64>,
    pub active: Option<bool>,
}

impl SocialPayload {
    pub fn build(self) -> Result<Social, StoreError> {
        let social = Social {
            id: 0,
            platform: required(self.platform, "platform")?,
            url: required(self.url, "url")?,
            icon: self.icon.unwrap_or_default(),
            color: self.color.unwrap_or_else(|| DEFAULT_ACCENT_COLOR.into()),
            order: self.order.unwrap_or(0),
            active: self.active.unwrap_or(true),
        };
        validate::social(&social).map_err(StoreError::Validation)?;
        Ok(social)
    }

    pub fn apply(self, social: &mut Social) -> Result<(), StoreError> {
        if let Some(v) = self.platform {
            social.platform = v;
        }
        if let Some(v) = self.url {
            social.url = v;
        }
        if let Some(v) = self.icon {
            social.icon = v;
        }
        if let Some(v) = self.color {
            social.color = v;
        }
        if let Some(v) = self.order {
            social.order = v;
        }
        if let Some(v) = self.active {
            social.active = v;
        }
        validate::social(social).map_err(StoreError::Validation)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub avatar: String,
    pub rating: i64,
    pub featured: bool,
    pub order: i64,
    pub created_at: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialPayload {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub avatar: Option<String>,
    pub rating: Option<i64>,
    pub featured: Option<bool>,
    pub order: Option<i64>,
}

impl TestimonialPayload {
    pub fn build(self) -> Result<Testimonial, StoreError> {
        let testimonial = Testimonial {
            id: 0,
            name: required(self.name, "name")?,
            role: self.role.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            content: required(self.content, "content")?,
            avatar: self.avatar.unwrap_or_default(),
            rating: self.rating.unwrap_or(5),
            featured: self.featured.unwrap_or(false),
            order: self.order.unwrap_or(0),
            created_at: now(),
        };
        validate::testimonial(&testimonial).map_err(StoreError::Validation)?;
        Ok(testimonial)
    }

    pub fn apply(self, testimonial: &mut Testimonial) -> Result<(), StoreError> {
        if let Some(v) = self.name {
            testimonial.name = v;
        }
        if let Some(v) = self.role {
            testimonial.role = v;
        }
        if let Some(v) = self.company {
            testimonial.company = v;
        }
        if let Some(v) = self.content {
            testimonial.content = v;
        }
        if let Some(v) = self.avatar {
            testimonial.avatar = v;
        }
        if let Some(v) = self.rating {
            testimonial.rating = v;
        }
        if let Some(v) = self.featured {
            testimonial.featured = v;
        }
        if let Some(v) = self.order {
            testimonial.order = v;
        }
        validate::testimonial(testimonial).map_err(StoreError::Validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_build_fills_defaults() {
        let skill = SkillPayload {
            name: Some("Rust".into()),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(skill.category, SkillCategory::Other);
        assert_eq!(skill.proficiency, 0);
        assert_eq!(skill.color, DEFAULT_ACCENT_COLOR);
    }

    #[test]
    fn test_skill_build_requires_name() {
        let err = SkillPayload::default().build().unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_skill_rejects_unknown_category() {
        let err = SkillPayload {
            name: Some("Rust".into()),
            category: Some("devops".into()),
            ..Default::default()
        }
        .build()
        .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_skill_apply_is_partial() {
        let mut skill = SkillPayload {
            name: Some("Rust".into()),
            category: Some("backend".into()),
            proficiency: Some(80),
            ..Default::default()
        }
        .build()
        .unwrap();

        SkillPayload {
            proficiency: Some(95),
            ..Default::default()
        }
        .apply(&mut skill)
        .unwrap();

        assert_eq!(skill.proficiency, 95);
        assert_eq!(skill.name, "Rust");
        assert_eq!(skill.category, SkillCategory::Backend);
    }

    #[test]
    fn test_skill_apply_rejects_out_of_range() {
        let mut skill = SkillPayload {
            name: Some("Rust".into()),
            ..Default::default()
        }
        .build()
        .unwrap();
        let err = SkillPayload {
            proficiency: Some(101),
            ..Default::default()
        }
        .apply(&mut skill)
        .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_testimonial_defaults_rating_five() {
        let t = TestimonialPayload {
            name: Some("Sam".into()),
            content: Some("Great work".into()),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(t.rating, 5);
        assert!(!t.featured);
    }

    #[test]
    fn test_hero_payload_merges_nested_cta() {
        let mut hero = Hero::default_content();
        HeroPayload {
            primary_cta: Some(CtaPayload {
                text: Some("Say Hello".into()),
                link: None,
            }),
            ..Default::default()
        }
        .apply(&mut hero)
        .unwrap();
        assert_eq!(hero.primary_cta.text, "Say Hello");
        assert_eq!(hero.primary_cta.link, "#contact");
    }

    #[test]
    fn test_about_build_requires_core_fields() {
        let err = AboutPayload {
            name: Some("A".into()),
            title: Some("B".into()),
            ..Default::default()
        }
        .build()
        .unwrap_err();
        // bio missing
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_required_trims_whitespace() {
        let skill = SkillPayload {
            name: Some("  Rust  ".into()),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(skill.name, "Rust");
    }
}
