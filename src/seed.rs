//! Sample dataset for fresh deployments.
//!
//! `folio seed` clears every content table and inserts a small
//! representative portfolio so the site renders populated pages before
//! the admin panel has been touched. Destructive on purpose.

use crate::errors::StoreError;
use crate::store::PortfolioDb;
use crate::store::models::{
    ProjectPayload, SkillPayload, SocialPayload, TestimonialPayload,
};

#[derive(Debug)]
pub struct SeedSummary {
    pub projects: usize,
    pub skills: usize,
    pub socials: usize,
    pub testimonials: usize,
}

pub fn run(db: &PortfolioDb) -> Result<SeedSummary, StoreError> {
    db.clear_content()?;

    let projects = sample_projects();
    let skills = sample_skills();
    let socials = sample_socials();
    let testimonials = sample_testimonials();

    let summary = SeedSummary {
        projects: projects.len(),
        skills: skills.len(),
        socials: socials.len(),
        testimonials: testimonials.len(),
    };

    for payload in projects {
        db.create_project(payload)?;
    }
    for payload in skills {
        db.create_skill(payload)?;
    }
    for payload in socials {
        db.create_social(payload)?;
    }
    for payload in testimonials {
        db.create_testimonial(payload)?;
    }

    Ok(summary)
}

fn project(
    title: &str,
    description: &str,
    image: &str,
    tech: &[&str],
    featured: bool,
    order: i64,
) -> ProjectPayload {
    ProjectPayload {
        title: Some(title.into()),
        description: Some(description.into()),
        image: Some(image.into()),
        tech_stack: Some(tech.iter().map(|t| t.to_string()).collect()),
        featured: Some(featured),
        order: Some(order),
        ..Default::default()
    }
}

fn sample_projects() -> Vec<ProjectPayload> {
    vec![
        project(
            "Project Showcase",
            "Platform for publishing and browsing student projects",
            "/assets/showcase.jpg",
            &["React", "Node.js", "MongoDB"],
            true,
            1,
        ),
        project(
            "Eco Marketplace",
            "E-commerce storefront for sustainable products",
            "/assets/eco.jpg",
            &["React", "Express", "Stripe"],
            false,
            2,
        ),
        project(
            "Portfolio Website",
            "This site: dynamic content with an in-place admin panel",
            "/assets/portfolio.jpg",
            &["React", "Tailwind CSS", "Framer Motion"],
            false,
            3,
        ),
    ]
}

fn skill(name: &str, category: &str, proficiency: i64, order: i64) -> SkillPayload {
    SkillPayload {
        name: Some(name.into()),
        category: Some(category.into()),
        proficiency: Some(proficiency),
        order: Some(order),
        ..Default::default()
    }
}

fn sample_skills() -> Vec<SkillPayload> {
    vec![
        skill("React", "frontend", 90, 1),
        skill("Tailwind CSS", "frontend", 85, 2),
        skill("Node.js", "backend", 85, 3),
        skill("Express", "backend", 80, 4),
        skill("MongoDB", "database", 75, 5),
        skill("PostgreSQL", "database", 70, 6),
        skill("Git", "tools", 85, 7),
        skill("Docker", "tools", 65, 8),
    ]
}

fn sample_socials() -> Vec<SocialPayload> {
    vec![
        SocialPayload {
            platform: Some("github".into()),
            url: Some("https://github.com/your-handle".into()),
            order: Some(1),
            ..Default::default()
        },
        SocialPayload {
            platform: Some("linkedin".into()),
            url: Some("https://www.linkedin.com/in/your-handle".into()),
            order: Some(2),
            ..Default::default()
        },
        SocialPayload {
            platform: Some("twitter".into()),
            url: Some("https://twitter.com/your-handle".into()),
            order: Some(3),
            active: Some(false),
            ..Default::default()
        },
    ]
}

fn sample_testimonials() -> Vec<TestimonialPayload> {
    vec![
        TestimonialPayload {
            name: Some("Priya Sharma".into()),
            role: Some("Project Mentor".into()),
            content: Some("Delivered a polished product well ahead of schedule.".into()),
            rating: Some(5),
            featured: Some(true),
            order: Some(1),
            ..Default::default()
        },
        TestimonialPayload {
            name: Some("Daniel Okafor".into()),
            role: Some("Team Lead".into()),
            company: Some("Acme Web Studio".into()),
            content: Some("Reliable, communicative, and quick to pick up new stacks.".into()),
            rating: Some(5),
            order: Some(2),
            ..Default::default()
        },
    ]
}
