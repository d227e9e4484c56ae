//! Pure constraint checks for the content model.
//!
//! Kept apart from the storage calls so the constraint set is testable
//! without a database. Out-of-range numeric values are rejected, never
//! clamped.

use super::models::{About, ContactInfo, Hero, Project, Skill, Social, Testimonial};

pub fn about(about: &About) -> Result<(), String> {
    non_blank(&about.name, "name")?;
    non_blank(&about.title, "title")?;
    non_blank(&about.bio, "bio")?;
    non_blank(&about.profile_image, "profileImage")
}

pub fn hero(hero: &Hero) -> Result<(), String> {
    non_blank(&hero.name, "name")?;
    non_blank(&hero.title, "title")?;
    non_blank(&hero.tagline, "tagline")
}

pub fn contact_info(info: &ContactInfo) -> Result<(), String> {
    non_blank(&info.email, "email")
}

pub fn project(project: &Project) -> Result<(), String> {
    non_blank(&project.title, "title")?;
    non_blank(&project.description, "description")?;
    non_blank(&project.image, "image")
}

pub fn skill(skill: &Skill) -> Result<(), String> {
    non_blank(&skill.name, "name")?;
    if !(0..=100).contains(&skill.proficiency) {
        return Err("proficiency must be between 0 and 100".into());
    }
    Ok(())
}

pub fn social(social: &Social) -> Result<(), String> {
    non_blank(&social.platform, "platform")?;
    non_blank(&social.url, "url")
}

pub fn testimonial(testimonial: &Testimonial) -> Result<(), String> {
    non_blank(&testimonial.name, "name")?;
    non_blank(&testimonial.content, "content")?;
    if !(1..=5).contains(&testimonial.rating) {
        return Err("rating must be between 1 and 5".into());
    }
    Ok(())
}

fn non_blank(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} is required"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::{SkillCategory, SkillPayload, TestimonialPayload};

    fn sample_skill(proficiency: i64) -> Skill {
        Skill {
            id: 1,
            name: "Go".into(),
            icon: String::new(),
            category: SkillCategory::Backend,
            proficiency,
            color: "#3b82f6".into(),
            order: 0,
        }
    }

    #[test]
    fn test_skill_proficiency_bounds() {
        assert!(skill(&sample_skill(0)).is_ok());
        assert!(skill(&sample_skill(100)).is_ok());
        assert!(skill(&sample_skill(-1)).is_err());
        assert!(skill(&sample_skill(101)).is_err());
    }

    #[test]
    fn test_testimonial_rating_bounds() {
        let base = TestimonialPayload {
            name: Some("Sam".into()),
            content: Some("Solid".into()),
            ..Default::default()
        }
        .build()
        .unwrap();

        for rating in [1, 3, 5] {
            let mut t = base.clone();
            t.rating = rating;
            assert!(testimonial(&t).is_ok(), "rating {rating} should pass");
        }
        for rating in [0, 6, -2] {
            let mut t = base.clone();
            t.rating = rating;
            assert!(testimonial(&t).is_err(), "rating {rating} should fail");
        }
    }

    #[test]
    fn test_out_of_range_never_reaches_build() {
        let err = SkillPayload {
            name: Some("Go".into()),
            proficiency: Some(250),
            ..Default::default()
        }
        .build();
        assert!(err.is_err());
    }

    #[test]
    fn test_blank_required_field_rejected() {
        let mut s = sample_skill(50);
        s.name = "   ".into();
        assert!(skill(&s).is_err());
    }
}
