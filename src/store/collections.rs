//! Collection resources: Project, Skill, Social, Testimonial.
//!
//! Uniform contract per kind: ordered list (plus the documented filters),
//! create, partial update with re-validation, and hard delete. Unknown
//! ids on update/delete surface as `NotFound`, never a silent no-op.

use rusqlite::{Row, params};

use super::models::{
    Project, ProjectPayload, Skill, SkillCategory, SkillPayload, Social, SocialPayload,
    Testimonial, TestimonialPayload,
};
use super::{PortfolioDb, encode_string_list, parse_string_list};
use crate::errors::StoreError;

const PROJECT_COLS: &str = "id, title, description, long_description, image, tech_stack,
     category, live_link, github_link, featured, sort_order, created_at, updated_at";

const SKILL_COLS: &str = "id, name, icon, category, proficiency, color, sort_order";

const SOCIAL_COLS: &str = "id, platform, url, icon, color, sort_order, active";

const TESTIMONIAL_COLS: &str =
    "id, name, role, company, content, avatar, rating, featured, sort_order, created_at";

impl PortfolioDb {
    // ── Projects ──────────────────────────────────────────────────────

    pub fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PROJECT_COLS} FROM projects ORDER BY sort_order ASC, created_at DESC"
        ))?;
        let rows = stmt.query_map([], project_from_row)?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    pub fn create_project(&self, payload: ProjectPayload) -> Result<Project, StoreError> {
        let project = payload.build()?;
        self.conn.execute(
            "INSERT INTO projects (title, description, long_description, image, tech_stack,
                 category, live_link, github_link, featured, sort_order, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                project.title,
                project.description,
                project.long_description,
                project.image,
                encode_string_list(&project.tech_stack),
                project.category,
                project.live_link,
                project.github_link,
                project.featured,
                project.order,
                project.created_at,
                project.updated_at,
            ],
        )?;
        let mut stored = project;
        stored.id = self.conn.last_insert_rowid();
        Ok(stored)
    }

    pub fn update_project(&self, id: i64, payload: ProjectPayload) -> Result<Project, StoreError> {
        let mut project = self
            .find_project(id)?
            .ok_or(StoreError::NotFound("Project"))?;
        payload.apply(&mut project)?;
        self.conn.execute(
            "UPDATE projects SET title = ?1, description = ?2, long_description = ?3,
                 image = ?4, tech_stack = ?5, category = ?6, live_link = ?7,
                 github_link = ?8, featured = ?9, sort_order = ?10, updated_at = ?11
             WHERE id = ?12",
            params![
                project.title,
                project.description,
                project.long_description,
                project.image,
                encode_string_list(&project.tech_stack),
                project.category,
                project.live_link,
                project.github_link,
                project.featured,
                project.order,
                project.updated_at,
                id,
            ],
        )?;
        Ok(project)
    }

    pub fn delete_project(&self, id: i64) -> Result<(), StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM projects WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(StoreError::NotFound("Project"));
        }
        Ok(())
    }

    fn find_project(&self, id: i64) -> Result<Option<Project>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {PROJECT_COLS} FROM projects WHERE id = ?1"))?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(Some(project_from_row(row)?)),
            None => Ok(None),
        }
    }

    // ── Skills ────────────────────────────────────────────────────────

    pub fn list_skills(&self) -> Result<Vec<Skill>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SKILL_COLS} FROM skills ORDER BY sort_order ASC, category ASC"
        ))?;
        let rows = stmt.query_map([], skill_from_row)?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    pub fn list_skills_by_category(&self, category: &str) -> Result<Vec<Skill>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SKILL_COLS} FROM skills WHERE category = ?1 ORDER BY sort_order ASC"
        ))?;
        let rows = stmt.query_map(params![category], skill_from_row)?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    pub fn create_skill(&self, payload: SkillPayload) -> Result<Skill, StoreError> {
        let skill = payload.build()?;
        self.conn.execute(
            "INSERT INTO skills (name, icon, category, proficiency, color, sort_order)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                skill.name,
                skill.icon,
                skill.category.as_str(),
                skill.proficiency,
                skill.color,
                skill.order,
            ],
        )?;
        let mut stored = skill;
        stored.id = self.conn.last_insert_rowid();
        Ok(stored)
    }

    pub fn update_skill(&self, id: i64, payload: SkillPayload) -> Result<Skill, StoreError> {
        let mut skill = self.find_skill(id)?.ok_or(StoreError::NotFound("Skill"))?;
        payload.apply(&mut skill)?;
        self.conn.execute(
            "UPDATE skills SET name = ?1, icon = ?2, category = ?3, proficiency = ?4,
                 color = ?5, sort_order = ?6
             WHERE id = ?7",
            params![
                skill.name,
                skill.icon,
                skill.category.as_str(),
                skill.proficiency,
                skill.color,
                skill.order,
                id,
            ],
        )?;
        Ok(skill)
    }

    pub fn delete_skill(&self, id: i64) -> Result<(), StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM skills WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(StoreError::NotFound("Skill"));
        }
        Ok(())
    }

    fn find_skill(&self, id: i64) -> Result<Option<Skill>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {SKILL_COLS} FROM skills WHERE id = ?1"))?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(Some(skill_from_row(row)?)),
            None => Ok(None),
        }
    }

    // ── Socials ───────────────────────────────────────────────────────

    /// Public listing: active links only, display order.
    pub fn list_active_socials(&self) -> Result<Vec<Social>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {SOCIAL_COLS} FROM socials WHERE active = 1 ORDER BY sort_order ASC"
        ))?;
        let rows = stmt.query_map([], social_from_row)?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    pub fn create_social(&self, payload: SocialPayload) -> Result<Social, StoreError> {
        let social = payload.build()?;
        self.conn
            .execute(
                "INSERT INTO socials (platform, url, icon, color, sort_order, active)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    social.platform,
                    social.url,
                    social.icon,
                    social.color,
                    social.order,
                    social.active,
                ],
            )
            .map_err(map_platform_conflict)?;
        let mut stored = social;
        stored.id = self.conn.last_insert_rowid();
        Ok(stored)
    }

    pub fn update_social(&self, id: i64, payload: SocialPayload) -> Result<Social, StoreError> {
        let mut social = self.find_social(id)?.ok_or(StoreError::NotFound("Social"))?;
        payload.apply(&mut social)?;
        self.conn
            .execute(
                "UPDATE socials SET platform = ?1, url = ?2, icon = ?3, color = ?4,
                     sort_order = ?5, active = ?6
                 WHERE id = ?7",
                params![
                    social.platform,
                    social.url,
                    social.icon,
                    social.color,
                    social.order,
                    social.active,
                    id,
                ],
            )
            .map_err(map_platform_conflict)?;
        Ok(social)
    }

    pub fn delete_social(&self, id: i64) -> Result<(), StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM socials WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(StoreError::NotFound("Social"));
        }
        Ok(())
    }

    fn find_social(&self, id: i64) -> Result<Option<Social>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {SOCIAL_COLS} FROM socials WHERE id = ?1"))?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(Some(social_from_row(row)?)),
            None => Ok(None),
        }
    }

    // ── Testimonials ──────────────────────────────────────────────────

    pub fn list_testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TESTIMONIAL_COLS} FROM testimonials
             ORDER BY sort_order ASC, created_at DESC"
        ))?;
        let rows = stmt.query_map([], testimonial_from_row)?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    pub fn list_featured_testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TESTIMONIAL_COLS} FROM testimonials WHERE featured = 1
             ORDER BY sort_order ASC"
        ))?;
        let rows = stmt.query_map([], testimonial_from_row)?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    pub fn create_testimonial(
        &self,
        payload: TestimonialPayload,
    ) -> Result<Testimonial, StoreError> {
        let testimonial = payload.build()?;
        self.conn.execute(
            "INSERT INTO testimonials (name, role, company, content, avatar, rating,
                 featured, sort_order, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                testimonial.name,
                testimonial.role,
                testimonial.company,
                testimonial.content,
                testimonial.avatar,
                testimonial.rating,
                testimonial.featured,
                testimonial.order,
                testimonial.created_at,
            ],
        )?;
        let mut stored = testimonial;
        stored.id = self.conn.last_insert_rowid();
        Ok(stored)
    }

    pub fn update_testimonial(
        &self,
        id: i64,
        payload: TestimonialPayload,
    ) -> Result<Testimonial, StoreError> {
        let mut testimonial = self
            .find_testimonial(id)?
            .ok_or(StoreError::NotFound("Testimonial"))?;
        payload.apply(&mut testimonial)?;
        self.conn.execute(
            "UPDATE testimonials SET name = ?1, role = ?2, company = ?3, content = ?4,
                 avatar = ?5, rating = ?6, featured = ?7, sort_order = ?8
             WHERE id = ?9",
            params![
                testimonial.name,
                testimonial.role,
                testimonial.company,
                testimonial.content,
                testimonial.avatar,
                testimonial.rating,
                testimonial.featured,
                testimonial.order,
                id,
            ],
        )?;
        Ok(testimonial)
    }

    pub fn delete_testimonial(&self, id: i64) -> Result<(), StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM testimonials WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(StoreError::NotFound("Testimonial"));
        }
        Ok(())
    }

    fn find_testimonial(&self, id: i64) -> Result<Option<Testimonial>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TESTIMONIAL_COLS} FROM testimonials WHERE id = ?1"
        ))?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(Some(testimonial_from_row(row)?)),
            None => Ok(None),
        }
    }
}

/// The `platform` column is UNIQUE; surface the constraint hit as a
/// validation error rather than a bare SQL failure.
fn map_platform_conflict(e: rusqlite::Error) -> StoreError {
    if let rusqlite::Error::SqliteFailure(err, _) = &e
        && err.code == rusqlite::ErrorCode::ConstraintViolation
    {
        return StoreError::Validation("A social link for that platform already exists".into());
    }
    StoreError::Sql(e)
}

fn project_from_row(row: &Row<'_>) -> Result<Project, rusqlite::Error> {
    let tech_stack: String = row.get(5)?;
    Ok(Project {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        long_description: row.get(3)?,
        image: row.get(4)?,
        tech_stack: parse_string_list(&tech_stack),
        category: row.get(6)?,
        live_link: row.get(7)?,
        github_link: row.get(8)?,
        featured: row.get(9)?,
        order: row.get(10)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}

fn skill_from_row(row: &Row<'_>) -> Result<Skill, rusqlite::Error> {
    let category: String = row.get(3)?;
    Ok(Skill {
        id: row.get(0)?,
        name: row.get(1)?,
        icon: row.get(2)?,
        category: category.parse().unwrap_or(SkillCategory::Other),
        proficiency: row.get(4)?,
        color: row.get(5)?,
        order: row.get(6)?,
    })
}

fn social_from_row(row: &Row<'_>) -> Result<Social, rusqlite::Error> {
    Ok(Social {
        id: row.get(0)?,
        platform: row.get(1)?,
        url: row.get(2)?,
        icon: row.get(3)?,
        color: row.get(4)?,
        order: row.get(5)?,
        active: row.get(6)?,
    })
}

fn testimonial_from_row(row: &Row<'_>) -> Result<Testimonial, rusqlite::Error> {
    Ok(Testimonial {
        id: row.get(0)?,
        name: row.get(1)?,
        role: row.get(2)?,
        company: row.get(3)?,
        content: row.get(4)?,
        avatar: row.get(5)?,
        rating: row.get(6)?,
        featured: row.get(7)?,
        order: row.get(8)?,
        created_at: row.get(9)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> PortfolioDb {
        PortfolioDb::open_in_memory().unwrap()
    }

    fn skill_payload(name: &str, category: &str, order: i64) -> SkillPayload {
        SkillPayload {
            name: Some(name.into()),
            category: Some(category.into()),
            order: Some(order),
            ..Default::default()
        }
    }

    #[test]
    fn test_skill_crud_round_trip() {
        let db = db();
        let created = db
            .create_skill(SkillPayload {
                name: Some("Go".into()),
                category: Some("backend".into()),
                proficiency: Some(70),
                ..Default::default()
            })
            .unwrap();
        assert!(created.id > 0);

        let updated = db
            .update_skill(
                created.id,
                SkillPayload {
                    proficiency: Some(85),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.proficiency, 85);
        assert_eq!(updated.name, "Go");

        db.delete_skill(created.id).unwrap();
        assert!(db.list_skills().unwrap().is_empty());
    }

    #[test]
    fn test_skill_list_orders_by_order_then_category() {
        let db = db();
        db.create_skill(skill_payload("Postgres", "database", 2)).unwrap();
        db.create_skill(skill_payload("React", "frontend", 1)).unwrap();
        db.create_skill(skill_payload("Axum", "backend", 1)).unwrap();

        let names: Vec<String> = db.list_skills().unwrap().into_iter().map(|s| s.name).collect();
        // order 1 first; within order 1, backend sorts before frontend
        assert_eq!(names, ["Axum", "React", "Postgres"]);
    }

    #[test]
    fn test_skill_category_filter() {
        let db = db();
        db.create_skill(skill_payload("Axum", "backend", 0)).unwrap();
        db.create_skill(skill_payload("React", "frontend", 0)).unwrap();

        let backend = db.list_skills_by_category("backend").unwrap();
        assert_eq!(backend.len(), 1);
        assert_eq!(backend[0].name, "Axum");
        assert!(db.list_skills_by_category("tools").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_skill_persists_nothing() {
        let db = db();
        let err = db
            .create_skill(SkillPayload {
                name: Some("Go".into()),
                proficiency: Some(150),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(db.list_skills().unwrap().is_empty());
    }

    #[test]
    fn test_update_unknown_skill_is_not_found() {
        let db = db();
        let err = db
            .update_skill(999, SkillPayload::default())
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound("Skill")));
    }

    #[test]
    fn test_delete_unknown_is_not_found_not_noop() {
        let db = db();
        assert!(matches!(
            db.delete_skill(42).unwrap_err(),
            StoreError::NotFound("Skill")
        ));
        assert!(matches!(
            db.delete_project(42).unwrap_err(),
            StoreError::NotFound("Project")
        ));
    }

    #[test]
    fn test_social_platform_unique() {
        let db = db();
        let payload = |url: &str| SocialPayload {
            platform: Some("github".into()),
            url: Some(url.into()),
            ..Default::default()
        };
        db.create_social(payload("https://github.com/a")).unwrap();
        let err = db.create_social(payload("https://github.com/b")).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_inactive_socials_hidden_from_listing() {
        let db = db();
        db.create_social(SocialPayload {
            platform: Some("github".into()),
            url: Some("https://github.com/a".into()),
            ..Default::default()
        })
        .unwrap();
        let linkedin = db
            .create_social(SocialPayload {
                platform: Some("linkedin".into()),
                url: Some("https://linkedin.com/in/a".into()),
                active: Some(false),
                ..Default::default()
            })
            .unwrap();

        let listed = db.list_active_socials().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].platform, "github");

        // Re-activating brings it back.
        db.update_social(
            linkedin.id,
            SocialPayload {
                active: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(db.list_active_socials().unwrap().len(), 2);
    }

    #[test]
    fn test_testimonial_rating_bound_enforced_on_update() {
        let db = db();
        let t = db
            .create_testimonial(TestimonialPayload {
                name: Some("Sam".into()),
                content: Some("Great".into()),
                ..Default::default()
            })
            .unwrap();
        let err = db
            .update_testimonial(
                t.id,
                TestimonialPayload {
                    rating: Some(6),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        // The stored document is untouched.
        let listed = db.list_testimonials().unwrap();
        assert_eq!(listed[0].rating, 5);
    }

    #[test]
    fn test_featured_testimonials_filter() {
        let db = db();
        db.create_testimonial(TestimonialPayload {
            name: Some("A".into()),
            content: Some("x".into()),
            featured: Some(true),
            order: Some(2),
            ..Default::default()
        })
        .unwrap();
        db.create_testimonial(TestimonialPayload {
            name: Some("B".into()),
            content: Some("y".into()),
            featured: Some(true),
            order: Some(1),
            ..Default::default()
        })
        .unwrap();
        db.create_testimonial(TestimonialPayload {
            name: Some("C".into()),
            content: Some("z".into()),
            ..Default::default()
        })
        .unwrap();

        let featured: Vec<String> = db
            .list_featured_testimonials()
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(featured, ["B", "A"]);
    }

    #[test]
    fn test_project_tech_stack_round_trip() {
        let db = db();
        let project = db
            .create_project(ProjectPayload {
                title: Some("Portfolio".into()),
                description: Some("This site".into()),
                image: Some("/assets/p.png".into()),
                tech_stack: Some(vec!["Rust".into(), "axum".into()]),
                featured: Some(true),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(project.category, "web");

        let listed = db.list_projects().unwrap();
        assert_eq!(listed[0].tech_stack, vec!["Rust".to_string(), "axum".to_string()]);

        let updated = db
            .update_project(
                project.id,
                ProjectPayload {
                    featured: Some(false),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(!updated.featured);
        assert_eq!(updated.title, "Portfolio");
    }
}
