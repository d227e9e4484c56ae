//! Singleton resources: About, Hero, ContactInfo.
//!
//! Each kind holds at most one logical document. A GET against an empty
//! table lazily creates the hard-coded default document; a PUT merges
//! into the existing document or builds one from the payload when absent.
//! Both paths run inside a single `DbHandle::call` closure, so concurrent
//! first reads are serialized and cannot insert twice.

use rusqlite::{Row, params};

use super::models::{
    About, AboutPayload, ContactInfo, ContactInfoPayload, Cta, Hero, HeroPayload,
};
use super::{PortfolioDb, encode_string_list, parse_string_list};
use crate::errors::StoreError;

impl PortfolioDb {
    // ── About ─────────────────────────────────────────────────────────

    pub fn get_or_create_about(&self) -> Result<About, StoreError> {
        if let Some(about) = self.find_about()? {
            return Ok(about);
        }
        self.insert_about(&About::default_content())
    }

    pub fn upsert_about(&self, payload: AboutPayload) -> Result<About, StoreError> {
        match self.find_about()? {
            Some(mut about) => {
                payload.apply(&mut about)?;
                self.conn.execute(
                    "UPDATE about SET name = ?1, title = ?2, tagline = ?3, bio = ?4,
                         short_bio = ?5, profile_image = ?6, email = ?7, location = ?8,
                         degree = ?9, freelance = ?10, resume = ?11, highlights = ?12,
                         updated_at = ?13
                     WHERE id = ?14",
                    params![
                        about.name,
                        about.title,
                        about.tagline,
                        about.bio,
                        about.short_bio,
                        about.profile_image,
                        about.email,
                        about.location,
                        about.degree,
                        about.freelance,
                        about.resume,
                        encode_string_list(&about.highlights),
                        about.updated_at,
                        about.id,
                    ],
                )?;
                Ok(about)
            }
            None => self.insert_about(&payload.build()?),
        }
    }

    fn find_about(&self) -> Result<Option<About>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, title, tagline, bio, short_bio, profile_image, email,
                    location, degree, freelance, resume, highlights, updated_at
             FROM about ORDER BY id LIMIT 1",
        )?;
        let mut rows = stmt.query([])?;
        match rows.next()? {
            Some(row) => Ok(Some(about_from_row(row)?)),
            None => Ok(None),
        }
    }

    fn insert_about(&self, about: &About) -> Result<About, StoreError> {
        self.conn.execute(
            "INSERT INTO about (name, title, tagline, bio, short_bio, profile_image,
                 email, location, degree, freelance, resume, highlights, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            params![
                about.name,
                about.title,
                about.tagline,
                about.bio,
                about.short_bio,
                about.profile_image,
                about.email,
                about.location,
                about.degree,
                about.freelance,
                about.resume,
                encode_string_list(&about.highlights),
                about.updated_at,
            ],
        )?;
        let mut stored = about.clone();
        stored.id = self.conn.last_insert_rowid();
        Ok(stored)
    }

    // ── Hero ──────────────────────────────────────────────────────────

    pub fn get_or_create_hero(&self) -> Result<Hero, StoreError> {
        if let Some(hero) = self.find_hero()? {
            return Ok(hero);
        }
        self.insert_hero(&Hero::default_content())
    }

    pub fn upsert_hero(&self, payload: HeroPayload) -> Result<Hero, StoreError> {
        match self.find_hero()? {
            Some(mut hero) => {
                payload.apply(&mut hero)?;
                self.conn.execute(
                    "UPDATE hero SET name = ?1, title = ?2, tagline = ?3,
                         primary_cta_text = ?4, primary_cta_link = ?5,
                         secondary_cta_text = ?6, secondary_cta_link = ?7,
                         resume_link = ?8, show_resume_button = ?9, updated_at = ?10
                     WHERE id = ?11",
                    params![
                        hero.name,
                        hero.title,
                        hero.tagline,
                        hero.primary_cta.text,
                        hero.primary_cta.link,
                        hero.secondary_cta.text,
                        hero.secondary_cta.link,
                        hero.resume_link,
                        hero.show_resume_button,
                        hero.updated_at,
                        hero.id,
                    ],
                )?;
                Ok(hero)
            }
            None => self.insert_hero(&payload.build()?),
        }
    }

    fn find_hero(&self) -> Result<Option<Hero>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, title, tagline, primary_cta_text, primary_cta_link,
                    secondary_cta_text, secondary_cta_link, resume_link,
                    show_resume_button, updated_at
             FROM hero ORDER BY id LIMIT 1",
        )?;
        let mut rows = stmt.query([])?;
        match rows.next()? {
            Some(row) => Ok(Some(hero_from_row(row)?)),
            None => Ok(None),
        }
    }

    fn insert_hero(&self, hero: &Hero) -> Result<Hero, StoreError> {
        self.conn.execute(
            "INSERT INTO hero (name, title, tagline, primary_cta_text, primary_cta_link,
                 secondary_cta_text, secondary_cta_link, resume_link,
                 show_resume_button, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                hero.name,
                hero.title,
                hero.tagline,
                hero.primary_cta.text,
                hero.primary_cta.link,
                hero.secondary_cta.text,
                hero.secondary_cta.link,
                hero.resume_link,
                hero.show_resume_button,
                hero.updated_at,
            ],
        )?;
        let mut stored = hero.clone();
        stored.id = self.conn.last_insert_rowid();
        Ok(stored)
    }

    // ── ContactInfo ───────────────────────────────────────────────────

    pub fn get_or_create_contact_info(&self) -> Result<ContactInfo, StoreError> {
        if let Some(info) = self.find_contact_info()? {
            return Ok(info);
        }
        self.insert_contact_info(&ContactInfo::default_content())
    }

    pub fn upsert_contact_info(
        &self,
        payload: ContactInfoPayload,
    ) -> Result<ContactInfo, StoreError> {
        match self.find_contact_info()? {
            Some(mut info) => {
                payload.apply(&mut info)?;
                self.conn.execute(
                    "UPDATE contact_info SET email = ?1, location = ?2, phone = ?3,
                         availability = ?4, updated_at = ?5
                     WHERE id = ?6",
                    params![
                        info.email,
                        info.location,
                        info.phone,
                        info.availability,
                        info.updated_at,
                        info.id,
                    ],
                )?;
                Ok(info)
            }
            None => self.insert_contact_info(&payload.build()?),
        }
    }

    fn find_contact_info(&self) -> Result<Option<ContactInfo>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, email, location, phone, availability, updated_at
             FROM contact_info ORDER BY id LIMIT 1",
        )?;
        let mut rows = stmt.query([])?;
        match rows.next()? {
            Some(row) => Ok(Some(contact_info_from_row(row)?)),
            None => Ok(None),
        }
    }

    fn insert_contact_info(&self, info: &ContactInfo) -> Result<ContactInfo, StoreError> {
        self.conn.execute(
            "INSERT INTO contact_info (email, location, phone, availability, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                info.email,
                info.location,
                info.phone,
                info.availability,
                info.updated_at,
            ],
        )?;
        let mut stored = info.clone();
        stored.id = self.conn.last_insert_rowid();
        Ok(stored)
    }
}

fn about_from_row(row: &Row<'_>) -> Result<About, rusqlite::Error> {
    let highlights: String = row.get(12)?;
    Ok(About {
        id: row.get(0)?,
        name: row.get(1)?,
        title: row.get(2)?,
        tagline: row.get(3)?,
        bio: row.get(4)?,
        short_bio: row.get(5)?,
        profile_image: row.get(6)?,
        email: row.get(7)?,
        location: row.get(8)?,
        degree: row.get(9)?,
        freelance: row.get(10)?,
        resume: row.get(11)?,
        highlights: parse_string_list(&highlights),
        updated_at: row.get(13)?,
    })
}

fn hero_from_row(row: &Row<'_>) -> Result<Hero, rusqlite::Error> {
    Ok(Hero {
        id: row.get(0)?,
        name: row.get(1)?,
        title: row.get(2)?,
        tagline: row.get(3)?,
        primary_cta: Cta {
            text: row.get(4)?,
            link: row.get(5)?,
        },
        secondary_cta: Cta {
            text: row.get(6)?,
            link: row.get(7)?,
        },
        resume_link: row.get(8)?,
        show_resume_button: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

fn contact_info_from_row(row: &Row<'_>) -> Result<ContactInfo, rusqlite::Error> {
    Ok(ContactInfo {
        id: row.get(0)?,
        email: row.get(1)?,
        location: row.get(2)?,
        phone: row.get(3)?,
        availability: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::CtaPayload;

    #[test]
    fn test_get_or_create_about_inserts_default_once() {
        let db = PortfolioDb::open_in_memory().unwrap();
        let first = db.get_or_create_about().unwrap();
        assert_eq!(first.name, "Your Name");
        assert_eq!(first.title, "Full Stack Developer");

        let second = db.get_or_create_about().unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(db.collection_counts().unwrap().about, 1);
    }

    #[test]
    fn test_upsert_about_merges_and_preserves() {
        let db = PortfolioDb::open_in_memory().unwrap();
        let default = db.get_or_create_about().unwrap();

        let updated = db
            .upsert_about(AboutPayload {
                name: Some("X".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(updated.name, "X");
        assert_eq!(updated.bio, default.bio);
        assert_eq!(updated.profile_image, default.profile_image);
        assert_eq!(updated.id, default.id);
    }

    #[test]
    fn test_upsert_about_on_empty_requires_fields() {
        let db = PortfolioDb::open_in_memory().unwrap();
        let err = db
            .upsert_about(AboutPayload {
                name: Some("X".into()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(db.collection_counts().unwrap().about, 0);
    }

    #[test]
    fn test_upsert_about_creates_from_full_payload() {
        let db = PortfolioDb::open_in_memory().unwrap();
        let about = db
            .upsert_about(AboutPayload {
                name: Some("X".into()),
                title: Some("Engineer".into()),
                bio: Some("Builds things".into()),
                profile_image: Some("/assets/x.png".into()),
                highlights: Some(vec!["Rust".into()]),
                ..Default::default()
            })
            .unwrap();
        assert!(about.id > 0);
        assert_eq!(about.freelance, "Available");
        assert_eq!(about.highlights, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_hero_defaults_and_cta_merge() {
        let db = PortfolioDb::open_in_memory().unwrap();
        let hero = db.get_or_create_hero().unwrap();
        assert_eq!(hero.primary_cta.text, "Get In Touch");
        assert!(hero.show_resume_button);

        let updated = db
            .upsert_hero(HeroPayload {
                secondary_cta: Some(CtaPayload {
                    text: Some("Browse Work".into()),
                    link: None,
                }),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(updated.secondary_cta.text, "Browse Work");
        assert_eq!(updated.secondary_cta.link, "#projects");
        assert_eq!(updated.primary_cta.text, "Get In Touch");
    }

    #[test]
    fn test_contact_info_round_trip() {
        let db = PortfolioDb::open_in_memory().unwrap();
        let info = db.get_or_create_contact_info().unwrap();
        assert_eq!(info.availability, "Available");

        let updated = db
            .upsert_contact_info(ContactInfoPayload {
                phone: Some("+1 555 0100".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(updated.phone, "+1 555 0100");
        assert_eq!(updated.email, info.email);
    }
}
