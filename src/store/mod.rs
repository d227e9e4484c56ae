//! Content store: SQLite persistence for the seven resource kinds.
//!
//! | Module        | Responsibility                                      |
//! |---------------|-----------------------------------------------------|
//! | `models`      | Wire types + payload merge/build logic              |
//! | `validate`    | Pure constraint checks (no database)                |
//! | `singletons`  | About / Hero / ContactInfo get-or-create + upsert   |
//! | `collections` | Project / Skill / Social / Testimonial CRUD         |
//!
//! All access goes through [`DbHandle`], which wraps the connection in
//! `Arc<Mutex<_>>` and runs closures on tokio's blocking pool so
//! synchronous SQLite I/O never ties up async worker threads. The mutex
//! also serializes singleton get-or-create, so two concurrent first reads
//! cannot both insert a default document.

pub mod collections;
pub mod models;
pub mod singletons;
pub mod validate;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use rusqlite::Connection;
use serde::Serialize;

use crate::errors::StoreError;

/// Async-safe handle to the portfolio database.
#[derive(Clone)]
pub struct DbHandle {
    inner: Arc<std::sync::Mutex<PortfolioDb>>,
}

impl DbHandle {
    pub fn new(db: PortfolioDb) -> Self {
        Self {
            inner: Arc::new(std::sync::Mutex::new(db)),
        }
    }

    /// Run a closure with access to the database on a blocking thread.
    /// All data passed into `f` must be owned (`'static`).
    pub async fn call<F, R>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&PortfolioDb) -> Result<R, StoreError> + Send + 'static,
        R: Send + 'static,
    {
        let db = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = db
                .lock()
                .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| StoreError::Unavailable(format!("store task panicked: {e}")))?
    }
}

/// Document counts per collection, reported by the diagnostics endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCounts {
    pub projects: i64,
    pub skills: i64,
    pub socials: i64,
    pub testimonials: i64,
    pub about: i64,
    pub hero: i64,
    pub contact_info: i64,
}

pub struct PortfolioDb {
    conn: Connection,
}

impl PortfolioDb {
    /// Open (or create) the database at the given path and run migrations.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Unavailable(format!("cannot create {parent:?}: {e}")))?;
        }
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// In-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    fn init(&self) -> Result<(), StoreError> {
        // Bounded wait when another handle holds the write lock, so a
        // request fails with an error instead of hanging.
        self.conn.busy_timeout(Duration::from_secs(5))?;
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        self.run_migrations()
    }

    fn run_migrations(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS about (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                title TEXT NOT NULL,
                tagline TEXT NOT NULL DEFAULT '',
                bio TEXT NOT NULL,
                short_bio TEXT NOT NULL DEFAULT '',
                profile_image TEXT NOT NULL,
                email TEXT NOT NULL DEFAULT '',
                location TEXT NOT NULL DEFAULT '',
                degree TEXT NOT NULL DEFAULT '',
                freelance TEXT NOT NULL DEFAULT 'Available',
                resume TEXT NOT NULL DEFAULT '',
                highlights TEXT NOT NULL DEFAULT '[]',
                updated_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS hero (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                title TEXT NOT NULL,
                tagline TEXT NOT NULL,
                primary_cta_text TEXT NOT NULL DEFAULT 'Get In Touch',
                primary_cta_link TEXT NOT NULL DEFAULT '#contact',
                secondary_cta_text TEXT NOT NULL DEFAULT 'View Projects',
                secondary_cta_link TEXT NOT NULL DEFAULT '#projects',
                resume_link TEXT NOT NULL DEFAULT '',
                show_resume_button INTEGER NOT NULL DEFAULT 1,
                updated_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS contact_info (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT NOT NULL,
                location TEXT NOT NULL DEFAULT '',
                phone TEXT NOT NULL DEFAULT '',
                availability TEXT NOT NULL DEFAULT 'Available',
                updated_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS projects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                long_description TEXT NOT NULL DEFAULT '',
                image TEXT NOT NULL,
                tech_stack TEXT NOT NULL DEFAULT '[]',
                category TEXT NOT NULL DEFAULT 'web',
                live_link TEXT NOT NULL DEFAULT '',
                github_link TEXT NOT NULL DEFAULT '',
                featured INTEGER NOT NULL DEFAULT 0,
                sort_order INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS skills (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                icon TEXT NOT NULL DEFAULT '',
                category TEXT NOT NULL DEFAULT 'other',
                proficiency INTEGER NOT NULL DEFAULT 0,
                color TEXT NOT NULL DEFAULT '#3b82f6',
                sort_order INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS socials (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                platform TEXT NOT NULL UNIQUE,
                url TEXT NOT NULL,
                icon TEXT NOT NULL DEFAULT '',
                color TEXT NOT NULL DEFAULT '#3b82f6',
                sort_order INTEGER NOT NULL DEFAULT 0,
                active INTEGER NOT NULL DEFAULT 1
            );

            CREATE TABLE IF NOT EXISTS testimonials (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                role TEXT NOT NULL DEFAULT '',
                company TEXT NOT NULL DEFAULT '',
                content TEXT NOT NULL,
                avatar TEXT NOT NULL DEFAULT '',
                rating INTEGER NOT NULL DEFAULT 5,
                featured INTEGER NOT NULL DEFAULT 0,
                sort_order INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_skills_category ON skills(category);
            CREATE INDEX IF NOT EXISTS idx_testimonials_featured ON testimonials(featured);
            CREATE INDEX IF NOT EXISTS idx_socials_active ON socials(active);
            ",
        )?;
        Ok(())
    }

    pub fn collection_counts(&self) -> Result<CollectionCounts, StoreError> {
        Ok(CollectionCounts {
            projects: self.count("projects")?,
            skills: self.count("skills")?,
            socials: self.count("socials")?,
            testimonials: self.count("testimonials")?,
            about: self.count("about")?,
            hero: self.count("hero")?,
            contact_info: self.count("contact_info")?,
        })
    }

    fn count(&self, table: &str) -> Result<i64, StoreError> {
        // `table` is always one of our fixed table names, never user input.
        let count = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        Ok(count)
    }

    /// Remove every content document. Used by the seed command.
    pub fn clear_content(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "DELETE FROM projects;
             DELETE FROM skills;
             DELETE FROM socials;
             DELETE FROM testimonials;
             DELETE FROM about;
             DELETE FROM hero;
             DELETE FROM contact_info;",
        )?;
        Ok(())
    }
}

/// Decode a JSON string-list column; a corrupt cell reads as empty.
pub(crate) fn parse_string_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Encode a string list for storage.
pub(crate) fn encode_string_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".into())
}
