//! One-time sample data for an empty article store.
//!
//! Seeding is gated on the row count, not on the presence of any particular
//! sample row: once the table holds anything, it is never touched again.

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::errors::domain::DomainError;
use crate::repos::articles::{self, NewArticle};

struct SeedArticle {
    title: &'static str,
    description: &'static str,
    content: &'static str,
    date: &'static str,
    author: &'static str,
}

const SEED_ARTICLES: [SeedArticle; 5] = [
    SeedArticle {
        title: "Getting Started with React and Node.js",
        description: "Learn how to build full-stack applications using React for the frontend and Node.js for the backend.",
        content: include_str!("seed_articles/getting_started_react_node.md"),
        date: "2024-01-15",
        author: "Technical Team",
    },
    SeedArticle {
        title: "Understanding Modern UI Libraries",
        description: "Explore the best UI libraries for React applications and how they can accelerate your development process.",
        content: include_str!("seed_articles/modern_ui_libraries.md"),
        date: "2024-02-10",
        author: "Design Team",
    },
    SeedArticle {
        title: "SQLite for Web Applications",
        description: "Discover why SQLite is an excellent choice for small to medium-sized web applications.",
        content: include_str!("seed_articles/sqlite_for_web_apps.md"),
        date: "2024-03-05",
        author: "Backend Team",
    },
    SeedArticle {
        title: "Creating Distraction-Free Reading Experiences",
        description: "Learn the principles of designing reading modes that maximize focus and comprehension.",
        content: include_str!("seed_articles/distraction_free_reading.md"),
        date: "2024-03-20",
        author: "UX Team",
    },
    SeedArticle {
        title: "Building RESTful APIs with Express",
        description: "A comprehensive guide to creating robust and scalable REST APIs using Express.js.",
        content: include_str!("seed_articles/restful_apis_express.md"),
        date: "2024-04-01",
        author: "API Team",
    },
];

/// What `seed_if_empty` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Store was empty; this many sample articles were inserted
    Seeded(usize),
    /// Store already held this many rows; nothing was inserted
    Skipped(u64),
}

/// The fixed sample set, in insertion order.
pub fn seed_articles() -> Vec<NewArticle> {
    SEED_ARTICLES
        .iter()
        .map(|seed| NewArticle {
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            content: seed.content.trim_end().to_string(),
            date: seed.date.to_string(),
            author: seed.author.to_string(),
        })
        .collect()
}

/// Insert the sample articles when the table holds zero rows.
///
/// Count and inserts share one transaction, so a failure part-way leaves the
/// store empty and a concurrent initializer cannot double-seed.
pub async fn seed_if_empty(conn: &DatabaseConnection) -> Result<SeedOutcome, DomainError> {
    let txn = conn.begin().await?;

    let existing = articles::count(&txn).await?;
    if existing > 0 {
        txn.commit().await?;
        info!(existing, "seed=skipped");
        return Ok(SeedOutcome::Skipped(existing));
    }

    let samples = seed_articles();
    let inserted = samples.len();
    for article in samples {
        articles::insert(&txn, article).await?;
    }
    txn.commit().await?;

    info!(inserted, "seed=inserted sample articles");
    Ok(SeedOutcome::Seeded(inserted))
}
