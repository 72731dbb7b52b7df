//! Contact submission storage queries

use chrono::Utc;
use sqlx::SqlitePool;

use crate::contact::{ContactStatus, ContactSubmission, NewContact};

/// Insert a validated submission with `status = new`
///
/// `created_at` is assigned here, by the storage layer, not by the caller.
pub async fn insert_contact(
    pool: &SqlitePool,
    contact: &NewContact,
) -> anyhow::Result<ContactSubmission> {
    let submission = sqlx::query_as::<_, ContactSubmission>(
        "INSERT INTO contacts (name, email, message, status, created_at)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id, name, email, message, status, created_at",
    )
    .bind(&contact.name)
    .bind(&contact.email)
    .bind(&contact.message)
    .bind(ContactStatus::New)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(submission)
}

/// Fetch every stored submission, newest first
///
/// The insertion id breaks ties between submissions created within the same
/// instant.
pub async fn list_contacts(pool: &SqlitePool) -> anyhow::Result<Vec<ContactSubmission>> {
    let submissions = sqlx::query_as::<_, ContactSubmission>(
        "SELECT id, name, email, message, status, created_at
         FROM contacts
         ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(submissions)
}

/// Count stored submissions
pub async fn count_contacts(pool: &SqlitePool) -> anyhow::Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contacts")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
