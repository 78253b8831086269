// src/db/submissions.rs
use crate::errors::ServerError;
use crate::forms::ContactForm;
use rusqlite::{params, Connection};

pub fn insert_contact(
    conn: &Connection,
    form: &ContactForm,
    client_ip: Option<&str>,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        INSERT INTO contact_submissions
            (first_name, last_name, email, subject, message, company, phone, client_ip, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#,
        params![
            form.first_name,
            form.last_name,
            form.email,
            form.subject,
            form.message,
            form.company,
            form.phone,
            client_ip,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert contact failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// Returns `true` when the address was not subscribed before.
pub fn subscribe_newsletter(
    conn: &Connection,
    email: &str,
    client_ip: Option<&str>,
    now: i64,
) -> Result<bool, ServerError> {
    let inserted = conn
        .execute(
            "INSERT INTO newsletter_subscriptions (email, client_ip, created_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(email) DO NOTHING",
            params![email, client_ip, now],
        )
        .map_err(|e| ServerError::DbError(format!("insert subscription failed: {e}")))?;

    Ok(inserted == 1)
}

#[cfg(test)]
pub fn count_contacts(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("SELECT COUNT(*) FROM contact_submissions", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(e.to_string()))
}

#[cfg(test)]
pub fn count_subscriptions(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("SELECT COUNT(*) FROM newsletter_subscriptions", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(e.to_string()))
}
