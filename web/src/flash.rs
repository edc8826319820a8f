//! One-shot notices stored in the session.
//!
//! A notice is pushed while a command is handled (usually right before a
//! redirect) and taken by the next page that renders. Taking removes it, so
//! every notice is shown exactly once.

use crate::WebResult;
use listkeeper_core::effect::Notice;
use tower_sessions::Session;

/// Session key holding the pending notices.
pub const FLASH_KEY: &str = "_flash";

/// Append a notice to the session's queue.
///
/// # Errors
///
/// Returns an internal [`AppError`](crate::AppError) if the session store
/// fails to load or serialize the queue.
pub async fn push(session: &Session, notice: Notice) -> WebResult<()> {
    let mut pending: Vec<Notice> = session.get(FLASH_KEY).await?.unwrap_or_default();
    pending.push(notice);
    session.insert(FLASH_KEY, pending).await?;

    metrics::counter!("listkeeper_notices_total").increment(1);
    Ok(())
}

/// Remove and return every pending notice, oldest first.
///
/// # Errors
///
/// Returns an internal [`AppError`](crate::AppError) if the session store
/// fails.
pub async fn take(session: &Session) -> WebResult<Vec<Notice>> {
    Ok(session
        .remove::<Vec<Notice>>(FLASH_KEY)
        .await?
        .unwrap_or_default())
}
