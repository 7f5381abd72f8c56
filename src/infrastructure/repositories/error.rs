use crate::domain::errors::{DomainError, FieldErrors};
use crate::domain::lead::entity::FIELD_EMAIL;

const CNT_LEAD_EMAIL_LIVE: &str = "leads_email_live_key";
const CNT_ACTIVITY_ACTOR: &str = "activity_logs_actor_account_id_fkey";
const CNT_ACTIVITY_LEAD: &str = "activity_logs_related_lead_id_fkey";
const CNT_ACTIVITY_ACTION_CHECK: &str = "activity_logs_action_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_LEAD_EMAIL_LIVE => DomainError::InvalidFields(FieldErrors::single(
                        FIELD_EMAIL,
                        "The email has already been taken.",
                    )),
                    CNT_ACTIVITY_ACTOR => DomainError::NotFound("actor account not found".into()),
                    CNT_ACTIVITY_LEAD => DomainError::NotFound("related lead not found".into()),
                    CNT_ACTIVITY_ACTION_CHECK => {
                        DomainError::Validation("unknown activity action".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
