// src/infrastructure/security/claims.rs
use crate::application::{
    dto::VerifiedToken,
    error::{ApplicationError, ApplicationResult, AuthFailure},
};
use crate::domain::account::{AccountId, Role};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};

pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<VerifiedToken> {
    let ctx = ClaimsContext::from_facts(facts);
    build_verified_token(ctx)
}

fn build_verified_token(ctx: ClaimsContext) -> ApplicationResult<VerifiedToken> {
    let missing = |claim: &str| {
        tracing::debug!(claim, "token is missing a claim");
        ApplicationError::unauthorized(AuthFailure::TokenInvalid)
    };

    let account_id = ctx.account_id.ok_or_else(|| missing("account"))?;
    let account_id = AccountId::new(account_id).map_err(|_| missing("account"))?;

    Ok(VerifiedToken {
        account_id,
        name: ctx.name.ok_or_else(|| missing("account"))?,
        role: ctx.role.ok_or_else(|| missing("role"))?,
        token_id: ctx.token_id.ok_or_else(|| missing("token_id"))?,
        issued_at: ctx.issued_at.ok_or_else(|| missing("issued_at"))?,
        expires_at: ctx.expires_at.ok_or_else(|| missing("expires_at"))?,
    })
}

#[derive(Default)]
struct ClaimsContext {
    account_id: Option<i64>,
    name: Option<String>,
    role: Option<Role>,
    token_id: Option<String>,
    issued_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply_predicate(fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("account", [Term::Integer(id), Term::Str(name)]) => {
                self.account_id = Some(*id);
                self.name = Some(name.clone());
            }
            ("role", [Term::Str(role)]) => self.role = role.parse().ok(),
            ("token_id", [Term::Str(id)]) => self.token_id = Some(id.clone()),
            ("issued_at", [Term::Date(seconds)]) => self.issued_at = date_term(*seconds),
            ("expires_at", [Term::Date(seconds)]) => self.expires_at = date_term(*seconds),
            _ => {}
        }
    }
}

fn date_term(seconds: u64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(i64::try_from(seconds).ok()?, 0)
}
