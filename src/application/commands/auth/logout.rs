use super::AuthService;
use crate::{
    application::{
        commands::audit_trail::Audited,
        dto::{AuthenticatedAccount, ClientMeta},
        error::ApplicationResult,
    },
    domain::activity::NewActivityLog,
};

impl AuthService {
    /// Write the logout entry, then revoke the token the actor presented.
    pub async fn invalidate(
        &self,
        actor: &AuthenticatedAccount,
        meta: &ClientMeta,
    ) -> ApplicationResult<Audited<()>> {
        let now = self.clock.now();
        let description = self.audit.describe_actor(actor, "logged out", now);
        let audit = self
            .audit
            .record(NewActivityLog::logout(actor.id, description, now), meta)
            .await;

        self.revoke_quietly(&actor.token_id, actor.expires_at + self.refresh_grace)
            .await;

        Ok(Audited::new((), audit))
    }
}
