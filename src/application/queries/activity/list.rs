use super::ActivityLogQueryService;
use crate::{
    application::{
        dto::{ActivityLogDto, AuthenticatedAccount, PageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        account::AccountId,
        activity::{ActivityAction, ActivityLogFilter},
        pagination::{PageRequest, normalize_search},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListActivityLogsQuery {
    pub action: Option<String>,
    pub user_id: Option<i64>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ActivityLogQueryService {
    /// Newest first, always.
    pub async fn list_activity_logs(
        &self,
        actor: &AuthenticatedAccount,
        query: ListActivityLogsQuery,
    ) -> ApplicationResult<PageDto<ActivityLogDto>> {
        let filter = Self::build_filter(query.action, query.user_id, query.search)?;
        let page = PageRequest::new(
            query.page.unwrap_or(1),
            query.per_page.unwrap_or(0),
            self.default_per_page,
        );
        tracing::debug!(actor_id = %actor.id, page = page.page(), "listing activity logs");

        let entries = self.repo.list(&filter, page).await?;
        Ok(PageDto::from_page(entries, ActivityLogDto::from))
    }

    fn build_filter(
        action: Option<String>,
        user_id: Option<i64>,
        search: Option<String>,
    ) -> ApplicationResult<ActivityLogFilter> {
        let action = normalize_search(action)
            .map(|a| a.parse::<ActivityAction>())
            .transpose()?;
        let actor_account_id = user_id
            .map(AccountId::new)
            .transpose()
            .map_err(|_| ApplicationError::validation("user_id must be a positive integer"))?;

        Ok(ActivityLogFilter {
            action,
            actor_account_id,
            search: normalize_search(search),
        })
    }
}
