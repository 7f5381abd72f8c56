use super::LeadQueryService;
use crate::{
    application::{
        dto::{AuthenticatedAccount, LeadDto, PageDto},
        error::ApplicationResult,
    },
    domain::{
        lead::{LeadListFilter, LeadSortColumn},
        pagination::{PageRequest, normalize_search, parse_direction},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListLeadsQuery {
    pub search: Option<String>,
    pub order_by: Option<String>,
    pub order_direction: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl LeadQueryService {
    pub async fn list_leads(
        &self,
        actor: &AuthenticatedAccount,
        query: ListLeadsQuery,
    ) -> ApplicationResult<PageDto<LeadDto>> {
        let filter = LeadListFilter {
            search: normalize_search(query.search),
            order_by: LeadSortColumn::from_param(query.order_by.as_deref()),
            direction: parse_direction(query.order_direction.as_deref())?,
        };
        let page = PageRequest::new(
            query.page.unwrap_or(1),
            query.per_page.unwrap_or(0),
            self.default_per_page,
        );

        tracing::debug!(
            actor_id = %actor.id,
            order_by = filter.order_by.as_column(),
            page = page.page(),
            "listing leads"
        );

        let leads = self.repo.list(&filter, page).await?;
        Ok(PageDto::from_page(leads, LeadDto::from))
    }
}
