use crate::domain::pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub last_page: u32,
}

impl<T> PageDto<T> {
    pub fn from_page<U>(page: Page<U>, f: impl FnMut(U) -> T) -> Self {
        let last_page = page.last_page();
        let request = page.request;
        let total = page.total;
        Self {
            items: page.items.into_iter().map(f).collect(),
            page: request.page(),
            per_page: request.per_page(),
            total,
            last_page,
        }
    }
}
