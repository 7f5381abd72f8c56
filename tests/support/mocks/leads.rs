// tests/support/mocks/leads.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;
use wafa_leads::domain::errors::DomainResult;
use wafa_leads::domain::lead::{
    Lead, LeadEmail, LeadId, LeadListFilter, LeadPatch, LeadRepository, LeadSortColumn, NewLead,
};
use wafa_leads::domain::pagination::{Page, PageRequest, SortDirection};

/// Keeps soft-deleted rows around like the real table does.
#[derive(Debug, Default)]
pub struct InMemoryLeadRepo {
    rows: Mutex<Vec<Lead>>,
}

impl InMemoryLeadRepo {
    /// Any row, deleted or not.
    pub fn raw(&self, id: i64) -> Option<Lead> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|lead| i64::from(lead.id) == id)
            .cloned()
    }

    pub fn live_count(&self) -> usize {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|lead| !lead.is_deleted())
            .count()
    }
}

fn matches_search(lead: &Lead, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    [
        lead.nama.as_str(),
        lead.email.as_str(),
        lead.nama_lembaga.as_str(),
        lead.nomor_whatsapp.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

fn compare(a: &Lead, b: &Lead, column: LeadSortColumn) -> Ordering {
    let primary = match column {
        LeadSortColumn::Id => Ordering::Equal,
        LeadSortColumn::Nama => a.nama.as_str().cmp(b.nama.as_str()),
        LeadSortColumn::Email => a.email.as_str().cmp(b.email.as_str()),
        LeadSortColumn::NamaLembaga => a.nama_lembaga.as_str().cmp(b.nama_lembaga.as_str()),
        LeadSortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
    };
    primary.then_with(|| i64::from(a.id).cmp(&i64::from(b.id)))
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepo {
    async fn find_by_id(&self, id: LeadId) -> DomainResult<Option<Lead>> {
        Ok(self
            .raw(i64::from(id))
            .filter(|lead| !lead.is_deleted()))
    }

    async fn list(&self, filter: &LeadListFilter, page: PageRequest) -> DomainResult<Page<Lead>> {
        let mut live: Vec<Lead> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|lead| !lead.is_deleted())
            .filter(|lead| {
                filter
                    .search
                    .as_deref()
                    .is_none_or(|needle| matches_search(lead, needle))
            })
            .cloned()
            .collect();

        live.sort_by(|a, b| {
            let ord = compare(a, b, filter.order_by);
            match filter.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });

        let total = live.len() as u64;
        let items = live
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(Page::new(items, total, page))
    }

    async fn insert(&self, lead: NewLead) -> DomainResult<Lead> {
        let mut rows = self.rows.lock().unwrap();
        let id = LeadId::new(rows.len() as i64 + 1)?;
        let fields = lead.fields;
        let stored = Lead {
            id,
            nama: fields.nama,
            nomor_whatsapp: fields.nomor_whatsapp,
            email: fields.email,
            nama_lembaga: fields.nama_lembaga,
            created_at: lead.created_at,
            updated_at: lead.created_at,
            deleted_at: None,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        id: LeadId,
        patch: LeadPatch,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Option<Lead>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(lead) = rows
            .iter_mut()
            .find(|lead| lead.id == id && !lead.is_deleted())
        else {
            return Ok(None);
        };

        if let Some(nama) = patch.nama {
            lead.nama = nama;
        }
        if let Some(phone) = patch.nomor_whatsapp {
            lead.nomor_whatsapp = phone;
        }
        if let Some(email) = patch.email {
            lead.email = email;
        }
        if let Some(lembaga) = patch.nama_lembaga {
            lead.nama_lembaga = lembaga;
        }
        lead.updated_at = updated_at;
        Ok(Some(lead.clone()))
    }

    async fn soft_delete(&self, id: LeadId, deleted_at: DateTime<Utc>) -> DomainResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|lead| lead.id == id && !lead.is_deleted())
        {
            Some(lead) => {
                lead.deleted_at = Some(deleted_at);
                lead.updated_at = deleted_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn email_exists(&self, email: &LeadEmail, exclude: Option<LeadId>) -> DomainResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|lead| {
            !lead.is_deleted() && lead.email == *email && Some(lead.id) != exclude
        }))
    }
}

/// Holds every `find_by_id` at a barrier until `readers` callers have read,
/// so concurrent updates all see the row before any of them writes.
pub struct GatedLeadRepo {
    inner: Arc<InMemoryLeadRepo>,
    gate: Barrier,
}

impl GatedLeadRepo {
    pub fn new(inner: Arc<InMemoryLeadRepo>, readers: usize) -> Self {
        Self {
            inner,
            gate: Barrier::new(readers),
        }
    }
}

#[async_trait]
impl LeadRepository for GatedLeadRepo {
    async fn find_by_id(&self, id: LeadId) -> DomainResult<Option<Lead>> {
        let found = self.inner.find_by_id(id).await?;
        self.gate.wait().await;
        Ok(found)
    }

    async fn list(&self, filter: &LeadListFilter, page: PageRequest) -> DomainResult<Page<Lead>> {
        self.inner.list(filter, page).await
    }

    async fn insert(&self, lead: NewLead) -> DomainResult<Lead> {
        self.inner.insert(lead).await
    }

    async fn update(
        &self,
        id: LeadId,
        patch: LeadPatch,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Option<Lead>> {
        self.inner.update(id, patch, updated_at).await
    }

    async fn soft_delete(&self, id: LeadId, deleted_at: DateTime<Utc>) -> DomainResult<bool> {
        self.inner.soft_delete(id, deleted_at).await
    }

    async fn email_exists(&self, email: &LeadEmail, exclude: Option<LeadId>) -> DomainResult<bool> {
        self.inner.email_exists(email, exclude).await
    }
}
