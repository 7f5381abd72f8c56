// tests/support/mocks/accounts.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use wafa_leads::domain::account::{Account, AccountEmail, AccountId, AccountRepository};
use wafa_leads::domain::errors::DomainResult;

#[derive(Debug, Default)]
pub struct InMemoryAccountRepo {
    accounts: Mutex<HashMap<i64, Account>>,
}

impl InMemoryAccountRepo {
    pub fn with(accounts: Vec<Account>) -> Self {
        let repo = Self::default();
        for account in accounts {
            repo.put(account);
        }
        repo
    }

    pub fn put(&self, account: Account) {
        self.accounts
            .lock()
            .unwrap()
            .insert(i64::from(account.id), account);
    }

    pub fn set_active(&self, id: i64, active: bool) {
        if let Some(account) = self.accounts.lock().unwrap().get_mut(&id) {
            account.is_active = active;
        }
    }

    pub fn get(&self, id: AccountId) -> Option<Account> {
        self.accounts.lock().unwrap().get(&i64::from(id)).cloned()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepo {
    async fn find_by_email(&self, email: &AccountEmail) -> DomainResult<Option<Account>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .find(|account| account.email == *email)
            .cloned())
    }

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        Ok(self.get(id))
    }
}
