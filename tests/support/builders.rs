// tests/support/builders.rs
use chrono::{DateTime, Utc};

use wafa_leads::domain::account::{Account, AccountEmail, AccountId, PasswordHash, Role};
use wafa_leads::domain::lead::LeadInput;

use super::mocks::{StrictPasswordHasher, fixed_now};

pub const ADMIN_ID: i64 = 1;
pub const ADMIN_EMAIL: &str = "admin@wafa.test";
pub const STAFF_ID: i64 = 2;
pub const STAFF_EMAIL: &str = "staff@wafa.test";
pub const INACTIVE_ID: i64 = 3;
pub const INACTIVE_EMAIL: &str = "dormant@wafa.test";
pub const PASSWORD: &str = "secret-pass";

pub struct AccountBuilder {
    id: i64,
    name: String,
    email: String,
    password: String,
    role: Role,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl AccountBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: format!("Account {id}"),
            email: format!("account{id}@wafa.test"),
            password: PASSWORD.into(),
            role: Role::Admin,
            is_active: true,
            created_at: fixed_now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn build(self) -> Account {
        Account {
            id: AccountId::new(self.id).unwrap(),
            name: self.name,
            email: AccountEmail::new(self.email).unwrap(),
            password_hash: PasswordHash::new(StrictPasswordHasher::hash_of(&self.password))
                .unwrap(),
            role: self.role,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

pub fn seeded_accounts() -> Vec<Account> {
    vec![
        AccountBuilder::new(ADMIN_ID)
            .name("Wafa")
            .email(ADMIN_EMAIL)
            .build(),
        AccountBuilder::new(STAFF_ID)
            .name("Sari")
            .email(STAFF_EMAIL)
            .role(Role::Staff)
            .build(),
        AccountBuilder::new(INACTIVE_ID)
            .name("Dormant")
            .email(INACTIVE_EMAIL)
            .inactive()
            .build(),
    ]
}

pub fn lead_input(nama: &str, phone: &str, email: &str, lembaga: &str) -> LeadInput {
    LeadInput {
        nama: Some(nama.into()),
        nomor_whatsapp: Some(phone.into()),
        email: Some(email.into()),
        nama_lembaga: Some(lembaga.into()),
    }
}

pub fn budi_input() -> LeadInput {
    lead_input("Budi", "081234567890", "budi@x.com", "SMA 1")
}

pub fn budi_json() -> serde_json::Value {
    serde_json::json!({
        "nama": "Budi",
        "nomor_whatsapp": "081234567890",
        "email": "budi@x.com",
        "nama_lembaga": "SMA 1"
    })
}
