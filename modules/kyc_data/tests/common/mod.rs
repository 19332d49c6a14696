//! Common test utilities: controllable clock and ids, sqlite setup, fixtures

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use kyc_data::entity::enums::{ApplicationStatus, VerificationMode, VerificationStatus};
use kyc_data::entity::{
    bank_details, company_entity_types, company_profiles, company_sector_types, kyc_applications,
    roles, users,
};
use kyc_data::{Clock, Config, IdGenerator, KycDataModule, Repositories, UuidV4Generator};
use parking_lot::Mutex;
use sea_orm::ActiveValue::Set;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

/// Whole seconds after a fixed epoch, so values survive a database round trip
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

/// Clock that returns a preset instant and advances by `step` after each read
pub struct TestClock {
    now: Mutex<DateTime<Utc>>,
    step: Duration,
    reads: AtomicU64,
}

impl TestClock {
    pub fn fixed(now: DateTime<Utc>) -> Self {
        Self::stepping(now, Duration::zero())
    }

    pub fn stepping(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            now: Mutex::new(start),
            step,
            reads: AtomicU64::new(0),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock() = now;
    }

    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let mut now = self.now.lock();
        let current = *now;
        *now = current + self.step;
        current
    }
}

/// Deterministic ids: `id-1`, `id-2`, ...
#[derive(Default)]
pub struct SequenceIds {
    issued: AtomicU64,
}

impl SequenceIds {
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}

impl IdGenerator for SequenceIds {
    fn generate(&self) -> String {
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        format!("id-{}", n)
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        ..Config::default()
    }
}

/// Migrated in-memory database with UUID ids and a controllable clock
pub async fn setup() -> (Repositories, Arc<TestClock>) {
    let clock = Arc::new(TestClock::fixed(at(0)));
    let module = KycDataModule::new(clock.clone(), Arc::new(UuidV4Generator));
    module.init(test_config()).await.unwrap();
    (module.repositories().unwrap(), clock)
}

// ===== Fixtures =====

pub fn new_user(name: &str, email: &str, phone: &str) -> users::ActiveModel {
    users::ActiveModel {
        full_name: Set(name.to_string()),
        email: Set(email.to_string()),
        phone: Set(phone.to_string()),
        ..Default::default()
    }
}

pub async fn seed_user(repos: &Repositories, n: u32) -> users::Model {
    repos
        .users()
        .create(new_user(
            &format!("User {}", n),
            &format!("user{}@example.com", n),
            &format!("98765{:05}", n),
        ))
        .await
        .unwrap()
}

pub async fn seed_role(repos: &Repositories, value: &str) -> roles::Model {
    repos
        .roles()
        .create(roles::ActiveModel {
            label: Set(value.to_uppercase()),
            value: Set(value.to_string()),
            ..Default::default()
        })
        .await
        .unwrap()
}

pub fn new_bank_detail(user_id: &str) -> bank_details::ActiveModel {
    bank_details::ActiveModel {
        user_id: Set(user_id.to_string()),
        bank_name: Set("State Bank of India".to_string()),
        account_holder_name: Set("Acme Pvt Ltd".to_string()),
        account_number: Set("00112233445566".to_string()),
        ifsc_code: Set("SBIN0000123".to_string()),
        is_primary: Set(true),
        status: Set(VerificationStatus::UnderReview),
        mode: Set(VerificationMode::Manual),
        ..Default::default()
    }
}

pub async fn seed_application(repos: &Repositories, user_id: &str) -> kyc_applications::Model {
    repos
        .kyc_applications()
        .create(kyc_applications::ActiveModel {
            user_id: Set(user_id.to_string()),
            role_value: Set("company".to_string()),
            status: Set(ApplicationStatus::Pending),
            ..Default::default()
        })
        .await
        .unwrap()
}

/// A valid company profile payload; its parents must already exist
pub fn new_company_profile(
    user_id: &str,
    application_id: &str,
    entity_type_id: &str,
    sector_type_id: &str,
) -> company_profiles::ActiveModel {
    company_profiles::ActiveModel {
        user_id: Set(user_id.to_string()),
        kyc_application_id: Set(application_id.to_string()),
        company_entity_type_id: Set(entity_type_id.to_string()),
        company_sector_type_id: Set(sector_type_id.to_string()),
        company_name: Set("Acme Industries Private Limited".to_string()),
        cin: Set(Some("U12345MH2020PTC123456".to_string())),
        gstin: Set(Some("27ABCDE1234F1Z5".to_string())),
        udyam_registration_number: Set(Some("UDYAM-MH-12-1234567".to_string())),
        date_of_incorporation: Set("2020-06-15".to_string()),
        ..Default::default()
    }
}

/// User, application and lookup types a company profile points at
pub struct CompanyParents {
    pub user: users::Model,
    pub application: kyc_applications::Model,
    pub entity_type: company_entity_types::Model,
    pub sector_type: company_sector_types::Model,
}

impl CompanyParents {
    pub fn profile(&self) -> company_profiles::ActiveModel {
        new_company_profile(
            &self.user.id,
            &self.application.id,
            &self.entity_type.id,
            &self.sector_type.id,
        )
    }
}

pub async fn seed_company_parents(repos: &Repositories) -> CompanyParents {
    let user = seed_user(repos, 1).await;
    let application = seed_application(repos, &user.id).await;

    let entity_type = repos
        .company_entity_types()
        .create(company_entity_types::ActiveModel {
            label: Set("Private Limited".to_string()),
            value: Set("private_limited".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let sector_type = repos
        .company_sector_types()
        .create(company_sector_types::ActiveModel {
            label: Set("Manufacturing".to_string()),
            value: Set("manufacturing".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    CompanyParents {
        user,
        application,
        entity_type,
        sector_type,
    }
}

pub async fn seed_company(repos: &Repositories) -> (CompanyParents, company_profiles::Model) {
    let parents = seed_company_parents(repos).await;
    let profile = repos
        .company_profiles()
        .create(parents.profile())
        .await
        .unwrap();
    (parents, profile)
}
