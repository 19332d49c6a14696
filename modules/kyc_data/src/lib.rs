//! KYC Data
//!
//! Persistence layer of a KYC onboarding platform: thirty related entities
//! covering users and access control, company, trustee and investor
//! profiles, business KYC documents and the document taxonomy. Every
//! repository is wrapped so that records get a UUID identifier and
//! `created_at`/`updated_at` stamps without callers supplying them.

// Public exports
pub mod contract;
pub use contract::{EntityKind, IdPolicy, Inclusion, RelationKind, StoreError, StoreResult};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::KycDataModule;

pub mod domain;
pub use domain::{AuditedRepository, Clock, EntityStore, IdGenerator, SystemClock, UuidV4Generator};

pub mod infra;
pub use infra::storage::{entity, KycRepository, RelationResolver, Repositories, SeaOrmStore};
