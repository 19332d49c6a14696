//! Identity and audit stamping, checked against recording stores

mod common;

use async_trait::async_trait;
use chrono::Duration;
use common::{at, new_user, print_test_header, SequenceIds, TestClock};
use kyc_data::domain::audit::AuditedEntity;
use kyc_data::entity::enums::{VerificationMode, VerificationStatus};
use kyc_data::entity::{business_kyc_guarantor, users};
use kyc_data::{AuditedRepository, EntityKind, EntityStore, StoreError, StoreResult};
use parking_lot::Mutex;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, Condition, EntityTrait, TryIntoModel, Value};
use std::sync::Arc;

// Mock store implementations for testing
pub mod mocks {
    use super::*;

    /// Write payload as it reached the store
    #[derive(Debug, Clone)]
    pub enum Recorded<A> {
        Create(A),
        CreateAll(Vec<A>),
        UpdateAll(A),
        Replace(Value, A),
    }

    /// Store that records every write and echoes inserts back
    pub struct RecordingStore<E: EntityTrait> {
        log: Arc<Mutex<Vec<Recorded<E::ActiveModel>>>>,
        /// Identifier the "database" assigns when the payload has none
        generated_id: Option<Value>,
    }

    impl<E: EntityTrait> RecordingStore<E> {
        pub fn new() -> Self {
            Self {
                log: Arc::new(Mutex::new(Vec::new())),
                generated_id: None,
            }
        }

        pub fn generating(id: Value) -> Self {
            Self {
                log: Arc::new(Mutex::new(Vec::new())),
                generated_id: Some(id),
            }
        }

        pub fn log(&self) -> Vec<Recorded<E::ActiveModel>> {
            self.log.lock().clone()
        }
    }

    impl<E: EntityTrait> Clone for RecordingStore<E> {
        fn clone(&self) -> Self {
            Self {
                log: self.log.clone(),
                generated_id: self.generated_id.clone(),
            }
        }
    }

    impl<E> RecordingStore<E>
    where
        E: AuditedEntity,
        E::ActiveModel: TryIntoModel<E::Model>,
    {
        fn materialize(&self, mut data: E::ActiveModel) -> StoreResult<E::Model> {
            if let Some(id) = &self.generated_id {
                if !data.get(E::id_col()).is_set() {
                    data.set(E::id_col(), id.clone());
                }
            }
            if !data.get(E::is_active_col()).is_set() {
                data.set(E::is_active_col(), true.into());
            }
            if !data.get(E::is_deleted_col()).is_set() {
                data.set(E::is_deleted_col(), false.into());
            }
            if !data.get(E::deleted_at_col()).is_set() {
                data.set(E::deleted_at_col(), Value::ChronoDateTimeUtc(None));
            }
            Ok(data.try_into_model()?)
        }
    }

    #[async_trait]
    impl<E> EntityStore<E> for RecordingStore<E>
    where
        E: AuditedEntity,
        E::ActiveModel: TryIntoModel<E::Model> + Send + Sync,
        E::Model: Send + Sync,
    {
        async fn create(&self, data: E::ActiveModel) -> StoreResult<E::Model> {
            self.log.lock().push(Recorded::Create(data.clone()));
            self.materialize(data)
        }

        async fn create_all(&self, data: Vec<E::ActiveModel>) -> StoreResult<Vec<E::Model>> {
            self.log.lock().push(Recorded::CreateAll(data.clone()));
            data.into_iter().map(|d| self.materialize(d)).collect()
        }

        async fn update_all(&self, data: E::ActiveModel, _filter: Condition) -> StoreResult<u64> {
            self.log.lock().push(Recorded::UpdateAll(data));
            Ok(1)
        }

        async fn replace_by_id(&self, id: Value, data: E::ActiveModel) -> StoreResult<()> {
            self.log.lock().push(Recorded::Replace(id, data));
            Ok(())
        }

        async fn find(&self, _filter: Condition) -> StoreResult<Vec<E::Model>> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, _id: Value) -> StoreResult<Option<E::Model>> {
            Ok(None)
        }

        async fn count(&self, _filter: Condition) -> StoreResult<u64> {
            Ok(0)
        }

        async fn delete_by_id(&self, _id: Value) -> StoreResult<()> {
            Ok(())
        }
    }

    /// Store that rejects every write the way a database would
    #[derive(Clone, Default)]
    pub struct FailingStore;

    #[async_trait]
    impl EntityStore<users::Entity> for FailingStore {
        async fn create(&self, _data: users::ActiveModel) -> StoreResult<users::Model> {
            Err(StoreError::Conflict("users.email".to_string()))
        }

        async fn create_all(&self, _data: Vec<users::ActiveModel>) -> StoreResult<Vec<users::Model>> {
            Err(StoreError::Conflict("users.phone".to_string()))
        }

        async fn update_all(&self, _data: users::ActiveModel, _filter: Condition) -> StoreResult<u64> {
            Err(StoreError::Validation("phone: too long".to_string()))
        }

        async fn replace_by_id(&self, id: Value, _data: users::ActiveModel) -> StoreResult<()> {
            let id = match id {
                Value::String(Some(s)) => *s,
                other => format!("{:?}", other),
            };
            Err(StoreError::NotFound {
                entity: EntityKind::Users,
                id,
            })
        }

        async fn find(&self, _filter: Condition) -> StoreResult<Vec<users::Model>> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, _id: Value) -> StoreResult<Option<users::Model>> {
            Ok(None)
        }

        async fn count(&self, _filter: Condition) -> StoreResult<u64> {
            Ok(0)
        }

        async fn delete_by_id(&self, _id: Value) -> StoreResult<()> {
            Ok(())
        }
    }
}

use mocks::{FailingStore, Recorded, RecordingStore};

type UserRepo = AuditedRepository<users::Entity, RecordingStore<users::Entity>>;

fn user_repo(clock: Arc<TestClock>, ids: Arc<SequenceIds>) -> (UserRepo, RecordingStore<users::Entity>) {
    let store = RecordingStore::new();
    let repo = AuditedRepository::new(store.clone(), clock, ids);
    (repo, store)
}

#[tokio::test]
async fn test_create_assigns_id_when_missing() {
    print_test_header(
        "test_create_assigns_id_when_missing",
        "An entity created without an id gets one from the generator",
    );

    let ids = Arc::new(SequenceIds::default());
    let (repo, _) = user_repo(Arc::new(TestClock::fixed(at(0))), ids.clone());

    let user = repo.create(new_user("A", "a@x.com", "123")).await.unwrap();

    assert_eq!(user.id, "id-1");
    assert_eq!(ids.issued(), 1);
    assert!(user.is_active);
    assert!(!user.is_deleted);
}

#[tokio::test]
async fn test_create_preserves_supplied_id() {
    let ids = Arc::new(SequenceIds::default());
    let (repo, _) = user_repo(Arc::new(TestClock::fixed(at(0))), ids.clone());

    let mut data = new_user("A", "a@x.com", "123");
    data.id = Set("client-chosen".to_string());
    let user = repo.create(data).await.unwrap();

    assert_eq!(user.id, "client-chosen");
    assert_eq!(ids.issued(), 0);
}

#[tokio::test]
async fn test_create_overrides_caller_timestamps() {
    print_test_header(
        "test_create_overrides_caller_timestamps",
        "createdAt and updatedAt always come from the clock on create",
    );

    let (repo, _) = user_repo(
        Arc::new(TestClock::fixed(at(100))),
        Arc::new(SequenceIds::default()),
    );

    let mut data = new_user("A", "a@x.com", "123");
    data.created_at = Set(at(-5000));
    data.updated_at = Set(at(9000));
    let user = repo.create(data).await.unwrap();

    assert_eq!(user.created_at, at(100));
    assert_eq!(user.updated_at, at(100));
}

#[tokio::test]
async fn test_create_all_shares_one_instant() {
    print_test_header(
        "test_create_all_shares_one_instant",
        "Every record of a batch carries the same audit instant",
    );

    // A clock that moves on every read would expose per-record stamping
    let clock = Arc::new(TestClock::stepping(at(0), Duration::seconds(1)));
    let (repo, _) = user_repo(clock.clone(), Arc::new(SequenceIds::default()));

    let created = repo
        .create_all(vec![
            new_user("A", "a@x.com", "111"),
            new_user("B", "b@x.com", "222"),
            new_user("C", "c@x.com", "333"),
        ])
        .await
        .unwrap();

    assert_eq!(created.len(), 3);
    assert_eq!(clock.reads(), 1);
    for user in &created {
        assert_eq!(user.created_at, at(0));
        assert_eq!(user.updated_at, at(0));
    }
    assert_eq!(created[0].id, "id-1");
    assert_eq!(created[1].id, "id-2");
    assert_eq!(created[2].id, "id-3");
}

#[tokio::test]
async fn test_update_all_stamps_updated_at_and_strips_created_at() {
    let (repo, store) = user_repo(
        Arc::new(TestClock::fixed(at(60))),
        Arc::new(SequenceIds::default()),
    );

    let data = users::ActiveModel {
        full_name: Set("Renamed".to_string()),
        created_at: Set(at(-1)),
        updated_at: Set(at(-1)),
        ..Default::default()
    };
    let affected = repo.update_all(data, Condition::all()).await.unwrap();
    assert_eq!(affected, 1);

    match store.log().as_slice() {
        [Recorded::UpdateAll(sent)] => {
            assert_eq!(sent.created_at, NotSet);
            assert_eq!(sent.updated_at, Set(at(60)));
            assert_eq!(sent.full_name, Set("Renamed".to_string()));
            assert_eq!(sent.id, NotSet);
        }
        other => panic!("unexpected store calls: {:?}", other),
    }
}

#[tokio::test]
async fn test_replace_by_id_stamps_updated_at() {
    let (repo, store) = user_repo(
        Arc::new(TestClock::fixed(at(120))),
        Arc::new(SequenceIds::default()),
    );

    let mut data = new_user("A", "a@x.com", "123");
    data.created_at = Set(at(0));
    repo.replace_by_id("user-7", data).await.unwrap();

    match store.log().as_slice() {
        [Recorded::Replace(id, sent)] => {
            assert_eq!(*id, Value::from("user-7"));
            assert_eq!(sent.created_at, NotSet);
            assert_eq!(sent.updated_at, Set(at(120)));
        }
        other => panic!("unexpected store calls: {:?}", other),
    }
}

#[tokio::test]
async fn test_soft_delete_goes_through_update_path() {
    let (repo, store) = user_repo(
        Arc::new(TestClock::fixed(at(300))),
        Arc::new(SequenceIds::default()),
    );

    repo.soft_delete_by_id("user-9").await.unwrap();

    match store.log().as_slice() {
        [Recorded::UpdateAll(sent)] => {
            assert_eq!(sent.is_active, Set(false));
            assert_eq!(sent.is_deleted, Set(true));
            assert_eq!(sent.deleted_at, Set(Some(at(300))));
            assert_eq!(sent.updated_at, Set(at(300)));
        }
        other => panic!("unexpected store calls: {:?}", other),
    }
}

#[tokio::test]
async fn test_create_is_not_memoized() {
    print_test_header(
        "test_create_is_not_memoized",
        "The same payload created twice reaches the store twice with fresh stamps",
    );

    let clock = Arc::new(TestClock::stepping(at(0), Duration::seconds(10)));
    let (repo, store) = user_repo(clock, Arc::new(SequenceIds::default()));

    let mut data = new_user("A", "a@x.com", "123");
    data.id = Set("fixed-id".to_string());

    let first = repo.create(data.clone()).await.unwrap();
    let second = repo.create(data).await.unwrap();

    assert_eq!(store.log().len(), 2);
    assert_eq!(first.id, second.id);
    assert_eq!(first.created_at, at(0));
    assert_eq!(second.created_at, at(10));
}

#[tokio::test]
async fn test_store_generated_ids_are_left_to_the_store() {
    print_test_header(
        "test_store_generated_ids_are_left_to_the_store",
        "Guarantors get their id from the database, not from the generator",
    );

    let ids = Arc::new(SequenceIds::default());
    let store = RecordingStore::<business_kyc_guarantor::Entity>::generating(Value::from(41_i32));
    let repo: AuditedRepository<business_kyc_guarantor::Entity, _> =
        AuditedRepository::new(store.clone(), Arc::new(TestClock::fixed(at(0))), ids.clone());

    let guarantor = repo
        .create(business_kyc_guarantor::ActiveModel {
            business_kyc_id: Set("bkyc-1".to_string()),
            company_profile_id: Set("cp-1".to_string()),
            full_name: Set("R. Sharma".to_string()),
            email: Set(None),
            phone: Set(None),
            pan_number: Set(Some("ABCDE1234F".to_string())),
            relation_to_company: Set(Some("Director".to_string())),
            status: Set(VerificationStatus::UnderReview),
            mode: Set(VerificationMode::Auto),
            reason: Set(None),
            verified_at: Set(None),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(guarantor.id, 41);
    assert_eq!(guarantor.created_at, at(0));
    assert_eq!(ids.issued(), 0);
    match store.log().as_slice() {
        [Recorded::Create(sent)] => assert_eq!(sent.id, NotSet),
        other => panic!("unexpected store calls: {:?}", other),
    }
}

#[tokio::test]
async fn test_store_errors_pass_through_unchanged() {
    print_test_header(
        "test_store_errors_pass_through_unchanged",
        "The wrapper neither wraps nor swallows backend errors",
    );

    let repo: AuditedRepository<users::Entity, FailingStore> = AuditedRepository::new(
        FailingStore,
        Arc::new(TestClock::fixed(at(0))),
        Arc::new(SequenceIds::default()),
    );

    let err = repo
        .replace_by_id("missing", new_user("A", "a@x.com", "123"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound { entity: EntityKind::Users, ref id } if id == "missing"
    ));

    let err = repo.create(new_user("A", "a@x.com", "123")).await.unwrap_err();
    assert!(matches!(err, StoreError::Conflict(ref msg) if msg == "users.email"));

    let err = repo.create_all(vec![new_user("A", "a@x.com", "123")]).await.unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));

    let err = repo
        .update_all(<users::ActiveModel as Default>::default(), Condition::all())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

#[tokio::test]
async fn test_reads_pass_through() {
    let clock = Arc::new(TestClock::fixed(at(0)));
    let (repo, store) = user_repo(clock.clone(), Arc::new(SequenceIds::default()));

    assert!(repo.find(Condition::all()).await.unwrap().is_empty());
    assert!(repo.find_by_id("nobody").await.unwrap().is_none());
    assert_eq!(repo.count(Condition::all()).await.unwrap(), 0);
    repo.delete_by_id("nobody").await.unwrap();

    assert!(store.log().is_empty());
    assert_eq!(clock.reads(), 0);
}
