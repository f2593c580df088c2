//! Camp domain service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::donor_service::map_draft_error;
use crate::domain::ports::{CampRepository, CampRepositoryError, CampsCommand, CampsQuery};
use crate::domain::{Camp, CampDraft, Error};

fn map_repository_error(error: CampRepositoryError) -> Error {
    Error::upstream(error.to_string())
}

/// Camp service implementing both camp driving ports.
#[derive(Clone)]
pub struct CampService<R> {
    camp_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> CampService<R> {
    pub fn new(camp_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { camp_repo, clock }
    }
}

#[async_trait]
impl<R> CampsCommand for CampService<R>
where
    R: CampRepository,
{
    async fn add_camp(&self, draft: CampDraft) -> Result<Camp, Error> {
        let camp = draft
            .validate()
            .map_err(map_draft_error)?
            .created_at(self.clock.utc());
        self.camp_repo
            .insert(&camp)
            .await
            .map_err(map_repository_error)?;
        info!(name = %camp.name, location = %camp.location, "camp added");
        Ok(camp)
    }
}

#[async_trait]
impl<R> CampsQuery for CampService<R>
where
    R: CampRepository,
{
    async fn list_camps(&self) -> Result<Vec<Camp>, Error> {
        self.camp_repo.list().await.map_err(map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::rstest;
    use serde_json::json;

    use crate::domain::ErrorCode;
    use crate::domain::IntegerInput;
    use crate::domain::ports::MockCampRepository;

    struct FixtureClock(DateTime<Utc>);

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 7, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn service(repo: MockCampRepository) -> CampService<MockCampRepository> {
        CampService::new(Arc::new(repo), Arc::new(FixtureClock(now())))
    }

    fn draft() -> CampDraft {
        CampDraft {
            name: Some("Summer drive".into()),
            location: Some("Library".into()),
            date: Some("2026-07-01".into()),
            available_spots: Some(IntegerInput::Number(40)),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn add_camp_stamps_created_at() {
        let mut repo = MockCampRepository::new();
        repo.expect_insert()
            .withf(|camp| camp.created_at == now() && camp.available_spots == 40)
            .times(1)
            .returning(|_| Ok(()));

        let camp = service(repo).add_camp(draft()).await.expect("camp added");
        assert_eq!(camp.name, "Summer drive");
    }

    #[rstest]
    #[tokio::test]
    async fn add_camp_reports_missing_date() {
        let mut repo = MockCampRepository::new();
        repo.expect_insert().never();
        let mut incomplete = draft();
        incomplete.date = None;

        let err = service(repo)
            .add_camp(incomplete)
            .await
            .expect_err("missing date");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.details(), Some(&json!({ "missing_fields": ["date"] })));
    }

    #[rstest]
    #[tokio::test]
    async fn list_camps_maps_store_failure() {
        let mut repo = MockCampRepository::new();
        repo.expect_list()
            .returning(|| Err(CampRepositoryError::connection("no reachable servers")));

        let err = service(repo).list_camps().await.expect_err("store down");
        assert_eq!(err.code(), ErrorCode::UpstreamFailure);
        assert!(err.message().contains("no reachable servers"));
    }
}
