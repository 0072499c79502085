use crate::core::filter::filter_sessions;
use crate::core::upcoming::upcoming_only;
use crate::domain::model::{FilterCriteria, SessionMatch};
use crate::domain::ports::SessionSource;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

/// Orchestrates one finder pass: fetch the snapshot, drop sessions that have
/// already ended, then apply the catalog filter. The date pre-filter happens
/// here, never inside `filter_sessions`.
pub struct FinderEngine<S: SessionSource> {
    source: S,
}

impl<S: SessionSource> FinderEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn run(&self, criteria: &FilterCriteria) -> Result<Vec<SessionMatch>> {
        self.run_at(criteria, Utc::now()).await
    }

    /// Same as `run`, with an explicit "now" so callers and tests control the
    /// upcoming cutoff.
    pub async fn run_at(
        &self,
        criteria: &FilterCriteria,
        now: DateTime<Utc>,
    ) -> Result<Vec<SessionMatch>> {
        let snapshot = self.source.fetch_sessions().await?;
        tracing::info!("Fetched {} sessions", snapshot.len());

        let upcoming = upcoming_only(&snapshot, now);
        tracing::info!("{} sessions are upcoming", upcoming.len());

        let matches = filter_sessions(&upcoming, criteria);
        tracing::info!("{} sessions match the filter", matches.len());

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Partner, ProgramRef, Session};
    use async_trait::async_trait;
    use chrono::TimeZone;

    struct FixedSource {
        sessions: Vec<Session>,
    }

    #[async_trait]
    impl SessionSource for FixedSource {
        async fn fetch_sessions(&self) -> Result<Vec<Session>> {
            Ok(self.sessions.clone())
        }
    }

    fn session(id: &str, end_year: i32) -> Session {
        Session {
            id: id.to_string(),
            program: ProgramRef {
                name: "Jr STEM: Robotics".to_string(),
                category: None,
            },
            partner: Partner {
                name: "North Campus".to_string(),
                ..Default::default()
            },
            start_date: Utc.with_ymd_and_hms(end_year - 1, 9, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(end_year, 6, 1, 0, 0, 0).unwrap(),
            capacity: 20,
        }
    }

    #[tokio::test]
    async fn test_engine_prefilters_upcoming_before_matching() {
        let source = FixedSource {
            sessions: vec![session("ended", 2024), session("running", 2027)],
        };
        let engine = FinderEngine::new(source);
        let now = Utc.with_ymd_and_hms(2026, 8, 29, 0, 0, 0).unwrap();

        // Both sessions match the query; only the upcoming one survives the
        // date pre-filter.
        let criteria = FilterCriteria {
            query: "robotics".to_string(),
            ..Default::default()
        };
        let matches = engine.run_at(&criteria, now).await.unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].session.id, "running");
    }

    #[tokio::test]
    async fn test_engine_with_empty_snapshot() {
        let engine = FinderEngine::new(FixedSource { sessions: vec![] });
        let now = Utc.with_ymd_and_hms(2026, 8, 29, 0, 0, 0).unwrap();

        let matches = engine
            .run_at(&FilterCriteria::default(), now)
            .await
            .unwrap();
        assert!(matches.is_empty());
    }
}
