use crate::domain::model::Session;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The data-access collaborator: hands the core a fully materialized
/// snapshot of sessions. The filter itself never fetches.
#[async_trait]
pub trait SessionSource: Send + Sync {
    async fn fetch_sessions(&self) -> Result<Vec<Session>>;
}

/// Where a rendered report lands.
pub trait ReportSink: Send + Sync {
    fn write_report(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn sessions_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
}
