use super::domain::{ActivityRecord, BrokerId, BrokerProfile, BrokerScore, LeadRecord};

/// Read-side storage abstraction for the dashboard.
///
/// Implementations return `Ok(None)` for rows that do not exist; only genuine
/// backend faults surface as errors. The service layer decides what a missing
/// row means for each query.
pub trait DashboardRepository: Send + Sync {
    fn list_brokers(&self) -> Result<Vec<BrokerProfile>, RepositoryError>;

    fn broker(&self, id: BrokerId) -> Result<Option<BrokerProfile>, RepositoryError>;

    /// Every score row, in the order the store keeps them.
    fn scores(&self) -> Result<Vec<BrokerScore>, RepositoryError>;

    fn score_for(&self, id: BrokerId) -> Result<Option<BrokerScore>, RepositoryError>;

    fn leads_for(&self, id: BrokerId) -> Result<Vec<LeadRecord>, RepositoryError>;

    fn activities_for(&self, id: BrokerId) -> Result<Vec<ActivityRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
