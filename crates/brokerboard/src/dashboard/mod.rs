//! Broker directory, derived dashboard views, and their HTTP surface.
//!
//! The module is split the usual way: `domain` holds the rows as the store
//! keeps them, `repository` abstracts the store behind a trait, `service`
//! derives every view the board needs, and `router` exposes those queries
//! over HTTP without adding semantics of its own.

pub mod domain;
pub mod heatmap;
pub mod repository;
pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    ActivityRecord, ActivityWeekday, BrokerId, BrokerProfile, BrokerRole, BrokerScore, LeadRecord,
};
pub use heatmap::{activity_heatmap, HeatmapRow};
pub use repository::{DashboardRepository, RepositoryError};
pub use router::dashboard_router;
pub use service::{DashboardError, DashboardService};
pub use views::{
    DashboardMetricsView, MonthlySalesEntry, PerformanceView, PointsReportView, RankPositionView,
    RankingRowView, StageShareEntry,
};
