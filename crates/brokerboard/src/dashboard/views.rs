use serde::Serialize;

use super::domain::BrokerId;
use crate::scoring::PointsSummary;

/// One row of the leaderboard, already positioned and flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingRowView {
    pub position: usize,
    pub broker_id: BrokerId,
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foto_url: Option<String>,
    pub pontos: i64,
    pub leads_respondidos_1h: u32,
    pub propostas_enviadas: u32,
    pub vendas_realizadas: u32,
    pub needs_attention: bool,
}

/// A broker's 1-based slot on the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankPositionView {
    pub position: usize,
}

/// Stored score total together with its derived per-category breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsReportView {
    pub broker_id: BrokerId,
    pub nome: String,
    pub pontos: i64,
    pub breakdown: PointsSummary,
}

/// Closed-sales aggregate for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySalesEntry {
    pub year: i32,
    pub month: &'static str,
    pub sales_amount: f64,
    pub properties_sold: u32,
    pub points: i64,
}

/// Share of a broker's pipeline sitting in one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageShareEntry {
    pub etapa: String,
    pub count: u32,
    pub percentage: u32,
}

/// Performance panel payload: monthly sales series plus stage distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceView {
    pub monthly: Vec<MonthlySalesEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stages: Vec<StageShareEntry>,
}

/// Agency-wide headline figures for the dashboard banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardMetricsView {
    pub total_leads: usize,
    pub active_brokers: usize,
    pub average_points: i64,
    pub total_sales: u64,
}
