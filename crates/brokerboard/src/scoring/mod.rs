//! Rule tables that turn raw CRM counters into points, alerts, and funnel
//! figures.
//!
//! Everything in this module is a pure function over a [`BrokerPointCounters`]
//! row: the same input always yields the same breakdown, and nothing here
//! touches storage or the clock.

mod alerts;
mod counters;
mod funnel;
mod points;

pub use alerts::{derive_alerts, needs_attention, AlertEntry, AlertRule, AlertSeverity};
pub use counters::BrokerPointCounters;
pub use funnel::{conversion_funnel, FunnelStage, FunnelStageEntry};
pub use points::{points_breakdown, PointCategory, PointCategoryEntry, PointSign, PointsSummary};
