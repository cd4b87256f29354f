use serde::Serialize;

use super::domain::{ActivityRecord, ActivityWeekday};

const FIRST_HOUR: u32 = 8;
const LAST_HOUR: u32 = 22;
const HOUR_BUCKETS: usize = 15;

const MESSAGE_ACTIVITY: &str = "mensagem_enviada";

/// One weekday row of the activity heatmap: a message count per hour 8..=22.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapRow {
    pub day: ActivityWeekday,
    pub day_label: &'static str,
    pub counts: [u32; HOUR_BUCKETS],
}

/// Buckets sent-message activities into a 7x15 weekday/hour grid.
///
/// All seven rows are materialized up front, Monday first, so quiet days
/// still appear. Activities of other types, or stamped outside business
/// hours, are skipped rather than clamped into the edge buckets.
pub fn activity_heatmap(activities: &[ActivityRecord]) -> Vec<HeatmapRow> {
    let mut rows: Vec<HeatmapRow> = ActivityWeekday::ordered()
        .into_iter()
        .map(|day| HeatmapRow {
            day,
            day_label: day.label(),
            counts: [0; HOUR_BUCKETS],
        })
        .collect();

    for activity in activities {
        if activity.tipo != MESSAGE_ACTIVITY {
            continue;
        }
        if activity.hora < FIRST_HOUR || activity.hora > LAST_HOUR {
            continue;
        }

        let bucket = (activity.hora - FIRST_HOUR) as usize;
        rows[activity.dia_semana.row_index()].counts[bucket] += 1;
    }

    rows
}
