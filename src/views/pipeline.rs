//! Lead pipeline: leads bucketed into the seven funnel columns, the four
//! summary tiles and the detail panel of the selected lead.

use bigdecimal::BigDecimal;
use jiff::Timestamp;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Lead, LeadSource, LeadStatus};
use crate::views::format::{money, money_opt, percent, relative_time, short_date};
use crate::views::selection::Selection;
use crate::views::styles::{Tone, lead_status_tone};

/// `won / total` as a percentage with two decimals, 0 for an empty funnel.
pub fn conversion_rate(won: i64, total: i64) -> f64 {
    percent(won, total)
}

/// Groups leads into funnel order. All seven stages are present, empty or
/// not, and every lead lands in the column of its own status.
pub fn bucket_leads(leads: Vec<Lead>) -> Vec<(LeadStatus, Vec<Lead>)> {
    let mut buckets: Vec<(LeadStatus, Vec<Lead>)> =
        LeadStatus::FUNNEL.iter().map(|s| (*s, Vec::new())).collect();
    for lead in leads {
        if let Some((_, column)) = buckets.iter_mut().find(|(status, _)| *status == lead.status) {
            column.push(lead);
        }
    }
    buckets
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStats {
    pub total_leads: i64,
    pub new_this_week: i64,
    pub conversion_rate: f64,
    /// Estimated value of leads not yet won or lost
    pub pipeline_value: f64,
}

pub fn pipeline_stats(leads: &[Lead], week_start: Timestamp) -> PipelineStats {
    let total = leads.len() as i64;
    let won = leads.iter().filter(|l| l.status == LeadStatus::Won).count() as i64;
    let new_this_week = leads
        .iter()
        .filter(|l| l.created_at.to_jiff() >= week_start)
        .count() as i64;
    let open_value: BigDecimal = leads
        .iter()
        .filter(|l| !l.status.is_terminal())
        .filter_map(|l| l.estimated_value.as_ref())
        .sum();

    PipelineStats {
        total_leads: total,
        new_this_week,
        conversion_rate: conversion_rate(won, total),
        pipeline_value: money(&open_value),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadCard {
    pub id: i32,
    pub name: String,
    pub service_needed: String,
    pub source: LeadSource,
    pub source_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<f64>,
    pub created: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PipelineColumn {
    pub status: LeadStatus,
    pub label: &'static str,
    pub tone: Tone,
    pub count: usize,
    pub total_value: f64,
    pub leads: Vec<LeadCard>,
    /// "No leads" for an empty stage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadContact {
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadTimeline {
    /// Relative creation time, e.g. "3 days ago"
    pub created: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadDetailPanel {
    pub id: i32,
    pub name: String,
    pub status: LeadStatus,
    pub status_label: &'static str,
    pub contact: LeadContact,
    pub service_needed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<i32>,
    pub source: LeadSource,
    pub source_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<f64>,
    pub timeline: LeadTimeline,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LeadDetailPanel {
    pub fn new(lead: &Lead, now: Timestamp) -> Self {
        Self {
            id: lead.id,
            name: lead.name.clone(),
            status: lead.status,
            status_label: lead.status.label(),
            contact: LeadContact {
                phone: lead.phone.clone(),
                email: lead.email.clone(),
                address: lead.address.clone(),
            },
            service_needed: lead.service_needed.clone(),
            description: lead.description.clone(),
            urgency: lead.urgency,
            source: lead.source,
            source_label: lead.source.label(),
            estimated_value: money_opt(lead.estimated_value.as_ref()),
            timeline: LeadTimeline {
                created: relative_time(lead.created_at.to_jiff(), now),
                follow_up: lead.follow_up_date.map(|d| short_date(d.to_jiff())),
            },
            notes: lead.notes.clone().filter(|n| !n.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadPipeline {
    pub stats: PipelineStats,
    pub columns: Vec<PipelineColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<LeadDetailPanel>,
}

/// Assembles the kanban view. A selection that matches no lead is cleared.
pub fn build_pipeline(
    leads: Vec<Lead>,
    mut selection: Selection<i32>,
    now: Timestamp,
    week_start: Timestamp,
) -> LeadPipeline {
    let stats = pipeline_stats(&leads, week_start);
    selection.retain(|id| leads.iter().any(|l| l.id == id));
    let selected = leads
        .iter()
        .find(|l| selection.is_selected(l.id))
        .map(|l| LeadDetailPanel::new(l, now));

    let columns = bucket_leads(leads)
        .into_iter()
        .map(|(status, leads)| {
            let total: BigDecimal = leads.iter().filter_map(|l| l.estimated_value.as_ref()).sum();
            let cards: Vec<LeadCard> = leads
                .iter()
                .map(|lead| LeadCard {
                    id: lead.id,
                    name: lead.name.clone(),
                    service_needed: lead.service_needed.clone(),
                    source: lead.source,
                    source_label: lead.source.label(),
                    urgency: lead.urgency,
                    estimated_value: money_opt(lead.estimated_value.as_ref()),
                    created: relative_time(lead.created_at.to_jiff(), now),
                    selected: selection.is_selected(lead.id),
                })
                .collect();
            PipelineColumn {
                status,
                label: status.label(),
                tone: lead_status_tone(status),
                count: cards.len(),
                total_value: money(&total),
                empty_message: cards.is_empty().then(|| "No leads".to_string()),
                leads: cards,
            }
        })
        .collect();

    LeadPipeline {
        stats,
        columns,
        selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::SelectionInput;
    use jiff::SignedDuration;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn now() -> Timestamp {
        "2025-01-15T12:00:00Z".parse().unwrap()
    }

    fn week_start() -> Timestamp {
        "2025-01-13T00:00:00Z".parse().unwrap()
    }

    fn lead(id: i32, status: LeadStatus, value: Option<&str>, days_old: i64) -> Lead {
        Lead {
            id,
            name: format!("Lead {id}"),
            phone: "555-0199".to_string(),
            email: None,
            address: None,
            source: LeadSource::Website,
            status,
            service_needed: "AC Repair".to_string(),
            description: None,
            notes: None,
            urgency: None,
            estimated_value: value.map(|v| BigDecimal::from_str(v).unwrap()),
            follow_up_date: None,
            created_at: now()
                .checked_sub(SignedDuration::from_hours(24 * days_old))
                .unwrap()
                .into(),
        }
    }

    fn status_strategy() -> impl Strategy<Value = LeadStatus> {
        proptest::sample::select(LeadStatus::FUNNEL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_bucketing_is_a_partition(statuses in prop::collection::vec(status_strategy(), 0..60)) {
            let leads: Vec<Lead> = statuses
                .iter()
                .enumerate()
                .map(|(i, s)| lead(i as i32, *s, None, 1))
                .collect();
            let buckets = bucket_leads(leads);

            let order: Vec<LeadStatus> = buckets.iter().map(|(s, _)| *s).collect();
            prop_assert_eq!(order, LeadStatus::FUNNEL.to_vec());

            let mut ids = Vec::new();
            for (status, column) in &buckets {
                prop_assert!(column.iter().all(|l| l.status == *status));
                ids.extend(column.iter().map(|l| l.id as usize));
            }
            ids.sort_unstable();
            prop_assert_eq!(ids, (0..statuses.len()).collect::<Vec<_>>());
        }

        #[test]
        fn prop_conversion_rate_bounds(won in 0i64..500, extra in 0i64..500) {
            let total = won + extra;
            let rate = conversion_rate(won, total);
            if total == 0 {
                prop_assert_eq!(rate, 0.0);
            } else {
                let expected = (won as f64 / total as f64 * 10_000.0).round() / 100.0;
                prop_assert!((rate - expected).abs() < 1e-9);
                prop_assert!((0.0..=100.0).contains(&rate));
            }
        }
    }

    #[test]
    fn test_ten_leads_three_won() {
        let leads: Vec<Lead> = (0..10)
            .map(|i| {
                let status = if i < 3 { LeadStatus::Won } else { LeadStatus::Contacted };
                lead(i, status, None, 10)
            })
            .collect();
        assert_eq!(pipeline_stats(&leads, week_start()).conversion_rate, 30.0);
    }

    #[test]
    fn test_empty_funnel_has_zero_rate() {
        let stats = pipeline_stats(&[], week_start());
        assert_eq!(stats.total_leads, 0);
        assert_eq!(stats.conversion_rate, 0.0);
        assert_eq!(stats.pipeline_value, 0.0);
    }

    #[test]
    fn test_pipeline_value_skips_terminal_leads() {
        let leads = vec![
            lead(1, LeadStatus::New, Some("1200.50"), 1),
            lead(2, LeadStatus::Qualified, Some("800"), 1),
            lead(3, LeadStatus::Won, Some("5000"), 1),
            lead(4, LeadStatus::Lost, Some("700"), 1),
            lead(5, LeadStatus::FollowUp, None, 1),
        ];
        assert_eq!(pipeline_stats(&leads, week_start()).pipeline_value, 2000.5);
    }

    #[test]
    fn test_new_this_week() {
        let leads = vec![
            lead(1, LeadStatus::New, None, 0),
            lead(2, LeadStatus::New, None, 2),
            lead(3, LeadStatus::New, None, 3),
            lead(4, LeadStatus::New, None, 30),
        ];
        // week started Monday, 2.5 days before `now`
        assert_eq!(pipeline_stats(&leads, week_start()).new_this_week, 2);
    }

    #[test]
    fn test_empty_columns_are_kept() {
        let pipeline = build_pipeline(
            vec![lead(1, LeadStatus::Qualified, Some("300"), 1)],
            Selection::new(),
            now(),
            week_start(),
        );
        assert_eq!(pipeline.columns.len(), 7);
        let qualified = &pipeline.columns[2];
        assert_eq!(qualified.status, LeadStatus::Qualified);
        assert_eq!(qualified.count, 1);
        assert_eq!(qualified.total_value, 300.0);
        assert!(qualified.empty_message.is_none());
        assert_eq!(pipeline.columns[0].empty_message.as_deref(), Some("No leads"));
    }

    #[test]
    fn test_detail_panel_omits_missing_optionals() {
        let mut with_extras = lead(2, LeadStatus::FollowUp, Some("950"), 3);
        with_extras.email = Some("sam@example.com".to_string());
        with_extras.urgency = Some(7);
        with_extras.notes = Some("Call after 5pm".to_string());
        with_extras.follow_up_date = Some(jiff::civil::date(2025, 1, 20).into());
        let leads = vec![lead(1, LeadStatus::New, None, 1), with_extras];

        let pipeline = build_pipeline(leads.clone(), Selection::from_option(Some(1)), now(), week_start());
        let json = serde_json::to_value(pipeline.selected.unwrap()).unwrap();
        assert!(json["contact"].get("email").is_none());
        assert!(json.get("urgency").is_none());
        assert!(json.get("notes").is_none());
        assert!(json["timeline"].get("followUp").is_none());
        assert_eq!(json["timeline"]["created"], "1 day ago");

        let pipeline = build_pipeline(leads, Selection::from_option(Some(2)), now(), week_start());
        let panel = pipeline.selected.unwrap();
        assert_eq!(panel.contact.email.as_deref(), Some("sam@example.com"));
        assert_eq!(panel.urgency, Some(7));
        assert_eq!(panel.estimated_value, Some(950.0));
        assert_eq!(panel.timeline.follow_up.as_deref(), Some("Jan 20, 2025"));
        assert_eq!(panel.notes.as_deref(), Some("Call after 5pm"));
    }

    #[test]
    fn test_clicking_open_lead_closes_panel() {
        let leads = vec![
            lead(1, LeadStatus::New, None, 1),
            lead(2, LeadStatus::Qualified, Some("1200"), 2),
        ];
        let click = SelectionInput {
            selected: Some(2),
            click: Some(2),
            dismiss: false,
        };
        let pipeline = build_pipeline(leads.clone(), click.resolve(), now(), week_start());
        assert!(pipeline.selected.is_none());
        assert!(pipeline.columns.iter().flat_map(|c| &c.leads).all(|l| !l.selected));

        let moved = SelectionInput { click: Some(1), ..click }.resolve();
        let pipeline = build_pipeline(leads, moved, now(), week_start());
        assert_eq!(pipeline.selected.map(|p| p.id), Some(1));
    }

    #[test]
    fn test_unknown_selection_is_cleared() {
        let pipeline = build_pipeline(
            vec![lead(1, LeadStatus::New, None, 1)],
            Selection::from_option(Some(42)),
            now(),
            week_start(),
        );
        assert!(pipeline.selected.is_none());
        assert!(pipeline.columns.iter().flat_map(|c| &c.leads).all(|l| !l.selected));
    }
}
