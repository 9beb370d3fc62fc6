use chrono::Utc;
use serde::Serialize;

use samaj_core::analytics::{MemberSummary, collection_rate, summarize_members, total_chanda};
use samaj_core::entities::{ChandaRecord, Person};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AnalyticsCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MembersReport {
    scope: String,
    families: usize,
    #[serde(flatten)]
    summary: MemberSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChandaRow {
    village_id: String,
    village_name: String,
    collected: u64,
    pending: u64,
    paid_families: u32,
    total_families: u32,
    collection_rate: String,
}

impl From<&ChandaRecord> for ChandaRow {
    fn from(record: &ChandaRecord) -> Self {
        Self {
            village_id: record.village_id.clone(),
            village_name: record.village_name.clone(),
            collected: record.total_amount,
            pending: record.pending_amount,
            paid_families: record.paid_families,
            total_families: record.total_families,
            collection_rate: format!("{:.1}%", collection_rate(record)),
        }
    }
}

/// Handle `samaj analytics`.
pub async fn handle(action: &AnalyticsCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AnalyticsCommands::Members { family, village } => {
            let report = match (family, village) {
                (Some(family_id), _) => family_report(family_id, ctx).await?,
                (None, Some(village_id)) => village_report(village_id, ctx).await?,
                (None, None) => anyhow::bail!("pass --family or --village"),
            };
            output(&report, flags.format)
        }
        AnalyticsCommands::Chanda { year } => {
            let records = ctx.api.chanda_records(*year).await?;
            output(&chanda_rows(&records), flags.format)
        }
    }
}

async fn family_report(family_id: &str, ctx: &AppContext) -> anyhow::Result<MembersReport> {
    let members = ctx.api.list_members(family_id).await?;
    Ok(report(format!("family {family_id}"), 1, &members))
}

/// Village listings may omit members; those families are fetched one by one.
async fn village_report(village_id: &str, ctx: &AppContext) -> anyhow::Result<MembersReport> {
    let families = ctx.api.village_families(village_id).await?;
    let mut members = Vec::new();
    for family in &families {
        if family.members.is_empty() && !family.id.is_empty() {
            tracing::debug!(family_id = %family.id, "fetching members for summary");
            members.extend(ctx.api.get_family(&family.id).await?.members);
        } else {
            members.extend(family.members.iter().cloned());
        }
    }
    Ok(report(format!("village {village_id}"), families.len(), &members))
}

fn report(scope: String, families: usize, members: &[Person]) -> MembersReport {
    MembersReport {
        scope,
        families,
        summary: summarize_members(members, Utc::now().date_naive()),
    }
}

/// Per-village rows followed by a society-wide total.
fn chanda_rows(records: &[ChandaRecord]) -> Vec<ChandaRow> {
    let mut rows: Vec<ChandaRow> = records.iter().map(ChandaRow::from).collect();
    if !records.is_empty() {
        rows.push(ChandaRow::from(&total_chanda(records)));
    }
    rows
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(village: &str, collected: u64, pending: u64) -> ChandaRecord {
        ChandaRecord {
            village_id: village.to_lowercase(),
            village_name: village.into(),
            year: Some(2025),
            total_amount: collected,
            pending_amount: pending,
            total_families: 10,
            paid_families: 6,
        }
    }

    #[test]
    fn chanda_rows_end_with_total() {
        let rows = chanda_rows(&[record("Rampura", 3000, 1000), record("Sikar", 1000, 1000)]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].collection_rate, "75.0%");
        assert_eq!(rows[2].village_name, "All villages");
        assert_eq!(rows[2].collected, 4000);
        assert_eq!(rows[2].collection_rate, "66.7%");
    }

    #[test]
    fn no_records_no_total() {
        assert!(chanda_rows(&[]).is_empty());
    }

    #[test]
    fn members_report_counts_mukhiyas() {
        let members = vec![
            Person {
                first_name: "Ramesh".into(),
                is_mukhiya: true,
                age: Some(45),
                ..Person::default()
            },
            Person {
                first_name: "Sita".into(),
                age: Some(40),
                ..Person::default()
            },
        ];
        let report = report("family fam-1".into(), 1, &members);
        assert_eq!(report.summary.total_members, 2);
        assert_eq!(report.summary.mukhiyas, 1);
    }
}
