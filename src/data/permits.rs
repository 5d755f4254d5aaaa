use anyhow::{Context, Result};
use chrono::{Days, Months, NaiveDate};
use polars::prelude::{Column, DataType};
use serde::Serialize;
use tracing::{info, warn};

use crate::{geo::COUNTY_FIPS_WIDTH, io::csv::read_csv_bytes, source::DataSource};

pub const FIPS_COLUMN: &str = "FIPS";
pub const DATE_COLUMN: &str = "date";
pub const SERIES_COLUMN: &str = "Series";
pub const PERMITS_COLUMN: &str = "Permits";

/// Permits issued in one county, for one series, in one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermitRecord {
    pub county_fips: String,
    pub date: NaiveDate,
    pub series: String,
    pub permits: i64,
}

/// Read the permit series CSV (`FIPS, date, Series, Permits`).
/// FIPS codes are zero-padded to five digits; rows with a bad date or a null
/// field are dropped.
pub fn load_permits(source: &dyn DataSource, path: &str) -> Result<Vec<PermitRecord>> {
    let bytes = source.get(path)
        .with_context(|| format!("[permits::load_permits] Failed to read {path}"))?;
    let df = read_csv_bytes(&bytes, &[FIPS_COLUMN, DATE_COLUMN, SERIES_COLUMN])
        .with_context(|| format!("[permits::load_permits] Invalid permit table {path}"))?;

    let column = |name: &str, ty: &DataType| -> Result<Column> {
        df.column(name)
            .with_context(|| format!("[permits::load_permits] {path} has no '{name}' column"))?
            .cast(ty)
            .with_context(|| format!("[permits::load_permits] Column '{name}' is not {ty}"))
    };
    let fips = column(FIPS_COLUMN, &DataType::String)?;
    let dates = column(DATE_COLUMN, &DataType::String)?;
    let series = column(SERIES_COLUMN, &DataType::String)?;
    let permits = column(PERMITS_COLUMN, &DataType::Int64)?;

    let mut records = Vec::with_capacity(df.height());
    let mut dropped = 0usize;
    let rows = fips.str()?.into_iter()
        .zip(dates.str()?.into_iter())
        .zip(series.str()?.into_iter())
        .zip(permits.i64()?.into_iter());

    for (((fips, date), series), permits) in rows {
        let (Some(fips), Some(date), Some(series), Some(permits)) = (fips, date, series, permits) else {
            dropped += 1;
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") else {
            dropped += 1;
            continue;
        };
        records.push(PermitRecord {
            county_fips: format!("{:0>width$}", fips.trim(), width = COUNTY_FIPS_WIDTH),
            date,
            series: series.trim().to_string(),
            permits,
        });
    }

    if dropped > 0 {
        warn!(path, dropped, kept = records.len(), "dropped permit rows");
    }
    info!(path, rows = records.len(), "loaded permit series");
    Ok(records)
}

/// Records for one county, matched exactly on canonical FIPS.
pub fn filter(records: &[PermitRecord], county_fips: &str) -> Vec<PermitRecord> {
    records.iter()
        .filter(|record| record.county_fips == county_fips)
        .cloned()
        .collect()
}

/// Sum of permits for `series` dated on or after `since`; `0` when nothing matches.
pub fn kpi(records: &[PermitRecord], series: &str, since: NaiveDate) -> i64 {
    records.iter()
        .filter(|record| record.series == series && record.date >= since)
        .map(|record| record.permits)
        .sum()
}

/// `kpi` over the last `months` months of `series`, ending at its latest record.
pub fn trailing_kpi(records: &[PermitRecord], series: &str, months: u32) -> i64 {
    let Some(latest) = records.iter().filter(|r| r.series == series).map(|r| r.date).max() else {
        return 0;
    };
    let since = latest.checked_sub_months(Months::new(months))
        .and_then(|start| start.checked_add_days(Days::new(1)))
        .unwrap_or(NaiveDate::MIN);
    kpi(records, series, since)
}
