use std::env;

use anyhow::{anyhow, bail, Context};
use chrono::{NaiveTime, Weekday};

use crate::domain::entities::BusinessHours;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Calendar used by SLAs flagged as business-hours-only
    pub business_hours: BusinessHours,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let port = match env::var("PORT") {
            Ok(p) => p.parse().with_context(|| format!("Invalid PORT: {}", p))?,
            Err(_) => 8080,
        };

        let business_hours = business_hours_from(
            env::var("BUSINESS_HOURS_START").ok().as_deref(),
            env::var("BUSINESS_HOURS_END").ok().as_deref(),
            env::var("BUSINESS_DAYS").ok().as_deref(),
            env::var("BUSINESS_UTC_OFFSET_MINUTES").ok().as_deref(),
        )?;

        Ok(Self {
            database_url,
            port,
            business_hours,
        })
    }
}

/// Build the business calendar from raw settings, falling back to
/// Mon-Fri 08:00-18:00 at UTC-05:00 for anything unset.
fn business_hours_from(
    start: Option<&str>,
    end: Option<&str>,
    days: Option<&str>,
    utc_offset_minutes: Option<&str>,
) -> anyhow::Result<BusinessHours> {
    let opens_at = parse_time(start.unwrap_or("08:00"))?;
    let closes_at = parse_time(end.unwrap_or("18:00"))?;
    let working_days = parse_days(days.unwrap_or("mon,tue,wed,thu,fri"))?;
    let offset: i32 = utc_offset_minutes
        .unwrap_or("-300")
        .trim()
        .parse()
        .context("BUSINESS_UTC_OFFSET_MINUTES must be an integer")?;

    BusinessHours::new(opens_at, closes_at, working_days, offset)
        .map_err(|e| anyhow!("Invalid business hours: {}", e))
}

fn parse_time(value: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .with_context(|| format!("Expected HH:MM, got {:?}", value))
}

fn parse_days(value: &str) -> anyhow::Result<Vec<Weekday>> {
    let mut days = Vec::new();
    for raw in value.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        let day: Weekday = raw
            .parse()
            .map_err(|_| anyhow!("Unknown weekday: {}", raw))?;
        if !days.contains(&day) {
            days.push(day);
        }
    }
    if days.is_empty() {
        bail!("BUSINESS_DAYS must name at least one weekday");
    }
    Ok(days)
}
