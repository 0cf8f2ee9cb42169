//! Figures for the admin dashboard.
//!
//! Every figure is a plain aggregation over the stored logs. The revenue
//! estimate is a calculator over the given traffic and does not touch the
//! database.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::tracking::DestinationSearches;
use crate::core::{validation, Backend};

pub const DEFAULT_PERIOD_DAYS: u32 = 30;
pub const MAX_PERIOD_DAYS: u32 = 365;

pub const DASHBOARD_TOP_DESTINATIONS: u32 = 5;
pub const DEFAULT_TOP_DESTINATIONS: u32 = 10;
pub const MAX_TOP_DESTINATIONS: u32 = 50;

pub const DEFAULT_CONVERSION_RATE: f64 = 0.02;
pub const DEFAULT_AVG_BOOKING_VALUE: f64 = 150.0;
pub const DEFAULT_COMMISSION_RATE: f64 = 0.05;

pub const REVENUE_NOTE: &str = "These are estimates. Actual results vary by provider and conversion rates.";

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    /// Active subscribers.
    pub total_subscribers: u64,
    /// Clicks in the period.
    pub total_clicks: u64,
    /// Active deals.
    pub total_deals: u64,
    pub top_destinations: Vec<DestinationSearches>,
    pub clicks_by_provider: BTreeMap<String, u64>,
    /// Sign-ups in the last seven days.
    pub recent_signups: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClickAnalytics {
    pub period_days: u32,
    pub total_clicks: u64,
    pub by_provider: BTreeMap<String, u64>,
    pub avg_daily_clicks: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubscriberAnalytics {
    pub total_subscribers: u64,
    pub active_subscribers: u64,
    pub inactive_subscribers: u64,
    pub signups_last_7_days: u64,
    /// Percentage of inactive subscribers.
    pub churn_rate: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DestinationAnalytics {
    pub top_destinations: Vec<DestinationSearches>,
}

fn default_conversion_rate() -> f64 {
    DEFAULT_CONVERSION_RATE
}

fn default_avg_booking_value() -> f64 {
    DEFAULT_AVG_BOOKING_VALUE
}

fn default_commission_rate() -> f64 {
    DEFAULT_COMMISSION_RATE
}

/// Traffic figures for the revenue estimate.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RevenueQuery {
    pub clicks: i64,
    #[serde(default = "default_conversion_rate")]
    pub conversion_rate: f64,
    #[serde(default = "default_avg_booking_value")]
    pub avg_booking_value: f64,
    #[serde(default = "default_commission_rate")]
    pub commission_rate: f64,
}

/// Money amounts are euros with two decimals, rates are percentages.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RevenueEstimate {
    pub clicks: i64,
    pub conversion_rate: String,
    pub estimated_bookings: f64,
    pub avg_booking_value: String,
    pub gross_booking_value: String,
    pub commission_rate: String,
    pub estimated_monthly_revenue: String,
    pub note: String,
}

fn check_period(days: u32) -> Result<(), Error> {
    validation::range("days", days, 1, MAX_PERIOD_DAYS)
}

/// # Errors
///
/// Will return `Err` if `days` is outside `1..=365` or the database fails.
pub fn dashboard(backend: &Backend, days: u32) -> Result<Dashboard, Error> {
    check_period(days)?;

    Ok(Dashboard {
        total_subscribers: backend.count_subscribers(true)?,
        total_clicks: backend.count_clicks(days)?,
        total_deals: backend.count_active_deals()?,
        top_destinations: backend.top_destinations(DASHBOARD_TOP_DESTINATIONS)?,
        clicks_by_provider: backend.clicks_by_provider(days)?,
        recent_signups: backend.count_recent_signups()?,
    })
}

/// # Errors
///
/// Will return `Err` if `days` is outside `1..=365` or the database fails.
#[allow(clippy::cast_precision_loss)]
pub fn clicks(backend: &Backend, days: u32) -> Result<ClickAnalytics, Error> {
    check_period(days)?;

    let total_clicks = backend.count_clicks(days)?;

    Ok(ClickAnalytics {
        period_days: days,
        total_clicks,
        by_provider: backend.clicks_by_provider(days)?,
        avg_daily_clicks: round2(total_clicks as f64 / f64::from(days)),
    })
}

/// # Errors
///
/// Will return `Err` if the database fails.
#[allow(clippy::cast_precision_loss)]
pub fn subscribers(backend: &Backend) -> Result<SubscriberAnalytics, Error> {
    let total = backend.count_subscribers(false)?;
    let active = backend.count_subscribers(true)?;
    let inactive = total.saturating_sub(active);

    let churn_rate = if total > 0 {
        round2(inactive as f64 / total as f64 * 100.0)
    } else {
        0.0
    };

    Ok(SubscriberAnalytics {
        total_subscribers: total,
        active_subscribers: active,
        inactive_subscribers: inactive,
        signups_last_7_days: backend.count_recent_signups()?,
        churn_rate,
    })
}

/// # Errors
///
/// Will return `Err` if `limit` is outside `1..=50` or the database fails.
pub fn destinations(backend: &Backend, limit: u32) -> Result<DestinationAnalytics, Error> {
    validation::range("limit", limit, 1, MAX_TOP_DESTINATIONS)?;

    Ok(DestinationAnalytics {
        top_destinations: backend.top_destinations(limit)?,
    })
}

/// `clicks × conversion rate × average booking value × commission rate`.
///
/// # Errors
///
/// Will return `Err` if a figure is negative or a rate is above `1`.
#[allow(clippy::cast_precision_loss)]
pub fn revenue_estimate(query: &RevenueQuery) -> Result<RevenueEstimate, Error> {
    validation::at_least("clicks", query.clicks, 0)?;
    validation::range("conversion_rate", query.conversion_rate, 0.0, 1.0)?;
    validation::at_least("avg_booking_value", query.avg_booking_value, 0.0)?;
    validation::range("commission_rate", query.commission_rate, 0.0, 1.0)?;

    let bookings = query.clicks as f64 * query.conversion_rate;
    let gross_booking_value = bookings * query.avg_booking_value;
    let commission = gross_booking_value * query.commission_rate;

    Ok(RevenueEstimate {
        clicks: query.clicks,
        conversion_rate: format!("{:.2}%", query.conversion_rate * 100.0),
        estimated_bookings: round2(bookings),
        avg_booking_value: format!("€{:.2}", query.avg_booking_value),
        gross_booking_value: format!("€{gross_booking_value:.2}"),
        commission_rate: format!("{:.2}%", query.commission_rate * 100.0),
        estimated_monthly_revenue: format!("€{commission:.2}"),
        note: REVENUE_NOTE.to_owned(),
    })
}
