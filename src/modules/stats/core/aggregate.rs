// Per-user productivity figures over two calendar windows.
//
// "Today" starts at local midnight and the week starts at local midnight of the most
// recent Sunday (today, if it is Sunday). Both are resolved in the zone's offset on
// that date, so a DST change moves the boundaries with it.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, NaiveTime, Offset, TimeZone,
    Utc,
};
use serde::Serialize;

use crate::modules::tasks::core::task::TaskView;

/// Zone the stats windows are evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsZone {
    Fixed(FixedOffset),
    /// The host's zone, looked up on every evaluation.
    Local,
}

impl StatsZone {
    pub fn window(&self, now: DateTime<Utc>) -> StatsWindow {
        match self {
            Self::Fixed(offset) => StatsWindow::at(now, offset),
            Self::Local => StatsWindow::at(now, &Local),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsWindow {
    pub today_start: DateTime<Utc>,
    pub week_start: DateTime<Utc>,
}

impl StatsWindow {
    pub fn at<Tz: TimeZone>(now: DateTime<Utc>, zone: &Tz) -> Self {
        let local_today = now.with_timezone(zone).date_naive();
        let days_since_sunday = i64::from(local_today.weekday().num_days_from_sunday());
        let local_week = local_today - Duration::days(days_since_sunday);
        Self {
            today_start: local_midnight_in_utc(local_today, zone),
            week_start: local_midnight_in_utc(local_week, zone),
        }
    }
}

fn local_midnight_in_utc<Tz: TimeZone>(day: NaiveDate, zone: &Tz) -> DateTime<Utc> {
    let midnight = day.and_time(NaiveTime::MIN);
    match zone.from_local_datetime(&midnight).earliest() {
        Some(local) => local.with_timezone(&Utc),
        // Midnight falls in a DST gap: take the offset in force at that instant.
        None => {
            let offset = zone.offset_from_utc_datetime(&midnight).fix();
            let utc = midnight - Duration::seconds(i64::from(offset.local_minus_utc()));
            DateTime::from_naive_utc_and_offset(utc, Utc)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub tasks_completed_today: i64,
    pub tasks_completed_week: i64,
    pub total_hours_today: f64,
    pub total_hours_week: f64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
}

pub fn aggregate(views: &[TaskView], window: &StatsWindow) -> UserStats {
    let completed_since = |boundary: DateTime<Utc>| {
        views
            .iter()
            .filter(|view| view.task.is_completed() && view.task.updated_at >= boundary)
            .count() as i64
    };
    let seconds_since = |boundary: DateTime<Utc>| -> i64 {
        views
            .iter()
            .flat_map(|view| &view.time_entries)
            .filter(|entry| entry.start_time >= boundary)
            .map(|entry| entry.duration)
            .sum()
    };

    UserStats {
        tasks_completed_today: completed_since(window.today_start),
        tasks_completed_week: completed_since(window.week_start),
        total_hours_today: hours(seconds_since(window.today_start)),
        total_hours_week: hours(seconds_since(window.week_start)),
        total_tasks: views.len() as i64,
        completed_tasks: views.iter().filter(|view| view.task.is_completed()).count() as i64,
    }
}

/// Seconds to hours, rounded half away from zero to one decimal.
pub fn hours(seconds: i64) -> f64 {
    round_one_decimal(seconds as f64 / 3600.0)
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
