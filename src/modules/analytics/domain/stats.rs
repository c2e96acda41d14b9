use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::LazyLock;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

use super::entities::{DeviceKind, VisitRecord, DIRECT_REFERRER};

/// Length of the top pages and top referrers lists.
pub const TOP_N: usize = 5;

/// Days covered by `visit_history`, ending today.
pub const HISTORY_DAYS: i64 = 30;

static URL_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://(?:[^/?#@]*@)?(\[[^\]]+\]|[^/?#:]+)").unwrap()
});

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageVisits {
    pub page: String,
    pub visits: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferrerVisits {
    pub referrer: String,
    pub visits: usize,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStats {
    pub desktop: usize,
    pub mobile: usize,
    pub tablet: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyVisits {
    pub date: String,
    pub visits: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsStats {
    pub total_visits: usize,
    pub unique_visitors: usize,
    pub today_visits: usize,
    pub weekly_visits: usize,
    pub monthly_visits: usize,
    pub average_session_duration_secs: u64,
    pub top_pages: Vec<PageVisits>,
    pub top_referrers: Vec<ReferrerVisits>,
    pub device_stats: DeviceStats,
    pub browser_stats: BTreeMap<String, usize>,
    pub visit_history: Vec<DailyVisits>,
}

fn visit_date(visit: &VisitRecord) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(visit.timestamp_ms).map(|t| t.date_naive())
}

/// Hostname of a referrer URL. `Direct`, blanks and anything that does not
/// look like an absolute URL all count as direct traffic.
pub fn referrer_host(referrer: &str) -> String {
    URL_HOST
        .captures(referrer.trim())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_ascii_lowercase())
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| DIRECT_REFERRER.to_string())
}

/// Counts keys and returns the `limit` most frequent, highest first. Ties
/// keep the order in which keys were first seen.
fn top_counts<I>(keys: I, limit: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for key in keys {
        match index.get(&key) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(key.clone(), order.len());
                order.push((key, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(limit);
    order
}

fn average_session_duration_secs(visits: &[VisitRecord]) -> u64 {
    let mut spans: HashMap<&str, (i64, i64)> = HashMap::new();
    for v in visits {
        spans
            .entry(v.session_id.as_str())
            .and_modify(|(first, last)| {
                *first = (*first).min(v.timestamp_ms);
                *last = (*last).max(v.timestamp_ms);
            })
            .or_insert((v.timestamp_ms, v.timestamp_ms));
    }

    if spans.is_empty() {
        return 0;
    }
    let total_ms = spans
        .values()
        .map(|(first, last)| last.saturating_sub(*first))
        .fold(0i64, i64::saturating_add);
    let mean_ms = total_ms / spans.len() as i64;
    u64::try_from(mean_ms / 1000).unwrap_or(0)
}

/// Aggregates a visit log as of `now`. Pure: the same log and clock always
/// give the same stats.
pub fn compute_stats(visits: &[VisitRecord], now: DateTime<Utc>) -> AnalyticsStats {
    let today = now.date_naive();
    let week_start = today - Duration::days(7);
    let month_start = today - Duration::days(30);

    let dates: Vec<Option<NaiveDate>> = visits.iter().map(visit_date).collect();
    let count_since =
        |start: NaiveDate| dates.iter().flatten().filter(|d| **d >= start).count();

    let mut per_day: HashMap<NaiveDate, usize> = HashMap::new();
    for date in dates.iter().flatten() {
        *per_day.entry(*date).or_default() += 1;
    }

    let mut device_stats = DeviceStats::default();
    let mut browser_stats: BTreeMap<String, usize> = BTreeMap::new();
    for v in visits {
        match v.device {
            DeviceKind::Desktop => device_stats.desktop += 1,
            DeviceKind::Mobile => device_stats.mobile += 1,
            DeviceKind::Tablet => device_stats.tablet += 1,
        }
        *browser_stats.entry(v.browser.clone()).or_default() += 1;
    }

    let visit_history = (0..HISTORY_DAYS)
        .rev()
        .map(|days_ago| {
            let date = today - Duration::days(days_ago);
            DailyVisits {
                date: date.format("%Y-%m-%d").to_string(),
                visits: per_day.get(&date).copied().unwrap_or(0),
            }
        })
        .collect();

    AnalyticsStats {
        total_visits: visits.len(),
        unique_visitors: visits
            .iter()
            .map(|v| v.session_id.as_str())
            .collect::<HashSet<_>>()
            .len(),
        today_visits: dates.iter().flatten().filter(|d| **d == today).count(),
        weekly_visits: count_since(week_start),
        monthly_visits: count_since(month_start),
        average_session_duration_secs: average_session_duration_secs(visits),
        top_pages: top_counts(visits.iter().map(|v| v.page.clone()), TOP_N)
            .into_iter()
            .map(|(page, visits)| PageVisits { page, visits })
            .collect(),
        top_referrers: top_counts(visits.iter().map(|v| referrer_host(&v.referrer)), TOP_N)
            .into_iter()
            .map(|(referrer, visits)| ReferrerVisits { referrer, visits })
            .collect(),
        device_stats,
        browser_stats,
        visit_history,
    }
}
