//! Pending maintenance: which (object, type) pairs are due, most urgent first.

use crate::config::Config;
use crate::core::hierarchy::Forest;
use crate::db::queries::{load_last_performed, load_scheduled_links};
use crate::errors::AppResult;
use crate::models::{LinkDetails, PendingItem};
use chrono::{Duration, NaiveDateTime};
use rusqlite::Connection;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Parameters of one pending computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingQuery {
    pub limit: Option<usize>,
    /// Restrict to this object and everything below it.
    pub scope: Option<i64>,
    /// Also surface items that become due within this many days.
    pub horizon_days: i64,
}

impl PendingQuery {
    pub fn dashboard(cfg: &Config) -> Self {
        Self {
            limit: Some(cfg.dashboard_limit),
            scope: None,
            horizon_days: cfg.dashboard_horizon_days,
        }
    }

    pub fn object_summary(cfg: &Config, object_id: i64) -> Self {
        Self {
            limit: Some(cfg.summary_limit),
            scope: Some(object_id),
            horizon_days: cfg.summary_horizon_days,
        }
    }

    /// Configured defaults for the dashboard, or for an object when one is
    /// given, with explicit overrides applied on top.
    pub fn resolve(
        cfg: &Config,
        object: Option<i64>,
        limit: Option<usize>,
        horizon_days: Option<i64>,
    ) -> Self {
        let base = match object {
            Some(id) => Self::object_summary(cfg, id),
            None => Self::dashboard(cfg),
        };
        Self {
            limit: limit.or(base.limit),
            horizon_days: horizon_days.unwrap_or(base.horizon_days),
            ..base
        }
    }
}

/// Latest date per (object id, type id).
///
/// Accepts raw events as well as rows the store already grouped, since
/// taking the maximum twice changes nothing.
pub fn last_performed<I>(stamps: I) -> HashMap<(i64, i64), NaiveDateTime>
where
    I: IntoIterator<Item = (i64, i64, NaiveDateTime)>,
{
    let mut latest: HashMap<(i64, i64), NaiveDateTime> = HashMap::new();
    for (object_id, type_id, date) in stamps {
        latest
            .entry((object_id, type_id))
            .and_modify(|d| {
                if date > *d {
                    *d = date;
                }
            })
            .or_insert(date);
    }
    latest
}

/// `date + days`, saturating at the representable range.
fn add_days(date: NaiveDateTime, days: i64) -> NaiveDateTime {
    Duration::try_days(days)
        .and_then(|d| date.checked_add_signed(d))
        .unwrap_or(if days < 0 {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        })
}

/// Urgency order: never performed first, then earliest due date.
/// Ties fall back to (object id, type id).
pub fn compare_urgency(a: &PendingItem, b: &PendingItem) -> Ordering {
    let by_due = match (a.due_date, b.due_date) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.cmp(&y),
    };
    by_due.then_with(|| a.key().cmp(&b.key()))
}

pub struct PendingEngine<'a> {
    forest: &'a Forest,
}

impl<'a> PendingEngine<'a> {
    pub fn new(forest: &'a Forest) -> Self {
        Self { forest }
    }

    /// Object ids a query may touch; `None` means the whole forest.
    pub fn candidate_ids(&self, scope: Option<i64>) -> AppResult<Option<Vec<i64>>> {
        scope.map(|id| self.forest.subtree_ids(id)).transpose()
    }

    /// Compute the pending list from already loaded links and event dates.
    pub fn compute<I>(
        &self,
        query: &PendingQuery,
        links: &[LinkDetails],
        stamps: I,
        now: NaiveDateTime,
    ) -> AppResult<Vec<PendingItem>>
    where
        I: IntoIterator<Item = (i64, i64, NaiveDateTime)>,
    {
        let candidates: Option<HashSet<i64>> = self
            .candidate_ids(query.scope)?
            .map(|ids| ids.into_iter().collect());
        let latest = last_performed(stamps);
        let threshold = add_days(now, query.horizon_days);

        let mut items: Vec<PendingItem> = links
            .iter()
            .filter(|l| {
                candidates
                    .as_ref()
                    .is_none_or(|c| c.contains(&l.link.object_id))
            })
            .filter_map(|l| {
                let periodicity = l.link.periodicity?;
                let last = latest.get(&l.link.key()).copied();
                let due_date = last.map(|d| add_days(d, periodicity));

                Some(PendingItem {
                    object: l.object.clone(),
                    maintenance_type: l.maintenance_type.clone(),
                    periodicity,
                    last_performed: last,
                    due_date,
                })
            })
            .filter(|item| item.due_date.is_none_or(|due| due < threshold))
            .collect();

        items.sort_by(compare_urgency);

        if let Some(limit) = query.limit {
            items.truncate(limit);
        }

        Ok(items)
    }
}

/// Load what the query needs from the store and compute the pending list.
pub fn pending(
    conn: &Connection,
    query: &PendingQuery,
    now: NaiveDateTime,
) -> AppResult<Vec<PendingItem>> {
    let forest = Forest::load(conn)?;
    let links = load_scheduled_links(conn)?;
    let stamps = load_last_performed(conn)?;

    let items = PendingEngine::new(&forest).compute(query, &links, stamps, now)?;
    tracing::debug!(
        scope = ?query.scope,
        horizon = query.horizon_days,
        links = links.len(),
        pending = items.len(),
        "computed pending maintenance"
    );
    Ok(items)
}
