//! # Play-Count Statistics
//!
//! Pure transforms over an in-memory card list:
//!
//! - [`rank`]: top [`TOP_N`] cards by play count, descending; equal counts keep input order
//! - [`total_plays`]: sum of play counts
//! - [`most_played`]: first card with the highest play count, `None` for an empty list
//!
//! The day/week/month filters ([`StatsPeriod`]) currently all produce the same ranking:
//! cards carry a lifetime play count only, with no per-play timestamps to window over.
//!
//! [`collect_favorite_cards`] is the one impure function here: it loads every card of
//! every favorites category, which is what the statistics view summarizes.

use std::fmt;
use std::str::FromStr;

use futures::{stream, StreamExt, TryStreamExt};
use serde::Serialize;
use shared::{Card, CardId, StatsCardData};

use crate::core::error::Result;
use crate::core::service::ApiService;

/// Number of entries [`rank`] keeps.
pub const TOP_N: usize = 5;

/// Category card lists fetched at once by [`collect_favorite_cards`].
const FETCH_CONCURRENCY: usize = 4;

/// Anything that can be ranked by play count.
pub trait PlayStat {
    fn stat_id(&self) -> &CardId;
    fn stat_name(&self) -> &str;
    fn play_count(&self) -> u64;

    fn to_stats(&self) -> StatsCardData {
        StatsCardData {
            card_id: self.stat_id().clone(),
            card_name: self.stat_name().to_string(),
            play_count: self.play_count(),
        }
    }
}

impl PlayStat for Card {
    fn stat_id(&self) -> &CardId {
        &self.id
    }

    fn stat_name(&self) -> &str {
        &self.name
    }

    fn play_count(&self) -> u64 {
        self.play_count
    }
}

impl PlayStat for StatsCardData {
    fn stat_id(&self) -> &CardId {
        &self.card_id
    }

    fn stat_name(&self) -> &str {
        &self.card_name
    }

    fn play_count(&self) -> u64 {
        self.play_count
    }
}

/// Top [`TOP_N`] entries by descending play count.
///
/// The sort is stable, so ties keep their input order, and ranking an already-ranked
/// list returns it unchanged.
pub fn rank<T: PlayStat>(items: &[T]) -> Vec<StatsCardData> {
    let mut stats: Vec<StatsCardData> = items.iter().map(PlayStat::to_stats).collect();
    stats.sort_by(|a, b| b.play_count.cmp(&a.play_count));
    stats.truncate(TOP_N);
    stats
}

/// Sum of all play counts, saturating at `u64::MAX`.
pub fn total_plays<T: PlayStat>(items: &[T]) -> u64 {
    items
        .iter()
        .fold(0u64, |total, item| total.saturating_add(item.play_count()))
}

/// The entry with the highest play count; the first one on ties.
pub fn most_played<T: PlayStat>(items: &[T]) -> Option<&T> {
    items.iter().fold(None, |best: Option<&T>, item| match best {
        Some(current) if current.play_count() >= item.play_count() => Some(current),
        _ => Some(item),
    })
}

/// Time filter offered by the statistics view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsPeriod {
    #[default]
    Day,
    Week,
    Month,
}

impl StatsPeriod {
    pub const ALL: [StatsPeriod; 3] = [StatsPeriod::Day, StatsPeriod::Week, StatsPeriod::Month];

    /// Heading shown above the ranking.
    pub fn label(self) -> &'static str {
        match self {
            StatsPeriod::Day => "Today",
            StatsPeriod::Week => "This week",
            StatsPeriod::Month => "This month",
        }
    }
}

impl fmt::Display for StatsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatsPeriod::Day => "day",
            StatsPeriod::Week => "week",
            StatsPeriod::Month => "month",
        })
    }
}

impl FromStr for StatsPeriod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "daily" => Ok(StatsPeriod::Day),
            "week" | "weekly" => Ok(StatsPeriod::Week),
            "month" | "monthly" => Ok(StatsPeriod::Month),
            other => Err(format!("unknown period '{}', expected day, week or month", other)),
        }
    }
}

/// Ranking for a period. Every period currently yields [`rank`] of the whole list.
pub fn stats_for_period<T: PlayStat>(_period: StatsPeriod, items: &[T]) -> Vec<StatsCardData> {
    rank(items)
}

/// Everything the statistics view shows for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub period: StatsPeriod,
    pub total_plays: u64,
    pub most_played: Option<StatsCardData>,
    pub top: Vec<StatsCardData>,
}

pub fn summarize<T: PlayStat>(period: StatsPeriod, items: &[T]) -> StatsSummary {
    StatsSummary {
        period,
        total_plays: total_plays(items),
        most_played: most_played(items).map(PlayStat::to_stats),
        top: stats_for_period(period, items),
    }
}

/// Load every card of every favorites category, in category order.
///
/// Category card lists are fetched a few at a time; the first failure aborts the load.
#[tracing::instrument(skip(api))]
pub async fn collect_favorite_cards(api: &dyn ApiService) -> Result<Vec<Card>> {
    let categories = api.favorite_categories().await?;

    let per_category: Vec<Vec<Card>> = stream::iter(categories.iter())
        .map(|category| api.favorite_category_cards(&category.id))
        .buffered(FETCH_CONCURRENCY)
        .try_collect()
        .await?;

    let cards: Vec<Card> = per_category.into_iter().flatten().collect();
    tracing::debug!(categories = categories.len(), cards = cards.len(), "Collected favorite cards");
    Ok(cards)
}
