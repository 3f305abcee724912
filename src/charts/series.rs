//! Chart Series Module
//! Turns game results into plottable per-player series.

use crate::data::{DataProcessor, GameResult};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Cumulative points of one player, one point per date.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeries {
    pub player: String,
    pub points: Vec<(NaiveDate, f64)>,
}

/// Finishing position frequencies of one player.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionHistogram {
    pub player: String,
    pub counts: BTreeMap<i64, u32>,
}

impl PositionHistogram {
    pub fn max_count(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    pub fn max_position(&self) -> Option<i64> {
        self.counts.keys().next_back().copied()
    }

    /// Total number of games counted.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

/// Index of each player by first appearance.
fn player_slots(rows: &[GameResult]) -> (Vec<&str>, HashMap<&str, usize>) {
    let mut order = Vec::new();
    let mut slots = HashMap::new();
    for row in rows {
        slots.entry(row.player.as_str()).or_insert_with(|| {
            order.push(row.player.as_str());
            order.len() - 1
        });
    }
    (order, slots)
}

/// Running points total per player, ordered by `(date, game_id, position)`.
///
/// Every row counts, played or not. When a player has several games on the
/// same date the series keeps the total after the last one.
pub fn cumulative_points(rows: &[GameResult]) -> Vec<PlayerSeries> {
    let (order, slots) = player_slots(rows);
    let mut series: Vec<PlayerSeries> = order
        .iter()
        .map(|player| PlayerSeries {
            player: player.to_string(),
            points: Vec::new(),
        })
        .collect();
    let mut totals = vec![0.0; series.len()];

    let mut sorted: Vec<&GameResult> = rows.iter().collect();
    sorted.sort_by_key(|r| (r.date, r.game_id, r.position));

    for row in sorted {
        let slot = slots[row.player.as_str()];
        totals[slot] += row.points;
        let points = &mut series[slot].points;
        if let Some(last) = points.last_mut().filter(|last| last.0 == row.date) {
            last.1 = totals[slot];
        } else {
            points.push((row.date, totals[slot]));
        }
    }

    series
}

/// Position frequencies per player over games actually played.
///
/// Every player in the input gets an entry, possibly empty.
pub fn position_frequencies(rows: &[GameResult]) -> Vec<PositionHistogram> {
    let (order, slots) = player_slots(rows);
    let mut histograms: Vec<PositionHistogram> = order
        .iter()
        .map(|player| PositionHistogram {
            player: player.to_string(),
            counts: BTreeMap::new(),
        })
        .collect();

    for row in DataProcessor::participated_only(rows) {
        let slot = slots[row.player.as_str()];
        *histograms[slot].counts.entry(row.position).or_insert(0) += 1;
    }

    histograms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(date: &str, game_id: i64, player: &str, position: i64, points: f64, played: f64) -> GameResult {
        GameResult {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            game_id,
            player: player.to_string(),
            position,
            points,
            played,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, d).unwrap()
    }

    #[test]
    fn test_cumulative_points_by_date() {
        let rows = vec![
            game("2023-01-08", 2, "Bob", 1, 10.0, 1.0),
            game("2023-01-01", 1, "Alice", 1, 10.0, 1.0),
            game("2023-01-01", 1, "Bob", 2, 5.0, 1.0),
            game("2023-01-08", 2, "Alice", 2, 5.0, 1.0),
        ];

        let series = cumulative_points(&rows);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].player, "Bob");
        assert_eq!(series[0].points, vec![(day(1), 5.0), (day(8), 15.0)]);
        assert_eq!(series[1].player, "Alice");
        assert_eq!(series[1].points, vec![(day(1), 10.0), (day(8), 15.0)]);
    }

    #[test]
    fn test_cumulative_points_collapses_same_day_games() {
        let rows = vec![
            game("2023-01-01", 1, "Alice", 1, 10.0, 1.0),
            game("2023-01-01", 2, "Alice", 3, 2.0, 1.0),
            game("2023-01-08", 3, "Alice", 4, 1.0, 0.0),
        ];

        let series = cumulative_points(&rows);
        assert_eq!(series[0].points, vec![(day(1), 12.0), (day(8), 13.0)]);
    }

    #[test]
    fn test_cumulative_points_with_negative_points() {
        let rows = vec![
            game("2023-01-01", 1, "Alice", 6, -2.0, 1.0),
            game("2023-01-08", 2, "Alice", 1, 5.0, 1.0),
        ];

        let series = cumulative_points(&rows);
        assert_eq!(series[0].points, vec![(day(1), -2.0), (day(8), 3.0)]);
    }

    #[test]
    fn test_position_frequencies_skip_unplayed_rows() {
        let rows = vec![
            game("2023-01-01", 1, "Alice", 1, 10.0, 1.0),
            game("2023-01-08", 2, "Alice", 1, 10.0, 1.0),
            game("2023-01-15", 3, "Alice", 3, 2.0, 1.0),
            game("2023-01-22", 4, "Alice", 6, 0.0, 0.0),
            game("2023-01-01", 1, "Ghost", 2, 0.0, 0.0),
        ];

        let histograms = position_frequencies(&rows);
        assert_eq!(histograms.len(), 2);

        let alice = &histograms[0];
        assert_eq!(alice.player, "Alice");
        assert_eq!(alice.counts.get(&1), Some(&2));
        assert_eq!(alice.counts.get(&3), Some(&1));
        assert_eq!(alice.counts.get(&6), None);
        assert_eq!(alice.total(), 3);
        assert_eq!(alice.max_count(), 2);
        assert_eq!(alice.max_position(), Some(3));

        let ghost = &histograms[1];
        assert_eq!(ghost.player, "Ghost");
        assert!(ghost.counts.is_empty());
        assert_eq!(ghost.max_count(), 0);
        assert_eq!(ghost.max_position(), None);
    }

    #[test]
    fn test_any_number_of_players() {
        let rows: Vec<GameResult> = (0..9)
            .map(|i| game("2023-01-01", 1, &format!("P{i}"), i + 1, 0.0, 1.0))
            .collect();

        assert_eq!(position_frequencies(&rows).len(), 9);
        assert_eq!(cumulative_points(&rows).len(), 9);
    }
}
