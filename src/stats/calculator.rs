//! Standings Calculator Module
//! Aggregates per-game rows into one standings row per player.

use super::standings::{Standings, StandingsRow};
use crate::data::GameResult;
use log::debug;
use std::collections::HashMap;

#[derive(Debug, Default)]
struct Tally {
    points: f64,
    games_played: u32,
    wins: u32,
}

/// Computes league standings.
pub struct StandingsCalculator;

impl StandingsCalculator {
    /// Build the standings table, sorted by points (highest first).
    ///
    /// Points sum every row of a player. Games played count rows with a
    /// positive `played` flag. Wins count rows finishing in position 1,
    /// regardless of the `played` flag.
    pub fn compute(rows: &[GameResult]) -> Standings {
        let mut order: Vec<&str> = Vec::new();
        let mut tallies: HashMap<&str, Tally> = HashMap::new();

        for row in rows {
            let tally = tallies.entry(row.player.as_str()).or_insert_with(|| {
                order.push(row.player.as_str());
                Tally::default()
            });

            tally.points += row.points;
            if row.participated() {
                tally.games_played += 1;
            }
            if row.is_win() {
                tally.wins += 1;
            }
        }

        let mut table: Vec<StandingsRow> = order
            .into_iter()
            .map(|player| {
                let tally = tallies.remove(player).unwrap_or_default();
                StandingsRow {
                    player: player.to_string(),
                    games_played: tally.games_played,
                    points: tally.points,
                    ppg: Self::points_per_game(tally.points, tally.games_played),
                    wins: tally.wins,
                }
            })
            .collect();

        // Stable: equal points keep first-appearance order
        table.sort_by(|a, b| b.points.total_cmp(&a.points));

        debug!("Computed standings for {} players", table.len());
        Standings::new(table)
    }

    /// Points per game rounded to 2 decimals, `None` without any game played.
    pub fn points_per_game(points: f64, games_played: u32) -> Option<f64> {
        if games_played == 0 {
            return None;
        }
        Some(round2(points / games_played as f64))
    }
}

// Half-to-even, so 2.125 becomes 2.12
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

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

    fn league() -> Vec<GameResult> {
        vec![
            game("2023-01-01", 1, "Alice", 1, 10.0, 1.0),
            game("2023-01-01", 1, "Bob", 2, 5.0, 1.0),
            game("2023-01-01", 1, "Sam", 3, 2.0, 1.0),
            game("2023-01-08", 2, "Alice", 3, 2.0, 1.0),
            game("2023-01-08", 2, "Bob", 1, 10.0, 1.0),
            game("2023-01-08", 2, "Sam", 2, 5.0, 1.0),
            game("2023-01-15", 3, "Sam", 1, 10.0, 1.0),
            game("2023-01-15", 3, "Alice", 2, 5.0, 1.0),
            game("2023-01-15", 3, "Bob", 4, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_two_player_tie() {
        let rows = vec![
            game("2023-01-01", 1, "Alice", 1, 10.0, 1.0),
            game("2023-01-01", 1, "Bob", 2, 5.0, 1.0),
            game("2023-01-08", 2, "Alice", 2, 5.0, 1.0),
            game("2023-01-08", 2, "Bob", 1, 10.0, 1.0),
        ];

        let standings = StandingsCalculator::compute(&rows);
        assert_eq!(standings.len(), 2);
        for player in ["Alice", "Bob"] {
            let row = standings.get(player).unwrap();
            assert_eq!(row.games_played, 2);
            assert_eq!(row.points, 15.0);
            assert_eq!(row.ppg, Some(7.5));
            assert_eq!(row.wins, 1);
        }
        // Ties keep input order
        assert_eq!(standings.rows()[0].player, "Alice");
    }

    #[test]
    fn test_player_without_games_is_kept() {
        let rows = vec![game("2023-01-01", 1, "Ghost", 5, 0.0, 0.0)];

        let standings = StandingsCalculator::compute(&rows);
        assert_eq!(standings.len(), 1);
        let row = &standings.rows()[0];
        assert_eq!(row.player, "Ghost");
        assert_eq!(row.games_played, 0);
        assert_eq!(row.points, 0.0);
        assert_eq!(row.ppg, None);
        assert_eq!(row.ppg(), 0.0);
        assert_eq!(row.wins, 0);
    }

    #[test]
    fn test_unplayed_rows_count_toward_points_only() {
        let rows = vec![
            game("2023-01-01", 1, "Alice", 2, 4.0, 1.0),
            game("2023-01-08", 2, "Alice", 4, 1.5, 0.0),
        ];

        let row = StandingsCalculator::compute(&rows).rows()[0].clone();
        assert_eq!(row.points, 5.5);
        assert_eq!(row.games_played, 1);
        assert_eq!(row.ppg, Some(5.5));
    }

    #[test]
    fn test_wins_ignore_played_flag() {
        let rows = vec![
            game("2023-01-01", 1, "Alice", 1, 0.0, 0.0),
            game("2023-01-08", 2, "Alice", 1, 10.0, 1.0),
        ];

        let row = StandingsCalculator::compute(&rows).rows()[0].clone();
        assert_eq!(row.wins, 2);
        assert_eq!(row.games_played, 1);
    }

    #[test]
    fn test_sorted_by_points_descending() {
        let standings = StandingsCalculator::compute(&league());

        let players: Vec<&str> = standings.rows().iter().map(|r| r.player.as_str()).collect();
        assert_eq!(players, vec!["Alice", "Sam", "Bob"]);
        for pair in standings.rows().windows(2) {
            assert!(pair[0].points >= pair[1].points);
        }
    }

    #[test]
    fn test_one_row_per_player() {
        let standings = StandingsCalculator::compute(&league());
        assert_eq!(standings.len(), 3);
        for row in standings.rows() {
            assert!(row.games_played > 0);
        }
    }

    #[test]
    fn test_ppg_consistent_with_points() {
        let rows = vec![
            game("2023-01-01", 1, "Alice", 1, 10.0, 1.0),
            game("2023-01-08", 2, "Alice", 3, 2.0, 1.0),
            game("2023-01-15", 3, "Alice", 2, 5.0, 1.0),
        ];

        let row = StandingsCalculator::compute(&rows).rows()[0].clone();
        assert_eq!(row.ppg, Some(5.67));
        let rebuilt = row.ppg() * row.games_played as f64;
        assert!((rebuilt - row.points).abs() <= 0.005 * row.games_played as f64);
    }

    #[test]
    fn test_negative_points() {
        let rows = vec![
            game("2023-01-01", 1, "Alice", 6, -3.0, 1.0),
            game("2023-01-01", 1, "Bob", 1, 1.0, 1.0),
        ];

        let standings = StandingsCalculator::compute(&rows);
        assert_eq!(standings.rows()[0].player, "Bob");
        assert_eq!(standings.rows()[1].points, -3.0);
        assert_eq!(standings.rows()[1].ppg, Some(-3.0));
    }

    #[test]
    fn test_ppg_rounds_half_to_even() {
        assert_eq!(StandingsCalculator::points_per_game(17.0, 8), Some(2.12));
        assert_eq!(StandingsCalculator::points_per_game(1.0, 8), Some(0.12));
        assert_eq!(StandingsCalculator::points_per_game(3.0, 8), Some(0.38));
        assert_eq!(StandingsCalculator::points_per_game(5.0, 0), None);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let rows = league();
        assert_eq!(StandingsCalculator::compute(&rows), StandingsCalculator::compute(&rows));
    }

    #[test]
    fn test_empty_input() {
        assert!(StandingsCalculator::compute(&[]).is_empty());
    }
}
