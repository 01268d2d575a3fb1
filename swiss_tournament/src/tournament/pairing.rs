//! Adjacent pairing for the next Swiss round.

use super::errors::{TournamentError, TournamentResult};
use super::models::{Pairing, Standing};

/// Pair each player with the one directly below them in the standings
///
/// Positions (0, 1), (2, 3), (4, 5), ... become one pairing each, so players
/// with equal or nearly-equal win records meet. An empty list yields no
/// pairings.
///
/// # Errors
///
/// * `TournamentError::OddPlayerCount` - the standings hold an odd number of players
///
/// # Example
///
/// ```
/// use swiss_tournament::tournament::{Standing, pair_adjacent};
///
/// let standings = vec![
///     Standing::new(1, "A", 2.0, 2),
///     Standing::new(2, "B", 2.0, 2),
///     Standing::new(3, "C", 1.0, 1),
///     Standing::new(4, "D", 0.0, 1),
/// ];
///
/// let pairings = pair_adjacent(&standings).unwrap();
/// assert_eq!(pairings.len(), 2);
/// assert_eq!((pairings[0].id1, pairings[0].id2), (1, 2));
/// assert_eq!((pairings[1].id1, pairings[1].id2), (3, 4));
/// ```
pub fn pair_adjacent(standings: &[Standing]) -> TournamentResult<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }

    Ok(standings
        .chunks_exact(2)
        .map(|pair| Pairing::between(&pair[0], &pair[1]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standings(count: usize) -> Vec<Standing> {
        (1..=count as i64)
            .map(|id| Standing::new(id, format!("P{id}"), 0.0, 0))
            .collect()
    }

    #[test]
    fn test_pairs_consecutive_positions() {
        let standings = vec![
            Standing::new(1, "A", 2.0, 2),
            Standing::new(2, "B", 2.0, 2),
            Standing::new(3, "C", 1.0, 1),
            Standing::new(4, "D", 0.0, 1),
        ];

        let pairings = pair_adjacent(&standings).unwrap();

        assert_eq!(
            pairings,
            vec![
                Pairing {
                    id1: 1,
                    name1: "A".to_string(),
                    id2: 2,
                    name2: "B".to_string(),
                },
                Pairing {
                    id1: 3,
                    name1: "C".to_string(),
                    id2: 4,
                    name2: "D".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_standings_produce_no_pairings() {
        assert!(pair_adjacent(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_odd_count_is_rejected() {
        let err = pair_adjacent(&standings(3)).unwrap_err();
        assert!(matches!(err, TournamentError::OddPlayerCount(3)));

        let err = pair_adjacent(&standings(1)).unwrap_err();
        assert!(matches!(err, TournamentError::OddPlayerCount(1)));
    }

    #[test]
    fn test_pairing_does_not_reorder_input() {
        // Pairing trusts the order it is given.
        let standings = vec![
            Standing::new(4, "D", 0.0, 1),
            Standing::new(1, "A", 2.0, 2),
        ];

        let pairings = pair_adjacent(&standings).unwrap();
        assert_eq!((pairings[0].id1, pairings[0].id2), (4, 1));
    }
}
