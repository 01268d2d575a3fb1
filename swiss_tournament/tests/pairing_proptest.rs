/// Property-based tests for adjacent pairing using proptest
///
/// These tests check that pairing covers every player exactly once and
/// only ever pairs neighbours in the standings.
use proptest::prelude::*;
use std::collections::HashSet;
use swiss_tournament::{Standing, TournamentError, pair_adjacent};

// Strategy to generate standings sorted by wins descending, ids unique
fn standings_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<Standing>> {
    prop::collection::vec((0u32..=20, 0i64..=10), min..=max).prop_map(|records| {
        let mut standings: Vec<Standing> = records
            .into_iter()
            .enumerate()
            .map(|(i, (half_points, played))| {
                let id = i as i64 + 1;
                Standing::new(id, format!("P{id}"), f64::from(half_points) / 2.0, played)
            })
            .collect();
        standings.sort_by(|a, b| b.wins.total_cmp(&a.wins).then(a.id.cmp(&b.id)));
        standings
    })
}

// Strategy for an even number of players
fn even_standings_strategy() -> impl Strategy<Value = Vec<Standing>> {
    (0usize..=32).prop_flat_map(|half| standings_strategy(half * 2, half * 2))
}

proptest! {
    #[test]
    fn test_even_standings_give_half_as_many_pairs(standings in even_standings_strategy()) {
        let pairings = pair_adjacent(&standings).unwrap();
        prop_assert_eq!(pairings.len(), standings.len() / 2);
    }

    #[test]
    fn test_every_player_paired_exactly_once(standings in even_standings_strategy()) {
        let pairings = pair_adjacent(&standings).unwrap();

        let mut seen = HashSet::new();
        for pairing in &pairings {
            prop_assert!(seen.insert(pairing.id1), "Player {} paired twice", pairing.id1);
            prop_assert!(seen.insert(pairing.id2), "Player {} paired twice", pairing.id2);
        }

        let expected: HashSet<i64> = standings.iter().map(|s| s.id).collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn test_pairs_come_from_consecutive_positions(standings in even_standings_strategy()) {
        let pairings = pair_adjacent(&standings).unwrap();

        for (i, pairing) in pairings.iter().enumerate() {
            prop_assert_eq!(pairing.id1, standings[2 * i].id);
            prop_assert_eq!(&pairing.name1, &standings[2 * i].name);
            prop_assert_eq!(pairing.id2, standings[2 * i + 1].id);
            prop_assert_eq!(&pairing.name2, &standings[2 * i + 1].name);
        }
    }

    #[test]
    fn test_paired_players_have_nearby_records(standings in even_standings_strategy()) {
        let pairings = pair_adjacent(&standings).unwrap();

        // The first player of a pair never trails the second.
        for pairing in &pairings {
            let first = standings.iter().find(|s| s.id == pairing.id1).unwrap();
            let second = standings.iter().find(|s| s.id == pairing.id2).unwrap();
            prop_assert!(first.wins >= second.wins);
        }
    }

    #[test]
    fn test_odd_standings_are_rejected(
        standings in (0usize..=31).prop_flat_map(|half| standings_strategy(half * 2 + 1, half * 2 + 1))
    ) {
        let err = pair_adjacent(&standings).unwrap_err();
        prop_assert!(
            matches!(err, TournamentError::OddPlayerCount(n) if n == standings.len()),
            "Expected OddPlayerCount, got {:?}",
            err
        );
    }
}
