//! Property-based tests for the scenario pipeline.

use proptest::prelude::*;

use lottery::api_computations::{can_we_get_tickets_with, total_probability};
use lottery::constants::CONSERVATION_TOLERANCE;
use lottery::hypergeometric::friend_win_distribution;
use lottery::scenario_filter::filter_cases;
use lottery::scenario_generator::generate_cases;
use lottery::scenario_probability::calculate_scenario_probability;
use lottery::types::{Draw, DrawRequest, Method, Scenario};

/// Strategy: (friends, entrants, draws) with friends <= entrants and draws <= min(entrants, 10).
fn pool_strategy() -> impl Strategy<Value = (u32, u32, usize)> {
    (1u32..=60).prop_flat_map(|entrants| {
        let max_draws = entrants.min(10) as usize;
        (0..=entrants, Just(entrants), 0..=max_draws)
    })
}

/// Strategy: a batch of equal-length scenarios.
fn cases_strategy() -> impl Strategy<Value = Vec<Scenario>> {
    (0usize..8).prop_flat_map(|len| {
        prop::collection::vec(
            prop::collection::vec(any::<bool>(), len).prop_map(|cells| {
                Scenario::new(
                    cells
                        .into_iter()
                        .map(|w| if w { Draw::FriendWin } else { Draw::Other })
                        .collect(),
                )
            }),
            0..20,
        )
    })
}

proptest! {
    // 1. Probabilities over every scenario sum to 1
    #[test]
    fn conservation((friends, entrants, draws) in pool_strategy()) {
        let total = total_probability(friends, entrants, draws).unwrap();
        prop_assert!((total - 1.0).abs() < CONSERVATION_TOLERANCE, "total={total}");
    }

    // 2. Each scenario probability lies in [0, 1]
    #[test]
    fn probability_in_unit_interval(
        (friends, entrants, draws) in pool_strategy(),
        index in any::<u64>(),
    ) {
        let s = Scenario::from_index(index, draws);
        let p = calculate_scenario_probability(&s, friends, entrants).unwrap();
        prop_assert!((0.0..=1.0).contains(&p), "p={p}");
    }

    // 3. generate_cases(n) is exactly the 2^n distinct length-n sequences
    #[test]
    fn enumeration_complete(n in 0usize..=12) {
        let cases = generate_cases(n).unwrap();
        prop_assert_eq!(cases.len(), 1usize << n);
        let unique: std::collections::HashSet<_> = cases.iter().collect();
        prop_assert_eq!(unique.len(), cases.len());
        prop_assert!(cases.iter().all(|c| c.len() == n));
    }

    // 4. s kept iff wins * multiplier >= required; result is a subset of input
    #[test]
    fn filter_correct(
        cases in cases_strategy(),
        required in 0u64..10,
        multiplier in 1u32..4,
    ) {
        let kept = filter_cases(&cases, required, multiplier).unwrap();
        let expected: Vec<&Scenario> = cases
            .iter()
            .filter(|c| c.wins() as u64 * multiplier as u64 >= required)
            .collect();
        prop_assert_eq!(kept, expected);
    }

    // 5. More "1"s than friends collapses the probability to 0
    #[test]
    fn exhausted_friends_give_zero(
        (entrants, draws) in (1u32..=60).prop_flat_map(|n| (Just(n), 1..=n.min(10) as usize)),
        friends_frac in 0.0f64..1.0,
        index in any::<u64>(),
    ) {
        let friends = ((draws as f64 * friends_frac) as u32).min(draws as u32 - 1);
        let mut cells = Scenario::from_index(index, draws).draws().to_vec();
        for d in cells.iter_mut().take(friends as usize + 1) {
            *d = Draw::FriendWin;
        }
        let s = Scenario::new(cells);
        prop_assert!(s.wins() > friends as usize);
        let p = calculate_scenario_probability(&s, friends, entrants).unwrap();
        prop_assert_eq!(p, 0.0);
    }

    // 6. Enumeration and closed form agree
    #[test]
    fn closed_form_matches_enumeration(
        (friends, entrants, draws) in pool_strategy(),
        tickets in 1i64..5,
    ) {
        let req = DrawRequest {
            entrants: Some(entrants as i64),
            friends: Some(friends as i64),
            winners: Some(draws as i64),
            tickets: Some(tickets),
        };
        let e = can_we_get_tickets_with(&req, Method::Enumerate).unwrap();
        let c = can_we_get_tickets_with(&req, Method::ClosedForm).unwrap();
        prop_assert!((e - c).abs() < CONSERVATION_TOLERANCE, "enumerate={e} closed={c}");
    }

    // 7. Summing scenarios by win count reproduces the hypergeometric pmf
    #[test]
    fn pmf_matches_scenario_sums((friends, entrants, draws) in pool_strategy()) {
        let pmf = friend_win_distribution(friends, entrants, draws as u32).unwrap();
        let mut by_wins = vec![0.0f64; draws + 1];
        for s in generate_cases(draws).unwrap() {
            by_wins[s.wins()] += calculate_scenario_probability(&s, friends, entrants).unwrap();
        }
        for (k, (a, b)) in pmf.iter().zip(&by_wins).enumerate() {
            prop_assert!((a - b).abs() < CONSERVATION_TOLERANCE, "k={k} pmf={a} sum={b}");
        }
    }
}
