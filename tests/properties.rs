//! Seed-quantified properties of scoring, belief updates, and whole games.

use masterminds::belief::Belief;
use masterminds::codes::CodeSpace;
use masterminds::codes::Feedback;
use masterminds::codes::Palette;
use masterminds::gameplay::Game;
use masterminds::gameplay::Outcome;
use masterminds::gameplay::Rules;
use masterminds::worlds::Agent;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Arc;

type Kind = masterminds::strategy::Strategy;

fn kind() -> impl Strategy<Value = Kind> {
    prop::sample::select(Kind::pool())
}

/// 24 codes, 576 worlds: small enough to play many games per property.
fn small() -> Rules {
    Rules {
        palette: Palette::try_from("brgy").unwrap(),
        length: 3,
        ..Rules::default()
    }
}

fn game(rules: &Rules, kinds: [Kind; 2], seed: u64) -> Game {
    let mut rng = SmallRng::seed_from_u64(seed);
    Game::random(rules, kinds, &mut rng).unwrap()
}

proptest! {
    #[test]
    fn feedback_stays_in_range(i in 0..60usize, j in 0..60usize) {
        let space = CodeSpace::default();
        let (g, c) = (space.codes()[i], space.codes()[j]);
        let feedback = Feedback::from((&g, &c));
        prop_assert!(feedback.exact as usize + feedback.partial as usize <= space.length());
        prop_assert!(feedback == Feedback::from((&c, &g)));
        prop_assert!(Feedback::from((&c, &c)) == Feedback::solved(space.length()));
    }

    #[test]
    fn updates_are_sound_and_monotone(
        secret in 0..60usize,
        opponent in 0..60usize,
        guesses in prop::collection::vec(0..60usize, 1..6),
    ) {
        let space = Arc::new(CodeSpace::default());
        let secret = space.codes()[secret];
        let opponent = space.codes()[opponent];
        let mut belief = Belief::new(Agent::P1, secret, space.clone()).unwrap();
        for guess in guesses.into_iter().map(|i| space.codes()[i]) {
            let (s, t) = (belief.opponent().len(), belief.own().len());
            belief
                .observe(&guess, Feedback::from((&guess, &opponent)), Feedback::from((&guess, &secret)))
                .unwrap();
            prop_assert!(belief.opponent().contains(&opponent));
            prop_assert!(belief.own().contains(&secret));
            prop_assert!(belief.opponent().len() <= s);
            prop_assert!(belief.own().len() <= t);
        }
    }

    #[test]
    fn arbitrary_feedback_never_grows_beliefs(
        secret in 0..60usize,
        moves in prop::collection::vec((0..60usize, 0..=3u8, 0..=3u8, 0..=3u8, 0..=3u8), 1..8),
    ) {
        let space = Arc::new(CodeSpace::default());
        let secret = space.codes()[secret];
        let mut belief = Belief::new(Agent::P2, secret, space.clone()).unwrap();
        for (guess, e1, p1, e2, p2) in moves {
            let guess = space.codes()[guess];
            let about_opponent = Feedback::from((e1, p1));
            let about_self = Feedback::from((e2, p2));
            let before = (belief.opponent().to_vec(), belief.own().to_vec());
            match belief.observe(&guess, about_opponent, about_self) {
                Ok(_) => {
                    prop_assert!(belief.opponent().len() <= before.0.len());
                    prop_assert!(belief.own().len() <= before.1.len());
                    prop_assert!(!belief.opponent().is_empty());
                    prop_assert!(belief.own().contains(&secret));
                }
                Err(error) => {
                    prop_assert!(error.is_misuse());
                    prop_assert!(belief.opponent() == before.0.as_slice());
                    prop_assert!(belief.own() == before.1.as_slice());
                }
            }
        }
    }

    #[test]
    fn measures_are_non_negative(seed in any::<u64>(), kinds in prop::array::uniform2(kind())) {
        let mut game = game(&small(), kinds, seed);
        while game.next().is_some() {
            for player in game.players() {
                let belief = player.belief();
                for score in belief.scores() {
                    prop_assert!(score.gain >= 0.0);
                    prop_assert!(score.leak >= 0.0);
                    if belief.opponent().len() <= 1 {
                        prop_assert!(score.gain == 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn every_game_ends_in_a_win(seed in any::<u64>(), kinds in prop::array::uniform2(kind())) {
        let rules = small();
        let space = CodeSpace::try_from(&rules).unwrap();
        let mut game = game(&rules, kinds, seed);
        let report = game.run(space.len() - 1);
        prop_assert!(report.outcome != Outcome::Draw);
        prop_assert!(report.rounds <= space.len() - 1);
        prop_assert!(report.worlds.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn worlds_track_candidates(seed in any::<u64>(), kinds in prop::array::uniform2(kind())) {
        let mut game = game(&small(), kinds, seed);
        while let Some(round) = game.next() {
            let [s1, s2] = round.opponent;
            prop_assert!(round.worlds == s1 * s2);
            prop_assert!(game.model().contains(&game.truth()));
            for agent in Agent::all() {
                let belief = game.player(agent).belief();
                prop_assert!(belief.opponent().contains(&game.player(agent.opponent()).secret()));
                prop_assert!(game.model().knows(agent, &game.truth()) == belief.knows());
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn default_games_end_in_a_win(seed in any::<u64>(), kinds in prop::array::uniform2(kind())) {
        let mut game = game(&Rules::default(), kinds, seed);
        let report = game.run(CodeSpace::default().len() - 1);
        prop_assert!(report.initial == 3600);
        prop_assert!(report.outcome != Outcome::Draw);
        prop_assert!(report.worlds.last().copied() == Some(game.model().len()));
    }
}
