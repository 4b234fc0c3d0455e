use proptest::prelude::*;
use subnet_quiz::{NullStore, Phase, Session, TickOutcome, MAX_HEARTS, ROUND_SECONDS};

#[derive(Debug, Clone)]
enum Op {
    Select(u8),
    Outcome(bool),
    Tick(u16),
    Restart,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..=40).prop_map(Op::Select),
        any::<bool>().prop_map(Op::Outcome),
        (1u16..=130).prop_map(Op::Tick),
        Just(Op::Restart),
    ]
}

fn check_invariants(session: &Session) -> Result<(), TestCaseError> {
    let state = session.state();
    prop_assert!(state.hearts <= MAX_HEARTS);
    prop_assert!(state.time_remaining <= ROUND_SECONDS);
    prop_assert!(state.round >= 1);
    prop_assert!(state.current_address.is_some());
    prop_assert_eq!(state.hearts == 0, state.phase == Phase::GameOver);
    match state.phase {
        Phase::Selection => prop_assert_eq!(state.subnet_mask, 0),
        Phase::SpecialAddress => {
            prop_assert!(state.subnet_mask > 0);
            prop_assert!(state.special_address_info.is_some());
        }
        Phase::Calculation => {
            prop_assert!(state.subnet_mask > 0);
            prop_assert!(state.special_address_info.is_none());
        }
        Phase::GameOver => prop_assert!(state.high_score >= state.round),
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any sequence of operations leaves the session consistent.
    #[test]
    fn operations_preserve_invariants(seed in any::<u64>(), ops in prop::collection::vec(op(), 1..60)) {
        let mut session = Session::with_seed(seed, Box::new(NullStore));
        session.begin();
        check_invariants(&session)?;

        for op in ops {
            let before = session.state();
            match op {
                Op::Select(p) => session.select_subnet_mask(p),
                Op::Outcome(correct) => {
                    session.register_outcome(correct);
                    let after = session.state();
                    if before.phase != Phase::GameOver {
                        if correct {
                            prop_assert_eq!(after.round, before.round + 1);
                            prop_assert_eq!(after.hearts, before.hearts);
                        } else {
                            prop_assert_eq!(after.round, before.round);
                            prop_assert_eq!(after.hearts, before.hearts - 1);
                        }
                    } else {
                        prop_assert_eq!(after, before);
                    }
                }
                Op::Tick(n) => {
                    let mut timeouts = 0;
                    for _ in 0..n {
                        if matches!(session.tick(), TickOutcome::TimedOut | TickOutcome::GameOver) {
                            timeouts += 1;
                        }
                    }
                    let after = session.state();
                    prop_assert_eq!(u32::from(before.hearts) - u32::from(after.hearts), timeouts);
                }
                Op::Restart => {
                    session.restart();
                    prop_assert_eq!(session.high_score(), before.high_score);
                    prop_assert_eq!(session.round(), 1);
                    prop_assert_eq!(session.hearts(), MAX_HEARTS);
                }
            }
            check_invariants(&session)?;
            prop_assert!(session.high_score() >= before.high_score);
        }
    }
}
