use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;
use subnet_quiz::{
    compute_boundaries, grade_calculation, grade_special, CalculationAnswer, Category,
    MemoryStore, Phase, PlayerSelection, Session, TickOutcome, ROUND_SECONDS,
};

/// Chance that the bot lets a round run out instead of answering.
const TIMEOUT_RATE: f64 = 0.05;

fn correct_selection(category: Category) -> PlayerSelection {
    match category {
        Category::Private | Category::Reserved => PlayerSelection::Reserved,
        Category::Multicast => PlayerSelection::Multicast,
        Category::Experimental => PlayerSelection::Experimental,
    }
}

fn wrong_selection(category: Category) -> PlayerSelection {
    match category {
        Category::Multicast => PlayerSelection::Experimental,
        _ => PlayerSelection::Multicast,
    }
}

fn answer_calculation(session: &Session, right: bool) -> anyhow::Result<bool> {
    let addr = session
        .current_address()
        .ok_or_else(|| anyhow::anyhow!("no address drawn"))?;
    let prefix = session.subnet_mask();
    let b = compute_boundaries(addr, prefix)?;
    let mut answer = CalculationAnswer {
        network: b.network.to_string(),
        broadcast: b.broadcast.to_string(),
        first_usable: b.first_usable.to_string(),
        last_usable: b.last_usable.to_string(),
    };
    if !right {
        // not an address at all
        answer.last_usable = "256.0.0.1".to_string();
        answer.network = "256.0.0.1".to_string();
    }
    Ok(grade_calculation(&answer, addr, prefix).unwrap_or(false))
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: {} <seed> <max-rounds> [accuracy]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let max_rounds: u32 = args[2].parse()?;
    let accuracy: f64 = match args.get(3) {
        Some(a) => a.parse()?,
        None => 0.8,
    };
    if !(0.0..=1.0).contains(&accuracy) {
        anyhow::bail!("accuracy must be within 0..=1, got {}", accuracy);
    }

    let mut bot = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut session = Session::with_seed(seed, Box::new(MemoryStore::new()));
    session.begin();

    let mut correct = 0u32;
    let mut wrong = 0u32;
    let mut timeouts = 0u32;

    while session.phase() != Phase::GameOver && session.round() <= max_rounds {
        if bot.random_bool(TIMEOUT_RATE) {
            for _ in 0..ROUND_SECONDS {
                match session.tick() {
                    TickOutcome::Running(_) => {}
                    _ => break,
                }
            }
            timeouts += 1;
            continue;
        }

        let prefixes = session.allowed_prefixes();
        let prefix = bot.random_range(prefixes);
        session.select_subnet_mask(prefix);
        // a few seconds of thinking time
        for _ in 0..bot.random_range(1..10) {
            session.tick();
        }

        let right = bot.random_bool(accuracy);
        let verdict = match session.phase() {
            Phase::SpecialAddress => {
                let info = session.special_address_info().copied();
                let selection = match info {
                    Some(c) if right => correct_selection(c.category),
                    Some(c) => wrong_selection(c.category),
                    None => PlayerSelection::Reserved,
                };
                grade_special(selection, info.as_ref())
            }
            Phase::Calculation => answer_calculation(&session, right)?,
            _ => continue,
        };
        if verdict {
            correct += 1;
        } else {
            wrong += 1;
        }
        session.register_outcome(verdict);
    }

    let result = json!({
        "seed": seed,
        "state": session.state(),
        "correct": correct,
        "wrong": wrong,
        "timeouts": timeouts,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
