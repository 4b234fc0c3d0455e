#![cfg(feature = "std")]

use std::io::{self, Write};
use std::net::Ipv4Addr;
use std::string::String;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::{
    common::PlayerSelection,
    config::{COUNTER_STEP_MS, MAX_HEARTS, TICK_MS},
    counter::SubnetCounter,
    game::{Phase, Session, SessionState, TickOutcome},
    grade::{grade_calculation, grade_special, AnswerField, CalculationAnswer},
    subnet::{compute_boundaries, SubnetKind},
};

/// Seconds at which a reminder of the clock is printed outside selection.
const CLOCK_REMINDERS: [u16; 4] = [60, 30, 10, 5];

/// Format seconds as `m:ss`.
pub fn format_time(seconds: u16) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Hearts as filled and empty glyphs.
pub fn format_hearts(hearts: u8) -> String {
    (0..MAX_HEARTS)
        .map(|i| if i < hearts { '♥' } else { '♡' })
        .collect()
}

/// Print the status line: lives, clock, round and best score.
pub fn print_header(state: &SessionState) {
    println!();
    println!(
        "Lives: {}   Time: {}   Round: {}   Best: {}",
        format_hearts(state.hearts),
        format_time(state.time_remaining),
        state.round,
        state.high_score
    );
}

fn print_round(state: &SessionState) {
    print_header(state);
    if let Some(addr) = state.current_address {
        println!("┌─────────────────────────────┐");
        println!("│  IPv4 address: {:<15}│", addr);
        println!("└─────────────────────────────┘");
    }
    println!("Press Enter to stop the subnet mask counter.");
}

fn print_counter(counter: &SubnetCounter, time_remaining: u16) {
    print!("\r  Subnet mask: /{:<2}   [{}] ", counter.current(), format_time(time_remaining));
    let _ = io::stdout().flush();
}

fn print_special_prompt(session: &Session) {
    println!();
    if let Some(info) = session.special_address_info() {
        println!("Special address detected: {}", info.description);
    }
    println!("  [R] Reserved   [M] Multicast   [E] Experimental");
}

fn print_field_prompt(addr: Ipv4Addr, prefix: u8, field: AnswerField, first: bool) {
    if first {
        println!();
        println!("Selected network: {}/{}", addr, prefix);
        match SubnetKind::for_prefix(prefix) {
            SubnetKind::Host => println!("/32 subnet represents a single host interface"),
            SubnetKind::PointToPoint => {
                println!("/31 subnet for point-to-point links (no network/broadcast addresses)")
            }
            SubnetKind::Subnet => {}
        }
    }
    print!("  {}: ", field.label());
    let _ = io::stdout().flush();
}

fn print_game_over(session: &Session) {
    println!();
    println!("╔═════════════════════════════╗");
    println!("║         GAME OVER           ║");
    println!("╚═════════════════════════════╝");
    println!("Rounds completed: {}", session.rounds_completed());
    println!("High score: {}", session.high_score());
    print!("Play again? [y/N] ");
    let _ = io::stdout().flush();
}

/// Print the canonical answers for `addr/prefix`.
pub fn print_answer_sheet(addr: Ipv4Addr, prefix: u8) -> anyhow::Result<()> {
    let boundaries = compute_boundaries(addr, prefix)?;
    println!("{}/{}", addr, prefix);
    match crate::address::classify(addr) {
        Some(info) => println!("  special-use:      {} ({})", info.category, info.description),
        None => println!("  special-use:      none"),
    }
    match boundaries.kind {
        SubnetKind::Host => println!("  host interface:   {}", addr),
        SubnetKind::PointToPoint => {
            println!("  first address:    {}", boundaries.first_usable);
            println!("  last address:     {}", boundaries.last_usable);
        }
        SubnetKind::Subnet => {
            println!("  network:          {}", boundaries.network);
            println!("  broadcast:        {}", boundaries.broadcast);
            println!("  first usable:     {}", boundaries.first_usable);
            println!("  last usable:      {}", boundaries.last_usable);
        }
    }
    println!("  usable hosts:     {}", boundaries.usable_hosts());
    Ok(())
}

fn notify_success(msg: &str) {
    println!("\n✔ {}", msg);
}

fn notify_error(msg: &str) {
    println!("\n✘ {}", msg);
}

/// Terminal front end driving a [`Session`] from stdin and a wall clock.
pub struct CliGame<'a> {
    session: &'a mut Session,
    counter: SubnetCounter,
    answer: CalculationAnswer,
    field_index: usize,
}

/// What the input handler wants the loop to do next.
enum Flow {
    Continue,
    /// A new round (or restart) began; re-arm the clock.
    NewRound,
    Quit,
}

impl<'a> CliGame<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        let counter = session.counter();
        Self {
            session,
            counter,
            answer: CalculationAnswer::default(),
            field_index: 0,
        }
    }

    /// Run until the player quits or stdin closes.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        let mut clock = interval(Duration::from_millis(TICK_MS));
        clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut spinner = interval(Duration::from_millis(COUNTER_STEP_MS));
        spinner.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // both intervals fire immediately on first poll
        clock.tick().await;
        spinner.tick().await;

        self.enter_round();
        loop {
            let running = self.session.phase() != Phase::GameOver;
            let selecting = self.session.phase() == Phase::Selection;
            tokio::select! {
                _ = clock.tick(), if running => {
                    if self.on_tick() {
                        clock.reset();
                    }
                }
                _ = spinner.tick(), if selecting => {
                    self.counter.advance();
                    print_counter(&self.counter, self.session.time_remaining());
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        println!();
                        break;
                    };
                    match self.on_line(&line) {
                        Flow::Continue => {}
                        Flow::NewRound => clock.reset(),
                        Flow::Quit => break,
                    }
                }
            }
        }
        Ok(())
    }

    fn enter_round(&mut self) {
        self.counter = self.session.counter();
        self.answer = CalculationAnswer::default();
        self.field_index = 0;
        print_round(&self.session.state());
    }

    /// Returns `true` when the tick started a new round.
    fn on_tick(&mut self) -> bool {
        match self.session.tick() {
            TickOutcome::Stopped => false,
            TickOutcome::Running(left) => {
                if self.session.phase() != Phase::Selection && CLOCK_REMINDERS.contains(&left) {
                    println!("\n  {} left", format_time(left));
                    self.reprompt();
                }
                false
            }
            TickOutcome::TimedOut => {
                notify_error("Time's up! You lost a life.");
                self.enter_round();
                true
            }
            TickOutcome::GameOver => {
                notify_error("Time's up!");
                print_game_over(self.session);
                false
            }
        }
    }

    /// Handle one line of input. Answer fields get the line as typed.
    fn on_line(&mut self, raw: &str) -> Flow {
        let line = raw.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return Flow::Quit;
        }
        match self.session.phase() {
            Phase::Selection => {
                self.session.select_subnet_mask(self.counter.current());
                println!();
                self.reprompt();
                Flow::Continue
            }
            Phase::SpecialAddress => {
                let Some(selection) = line.chars().next().and_then(PlayerSelection::from_key) else {
                    println!("  Press R, M or E, then Enter.");
                    return Flow::Continue;
                };
                let correct = grade_special(selection, self.session.special_address_info());
                self.finish_answer(correct, None)
            }
            Phase::Calculation => self.on_field(raw),
            Phase::GameOver => {
                if line.eq_ignore_ascii_case("y") || line.eq_ignore_ascii_case("yes") {
                    self.session.restart();
                    self.enter_round();
                    Flow::NewRound
                } else {
                    Flow::Quit
                }
            }
        }
    }

    fn on_field(&mut self, line: &str) -> Flow {
        let prefix = self.session.subnet_mask();
        let fields = CalculationAnswer::required_fields(prefix);
        if let Some(&field) = fields.get(self.field_index) {
            *self.answer.field_mut(field) = line.to_string();
            self.field_index += 1;
        }
        if self.field_index < fields.len() {
            self.reprompt();
            return Flow::Continue;
        }
        let Some(addr) = self.session.current_address() else {
            return Flow::Continue;
        };
        match grade_calculation(&self.answer, addr, prefix) {
            Ok(correct) => self.finish_answer(correct, None),
            Err(e) => self.finish_answer(false, Some(e.to_string())),
        }
    }

    fn finish_answer(&mut self, correct: bool, reason: Option<String>) -> Flow {
        let round = self.session.round();
        self.session.register_outcome(correct);
        if correct {
            notify_success("Correct! On to the next round.");
        } else {
            match reason {
                Some(reason) => notify_error(&format!("Invalid answer ({}). You lost a life.", reason)),
                None => notify_error("Incorrect. You lost a life."),
            }
        }
        if self.session.phase() == Phase::GameOver {
            print_game_over(self.session);
            Flow::Continue
        } else if self.session.round() != round {
            self.enter_round();
            Flow::NewRound
        } else {
            // same round, fresh form
            self.answer = CalculationAnswer::default();
            self.field_index = 0;
            self.reprompt();
            Flow::Continue
        }
    }

    fn reprompt(&self) {
        match self.session.phase() {
            Phase::Selection => print_counter(&self.counter, self.session.time_remaining()),
            Phase::SpecialAddress => print_special_prompt(self.session),
            Phase::Calculation => {
                let prefix = self.session.subnet_mask();
                let fields = CalculationAnswer::required_fields(prefix);
                if let (Some(addr), Some(&field)) =
                    (self.session.current_address(), fields.get(self.field_index))
                {
                    print_field_prompt(addr, prefix, field, self.field_index == 0);
                }
            }
            Phase::GameOver => {}
        }
    }
}
