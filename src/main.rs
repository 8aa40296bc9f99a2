use std::io::{self, BufRead};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use mnk_core::Coord;
use mnk_match::{MatchConfig, MatchSession};
use tracing::{debug, info};

const TICK: Duration = Duration::from_millis(10);

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let config = MatchConfig::from_args(std::env::args().skip(1))?;
    let mut session = MatchSession::new(&config)?;
    info!("mnk starting");

    let input = spawn_stdin_reader();

    println!("{}", session.board().pretty());
    let mut prompted = false;
    let mut last = Instant::now();

    while session.outcome().is_none() {
        let now = Instant::now();
        if session.update(now - last)?.is_some()
            && let Some((player, mv)) = session.history().last()
        {
            println!("{player} plays {mv}");
            println!("{}", session.board().pretty());
        }
        last = now;

        if session.is_human_turn() && !prompted {
            let player = session.to_move();
            match session.clock() {
                Some(clock) => println!(
                    "{player} ({}) to move, {:.1}s left. Enter `row col`:",
                    player.symbol(),
                    clock.remaining(player).as_secs_f64()
                ),
                None => println!("{player} ({}) to move. Enter `row col`:", player.symbol()),
            }
            prompted = true;
        }

        match input.try_recv() {
            Ok(line) => {
                let line = line.trim();
                if line == "quit" {
                    info!("quit requested");
                    return Ok(());
                }
                if !session.is_human_turn() {
                    println!("not your turn");
                    continue;
                }
                match line.parse::<Coord>() {
                    Ok(coord) => match session.submit_move(coord) {
                        Ok(()) => {
                            println!("{}", session.board().pretty());
                            prompted = false;
                        }
                        Err(err) => println!("{err}"),
                    },
                    Err(err) => println!("{err}"),
                }
            }
            Err(TryRecvError::Empty) => thread::sleep(TICK),
            Err(TryRecvError::Disconnected) => {
                if session.is_human_turn() {
                    bail!("input closed before the game ended");
                }
                thread::sleep(TICK);
            }
        }
    }

    if let Some(outcome) = session.outcome() {
        println!("Game over: {outcome}");
    }
    Ok(())
}

/// Read stdin lines on a helper thread so the match keeps ticking.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            debug!(input = %line, "received line");
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
