//! Line-driven stand-in for the board UI.
//!
//! Commands:
//!   scenario <case1|case2|case3|case4>
//!   open <x> <y>          toggle a cell between opened and closed
//!   found <object> <n>    object is 1-based, n is clamped to [0, total]
//!   show
//!   quit
use std::io::{self, BufRead, Write};

use cover_odds::prelude::*;
use cover_odds_examples::{init_tracing, render_evaluation_to_text};
use tracing::warn;

fn print_state(session: &Session) {
    println!("scenario {} ({})", session.scenario(), session.scenario().label());
    for (i, object) in session.objects().iter().enumerate() {
        println!(
            "  object {}: {}x{}, found {}/{}",
            i + 1,
            object.width(),
            object.height(),
            object.found(),
            object.total_count()
        );
    }
    print!("{}", render_evaluation_to_text(&session.evaluate(), session.opened()));
}

fn parse_u32(arg: Option<&str>, what: &str) -> anyhow::Result<u32> {
    let raw = arg.ok_or_else(|| anyhow::anyhow!("missing {what}"))?;
    Ok(raw.parse()?)
}

fn apply(session: &mut Session, line: &str) -> anyhow::Result<bool> {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("scenario") => {
            let id: ScenarioId = parts
                .next()
                .ok_or_else(|| anyhow::anyhow!("missing scenario id"))?
                .parse()?;
            session.select_scenario(id);
        }
        Some("open") => {
            let x = parse_u32(parts.next(), "x")?;
            let y = parse_u32(parts.next(), "y")?;
            session.toggle_cell(Cell::new(x, y))?;
        }
        Some("found") => {
            let object = parse_u32(parts.next(), "object number")? as usize;
            let index = object
                .checked_sub(1)
                .ok_or_else(|| anyhow::anyhow!("object numbers start at 1"))?;
            let raw = parts.next().ok_or_else(|| anyhow::anyhow!("missing count"))?;
            let count: i64 = raw.parse()?;
            session.set_found(index, count)?;
        }
        Some("show") | None => {}
        Some("quit") | Some("exit") => return Ok(false),
        Some(other) => anyhow::bail!("unknown command '{other}'"),
    }
    Ok(true)
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mut session = Session::default();
    print_state(&session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match apply(&mut session, line.trim()) {
            Ok(true) => print_state(&session),
            Ok(false) => break,
            Err(err) => warn!("{err}"),
        }
    }

    Ok(())
}
