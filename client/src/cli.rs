use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, bail};
use libgame::{
    Game,
    config::LifeConfig,
    intent::{Flow, Intent},
};

/// Headless mode: one command per stdin line, same loop order as the window
/// (commands first, then any requested frames).
pub fn run_cli(mut game: Game, config: &LifeConfig) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line_res in stdin.lock().lines() {
        let line = line_res.context("Reading stdin")?;
        let args = line.split_whitespace();

        match handle_cmd(&mut game, config, args, &mut stdout) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => writeln!(stdout, "OK")?,
            Err(e) => writeln!(stdout, "! {e:#}")?,
        }

        stdout.flush()?;
    }

    Ok(())
}

fn handle_cmd<'a, I, W>(
    game: &mut Game,
    config: &LifeConfig,
    mut args: I,
    out: &mut W,
) -> anyhow::Result<Flow>
where
    I: Iterator<Item = &'a str>,
    W: Write,
{
    let intent = match args.next().context("No command")? {
        "step" => {
            if game.is_playing() {
                bail!("Pause before stepping manually");
            }

            let times = args.next().unwrap_or("1").parse::<usize>()?;
            for _ in 0..times {
                game.apply(Intent::StepOnce)?;
            }
            return Ok(Flow::Continue);
        }

        "tick" => {
            let frames = args.next().unwrap_or("1").parse::<usize>()?;
            let steps = (0..frames).filter(|_| game.frame()).count();
            writeln!(out, "{steps} steps")?;
            return Ok(Flow::Continue);
        }

        "play" => {
            if game.is_playing() {
                return Ok(Flow::Continue);
            }
            Intent::TogglePlay
        }

        "pause" => {
            if !game.is_playing() {
                return Ok(Flow::Continue);
            }
            Intent::TogglePlay
        }

        "tempo" => {
            let delta = args.next().context("missing tempo delta")?.parse::<i64>()?;
            Intent::AdjustTempo(delta)
        }

        "toggle" => {
            if game.is_playing() {
                bail!("Pause before editing");
            }

            let x = args.next().context("missing x")?.parse::<usize>()?;
            let y = args.next().context("missing y")?.parse::<usize>()?;

            let index = game
                .board
                .index_of([x, y])
                .with_context(|| format!("{x},{y} is outside the board"))?;
            game.board.toggle_cell_at(index);
            return Ok(Flow::Continue);
        }

        "random" => {
            let alive_count = args
                .next()
                .context("missing alive count")?
                .parse::<usize>()?;

            if alive_count > game.board.len() {
                bail!("Board only has {} cells", game.board.len());
            }

            game.board.randomize(alive_count);
            return Ok(Flow::Continue);
        }

        "reset" | "clear" => Intent::Reset,

        "save" => Intent::Save(path_arg(args.next(), config)),
        "load" => Intent::Load(path_arg(args.next(), config)),

        "show" => {
            write_board(game, out)?;
            return Ok(Flow::Continue);
        }

        "status" => {
            writeln!(out, "{} -- alive: {}", game.title(), game.board.alive_count())?;
            return Ok(Flow::Continue);
        }

        "exit" | "quit" => Intent::Quit,

        _ => bail!("Unknown command"),
    };

    Ok(game.apply(intent)?)
}

fn path_arg(arg: Option<&str>, config: &LifeConfig) -> PathBuf {
    arg.map(PathBuf::from)
        .unwrap_or_else(|| config.save_path.clone())
}

fn write_board<W>(game: &Game, out: &mut W) -> io::Result<()>
where
    W: Write,
{
    let flags = game.board.serialize_alive_flags();

    for row in flags.chunks(game.board.width()) {
        let line: String = row.iter().map(|alive| if *alive { '#' } else { '.' }).collect();
        writeln!(out, "{line}")?;
    }

    Ok(())
}
