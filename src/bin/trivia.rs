//! Terminal front-end.
//!
//! Space starts a session, 1-4 pick an option, Escape or `q` quits.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use dialoguer::console::{Key as TermKey, Term};

use type_trivia::{Command, Key, Mode, QuizConfig, Session, SessionView, Swatch};

#[derive(Parser, Debug)]
#[command(name = "trivia", about = "Pick the type that beats the foe")]
struct Args {
    /// Seed for reproducible rounds.
    #[arg(long)]
    seed: Option<u64>,

    /// Guesses per session.
    #[arg(long, default_value_t = type_trivia::DEFAULT_ROUNDS, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let mut config = QuizConfig::new().with_rounds(args.rounds);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut session = Session::new(&config);
    log::info!("seed {}", session.seed());

    let term = Term::stdout();
    let _cursor = HiddenCursor::new(&term)?;
    run(&term, &mut session)
}

/// Hides the cursor until dropped.
struct HiddenCursor<'a> {
    term: &'a Term,
}

impl<'a> HiddenCursor<'a> {
    fn new(term: &'a Term) -> Result<Self> {
        term.hide_cursor().context("hiding cursor")?;
        Ok(Self { term })
    }
}

impl Drop for HiddenCursor<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.term.show_cursor() {
            log::warn!("failed to restore cursor: {e}");
        }
    }
}

fn run(term: &Term, session: &mut Session) -> Result<()> {
    loop {
        render(term, &session.view())?;
        let key = match term.read_key().context("reading key")? {
            TermKey::Char('q') | TermKey::Escape => Key::Escape,
            TermKey::Char(c) => Key::from(c),
            _ => Key::Other,
        };
        match Command::from_key(session.mode(), key) {
            Some(Command::Quit) => return Ok(()),
            Some(command) => {
                session.apply(command);
            }
            None => {}
        }
    }
}

fn paint(swatch: &Swatch) -> colored::ColoredString {
    let (r, g, b) = swatch.category.rgb();
    swatch.label.truecolor(r, g, b).bold()
}

fn render(term: &Term, view: &SessionView) -> Result<()> {
    term.clear_screen().context("clearing screen")?;
    match view.mode {
        Mode::Pending => {
            term.write_line(&format!("\n  {}\n", "Press 'Space' to start".bold()))?;
        }
        Mode::Playing => {
            term.write_line(&format!("\n  {}\n", paint(&view.foe)))?;
            for (i, option) in view.options.iter().enumerate() {
                term.write_line(&format!("  [{}] {}", i + 1, paint(option)))?;
            }
            term.write_line("")?;
        }
    }
    term.write_line(&format!(
        "  Score: {}  Time: {}  Remaining: {}",
        view.score,
        view.finish_time_ms as f64 / 1000.0,
        view.remaining
    ))?;
    Ok(())
}
