use crate::cli::opts::*;
use crate::tui::app::TuiApp;

use anyhow::{Context, Result};
use flashgen_core::{parse_with, Flashcard, ParseOptions, Session};
use std::io::{self, BufRead, Read, Write};
use std::path::Path;

pub fn run_cli(args: Cli) -> Result<()> {
    let opts = args.parse_options();
    match args.cmd {
        Command::Parse(cmd) => parse_cmd(cmd, &opts),
        Command::Study(src) => study_cmd(src, &opts),
        Command::Tui(src) => {
            let text = match src.input.as_deref() {
                Some(p) => read_input(Some(p))?,
                None => String::new(),
            };
            let mut app = TuiApp::new(text, opts);
            app.run()
        }
    }
}

/// `None` or `-` reads stdin.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        _ => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s).context("reading stdin")?;
            Ok(s)
        }
    }
}

fn parse_cmd(cmd: ParseCmd, opts: &ParseOptions) -> Result<()> {
    let text = read_input(cmd.source.input.as_deref())?;
    let cards = parse_with(&text, opts);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_cards(&cards, cmd.format, &mut out)?;
    out.flush()?;
    eprintln!("{} card(s)", cards.len());
    Ok(())
}

pub fn write_cards<W: Write>(cards: &[Flashcard], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Tsv => {
            let ambiguous = cards.iter().filter(|c| !tsv_safe(c)).count();
            if ambiguous > 0 {
                tracing::warn!(
                    ambiguous,
                    "cards with a comma or tab inside a side will not re-parse from tsv; use --format csv or json"
                );
            }
            for c in cards {
                writeln!(out, "{}\t{}", c.front, c.back)?;
            }
        }
        OutputFormat::Csv => {
            let mut wtr = csv::WriterBuilder::new()
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(&mut *out);
            if cards.is_empty() {
                wtr.write_record(["front", "back"])?;
            }
            for c in cards {
                wtr.serialize(c)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, cards)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// A TSV row re-parses to the same card only if neither side holds a delimiter.
pub fn tsv_safe(card: &Flashcard) -> bool {
    let clean = |s: &str| !s.contains(|c: char| matches!(c, ',' | '\t' | '\n'));
    clean(&card.front) && clean(&card.back)
}

fn study_cmd(src: InputArg, opts: &ParseOptions) -> Result<()> {
    let text = read_input(src.input.as_deref())?;
    let mut session = Session::new();
    session.generate_with(&text, opts);
    if session.is_empty() {
        println!("no cards");
        return Ok(());
    }
    // Cards came from stdin, so prompts must come from the terminal.
    let from_stdin = src.input.as_deref().map_or(true, |p| p == Path::new("-"));
    if from_stdin {
        let tty = std::fs::File::open(tty_path()).context("opening terminal for study prompts")?;
        study_loop(&mut session, io::BufReader::new(tty), io::stdout().lock())
    } else {
        study_loop(&mut session, io::stdin().lock(), io::stdout().lock())
    }
}

#[cfg(windows)]
fn tty_path() -> &'static str {
    "CONIN$"
}

#[cfg(not(windows))]
fn tty_path() -> &'static str {
    "/dev/tty"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyInput {
    Flip,
    Next,
    Previous,
    Quit,
    Unknown,
}

pub fn parse_study_input(line: &str) -> StudyInput {
    match line.trim().to_lowercase().as_str() {
        "" | "f" | "flip" => StudyInput::Flip,
        "n" | "next" => StudyInput::Next,
        "p" | "prev" | "previous" => StudyInput::Previous,
        "q" | "quit" => StudyInput::Quit,
        _ => StudyInput::Unknown,
    }
}

/// Runs until `q` or end of input.
pub fn study_loop<R: BufRead, W: Write>(session: &mut Session, mut input: R, mut out: W) -> Result<()> {
    let mut line = String::new();
    loop {
        let view = session.current_card()?;
        writeln!(
            out,
            "\n[{}/{}] {}: {}",
            view.position,
            view.total,
            view.side().label(),
            view.visible_text()
        )?;
        write!(out, "[enter/f=flip, n=next, p=prev, q=quit]> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        match parse_study_input(&line) {
            StudyInput::Flip => session.toggle_flip(),
            StudyInput::Next => session.next(),
            StudyInput::Previous => session.previous(),
            StudyInput::Quit => return Ok(()),
            StudyInput::Unknown => writeln!(out, "enter f, n, p, or q")?,
        }
    }
}
