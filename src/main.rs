mod grid;
mod theme;
mod weeks;
use crate::grid::{LifeGrid, DEFAULT_LIFESPAN_YEARS};
use crate::weeks::weeks_lived;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use std::io::{self, BufRead, Write};
use time::{
    format_description::BorrowedFormatItem, macros::format_description, Date, OffsetDateTime,
};

static YMD_FMT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

const OUTPUT_FILENAME: &str = "life_in_weeks.png";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run { birthdate: Option<Date> },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut birthdate = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Value(value) if birthdate.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => birthdate = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { birthdate })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { birthdate } => {
                let birthdate = match birthdate {
                    Some(date) => date,
                    None => prompt_birthdate()?,
                };
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let lived_weeks = weeks_lived(birthdate, today)?;
                let grid = LifeGrid::new(lived_weeks);
                if grid.is_saturated() {
                    eprintln!(
                        "Note: {lived_weeks} weeks is more than a {DEFAULT_LIFESPAN_YEARS}-year lifespan; every cell of the calendar will be filled"
                    );
                }
                grid.render()
                    .save(OUTPUT_FILENAME)
                    .with_context(|| format!("failed to write {OUTPUT_FILENAME}"))?;
                open::that(OUTPUT_FILENAME)
                    .with_context(|| format!("failed to open {OUTPUT_FILENAME} in a viewer"))?;
                Ok(())
            }
            Command::Help => {
                println!("Usage: lifeweeks [YYYY-MM-DD]");
                println!();
                println!("Draw a \"life in weeks\" calendar for the given birthdate");
                println!();
                println!("If no birthdate is given on the command line, one is read from standard");
                println!("input.  The calendar is saved to {OUTPUT_FILENAME} in the current");
                println!("directory and opened in the default image viewer.");
                println!();
                println!("Options:");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn prompt_birthdate() -> anyhow::Result<Date> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter your birthdate (YYYY-MM-DD): ").context("failed to write prompt")?;
    stdout.flush().context("failed to flush prompt")?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read birthdate from standard input")?;
    let entry = line.trim();
    Date::parse(entry, &YMD_FMT).with_context(|| format!("{entry:?} is not a YYYY-MM-DD date"))
}
