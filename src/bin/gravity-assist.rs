// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use clap::Parser;
use gravity_assist::parse::load_program;
use gravity_assist::prelude::*;
use gravity_assist::search::{AnswerOverflow, SearchExhausted};
use std::error::Error;
use std::fmt::{self, Debug, Display};
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));
const INPUT_HELP: &str =
    "File containing comma-separated intcode\ndefaults to input.txt in the working directory";

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "Restore the gravity assist program", long_about = None)]
struct Args {
    #[arg(help = INPUT_HELP.split_once('\n').map_or(INPUT_HELP, |(short, _)| short))]
    #[arg(long_help = INPUT_HELP)]
    #[arg(default_value = "input.txt")]
    input: PathBuf,
}

fn main() -> Result<(), DisplayedError> {
    env_logger::init();
    let args = Args::parse();

    let program = Memory::from(load_program(&args.input)?);

    let first = Interpreter::new(program.clone()).run_with(12, 2)?;
    println!("First Half - Value at 0: {first}");

    let space = SearchSpace::default();
    let found = par_search(&program, &space).ok_or_else(|| SearchExhausted(space))?;
    let answer = found.answer().ok_or(AnswerOverflow(found))?;
    println!("Second Half - Result is: {answer}");

    Ok(())
}

/// a wrapper around a [`Box`ed][Box] [dyn Error][Error] that uses its implementation of [Display]
/// for the [Debug] impl, to display the Error if returned from `main`
struct DisplayedError(Box<dyn Error>);
impl<E: Error + 'static> From<E> for DisplayedError {
    fn from(e: E) -> Self {
        Self(Box::from(e))
    }
}

impl Debug for DisplayedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
