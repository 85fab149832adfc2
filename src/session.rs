//! Interactive and one-shot front ends over [`Calculator`].
//!
//! Generic over reader and writer so the loop can be driven from tests.

use crate::calculator::Calculator;
use crate::lookup::{GeoLocator, HostResolver};
use crate::output::terminal::{clear_screen, error, header, prompt};
use crate::output::{write_report, write_report_json};
use colored::Colorize;
use std::io::{self, BufRead, Write};

pub const INPUT_PROMPT: &str = "Enter an IPv4 address with CIDR: ";
pub const AGAIN_PROMPT: &str = "Run again? (y/n): ";
pub const GOODBYE: &str = "Goodbye!";

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Clear the screen before each round.
    pub clear_screen: bool,
    /// Render reports as JSON instead of labeled lines.
    pub json: bool,
}

/// Evaluate `input` and write either the report or a single error line.
///
/// Returns `Ok(false)` when the input did not parse.
pub async fn run_once<H, G, W>(
    calc: &Calculator<H, G>,
    input: &str,
    out: &mut W,
    options: &SessionOptions,
) -> io::Result<bool>
where
    H: HostResolver,
    G: GeoLocator,
    W: Write,
{
    match calc.evaluate(input).await {
        Ok(report) => {
            log::debug!("Rendering report for {}", report.address());
            if options.json {
                write_report_json(out, &report)?;
            } else {
                write_report(out, &report)?;
            }
            Ok(true)
        }
        Err(e) => {
            log::warn!("Rejected input {input:?}: {e}");
            writeln!(out, "{}", error(&e.to_string()))?;
            Ok(false)
        }
    }
}

/// Prompt, evaluate, render and offer another round until the user declines
/// or input ends. Returns the number of evaluated inputs.
pub async fn run_interactive<H, G, R, W>(
    calc: &Calculator<H, G>,
    mut input: R,
    out: &mut W,
    options: &SessionOptions,
) -> io::Result<usize>
where
    H: HostResolver,
    G: GeoLocator,
    R: BufRead,
    W: Write,
{
    let mut rounds = 0;
    loop {
        if options.clear_screen {
            clear_screen(out)?;
        }
        writeln!(out, "{}", header())?;
        write!(out, "{}", prompt(INPUT_PROMPT))?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            writeln!(out, "{}", GOODBYE.bright_green())?;
            break;
        }
        rounds += 1;
        run_once(calc, line.trim(), out, options).await?;

        write!(out, "\n{}", AGAIN_PROMPT.bright_yellow())?;
        out.flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            writeln!(out, "{}", GOODBYE.bright_green())?;
            break;
        }
    }
    log::info!("Interactive session ended after {rounds} round(s)");
    Ok(rounds)
}
