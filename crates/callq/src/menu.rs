//! Interactive menu loop
//!
//! Written against `BufRead`/`Write` handles rather than stdin/stdout
//! directly so a scripted session can drive it in tests.

use std::io::{BufRead, Write};

use anyhow::Result;
use callq_core::{CallCenter, CallRecord};

const DIVIDER: &str = "==========================";

/// Run the menu loop until the user quits or input reaches EOF.
///
/// Consumes the call center; quitting shuts it down and prints the
/// farewell line.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run(input: &mut impl BufRead, output: &mut impl Write, mut center: CallCenter) -> Result<()> {
    loop {
        print_menu(output)?;

        let Some(line) = read_line(input)? else {
            break; // EOF behaves like Quit
        };
        writeln!(output)?;

        match line.trim().parse::<u32>() {
            Ok(1) => receive_call(input, output, &mut center)?,
            Ok(2) => answer_call(output, &mut center)?,
            Ok(3) => show_answered(output, &center)?,
            Ok(4) => show_pending(output, &center)?,
            Ok(5) => break,
            // Anything else reprints the menu
            _ => {}
        }
    }

    center.shutdown();
    writeln!(output, "Have a good day!")?;
    Ok(())
}

fn print_menu(output: &mut impl Write) -> Result<()> {
    writeln!(output, "---Welcome Back To Work---")?;
    writeln!(output, "1. Receive a new call")?;
    writeln!(output, "2. Answer a call")?;
    writeln!(output, "3. Current state of the stack - answered calls")?;
    writeln!(output, "4. Current state of the queue - calls to be answered")?;
    writeln!(output, "5. Quit")?;
    write!(output, "Your Choice: ")?;
    output.flush()?;
    Ok(())
}

/// Read one line, without its trailing newline. `None` means EOF.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;
    read_line(input)
}

fn receive_call(
    input: &mut impl BufRead,
    output: &mut impl Write,
    center: &mut CallCenter,
) -> Result<()> {
    let Some(name) = prompt_line(input, output, "Enter Caller's Name: ")? else {
        return Ok(());
    };
    let Some(reason) = prompt_line(input, output, "Enter Call Reason: ")? else {
        return Ok(());
    };
    writeln!(output)?;

    match center.receive_call(&name, &reason) {
        Ok(record) => {
            writeln!(
                output,
                "Call {} from {} added to the queue.",
                record.id, record.caller_name
            )?;
        }
        Err(err) => writeln!(output, "{err}")?,
    }
    writeln!(output)?;
    Ok(())
}

fn answer_call(output: &mut impl Write, center: &mut CallCenter) -> Result<()> {
    match center.answer_call() {
        Ok(record) => {
            writeln!(
                output,
                "The following call has been answered and added to the stack!"
            )?;
            writeln!(output)?;
            print_record(output, record)?;
        }
        Err(err) => writeln!(output, "{err}")?,
    }
    writeln!(output)?;
    Ok(())
}

fn show_answered(output: &mut impl Write, center: &CallCenter) -> Result<()> {
    match center.peek_last_answered() {
        Ok(record) => {
            writeln!(
                output,
                "Number of calls answered: {}",
                center.answered_count()
            )?;
            writeln!(output, "Details of the last call answered")?;
            writeln!(output)?;
            print_record(output, record)?;
        }
        Err(err) => writeln!(output, "{err}")?,
    }
    writeln!(output)?;
    Ok(())
}

fn show_pending(output: &mut impl Write, center: &CallCenter) -> Result<()> {
    writeln!(
        output,
        "Number of calls to be answered: {}",
        center.pending_count()
    )?;

    if let Some(record) = center.peek_next_pending() {
        writeln!(output, "Details of the first call to be answered")?;
        writeln!(output)?;
        print_record(output, record)?;
    }
    writeln!(output)?;
    Ok(())
}

fn print_record(output: &mut impl Write, record: &CallRecord) -> Result<()> {
    writeln!(output, "{DIVIDER}")?;
    writeln!(output, "Call ID: {}", record.id)?;
    writeln!(output, "Caller's Name: {}", record.caller_name)?;
    writeln!(output, "Call Reason: {}", record.reason)?;
    writeln!(
        output,
        "Received: {}",
        record.received_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(output, "{DIVIDER}")?;
    Ok(())
}
