use clap::Parser;
use lineval::evaluate;
use rustyline::{DefaultEditor, error::ReadlineError};

/// lineval is a small interactive calculator for plain arithmetic:
/// `+`, `-`, `*`, `/` and parentheses over integer literals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate this expression and exit instead of starting the prompt.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        match evaluate(&expression) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = prompt_loop() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Runs the interactive prompt until the user leaves with Ctrl-C or Ctrl-D.
///
/// The line editor puts the terminal into raw mode, echoes each keystroke as
/// it is typed, and restores the previous terminal state on every exit path.
/// Each entered line is evaluated on its own; a failed line prints its
/// diagnosis and the prompt continues with the next one.
fn prompt_loop() -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(line.as_str())?;
                match evaluate(&line) {
                    Ok(value) => println!("{value}"),
                    Err(e) => eprintln!("{e}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
