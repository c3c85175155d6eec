mod linked_list;
mod node;
mod process_command;
mod session;
#[cfg(feature = "extensions")]
mod interactive;
#[cfg(feature = "extensions")]
mod visualize_list;

use clap::{ArgAction, Parser};
use linked_list::LinkedList;
use log::{LevelFilter, info};
use session::Session;
use std::io::{self, BufRead, Write};
use std::process;

/// Drive a singly linked list of integers.
#[derive(Parser, Debug)]
#[command(name = "sll", version, about)]
struct Args {
    /// Edit the list in an interactive line editor
    #[arg(short, long, conflicts_with = "stdin")]
    interactive: bool,

    /// Read commands from standard input, one per line
    #[arg(long)]
    stdin: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

// Builds the list 5 -> 10 -> 20 and prints it
fn run_demo() {
    info!("running demonstration sequence");
    let mut list = LinkedList::new();
    list.add(10); // 10 -> nil
    list.add(20); // 10 -> 20 -> nil
    list.prepend(5); // 5 -> 10 -> 20 -> nil
    list.display(); // Output: 5 -> 10 -> 20 -> nil
}

// Plain prompt loop over any line source
fn run_command_loop<R: BufRead, W: Write>(
    list: &mut LinkedList,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    let mut session = Session::new();
    let mut line = Vec::with_capacity(128);

    loop {
        write!(output, "{}", session.prompt())?;
        output.flush()?; // Ensure the prompt is shown

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break; // End of input
        }

        // Bytes that are not UTF-8 become U+FFFD and fail as an unknown command
        let decoded = String::from_utf8_lossy(&line);
        match session.handle_line(list, &decoded) {
            Ok(Some(text)) => writeln!(output, "{}", text)?,
            Ok(None) => {}
            Err(err) => eprintln!("error: {}", err),
        }
        if session.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(feature = "extensions")]
fn run_interactive(list: &mut LinkedList) {
    if let Err(err) = interactive::run_editor(list) {
        eprintln!("Failed to run the interactive editor: {}", err);
        process::exit(1);
    }
}

#[cfg(not(feature = "extensions"))]
fn run_interactive(_list: &mut LinkedList) {
    eprintln!("Interactive mode requires the 'extensions' feature; try --stdin");
    process::exit(1);
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.interactive {
        let mut list = LinkedList::new();
        run_interactive(&mut list);
    } else if args.stdin {
        info!("reading commands from stdin");
        let mut list = LinkedList::new();
        let stdin = io::stdin();
        let stdout = io::stdout();
        if let Err(err) = run_command_loop(&mut list, stdin.lock(), stdout.lock()) {
            eprintln!("I/O error: {}", err);
            process::exit(1);
        }
    } else {
        run_demo();
    }
}
