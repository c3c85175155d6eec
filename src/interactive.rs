//! Line-editor front end for driving a list by hand.

use crate::linked_list::LinkedList;
use crate::session::Session;
use log::info;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

/// Runs the line editor until `q`, Ctrl-C or Ctrl-D.
///
/// History is kept in memory for the lifetime of the editor only.
pub fn run_editor(list: &mut LinkedList) -> Result<(), ReadlineError> {
    let mut session = Session::new();

    // Configure and initialize rustyline
    let config = Config::builder()
        .history_ignore_dups(true)
        .history_ignore_space(true)
        .build();
    let mut rl = Editor::<()>::with_config(config)?;

    info!("interactive editor started; type 'help' for commands");

    loop {
        match rl.readline(&session.prompt()) {
            Ok(input) => {
                if !input.trim().is_empty() {
                    rl.add_history_entry(input.as_str());
                }
                match session.handle_line(list, &input) {
                    Ok(Some(output)) => println!("{}", output),
                    Ok(None) => {}
                    Err(err) => eprintln!("error: {}", err),
                }
                if session.should_quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("\nExiting editor...");
                break;
            }
            Err(err) => return Err(err),
        }
    }

    info!(
        "editor closed after {} commands",
        session.commands_handled
    );
    Ok(())
}
