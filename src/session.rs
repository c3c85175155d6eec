// session.rs
use crate::linked_list::LinkedList;
use crate::process_command::{CommandError, process_command};
use std::time::Instant;

// Outcome of the most recent command, shown in the prompt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LastStatus {
    Ok,
    Error,
}

impl LastStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LastStatus::Ok => "ok",
            LastStatus::Error => "error",
        }
    }
}

// State shared by the interactive loops; line history lives in rustyline
pub struct Session {
    pub last_status: LastStatus,
    pub last_time: f64,
    pub should_quit: bool,
    pub commands_handled: usize,
}

impl Session {
    pub fn new() -> Self {
        Session {
            last_status: LastStatus::Ok,
            last_time: 0.0,
            should_quit: false,
            commands_handled: 0,
        }
    }

    // e.g. "[0.0] (ok) > "
    pub fn prompt(&self) -> String {
        format!("[{:.1}] ({}) > ", self.last_time, self.last_status.as_str())
    }

    /// Handles one line of user input against `list`.
    ///
    /// Blank lines are ignored and leave the status alone. `q` and `quit` set
    /// `should_quit`. Anything else goes through the command layer; the result
    /// decides the status shown in the next prompt.
    pub fn handle_line(
        &mut self,
        list: &mut LinkedList,
        line: &str,
    ) -> Result<Option<String>, CommandError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        self.commands_handled += 1;

        if trimmed == "q" || trimmed == "quit" {
            self.should_quit = true;
            return Ok(None);
        }

        let start = Instant::now();
        let result = process_command(list, trimmed);
        self.last_time = start.elapsed().as_secs_f64();
        self.last_status = match result {
            Ok(_) => LastStatus::Ok,
            Err(_) => LastStatus::Error,
        };
        result
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
