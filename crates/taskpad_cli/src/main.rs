//! Interactive command-line front-end for `taskpad_core`.
//!
//! # Responsibility
//! - Wire user commands to the task service.
//! - Confirm destructive actions before forwarding them.
//! - Re-render the listing and counters after every mutation.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use taskpad_core::db::open_db;
use taskpad_core::{
    core_version, default_log_level, init_logging, SearchQuery, SqliteTaskStorage, Task,
    TaskCounts, TaskFilter, TaskService, Theme,
};

const DEFAULT_DB_FILE: &str = "taskpad.db";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    // Optional file logging; the CLI stays usable without it.
    if let Ok(log_dir) = std::env::var("TASKPAD_LOG_DIR") {
        if let Err(message) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {message}");
        }
    }

    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DB_FILE.to_string());
    let conn = open_db(&db_path)?;

    let prefs = SqliteTaskStorage::new(&conn);
    let mut theme = prefs.load_theme().unwrap_or_default();

    let mut service = TaskService::new(SqliteTaskStorage::new(&conn));
    service.hydrate();

    let mut filter = TaskFilter::All;
    let mut visible = service.list_filtered(filter);

    println!("taskpad {} (type `help` for commands)", core_version());
    render(&visible, service.counts(), filter, theme);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = split_command(input);
        match command {
            "add" => match service.create_task(rest) {
                Ok(_) => {
                    visible = service.list_filtered(filter);
                    render(&visible, service.counts(), filter, theme);
                }
                Err(err) => println!("{err}"),
            },
            "list" => {
                visible = service.list_filtered(filter);
                render(&visible, service.counts(), filter, theme);
            }
            "filter" => {
                filter = TaskFilter::from_text(rest);
                visible = service.list_filtered(filter);
                render(&visible, service.counts(), filter, theme);
            }
            "search" => {
                visible = service.search(&SearchQuery {
                    text: rest.to_string(),
                    filter,
                });
                render(&visible, service.counts(), filter, theme);
            }
            "done" | "toggle" => match position_of(&visible, rest) {
                Some(id) => match service.toggle_task(id) {
                    Ok(_) => {
                        visible = service.list_filtered(filter);
                        render(&visible, service.counts(), filter, theme);
                    }
                    Err(err) => println!("{err}"),
                },
                None => println!("no task at position `{rest}`"),
            },
            "edit" => {
                let (index_text, new_title) = split_command(rest);
                match position_of(&visible, index_text) {
                    Some(id) => match service.rename_task(id, new_title) {
                        Ok(_) => {
                            visible = service.list_filtered(filter);
                            render(&visible, service.counts(), filter, theme);
                        }
                        Err(err) => println!("{err}"),
                    },
                    None => println!("no task at position `{index_text}`"),
                }
            }
            "rm" | "delete" => {
                let target = find_at(&visible, rest).map(|task| (task.id, task.title.clone()));
                match target {
                    Some((id, title)) => {
                        if confirm(&format!("delete \"{title}\"? [y/N] "), &mut lines)? {
                            match service.delete_task(id) {
                                Ok(()) => {
                                    visible = service.list_filtered(filter);
                                    render(&visible, service.counts(), filter, theme);
                                }
                                Err(err) => println!("{err}"),
                            }
                        }
                    }
                    None => println!("no task at position `{rest}`"),
                }
            }
            "clear" => {
                if confirm("delete ALL tasks? [y/N] ", &mut lines)? {
                    service.clear_tasks();
                    visible = service.list_filtered(filter);
                    render(&visible, service.counts(), filter, theme);
                }
            }
            "theme" => {
                theme = theme.toggle();
                prefs.save_theme(theme);
                println!("theme: {}", theme.as_str());
            }
            "counts" => {
                let counts = service.counts();
                println!("active={} completed={}", counts.active, counts.completed);
            }
            "version" => println!("taskpad {}", core_version()),
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command `{other}`; type `help`"),
        }
    }

    Ok(())
}

fn render(tasks: &[Task], counts: TaskCounts, filter: TaskFilter, theme: Theme) {
    if tasks.is_empty() {
        println!("  (no tasks in the {} view)", filter.as_str());
    }
    for (position, task) in tasks.iter().enumerate() {
        let mark = if task.completed { "x" } else { " " };
        println!("{:>3}. [{mark}] {}", position + 1, task.title);
    }
    println!(
        "  {} active / {} completed / theme {}",
        counts.active,
        counts.completed,
        theme.as_str()
    );
}

fn print_help() {
    println!(
        "commands:
  add <title>          create a task
  list                 show tasks for the current filter
  filter <all|active|completed>
  search <text>        title search within the current filter
  done <n>             toggle completion of the n-th listed task
  edit <n> <title>     rename the n-th listed task
  rm <n>               delete the n-th listed task (asks first)
  clear                delete all tasks (asks first)
  theme                toggle light/dark preference
  counts               show active/completed tallies
  version | help | quit"
    );
}

/// Splits `input` into its first whitespace-delimited token and the
/// trimmed remainder.
fn split_command(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (input, ""),
    }
}

/// Resolves a 1-based position in the last rendered listing.
fn find_at<'a>(visible: &'a [Task], text: &str) -> Option<&'a Task> {
    let position: usize = text.trim().parse().ok()?;
    position.checked_sub(1).and_then(|index| visible.get(index))
}

fn position_of(visible: &[Task], text: &str) -> Option<taskpad_core::TaskId> {
    find_at(visible, text).map(|task| task.id)
}

fn confirm(
    prompt: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().eq_ignore_ascii_case("y")),
        None => Ok(false),
    }
}
