//! Interactive session command implementation

use crate::terminal::{card, TerminalPresenter};
use anyhow::{Context, Result};
use bookshelf_core::{
    BookId, BookInput, Library, LibraryConfig, LibraryEvent, SessionContext, YearInput,
};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

const HELP: &str = "\
Commands:
  add <title> | <author> | <description> | <genre> | <year>
  select <id>      show the full description of a book
  deselect         clear the selection
  toggle <id>      mark a book read/unread
  remove <id>      remove a book
  delete           remove the selected book
  list             show the shelf, most recent first
  show             show the selected book
  recent           show recently added and viewed books
  clear            remove every book
  help             show this message
  quit             end the session";

/// One user interaction
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    Add(BookInput),
    Select(BookId),
    Deselect,
    Toggle(BookId),
    Remove(BookId),
    Delete,
    List,
    Show,
    Recent,
    Clear,
    Help,
    Quit,
}

/// Parse one line; blank lines and `#` comments yield `None`
pub fn parse_line(line: &str) -> std::result::Result<Option<Interaction>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let interaction = match command.to_lowercase().as_str() {
        "add" => Interaction::Add(parse_fields(rest)?),
        "select" => Interaction::Select(parse_id(command, rest)?),
        "deselect" => Interaction::Deselect,
        "toggle" => Interaction::Toggle(parse_id(command, rest)?),
        "remove" => Interaction::Remove(parse_id(command, rest)?),
        "delete" => Interaction::Delete,
        "list" => Interaction::List,
        "show" => Interaction::Show,
        "recent" => Interaction::Recent,
        "clear" => Interaction::Clear,
        "help" => Interaction::Help,
        "quit" | "exit" => Interaction::Quit,
        other => return Err(format!("unknown command '{}', try 'help'", other)),
    };
    Ok(Some(interaction))
}

fn parse_id(command: &str, rest: &str) -> std::result::Result<BookId, String> {
    rest.parse()
        .map_err(|_| format!("{} expects a book id, got '{}'", command, rest))
}

fn parse_fields(rest: &str) -> std::result::Result<BookInput, String> {
    let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
    match fields.as_slice() {
        [title, author, description, genre, year] => Ok(BookInput::new(
            title,
            author,
            description,
            genre,
            YearInput::from(*year),
        )),
        _ => Err(format!(
            "add expects 5 fields separated by '|', got {}",
            fields.len()
        )),
    }
}

/// Run a session reading interactions from `script` (or stdin)
pub fn session(config: LibraryConfig, script: Option<&Path>, seed: Option<&Path>) -> Result<()> {
    let context = SessionContext::new(config).context("Invalid library configuration")?;
    let mut library = Library::new(context, TerminalPresenter::new());
    library.subscribe(|event| match event {
        LibraryEvent::BookShelved { id, title } => tracing::info!("Shelved #{} '{}'", id, title),
        LibraryEvent::BookRemoved { id } => tracing::info!("Removed #{}", id),
        LibraryEvent::ShelfFull { capacity } => {
            tracing::warn!("Shelf is full at {} books", capacity)
        }
        _ => {}
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(seed) = seed {
        seed_library(&mut library, seed, &mut out)?;
    }

    match script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            run(&mut library, BufReader::new(file), &mut out)
        }
        None => run(&mut library, io::stdin().lock(), &mut out),
    }
}

/// Shelve every entry of a JSON array of book inputs
pub fn seed_library<W: Write>(
    library: &mut Library<TerminalPresenter>,
    path: &Path,
    out: &mut W,
) -> Result<usize> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
    let inputs: Vec<BookInput> = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse seed file: {}", path.display()))?;

    let mut shelved = 0;
    for (index, input) in inputs.into_iter().enumerate() {
        match library.submit(input) {
            Ok(_) => shelved += 1,
            Err(e) => {
                tracing::warn!("Seed entry {} skipped: {}", index, e);
                writeln!(out, "error: seed entry {}: {}", index, e)?;
            }
        }
        flush(library, out)?;
    }
    tracing::info!("Seeded {} books from {}", shelved, path.display());
    Ok(shelved)
}

/// Drive the library from interaction lines until EOF or `quit`
pub fn run<R: BufRead, W: Write>(
    library: &mut Library<TerminalPresenter>,
    reader: R,
    out: &mut W,
) -> Result<()> {
    for line in reader.lines() {
        let line = line.context("Failed to read interaction")?;
        let interaction = match parse_line(&line) {
            Ok(Some(interaction)) => interaction,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "error: {}", message)?;
                continue;
            }
        };
        if interaction == Interaction::Quit {
            break;
        }
        if let Err(e) = apply(library, interaction, out) {
            writeln!(out, "error: {}", e)?;
        }
        flush(library, out)?;
    }

    writeln!(
        out,
        "{} of {} books on the shelf",
        library.len(),
        library.capacity()
    )?;
    Ok(())
}

fn apply<W: Write>(
    library: &mut Library<TerminalPresenter>,
    interaction: Interaction,
    out: &mut W,
) -> Result<()> {
    match interaction {
        Interaction::Add(input) => {
            library.submit(input)?;
        }
        Interaction::Select(id) => library.select(id)?,
        Interaction::Deselect => library.deselect(),
        Interaction::Toggle(id) => {
            library.toggle_read(id)?;
        }
        Interaction::Remove(id) => {
            if !library.remove(id) {
                writeln!(out, "book #{} is not on the shelf", id)?;
            }
        }
        Interaction::Delete => {
            if library.remove_selected().is_none() {
                writeln!(out, "no book is selected")?;
            }
        }
        Interaction::List => {
            if library.is_empty() {
                writeln!(out, "the shelf is empty")?;
            }
            for book in library.books() {
                writeln!(out, "{}", card(book))?;
            }
        }
        Interaction::Show => match library.selected_book() {
            Some(book) => {
                for line in crate::terminal::detail(book) {
                    writeln!(out, "{}", line)?;
                }
            }
            None => writeln!(out, "Select A Book")?,
        },
        Interaction::Recent => {
            writeln!(out, "recently added: {}", join_ids(&library.recent_added().ids()))?;
            writeln!(out, "recently viewed: {}", join_ids(&library.recent_viewed().ids()))?;
        }
        Interaction::Clear => library.clear(),
        Interaction::Help => writeln!(out, "{}", HELP)?,
        Interaction::Quit => {}
    }
    Ok(())
}

fn flush<W: Write>(library: &mut Library<TerminalPresenter>, out: &mut W) -> Result<()> {
    for line in library.presenter_mut().drain() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn join_ids(ids: &[BookId]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter()
        .map(|id| format!("#{}", id))
        .collect::<Vec<_>>()
        .join(", ")
}
