//! Interactive shell: the host collaborator driving the note store.
//!
//! Each input line runs exactly one store operation to completion, then the
//! relevant state is printed back. List positions shown to the user are
//! 1-based.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::persist;
use crate::store::{DeleteState, NoteStore};

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    Add,
    Open(usize),
    Close,
    Show,
    Title(String),
    Write(String),
    Search(String),
    Remove,
    Yes,
    No,
    Save,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let (word, rest) = line
        .split_once(' ')
        .map(|(w, r)| (w, r.trim()))
        .unwrap_or((line, ""));
    match word {
        "ls" | "list" => Ok(Command::List),
        "add" => Ok(Command::Add),
        "open" => rest
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .map(Command::Open)
            .ok_or_else(|| "usage: open <number>".to_string()),
        "close" => Ok(Command::Close),
        "show" => Ok(Command::Show),
        "title" => Ok(Command::Title(rest.to_string())),
        "write" => Ok(Command::Write(rest.to_string())),
        "search" => Ok(Command::Search(rest.to_string())),
        "rm" | "delete" => Ok(Command::Remove),
        "yes" | "y" => Ok(Command::Yes),
        "no" | "n" => Ok(Command::No),
        "save" => Ok(Command::Save),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command: {other} (try 'help')")),
    }
}

const HELP: &str = "\
commands:
  ls                 list notes (current view)
  add                append a new untitled note
  open <n>           open note n in the editor
  close              close the editor
  show               print the open note
  title <text>       set the open note's title
  write <text>       set the open note's content
  search <query>     filter notes by title; 'search' alone clears the filter
  rm                 request deletion of the open note
  yes / no           confirm or cancel a pending deletion
  save               write the notes to disk without exiting
  help               show this help
  quit               save and exit";

/// The interactive session over a [`NoteStore`].
pub struct Shell {
    store: NoteStore,
    path: PathBuf,
    query: String,
    verbose: u8,
}

impl Shell {
    /// `path` is the store file used by the `save` command; the final save at
    /// shutdown stays with the caller.
    pub fn new(store: NoteStore, path: PathBuf, verbose: u8) -> Self {
        Self {
            store,
            path,
            query: String::new(),
            verbose,
        }
    }

    /// Returns the store, e.g. to persist it after the session.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Runs the command loop until `quit` or end of input.
    ///
    /// `interactive` controls whether a prompt is printed before each read;
    /// it should be false when input is piped.
    pub fn run(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
        interactive: bool,
    ) -> Result<()> {
        if self.verbose >= 2 {
            writeln!(out, "store file: {}", self.path.display())?;
        }
        if self.verbose >= 1 {
            writeln!(out, "{} note(s) loaded", self.store.notes().len())?;
        }
        let mut lines = input.lines();
        loop {
            if interactive {
                write!(out, "> ")?;
                out.flush()?;
            }
            let Some(line) = lines.next() else { break };
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_command(line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.dispatch(command, out)?,
                Err(message) => writeln!(out, "{message}")?,
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, command: Command, out: &mut impl Write) -> Result<()> {
        match command {
            Command::List => self.print_list(out)?,
            Command::Add => match self.store.add() {
                Some(index) => writeln!(out, "Added \"Untitled\" as note {}.", index + 1)?,
                None => {
                    writeln!(out, "Added \"Untitled\" (hidden by the current search).")?;
                }
            },
            Command::Open(n) => {
                let index = n - 1;
                if index >= self.store.notes().len() {
                    writeln!(out, "No note {n}.")?;
                } else {
                    self.store.select(index);
                    let note = self.store.selected_note().expect("just selected");
                    writeln!(out, "Opened \"{}\".", note.title())?;
                }
            }
            Command::Close => {
                if self.store.editor_open() {
                    self.store.unselect();
                    writeln!(out, "Closed.")?;
                } else {
                    writeln!(out, "No note is open.")?;
                }
            }
            Command::Show => match self.store.selected_note() {
                Some(note) => {
                    writeln!(out, "{note}")?;
                    writeln!(out, "created: {}", note.id().created().format("%Y-%m-%d %H:%M"))?;
                    writeln!(out, "{}", note.content())?;
                }
                None => writeln!(out, "No note is open.")?,
            },
            Command::Title(text) => {
                if self.store.editor_open() {
                    self.store.rename_selected(text);
                    writeln!(out, "Title set.")?;
                } else {
                    writeln!(out, "No note is open.")?;
                }
            }
            Command::Write(text) => {
                if self.store.editor_open() {
                    self.store.edit_selected_content(text);
                    writeln!(out, "Content set.")?;
                } else {
                    writeln!(out, "No note is open.")?;
                }
            }
            Command::Search(query) => {
                self.store.apply_query(&query);
                if query.is_empty() {
                    self.query.clear();
                    writeln!(out, "Search cleared, {} note(s).", self.store.notes().len())?;
                } else {
                    writeln!(
                        out,
                        "{} note(s) match \"{}\".",
                        self.store.notes().len(),
                        query
                    )?;
                    self.query = query;
                }
            }
            Command::Remove => match self.store.selected_note() {
                Some(note) => {
                    let title = note.title().to_string();
                    self.store.arm_delete();
                    writeln!(out, "Delete \"{title}\"? (yes/no)")?;
                }
                None => writeln!(out, "No note is open.")?,
            },
            Command::Yes => match self.store.confirm_delete() {
                Some(removed) => writeln!(out, "Deleted \"{}\".", removed.title())?,
                None => writeln!(out, "Nothing to confirm.")?,
            },
            Command::No => {
                if *self.store.delete_state() == DeleteState::Idle {
                    writeln!(out, "Nothing to cancel.")?;
                } else {
                    self.store.cancel_delete();
                    writeln!(out, "Cancelled.")?;
                }
            }
            Command::Save => {
                let notes = self.store.authoritative();
                persist::save(&self.path, notes)
                    .with_context(|| format!("failed to save notes to {}", self.path.display()))?;
                writeln!(out, "Saved {} note(s).", notes.len())?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => unreachable!("handled by the run loop"),
        }
        Ok(())
    }

    fn print_list(&self, out: &mut impl Write) -> Result<()> {
        if self.store.is_filtering() {
            writeln!(out, "Filtering by \"{}\":", self.query)?;
        }
        if self.store.notes().is_empty() {
            if self.store.is_filtering() {
                writeln!(out, "No matching notes.")?;
            } else {
                writeln!(out, "No notes.")?;
            }
            return Ok(());
        }
        for (i, note) in self.store.notes().iter().enumerate() {
            let marker = if note.is_selected() { "*" } else { " " };
            writeln!(out, "{:>3}.{marker} {note}", i + 1)?;
        }
        Ok(())
    }
}
