//! Line-oriented session driver.
//!
//! Reads one command per line, applies it to a [`FormSession`] and writes the
//! result. Blank lines and lines starting with `#` are skipped. Parse errors
//! and rejected operations are reported and the loop continues.

use std::io::{BufRead, Write};
use std::str::FromStr;

use userform_core::{
    AssumeYes, Confirm, DeleteOutcome, FieldKey, FormSession, SubmitOutcome,
};

use crate::error::{Error, Result};

const HELP: &str = "\
commands:
  set name|email|city|country <value>   set a field
  set phone <i> <value>                 set phone entry i
  add-phone                             append a phone entry
  remove-phone <i>                      remove phone entry i
  submit                                validate and store the form
  edit <i>                              load entry i into the form
  delete <i>                            delete entry i
  cancel                                abandon the current edit
  reset                                 clear the form
  list                                  show stored entries
  show                                  show the form value and errors
  mode                                  show new/editing mode
  help                                  this text
  quit                                  leave the session";

/// One parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// `set <field> <value>`
    Set {
        /// Target field
        key: FieldKey,
        /// New value (may be empty)
        value: String,
    },
    /// `add-phone`
    AddPhone,
    /// `remove-phone <i>`
    RemovePhone(usize),
    /// `submit`
    Submit,
    /// `edit <i>`
    Edit(usize),
    /// `delete <i>`
    Delete(usize),
    /// `cancel`
    Cancel,
    /// `reset`
    Reset,
    /// `list`
    List,
    /// `show`
    Show,
    /// `mode`
    Mode,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

fn parse_index(word: Option<&str>, command: &str) -> Result<usize> {
    let word = word.ok_or_else(|| Error::invalid_command(format!("{command} needs an index")))?;
    word.parse()
        .map_err(|_| Error::invalid_command(format!("'{word}' is not an index")))
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn parse_set(rest: &str) -> Result<SessionCommand> {
    let (field, rest) = split_word(rest);
    let (key, value) = match field {
        "name" => (FieldKey::Name, rest),
        "email" => (FieldKey::Email, rest),
        "city" => (FieldKey::City, rest),
        "country" => (FieldKey::Country, rest),
        "phone" => {
            let (index, value) = split_word(rest);
            let index = parse_index((!index.is_empty()).then_some(index), "set phone")?;
            (FieldKey::Phone(index), value)
        }
        "" => return Err(Error::invalid_command("set needs a field")),
        other => return Err(Error::invalid_command(format!("unknown field '{other}'"))),
    };
    Ok(SessionCommand::Set {
        key,
        value: value.trim_end().to_string(),
    })
}

impl FromStr for SessionCommand {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let (command, rest) = split_word(line.trim());
        let mut args = rest.split_whitespace();
        let parsed = match command {
            "set" => return parse_set(rest),
            "add-phone" => SessionCommand::AddPhone,
            "remove-phone" => SessionCommand::RemovePhone(parse_index(args.next(), command)?),
            "submit" => SessionCommand::Submit,
            "edit" => SessionCommand::Edit(parse_index(args.next(), command)?),
            "delete" => SessionCommand::Delete(parse_index(args.next(), command)?),
            "cancel" => SessionCommand::Cancel,
            "reset" => SessionCommand::Reset,
            "list" => SessionCommand::List,
            "show" => SessionCommand::Show,
            "mode" => SessionCommand::Mode,
            "help" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            other => {
                return Err(Error::invalid_command(format!("unknown command '{other}'")));
            }
        };
        if args.next().is_some() {
            return Err(Error::invalid_command(format!(
                "unexpected arguments to {command}"
            )));
        }
        Ok(parsed)
    }
}

/// Reads the answer to a confirmation prompt from the next input line.
///
/// Only `y` / `yes` (any case) count as agreement; end of input declines.
pub struct LineConfirm<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> LineConfirm<'a, R, W> {
    /// Wraps an input and output stream.
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<'_, R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if write!(self.output, "{prompt} [y/N] ").and_then(|_| self.output.flush()).is_err() {
            return false;
        }
        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        }
    }
}

/// Drives a [`FormSession`] from a line reader.
pub struct Driver<R, W> {
    session: FormSession,
    input: R,
    output: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    /// Creates a driver. With `assume_yes`, deletes skip the confirmation.
    pub fn new(session: FormSession, input: R, output: W, assume_yes: bool) -> Self {
        Self {
            session,
            input,
            output,
            assume_yes,
        }
    }

    /// The driven session.
    pub fn session(&self) -> &FormSession {
        &self.session
    }

    /// Consumes the driver, returning the session.
    pub fn into_session(self) -> FormSession {
        self.session
    }

    /// Processes lines until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let command = match trimmed.parse::<SessionCommand>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "error: {e}")?;
                    continue;
                }
            };
            if command == SessionCommand::Quit {
                break;
            }
            match self.execute(command) {
                Ok(()) => {}
                Err(Error::Core(e)) if e.is_user_error() => writeln!(self.output, "error: {e}")?,
                Err(e) => return Err(e),
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Applies one command.
    pub fn execute(&mut self, command: SessionCommand) -> Result<()> {
        match command {
            SessionCommand::Set { key, value } => {
                self.session.set_field(key, value)?;
                self.session.form_mut().touch(key)?;
            }
            SessionCommand::AddPhone => {
                self.session.add_phone_slot();
                writeln!(self.output, "phone slots: {}", self.session.form().phone_count())?;
            }
            SessionCommand::RemovePhone(index) => {
                if self.session.remove_phone_slot(index) {
                    writeln!(self.output, "phone slots: {}", self.session.form().phone_count())?;
                } else {
                    writeln!(self.output, "no phone slot removed")?;
                }
            }
            SessionCommand::Submit => self.submit()?,
            SessionCommand::Edit(index) => {
                self.session.begin_edit(index)?;
                writeln!(self.output, "editing entry #{index}")?;
            }
            SessionCommand::Delete(index) => self.delete(index)?,
            SessionCommand::Cancel => {
                self.session.cancel_edit();
                writeln!(self.output, "mode: {}", self.session.mode())?;
            }
            SessionCommand::Reset => {
                self.session.reset_form();
                writeln!(self.output, "form reset")?;
            }
            SessionCommand::List => self.list()?,
            SessionCommand::Show => self.show()?,
            SessionCommand::Mode => writeln!(self.output, "mode: {}", self.session.mode())?,
            SessionCommand::Help => writeln!(self.output, "{HELP}")?,
            SessionCommand::Quit => {}
        }
        Ok(())
    }

    fn submit(&mut self) -> Result<()> {
        match self.session.submit()? {
            SubmitOutcome::Appended { index } => {
                writeln!(self.output, "Form submitted: added entry #{index}")?;
            }
            SubmitOutcome::Updated { index, .. } => {
                writeln!(self.output, "Form submitted: updated entry #{index}")?;
            }
            SubmitOutcome::Rejected(report) => {
                writeln!(self.output, "Form is invalid. Please check the fields.")?;
                for (key, error) in report.iter() {
                    writeln!(self.output, "  {key}: {error}")?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn delete(&mut self, index: usize) -> Result<()> {
        let outcome = if self.assume_yes {
            self.session.delete_entry(index, &mut AssumeYes)?
        } else {
            let mut confirm = LineConfirm::new(&mut self.input, &mut self.output);
            self.session.delete_entry(index, &mut confirm)?
        };
        match outcome {
            DeleteOutcome::Deleted(record) => {
                writeln!(self.output, "deleted entry #{index} ({})", record.name)?;
            }
            DeleteOutcome::Cancelled => writeln!(self.output, "delete cancelled")?,
            _ => {}
        }
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let rows = self.session.records_with_country_names();
        if rows.is_empty() {
            writeln!(self.output, "no entries")?;
            return Ok(());
        }
        for (index, (record, country)) in rows.into_iter().enumerate() {
            let country = if country.is_empty() {
                record.address.country.as_str()
            } else {
                country
            };
            writeln!(
                self.output,
                "#{index} {} <{}> {}, {} [{}]",
                record.name,
                record.email,
                record.address.city,
                country,
                record.phone_numbers.join(", ")
            )?;
        }
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        let form = self.session.form();
        let json = serde_json::to_string_pretty(&form.value_json()?)?;
        writeln!(self.output, "mode: {}", self.session.mode())?;
        writeln!(self.output, "{json}")?;
        let visible = form.visible_errors(self.session.countries());
        for (key, error) in visible.iter() {
            writeln!(self.output, "  {key}: {error}")?;
        }
        Ok(())
    }
}
