//! TerminalWizard - Line-oriented driver for the modal lens flow.
//!
//! Each editor level gets its own prompt and a small command set:
//!
//! ```text
//! pillars>   add <name> | edit <n> | remove <n> | back | save | quit
//! questions> add <title> | edit <n> | remove <n> | done | cancel | quit
//! choices>   add | edit <n> | remove <n> | done | cancel | quit
//! ```
//!
//! Field prompts show the current value in brackets. An empty line keeps it
//! and a single `-` clears it.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::editor::{
    BuilderStep, ChoiceDraft, ChoiceSetEditor, LensBuilder, PillarSetEditor, QuestionSetEditor,
};
use crate::domain::foundation::RiskLevel;
use crate::domain::lens::{Lens, LensInfo, Pillar, Question};

const PILLAR_HELP: &str =
    "Commands: add <name>, edit <n>, remove <n>, back, save, quit";
const QUESTION_HELP: &str =
    "Commands: add <title>, edit <n>, remove <n>, done, cancel, quit";
const CHOICE_HELP: &str = "Commands: add, edit <n>, remove <n>, done, cancel, quit";

/// Errors surfaced by the wizard.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Why a prompt loop stopped early.
enum Exit {
    /// `quit` was entered or the input ended.
    Quit,
    Io(io::Error),
}

impl From<io::Error> for Exit {
    fn from(err: io::Error) -> Self {
        Exit::Io(err)
    }
}

/// Drives a [`LensBuilder`] from line input.
pub struct TerminalWizard<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalWizard<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Runs the flow until the lens is completed.
    ///
    /// Returns `Ok(None)` when the user quits or the input ends first.
    pub fn run(&mut self, builder: &mut LensBuilder) -> Result<Option<Lens>, WizardError> {
        match self.drive(builder) {
            Ok(lens) => Ok(Some(lens)),
            Err(Exit::Quit) => {
                info!(step = ?builder.step(), "wizard ended without a completed lens");
                Ok(None)
            }
            Err(Exit::Io(err)) => Err(WizardError::Io(err)),
        }
    }

    fn drive(&mut self, builder: &mut LensBuilder) -> Result<Lens, Exit> {
        loop {
            match builder.step() {
                BuilderStep::Info => self.info_step(builder)?,
                BuilderStep::Pillars => {
                    if let Some(lens) = self.pillar_step(builder)? {
                        return Ok(lens);
                    }
                }
                BuilderStep::Complete => return Ok(builder.lens().clone()),
            }
        }
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Steps
    // ════════════════════════════════════════════════════════════════════════════════

    fn info_step(&mut self, builder: &mut LensBuilder) -> Result<(), Exit> {
        writeln!(self.output, "== Lens information ==")?;
        loop {
            let current = builder.info();
            let version = self.field("Version", &current.version)?;
            let name = self.field("Name", &current.name)?;
            let description = self.field("Description", &current.description)?;

            if builder.submit_info(LensInfo::new(version, name, description)) {
                return Ok(());
            }
            writeln!(self.output, "Every lens field is required.")?;
        }
    }

    /// Returns `Some` once the lens is completed and `None` after `back`.
    fn pillar_step(&mut self, builder: &mut LensBuilder) -> Result<Option<Lens>, Exit> {
        let mut editor = builder.pillar_editor().unwrap_or_default();
        writeln!(self.output, "== Pillars ==")?;
        writeln!(self.output, "{}", PILLAR_HELP)?;

        loop {
            self.list_pillars(&editor)?;
            let line = self.prompt("pillars> ")?;
            let (command, arg) = split_command(&line);
            match command {
                "" => {}
                "add" => {
                    if !editor.add_pillar(arg) {
                        writeln!(self.output, "Pillar name is blank or already used.")?;
                    }
                }
                "edit" => match parse_index(arg).and_then(|i| editor.edit_pillar(i)) {
                    Some(child) => {
                        if let Some(pillar) = self.question_step(child)? {
                            editor.merge_pillar(pillar);
                        }
                    }
                    None => writeln!(self.output, "No pillar {}.", arg)?,
                },
                "remove" => {
                    if !parse_index(arg).is_some_and(|i| editor.remove_pillar(i)) {
                        writeln!(self.output, "No pillar {}.", arg)?;
                    }
                }
                "back" => {
                    builder.back_to_info();
                    return Ok(None);
                }
                "save" => match builder.complete(&editor) {
                    Some(lens) => return Ok(Some(lens)),
                    None => writeln!(self.output, "Add at least one pillar before saving.")?,
                },
                "quit" => return Err(Exit::Quit),
                _ => writeln!(self.output, "{}", PILLAR_HELP)?,
            }
        }
    }

    fn question_step(&mut self, mut editor: QuestionSetEditor) -> Result<Option<Pillar>, Exit> {
        writeln!(self.output, "== Questions of {} ==", editor.pillar().name)?;
        writeln!(self.output, "{}", QUESTION_HELP)?;

        loop {
            self.list_questions(&editor)?;
            let line = self.prompt("questions> ")?;
            let (command, arg) = split_command(&line);
            match command {
                "" => {}
                "add" => {
                    let description = self.field("Description", "")?;
                    if !editor.add_question(arg, &description) {
                        writeln!(self.output, "Question title is blank or already used.")?;
                    }
                }
                "edit" => match parse_index(arg).and_then(|i| editor.edit_question(i)) {
                    Some(child) => {
                        if let Some(question) = self.choice_step(child)? {
                            editor.merge_question(question);
                        }
                    }
                    None => writeln!(self.output, "No question {}.", arg)?,
                },
                "remove" => {
                    if !parse_index(arg).is_some_and(|i| editor.remove_question(i)) {
                        writeln!(self.output, "No question {}.", arg)?;
                    }
                }
                "done" => return Ok(Some(editor.save())),
                "cancel" => return Ok(None),
                "quit" => return Err(Exit::Quit),
                _ => writeln!(self.output, "{}", QUESTION_HELP)?,
            }
        }
    }

    fn choice_step(&mut self, mut editor: ChoiceSetEditor) -> Result<Option<Question>, Exit> {
        writeln!(self.output, "== Choices of {} ==", editor.question().title)?;
        writeln!(self.output, "{}", CHOICE_HELP)?;

        loop {
            self.list_choices(&editor)?;
            let line = self.prompt("choices> ")?;
            let (command, arg) = split_command(&line);
            match command {
                "" => {}
                "add" => {
                    self.fill_draft(editor.new_choice_mut())?;
                    if !editor.submit_new_choice() {
                        writeln!(self.output, "Choice id or title is blank, or the id is taken.")?;
                    }
                }
                "edit" => {
                    if !parse_index(arg).is_some_and(|i| editor.begin_edit_choice(i)) {
                        writeln!(self.output, "No choice {}.", arg)?;
                        continue;
                    }
                    if let Some(draft) = editor.edit_buffer_mut() {
                        self.fill_draft(draft)?;
                    }
                    let answer = self.prompt("Commit changes? [y/N]: ")?;
                    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
                        editor.commit_edit_choice();
                    } else {
                        editor.cancel_edit_choice();
                        writeln!(self.output, "Edit discarded.")?;
                    }
                }
                "remove" => {
                    if !parse_index(arg).is_some_and(|i| editor.remove_choice(i)) {
                        writeln!(self.output, "No choice {}.", arg)?;
                    }
                }
                "done" => return Ok(Some(editor.save())),
                "cancel" => return Ok(None),
                "quit" => return Err(Exit::Quit),
                _ => writeln!(self.output, "{}", CHOICE_HELP)?,
            }
        }
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Forms and listings
    // ════════════════════════════════════════════════════════════════════════════════

    fn fill_draft(&mut self, draft: &mut ChoiceDraft) -> Result<(), Exit> {
        draft.id = self.field("Choice id", &draft.id)?;
        draft.title = self.field("Title", &draft.title)?;
        draft.description = self.field("Description", &draft.description)?;
        draft.risk = self.risk_field(draft.risk)?;
        draft.improvement_text = self.field("Improvement plan", &draft.improvement_text)?;
        draft.improvement_url = self.field("Improvement url", &draft.improvement_url)?;
        Ok(())
    }

    fn risk_field(&mut self, current: RiskLevel) -> Result<RiskLevel, Exit> {
        let levels = RiskLevel::ALL.map(|risk| risk.as_str()).join("/");
        loop {
            let answer = self.prompt(&format!("Risk ({}) [{}]: ", levels, current))?;
            if answer.is_empty() {
                return Ok(current);
            }
            match answer.parse::<RiskLevel>() {
                Ok(risk) => return Ok(risk),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    fn list_pillars(&mut self, editor: &PillarSetEditor) -> io::Result<()> {
        if editor.pillars().is_empty() {
            return writeln!(self.output, "  (no pillars)");
        }
        for (i, pillar) in editor.pillars().iter().enumerate() {
            writeln!(
                self.output,
                "  {}. {} ({}) - {}",
                i + 1,
                pillar.name,
                pillar.id,
                pillar.question_count_label()
            )?;
        }
        Ok(())
    }

    fn list_questions(&mut self, editor: &QuestionSetEditor) -> io::Result<()> {
        if editor.questions().is_empty() {
            return writeln!(self.output, "  (no questions)");
        }
        for (i, question) in editor.questions().iter().enumerate() {
            writeln!(
                self.output,
                "  {}. {} ({}) - {}",
                i + 1,
                question.title,
                question.id,
                question.choice_count_label()
            )?;
        }
        Ok(())
    }

    fn list_choices(&mut self, editor: &ChoiceSetEditor) -> io::Result<()> {
        let question = editor.question();
        if question.choices.is_empty() {
            return writeln!(self.output, "  (no choices)");
        }
        for (i, choice) in question.choices.iter().enumerate() {
            writeln!(
                self.output,
                "  {}. {} ({}) - risk: {}, plan: {}",
                i + 1,
                choice.title,
                choice.id,
                question.risk_label_for(&choice.id),
                question.improvement_preview_for(&choice.id)
            )?;
        }
        Ok(())
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Line input
    // ════════════════════════════════════════════════════════════════════════════════

    /// Prompts for a field, keeping `current` on an empty line.
    fn field(&mut self, label: &str, current: &str) -> Result<String, Exit> {
        let prompt = if current.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, current)
        };
        let answer = self.prompt(&prompt)?;
        Ok(match answer.as_str() {
            "" => current.to_string(),
            "-" => String::new(),
            _ => answer,
        })
    }

    /// Writes `prompt` and reads one trimmed line.
    fn prompt(&mut self, prompt: &str) -> Result<String, Exit> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed");
            return Err(Exit::Quit);
        }
        Ok(line.trim().to_string())
    }
}

/// Splits `edit 2` into `("edit", "2")`.
fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    }
}

/// Parses a one-based list position.
fn parse_index(arg: &str) -> Option<usize> {
    arg.parse::<usize>().ok()?.checked_sub(1)
}
