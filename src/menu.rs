use std::io::{self, BufRead, Write};

use crate::action::Action;
use crate::error::{MenuError, Result};
use crate::reader::{LineReader, ReadEvent};
use crate::writer::{colors, MenuWriter};

/// Configuration for the menu
#[derive(Debug, Clone, Copy)]
pub struct MenuConfig {
    /// Line printed above the list of actions
    pub header: &'static str,
    /// Line printed below the list, right before reading input
    pub prompt: &'static str,
    /// Pad names to the longest registered name so descriptions line up
    pub align_names: bool,
    /// ANSI color of the header and prompt lines (see [`colors`])
    pub banner_color: u8,
    /// Enable ANSI escape codes for colored output
    pub ansi_enabled: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            header: "----- Available options:",
            prompt: "----- Your choice:",
            align_names: true,
            banner_color: colors::CYAN,
            ansi_enabled: cfg!(feature = "ansi-support"),
        }
    }
}

/// An ordered set of uniquely named actions the user can choose from
///
/// Actions are displayed in registration order. The menu is meant to be
/// driven by a single control loop; callbacks run on the thread that asks
/// the user.
#[derive(Debug, Default)]
pub struct Menu {
    config: MenuConfig,
    actions: Vec<Action>,
}

impl Menu {
    /// Create an empty menu with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty menu with a custom configuration
    pub fn with_config(config: MenuConfig) -> Self {
        Self {
            config,
            actions: Vec::new(),
        }
    }

    /// Get the menu configuration
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Register an action
    ///
    /// Fails with [`MenuError::DuplicateName`] if an action with the same
    /// name is already registered; the existing one is kept as is.
    pub fn add_action(&mut self, action: Action) -> Result<()> {
        if self.is_valid_choice(action.name()) {
            tracing::warn!(action = %action.name(), "rejecting duplicate action");
            return Err(MenuError::DuplicateName {
                name: action.name().to_owned(),
            });
        }

        tracing::debug!(action = %action.name(), "registered action");
        self.actions.push(action);
        Ok(())
    }

    /// Build and register an action in one go
    pub fn add<F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        callback: F,
    ) -> Result<()>
    where
        F: Fn() + 'static,
    {
        self.add_action(Action::new(name, description, callback))
    }

    /// Look up an action by its exact (case-sensitive) name
    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|action| action.name() == name)
    }

    /// Whether `choice` names a registered action
    pub fn is_valid_choice(&self, choice: &str) -> bool {
        self.action(choice).is_some()
    }

    /// All registered actions, in display order
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of registered actions
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether no action is registered yet
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Length in characters of the longest registered name
    pub fn name_width(&self) -> usize {
        self.actions
            .iter()
            .map(|action| action.name().chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Write the header, one line per action and the prompt
    pub fn render<W: Write>(&self, writer: &mut MenuWriter<'_, W>) -> io::Result<()> {
        let width = if self.config.align_names {
            self.name_width()
        } else {
            0
        };

        writer.write_header(self.config.header, self.config.banner_color)?;
        for action in &self.actions {
            writer.write_entry(action.name(), action.description(), width)?;
        }
        writer.write_prompt(self.config.prompt, self.config.banner_color)
    }

    /// Prompt on stdin/stdout until the user types a registered name
    ///
    /// The chosen action is returned, not executed; see
    /// [`Menu::ask_and_execute`] for the variant that runs it.
    pub fn ask_user(&self) -> Result<&Action> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.ask_user_with(&mut stdin.lock(), &mut stdout.lock())
    }

    /// Prompt on the given streams until a line matches a registered name
    ///
    /// The full menu is rendered again after every unmatched line, empty
    /// and non-UTF-8 lines included. Running out of input before a match yields
    /// [`MenuError::InputClosed`].
    pub fn ask_user_with<R, W>(&self, input: &mut R, output: &mut W) -> Result<&Action>
    where
        R: BufRead,
        W: Write,
    {
        let mut reader = LineReader::new();
        let mut writer = MenuWriter::new(output, self.config.ansi_enabled);

        loop {
            self.render(&mut writer)?;

            let choice = match reader.read_line(input)? {
                ReadEvent::Line(line) => line,
                ReadEvent::Invalid(bytes) => {
                    tracing::trace!(len = bytes.len(), "input line is not valid UTF-8");
                    continue;
                }
                ReadEvent::EndOfFile => {
                    tracing::warn!(attempts = reader.lines_read(), "input closed before a valid choice");
                    return Err(MenuError::InputClosed);
                }
            };

            if let Some(action) = self.action(&choice) {
                tracing::debug!(action = %action.name(), attempts = reader.lines_read(), "action selected");
                return Ok(action);
            }
            tracing::trace!(%choice, "no action matches input");
        }
    }

    /// Prompt on stdin/stdout and execute the chosen action
    ///
    /// Calling this in an unconditional loop gives a CLI that shows the
    /// menu again after every executed action.
    pub fn ask_and_execute(&self) -> Result<()> {
        self.ask_user()?.execute();
        Ok(())
    }

    /// Prompt on the given streams and execute the chosen action
    pub fn ask_and_execute_with<R, W>(&self, input: &mut R, output: &mut W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        self.ask_user_with(input, output)?.execute();
        Ok(())
    }
}
