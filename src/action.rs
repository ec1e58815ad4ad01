use core::fmt;

/// Callback run when an action is executed
pub type Callback = Box<dyn Fn()>;

/// A named, described unit of behavior the user can pick from a menu
///
/// Actions are immutable once built. The name doubles as the text the user
/// has to type to select the action, so it should be short.
pub struct Action {
    name: String,
    description: String,
    callback: Option<Callback>,
}

impl Action {
    /// Create a new action with a callback
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            callback: Some(Box::new(callback)),
        }
    }

    /// Create an action that does nothing when executed
    pub fn noop(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            callback: None,
        }
    }

    /// Get the action name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the action description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether executing this action runs anything
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Run the callback, if any
    ///
    /// Panics raised by the callback are not caught.
    pub fn execute(&self) {
        if let Some(callback) = &self.callback {
            tracing::debug!(action = %self.name, "executing action");
            callback();
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("has_callback", &self.has_callback())
            .finish()
    }
}
