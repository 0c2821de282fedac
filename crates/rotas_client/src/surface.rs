//! Handles onto the page the route handler works against.
//!
//! The handler never looks elements up by id; it is given one value per
//! role, which lets tests and the terminal front end substitute their own.

use crate::route_block::RouteBlock;

/// The submission that triggered the handler (`rotaForm`'s submit event).
pub trait SubmitEvent {
    /// Stops the default navigation / reload of the page.
    fn prevent_default(&mut self);
}

/// The `origem` and `destino` inputs.
pub trait RouteForm {
    fn origin(&self) -> String;
    fn destination(&self) -> String;
}

/// The `rotaContainer` element.
pub trait ResultContainer {
    /// Removes everything previously rendered.
    fn clear(&mut self);

    fn append_block(&mut self, block: RouteBlock);

    /// Replaces the whole content with a single message.
    fn show_message(&mut self, message: &str);
}

/// Blocking, user-facing notification.
pub trait UserAlert {
    fn alert(&self, message: &str);
}

/// A submission that only records whether its default action was
/// prevented. Used when there is no page behind the handler.
#[derive(Debug, Default)]
pub struct Submission {
    default_prevented: bool,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl SubmitEvent for Submission {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// Fixed origin and destination values.
#[derive(Debug, Clone, Default)]
pub struct StaticForm {
    pub origin: String,
    pub destination: String,
}

impl StaticForm {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

impl RouteForm for StaticForm {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn destination(&self) -> String {
        self.destination.clone()
    }
}
