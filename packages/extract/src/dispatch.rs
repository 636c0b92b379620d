//! Table-driven event dispatch.
//!
//! [`StackDispatcher`] is the one place that tracks the element-name stack.
//! What a text value means is decided by an [`Extraction`]: it supplies a
//! routing table from element names to fields plus hooks for elements that
//! open or close a record.

use crate::EventSink;

/// Record-building state driven by a [`StackDispatcher`].
pub trait Extraction: Default {
    /// Field identifier produced by the routing table.
    type Field: Copy + std::fmt::Debug + 'static;

    /// What [`Self::finish`] yields.
    type Output;

    /// Element name to field routing table.
    const ROUTES: &'static [(&'static str, Self::Field)];

    /// Called after `name` has been pushed on the stack.
    fn open(&mut self, _name: &str) {}

    /// Stores a trimmed, non-empty text value for `field`.
    fn assign(&mut self, field: Self::Field, value: &str);

    /// Called after `name` has been popped off the stack.
    fn close(&mut self, _name: &str) {}

    /// Consumes the state and returns the extracted output.
    fn finish(self) -> Self::Output;
}

/// Event sink that keeps the element stack and routes text values by the
/// name of the innermost open element.
#[derive(Debug, Default)]
pub struct StackDispatcher<E> {
    stack: Vec<String>,
    extraction: E,
}

impl<E: Extraction> StackDispatcher<E> {
    /// Creates a dispatcher with a fresh extraction state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            extraction: E::default(),
        }
    }

    /// Name of the innermost open element.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// Number of open elements.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Borrows the extraction state.
    #[must_use]
    pub const fn extraction(&self) -> &E {
        &self.extraction
    }

    /// Consumes the dispatcher and returns the extracted output.
    ///
    /// Elements still open at this point are dropped without their close
    /// hook running.
    pub fn finish(self) -> E::Output {
        if !self.stack.is_empty() {
            log::debug!("Finishing with {} unclosed element(s)", self.stack.len());
        }
        self.extraction.finish()
    }

    fn route(name: &str) -> Option<E::Field> {
        E::ROUTES
            .iter()
            .find(|(element, _)| *element == name)
            .map(|(_, field)| *field)
    }
}

impl<E: Extraction> EventSink for StackDispatcher<E> {
    fn enter_element(&mut self, name: &str) {
        self.stack.push(name.to_owned());
        self.extraction.open(name);
    }

    fn text_value(&mut self, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }

        let Some(current) = self.stack.last() else {
            return;
        };

        match Self::route(current) {
            Some(field) => self.extraction.assign(field, value),
            None => log::trace!("Ignoring text in unrouted element <{current}>"),
        }
    }

    fn exit_element(&mut self) {
        if let Some(name) = self.stack.pop() {
            self.extraction.close(&name);
        }
    }
}
