//! Selection state of one info card.

use super::render::render;
use super::subject::Subject;
use super::view::InfoView;
use crate::embed::EmbedSpec;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Why a selection was not applied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InfoError {
    /// Someone other than the invoker used the dropdown.
    #[error("You cant use this as you're not the command invoker, only the author (<@{invoker}>) Can Do This!")]
    NotInvoker {
        /// The user allowed to operate the card.
        invoker: u64,
    },

    /// The card timed out.
    #[error("This menu has expired, run the command again.")]
    Expired,

    /// The dropdown sent a value that is not a view.
    #[error("Unknown option '{0}'.")]
    UnknownView(String),

    /// Fetching fresh data for the view failed.
    #[error("Something went wrong while fetching that: {0}")]
    Fetch(String),
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting selections.
    Active,
    /// Timed out; the dropdown is disabled.
    Expired,
}

/// One interactive card: who may drive it, what it shows, and what it rendered last.
#[derive(Debug, Clone)]
pub struct InfoSession {
    invoker: u64,
    subject: Subject,
    selected: InfoView,
    rendered: EmbedSpec,
    color: u32,
    state: SessionState,
}

impl InfoSession {
    /// Starts a session on the `info` view.
    pub fn new(invoker: u64, subject: Subject, color: u32) -> Self {
        let rendered = render(InfoView::Info, &subject, color);
        Self {
            invoker,
            subject,
            selected: InfoView::Info,
            rendered,
            color,
            state: SessionState::Active,
        }
    }

    /// The user allowed to operate the card.
    pub const fn invoker(&self) -> u64 {
        self.invoker
    }

    /// The inspected user.
    pub const fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Currently shown view.
    pub const fn selected(&self) -> InfoView {
        self.selected
    }

    /// Last rendered embed.
    pub const fn rendered(&self) -> &EmbedSpec {
        &self.rendered
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Checks that `actor` may operate the card right now.
    pub fn authorize(&self, actor: u64) -> Result<(), InfoError> {
        if matches!(self.state, SessionState::Expired) {
            return Err(InfoError::Expired);
        }
        if actor != self.invoker {
            return Err(InfoError::NotInvoker {
                invoker: self.invoker,
            });
        }
        Ok(())
    }

    /// Records a freshly fetched banner for the subject.
    pub fn refresh_banner(&mut self, actor: u64, banner_url: Option<String>) -> Result<(), InfoError> {
        self.authorize(actor)?;
        self.subject.set_banner(banner_url);
        Ok(())
    }

    /// Switches to `view` and returns the new embed.
    pub fn select(&mut self, actor: u64, view: InfoView) -> Result<&EmbedSpec, InfoError> {
        self.authorize(actor)?;
        self.rendered = render(view, &self.subject, self.color);
        self.selected = view;
        debug!(invoker = self.invoker, subject = self.subject.id, %view, "Info card view changed");
        Ok(&self.rendered)
    }

    /// Ends the session.
    pub fn expire(&mut self) {
        self.state = SessionState::Expired;
    }
}

/// When an idle card stops accepting input.
///
/// Only presses by the invoker push the deadline back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleDeadline {
    window: Duration,
    at: Instant,
}

impl IdleDeadline {
    /// A deadline `window` after `now`.
    pub fn new(window: Duration, now: Instant) -> Self {
        Self { window, at: now + window }
    }

    /// Time left before the card expires, zero once it has passed.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.at.saturating_duration_since(now)
    }

    /// Restarts the window for a press by `actor`, if `session` accepts them.
    pub fn refresh(&mut self, session: &InfoSession, actor: u64, now: Instant) -> Result<(), InfoError> {
        session.authorize(actor)?;
        self.at = now + self.window;
        Ok(())
    }
}
