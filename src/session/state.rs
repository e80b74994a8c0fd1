// src/session/state.rs

//! Per-browser application state and its transitions.
//!
//! Navigation is free between the three views. Within insights the flow is
//! `Idle -> ResultsShown -> DetailSelected`; applying filters again always
//! returns to `ResultsShown` with the new result set.

use thiserror::Error;

use crate::advisor::Advice;
use crate::domain::{FilterCriteria, PricedListing};

/// Most recent chat turns kept per session.
pub const MAX_CHAT_TURNS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Landing,
    Insights,
    Chat,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Landing, Page::Insights, Page::Chat];

    pub fn title(self) -> &'static str {
        match self {
            Page::Landing => "Home",
            Page::Insights => "Restaurant Insights",
            Page::Chat => "Chatbot",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Landing => "/",
            Page::Insights => "/insights",
            Page::Chat => "/chat",
        }
    }
}

/// The narrative analysis fetched for the selected plaza.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationDetail {
    pub name: String,
    pub advice: Advice,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum InsightsStage {
    #[default]
    Idle,
    ResultsShown {
        criteria: FilterCriteria,
        results: Vec<PricedListing>,
    },
    DetailSelected {
        criteria: FilterCriteria,
        results: Vec<PricedListing>,
        detail: LocationDetail,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum TransitionError {
    #[error("no search results to choose from; submit the filters first")]
    NoResults,
    #[error("{0:?} is not among the current results")]
    UnknownLocation(String),
}

impl InsightsStage {
    pub fn criteria(&self) -> Option<&FilterCriteria> {
        match self {
            InsightsStage::Idle => None,
            InsightsStage::ResultsShown { criteria, .. }
            | InsightsStage::DetailSelected { criteria, .. } => Some(criteria),
        }
    }

    /// `None` until filters have been submitted; `Some(&[])` is "no matches".
    pub fn results(&self) -> Option<&[PricedListing]> {
        match self {
            InsightsStage::Idle => None,
            InsightsStage::ResultsShown { results, .. }
            | InsightsStage::DetailSelected { results, .. } => Some(results),
        }
    }

    pub fn detail(&self) -> Option<&LocationDetail> {
        match self {
            InsightsStage::DetailSelected { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Store a fresh result set. Any previous selection is dropped.
    pub fn show_results(&mut self, criteria: FilterCriteria, results: Vec<PricedListing>) {
        *self = InsightsStage::ResultsShown { criteria, results };
    }

    /// Check that `name` can be selected before paying for the advice call.
    pub fn ensure_selectable(&self, name: &str) -> Result<(), TransitionError> {
        let results = self.results().ok_or(TransitionError::NoResults)?;
        if results.iter().any(|r| r.name() == name) {
            Ok(())
        } else {
            Err(TransitionError::UnknownLocation(name.to_string()))
        }
    }

    pub fn select(&mut self, detail: LocationDetail) -> Result<(), TransitionError> {
        self.ensure_selectable(&detail.name)?;

        let (criteria, results) = match std::mem::take(self) {
            InsightsStage::ResultsShown { criteria, results }
            | InsightsStage::DetailSelected {
                criteria, results, ..
            } => (criteria, results),
            InsightsStage::Idle => return Err(TransitionError::NoResults),
        };
        *self = InsightsStage::DetailSelected {
            criteria,
            results,
            detail,
        };
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub question: String,
    pub answer: Advice,
}

/// Everything one browser session remembers between requests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub page: Page,
    pub insights: InsightsStage,
    pub chat: Vec<ChatTurn>,
}

impl SessionState {
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    pub fn record_chat(&mut self, question: String, answer: Advice) {
        self.chat.push(ChatTurn { question, answer });
        if self.chat.len() > MAX_CHAT_TURNS {
            let excess = self.chat.len() - MAX_CHAT_TURNS;
            self.chat.drain(..excess);
        }
    }
}
