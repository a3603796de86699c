// src/state/session.rs
use std::collections::HashMap;
use uuid::Uuid;

use crate::analysis::{generate, AnalysisRecord};
use crate::input::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Empty,
    Loaded,
}

/// Per-session audit data: submitted labels, their records and the selection.
///
/// A store belongs to exactly one session. Every submission replaces the
/// previous labels and records wholesale.
#[derive(Debug)]
pub struct SessionStore {
    id: String,
    labels: Vec<String>,
    analyses: HashMap<String, AnalysisRecord>,
    selected: Option<String>,
    last_run: Option<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            labels: Vec::new(),
            analyses: HashMap::new(),
            selected: None,
            last_run: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn phase(&self) -> SessionPhase {
        if self.labels.is_empty() {
            SessionPhase::Empty
        } else {
            SessionPhase::Loaded
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn last_run(&self) -> Option<&str> {
        self.last_run.as_deref()
    }

    /// Runs a fresh audit over `raw_text`, discarding whatever was loaded before.
    ///
    /// Returns the resulting phase; text with no usable lines leaves the store empty.
    pub fn submit(&mut self, raw_text: &str) -> SessionPhase {
        let labels = normalize(raw_text);

        let mut analyses = HashMap::with_capacity(labels.len());
        for label in &labels {
            if !analyses.contains_key(label) {
                analyses.insert(label.clone(), generate(label));
            }
        }

        self.selected = labels.first().cloned();
        self.labels = labels;
        self.analyses = analyses;

        if self.labels.is_empty() {
            self.last_run = None;
            log::info!("session {}: submission had no page labels", self.id);
        } else {
            self.last_run = Some(chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
            log::info!(
                "session {}: audited {} labels ({} distinct)",
                self.id,
                self.labels.len(),
                self.analyses.len()
            );
        }

        self.phase()
    }

    /// Moves the selection to `label` if it is one of the submitted labels.
    ///
    /// Unknown labels leave the selection untouched. Returns whether `label`
    /// is now selected.
    pub fn select(&mut self, label: &str) -> bool {
        if self.labels.iter().any(|l| l == label) {
            self.selected = Some(label.to_string());
            log::debug!("session {}: selected {:?}", self.id, label);
            true
        } else {
            log::debug!("session {}: ignoring selection of unknown label {:?}", self.id, label);
            false
        }
    }

    /// The selected label, falling back to the first submitted label.
    pub fn selected_label(&self) -> Option<&str> {
        self.selected
            .as_deref()
            .or_else(|| self.labels.first().map(String::as_str))
    }

    pub fn selected_record(&self) -> Option<&AnalysisRecord> {
        self.selected_label().and_then(|label| self.analyses.get(label))
    }

    pub fn record(&self, label: &str) -> Option<&AnalysisRecord> {
        self.analyses.get(label)
    }

    /// Drops the explicit selection; reads fall back to the first label.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn reset(&mut self) {
        self.labels.clear();
        self.analyses.clear();
        self.selected = None;
        self.last_run = None;
        log::info!("session {}: reset", self.id);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
