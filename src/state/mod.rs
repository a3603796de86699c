// src/state/mod.rs
use crate::config::Settings;
use crate::state::session::{SessionPhase, SessionStore};

pub mod session;

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Dashboard,
    Analysis,
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    // Audit data for this window's session
    pub session: SessionStore,

    // Minimal UI state
    pub current_screen: Screen,
    pub raw_input: String,

    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            session: SessionStore::new(),
            current_screen: Screen::Dashboard,
            raw_input: String::new(),
            settings,
        }
    }

    pub fn run_audit(&mut self) -> SessionPhase {
        self.session.submit(&self.raw_input)
    }

    /// Clears both the pasted text and the audit results.
    pub fn clear_audit(&mut self) {
        self.raw_input.clear();
        self.session.reset();
        self.current_screen = Screen::Dashboard;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_audit_uses_pasted_text() {
        let mut state = AppState::new(Settings::default());
        state.raw_input = "PageOne\n\nPageTwo".to_string();
        assert_eq!(state.run_audit(), SessionPhase::Loaded);
        assert_eq!(state.session.labels(), ["PageOne", "PageTwo"]);
    }

    #[test]
    fn test_clear_audit_returns_to_dashboard() {
        let mut state = AppState::new(Settings::default());
        state.raw_input = "PageOne".to_string();
        state.run_audit();
        state.current_screen = Screen::Analysis;

        state.clear_audit();
        assert!(state.raw_input.is_empty());
        assert_eq!(state.session.phase(), SessionPhase::Empty);
        assert_eq!(state.current_screen, Screen::Dashboard);
    }
}
