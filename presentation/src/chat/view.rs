//! Terminal rendering of discussion progress

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use council_application::DiscussionProgress;
use council_domain::{Message, PersonaRoster, RoundKind};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Prints messages as they are appended, with a spinner while a round runs
pub struct DiscussionView {
    roster: Arc<PersonaRoster>,
    show_progress: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl DiscussionView {
    pub fn new(roster: Arc<PersonaRoster>, show_progress: bool) -> Self {
        Self {
            roster,
            show_progress,
            spinner: Mutex::new(None),
        }
    }

    fn waiting_message(kind: RoundKind) -> String {
        match kind {
            RoundKind::Opening => "The board is considering the topic...".to_string(),
            RoundKind::User => "The board is thinking...".to_string(),
            RoundKind::Autonomous(n) => format!("Follow-up round {}...", n),
        }
    }

    fn print(&self, text: &str) {
        match self.spinner.lock().ok().and_then(|s| s.clone()) {
            Some(pb) => pb.suspend(|| println!("{}", text)),
            None => println!("{}", text),
        }
    }

    fn clear_spinner(&self) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl DiscussionProgress for DiscussionView {
    fn on_round_start(&self, kind: RoundKind) {
        if !self.show_progress {
            return;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(Self::waiting_message(kind));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(previous) = spinner.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_message(&self, message: &Message) {
        self.print(&ConsoleFormatter::format_message(message, &self.roster));
    }

    fn on_round_complete(&self, _kind: RoundKind, _merged: usize, failed: usize) {
        self.clear_spinner();
        if failed > 0 {
            let noun = if failed == 1 { "advisor" } else { "advisors" };
            println!("{}", format!("({} {} did not answer)", failed, noun).dimmed());
        }
    }

    fn on_round_failed(&self, kind: RoundKind, reason: &str) {
        self.clear_spinner();
        if kind.is_autonomous() {
            println!("{}", format!("Discussion paused: {}", reason).dimmed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cleared_after_round() {
        let view = DiscussionView::new(Arc::new(PersonaRoster::advisory_board()), true);
        view.on_round_start(RoundKind::User);
        assert!(view.spinner.lock().unwrap().is_some());

        view.on_message(&Message::user("hello"));
        view.on_round_complete(RoundKind::User, 3, 0);
        assert!(view.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_quiet_view_has_no_spinner() {
        let view = DiscussionView::new(Arc::new(PersonaRoster::advisory_board()), false);
        view.on_round_start(RoundKind::Autonomous(1));
        assert!(view.spinner.lock().unwrap().is_none());
        view.on_round_failed(RoundKind::Autonomous(1), "Transport error");
    }

    #[test]
    fn test_waiting_messages() {
        assert_eq!(
            DiscussionView::waiting_message(RoundKind::Autonomous(2)),
            "Follow-up round 2..."
        );
    }
}
