//! Progress reporting for a single fan-out

use colored::Colorize;
use council_application::ports::progress::ProgressNotifier;
use council_domain::Persona;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Progress bar that ticks as each persona settles
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_fanout_start(&self, total_personas: usize) {
        let pb = ProgressBar::new(total_personas as u64);
        pb.set_style(Self::style());
        pb.set_prefix("Asking the board");
        pb.set_message("waiting...");
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_persona_complete(&self, persona: &Persona, success: bool) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), persona.name())
            } else {
                format!("{} {}", "x".red(), persona.name())
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_fanout_complete(&self) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Plain text progress for non-interactive output
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_fanout_start(&self, total_personas: usize) {
        eprintln!("{} Asking {} personas", "->".cyan(), total_personas);
    }

    fn on_persona_complete(&self, persona: &Persona, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), persona.name());
        } else {
            eprintln!("  {} {} (failed)", "x".red(), persona.name());
        }
    }

    fn on_fanout_complete(&self) {}
}
