// src/ui.rs
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const BANNER: &str = r#"
    ____  __                 __                  ______
   / __ \/ /_  ____ _____  / /_____  ____ ___  / ____/_  _____
  / /_/ / __ \/ __ `/ __ \/ __/ __ \/ __ `__ \/ __/ / / / / _ \
 / ____/ / / / /_/ / / / / /_/ /_/ / / / / / / /___/ /_/ /  __/
/_/   /_/ /_/\__,_/_/ /_/\__/\____/_/ /_/ /_/_____/\__, /\___/
                                                  /____/
"#;

const BYLINE: &str = "Advanced OSINT & Recon Framework • by Chino";

/// Handle for all styled terminal output.
///
/// Passed by value to whatever needs to talk to the user; a quiet console
/// swallows everything.
#[derive(Debug, Clone, Default)]
pub struct Console {
    quiet: bool,
}

impl Console {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn banner(&self) {
        if self.quiet {
            return;
        }
        // Clear terminal
        print!("\x1B[2J\x1B[1;1H");
        println!("{}", BANNER.truecolor(175, 0, 255));
        println!("{:>23}{}\n", "", BYLINE.white().bold());
    }

    pub fn start_panel(&self, domain: &str) {
        if self.quiet {
            return;
        }
        let label = "starting OSINT in:";
        let inner = label.chars().count() + domain.chars().count() + 3;

        println!("{}", format!("╭{}╮", "─".repeat(inner)).purple().bold());
        println!(
            "{} {} {} {}",
            "│".purple().bold(),
            label.red().bold(),
            domain.white().bold(),
            "│".purple().bold()
        );
        println!("{}", format!("╰{}╯", "─".repeat(inner)).purple().bold());
    }

    /// Fixed-length animation; no work happens while it runs.
    pub async fn progress(&self, steps: u64, delay: Duration) {
        let bar = if self.quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(steps)
        };
        bar.set_style(
            ProgressStyle::with_template("{msg} {bar:40.magenta/blue} {percent:>3}% {elapsed_precise}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("━╸ "),
        );
        bar.set_message("Collecting data...");

        for _ in 0..steps {
            tokio::time::sleep(delay).await;
            bar.inc(1);
        }
        bar.finish();
    }

    pub fn collecting(&self, domain: &str) {
        if !self.quiet {
            println!("{}", format!("[*] Collecting subdomains of {}...", domain).yellow().bold());
        }
    }

    pub fn report_generated(&self, filename: &str) {
        if !self.quiet {
            println!("\n{}", format!("REPORT GENERATED: {}", filename).green().bold());
            println!("{}", "Open the generated PDF.".cyan().bold());
        }
    }

    pub fn farewell(&self) {
        if !self.quiet {
            println!("\n{}", "PhantomEye.".cyan().bold());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_quiet_progress_runs_all_steps() {
        let console = Console::quiet();
        console.progress(8, Duration::ZERO).await;
        console.banner();
        console.start_panel("example.com");
        console.collecting("example.com");
        console.report_generated("PhantomEye_Report_example.com_1.pdf");
        console.farewell();
    }
}
