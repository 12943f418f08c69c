use crate::emails::guess_emails;
use crate::error::OutputContext;
use crate::report::render_pdf;
use crate::session::Session;
use crate::sources::{HackerTargetSource, Source};
use crate::types::{Config, PhantomEyeError, ReportData};
use crate::ui::Console;
use crate::utils::{deduplicate_subdomains, fallback_subdomains, normalize_domain, report_filename};
use chrono::Local;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

pub struct PhantomEyeEngine {
    config: Config,
    session: Session,
    source: Box<dyn Source>,
    console: Console,
}

impl PhantomEyeEngine {
    pub fn new(config: Config, console: Console) -> Result<Self, PhantomEyeError> {
        let source = Box::new(HackerTargetSource::new(config.endpoint.clone()));
        Self::with_source(config, console, source)
    }

    pub fn with_source(
        config: Config,
        console: Console,
        source: Box<dyn Source>,
    ) -> Result<Self, PhantomEyeError> {
        let session = Session::new(&config)?;

        Ok(Self {
            config,
            session,
            source,
            console,
        })
    }

    /// Subdomains of `domain` (trimmed and lowercased first): unique, first-seen order, at most `max_subdomains`.
    ///
    /// Never fails. Any lookup failure is logged with its cause and replaced
    /// by the synthetic fallback list.
    pub async fn collect_subdomains(&self, domain: &str) -> Vec<String> {
        let domain = normalize_domain(domain);
        let domain = domain.as_str();
        self.console.collecting(domain);
        if !self.config.collect_delay.is_zero() {
            tokio::time::sleep(self.config.collect_delay).await;
        }

        let start = Instant::now();
        match self.source.enumerate(domain, &self.session).await {
            Ok(hosts) => {
                let mut unique = deduplicate_subdomains(hosts);
                unique.truncate(self.config.max_subdomains);
                info!(
                    "{}: Found {} subdomains for {} in {:?}",
                    self.source.name(),
                    unique.len(),
                    domain,
                    start.elapsed()
                );
                unique
            }
            Err(e) => {
                debug!("{}: lookup for {} failed, using fallback: {}", self.source.name(), domain, e);
                fallback_subdomains(domain)
            }
        }
    }

    /// Collects the data for `domain` and writes the PDF report into the
    /// output directory. Returns the path of the written file.
    pub async fn generate_report(&self, domain: &str) -> Result<PathBuf, PhantomEyeError> {
        let domain = normalize_domain(domain);
        let domain = domain.as_str();
        let subdomains = self.collect_subdomains(domain).await;
        let emails = guess_emails(domain);

        let generated_at = Local::now();
        let filename = report_filename(domain, generated_at.timestamp());
        let path = self.config.output_dir.join(&filename);

        let data = ReportData {
            domain: domain.to_string(),
            generated_at,
            subdomains,
            emails,
        };

        // render fully before the file is created
        let bytes = render_pdf(&data)?;
        std::fs::write(&path, bytes).output_context(&path)?;

        info!("Report for {} written to {}", domain, path.display());
        self.console.report_generated(&filename);

        Ok(path)
    }
}
