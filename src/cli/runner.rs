//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_settings, PaginationSettings};
use crate::error::{Error, Result};
use crate::pagination::{PageInfo, PaginationController};
use crate::source::{Line, LineSource};
use crate::types::LogLevel;
use serde_json::json;
use std::io::{self, Write};
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
    settings: PaginationSettings,
}

impl Runner {
    /// Create a new runner, loading the settings file if one was given
    ///
    /// Command-line flags take precedence over the settings file.
    pub fn new(cli: Cli) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => load_settings(path)?,
            None => PaginationSettings::default(),
        };
        if let Some(page_size) = cli.page_size {
            settings.page_size = page_size;
        }
        if let Some(level) = cli.log_level {
            settings.log_level = Some(level);
        }
        settings.validate()?;

        Ok(Self { cli, settings })
    }

    /// Effective settings after flag overrides
    pub fn settings(&self) -> &PaginationSettings {
        &self.settings
    }

    /// Log level the binary should install its subscriber with
    pub fn log_level(&self) -> LogLevel {
        self.settings.log_level.unwrap_or_default()
    }

    /// Run the CLI command, writing to stdout
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }

    /// Run the CLI command, writing to `out`
    pub fn run_with(&self, out: &mut impl Write) -> Result<()> {
        let source = LineSource::from_path(&self.cli.file)?;
        self.run_on(&source, out)
    }

    /// Run the CLI command against an already loaded source
    pub fn run_on(&self, source: &LineSource, out: &mut impl Write) -> Result<()> {
        let (mut controller, landed) = self.build_controller(source)?;

        match &self.cli.command {
            Commands::Info => self.info(&controller.info(), out),
            Commands::Show { page } => {
                match page {
                    Some(page) => jump(&mut controller, *page)?,
                    None if !landed => {
                        return Err(Error::PageOutOfRange {
                            page: self.settings.start_page,
                            pages: controller.number_of_pages(),
                        })
                    }
                    None => {}
                }
                let lines = controller.fetch_page()?;
                self.page(controller.current_page(), controller.number_of_pages(), &lines, out)
            }
            Commands::Dump { from } => {
                if let Some(page) = from {
                    jump(&mut controller, *page)?;
                }
                self.dump(&mut controller, out)
            }
        }
    }

    /// Build a controller over `source` with the effective settings applied
    fn build_controller(
        &self,
        source: &LineSource,
    ) -> Result<(PaginationController<Vec<Line>>, bool)> {
        let mut controller = PaginationController::new();
        source.attach(&mut controller)?;
        let landed = self.settings.apply(&mut controller)?;
        debug!(?controller, landed, "Controller ready");
        Ok((controller, landed))
    }

    fn info(&self, info: &PageInfo, out: &mut impl Write) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(info)?)?,
            OutputFormat::Pretty => {
                writeln!(out, "Entries:      {}", info.number_of_entries)?;
                writeln!(out, "Page size:    {}", info.page_size)?;
                writeln!(out, "Pages:        {}", info.number_of_pages)?;
                writeln!(out, "Current page: {}", info.current_page)?;
                writeln!(out, "Window:       offset {}, limit {}", info.offset, info.limit)?;
            }
        }
        Ok(())
    }

    fn page(&self, page: u64, pages: u64, lines: &[Line], out: &mut impl Write) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                let message = json!({
                    "page": page,
                    "number_of_pages": pages,
                    "lines": lines,
                });
                writeln!(out, "{message}")?;
            }
            OutputFormat::Pretty => {
                writeln!(out, "--- page {page}/{pages} ---")?;
                for line in lines {
                    writeln!(out, "{:>6}  {}", line.number, line.text)?;
                }
            }
        }
        Ok(())
    }

    fn dump(
        &self,
        controller: &mut PaginationController<Vec<Line>>,
        out: &mut impl Write,
    ) -> Result<()> {
        let first = controller.current_page();
        let pages = controller.number_of_pages();

        let mut written = 0_u64;
        for (page, lines) in (first..).zip(controller.iter_pages()) {
            self.page(page, pages, &lines?, out)?;
            written += 1;
        }
        info!(pages = written, "Dumped pages");
        Ok(())
    }
}

/// Move to `page` or report it as out of range
fn jump<T>(controller: &mut PaginationController<T>, page: u64) -> Result<()> {
    if controller.set_current_page(page) {
        Ok(())
    } else {
        Err(Error::PageOutOfRange {
            page,
            pages: controller.number_of_pages(),
        })
    }
}
