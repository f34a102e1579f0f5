/// Interactive prompt session.
///
/// Walks the user through picking an approach, optionally materializing it,
/// and optionally analysing a data directory. Input and output are generic
/// so tests can script a whole session with in-memory buffers.
///
/// End of input at any prompt is treated as an empty answer, which always
/// selects the default (hybrid, no creation, no analysis).
use crate::output;
use foldersmith_core::scanner::progress::ScanProgress;
use foldersmith_core::{
    analyze_with, materialize, AnalysisReport, Approach, MaterializationResult,
    OrganizerSettings,
};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// What a finished session did, for callers and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub approach: Approach,
    /// Set when a materialization (real or dry run) succeeded.
    pub materialized: Option<MaterializationResult>,
    pub analysis: Option<AnalysisReport>,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    settings: OrganizerSettings,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: OrganizerSettings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    /// Run the full prompt flow once.
    ///
    /// Only terminal I/O failures are returned; materialization errors are
    /// printed and the session carries on to the analysis prompt.
    pub fn run(&mut self) -> io::Result<SessionOutcome> {
        writeln!(self.output, "🗂️  Data Organization Structure Suggester")?;
        writeln!(self.output, "{}", "=".repeat(50))?;
        output::write_approach_menu(&mut self.output)?;

        let approach = self.choose_approach()?;
        info!("Session approach: {approach}");

        writeln!(self.output, "\n📋 Suggested Structure ({}):", approach.title())?;
        writeln!(self.output, "{}", "-".repeat(40))?;
        output::write_template(&mut self.output, approach.template())?;

        let materialized = self.offer_creation(approach)?;
        let analysis = self.offer_analysis()?;

        writeln!(
            self.output,
            "\n🎉 Thank you for using the Data Organization Structure Suggester!"
        )?;
        writeln!(self.output, "Remember to backup your data before reorganizing!")?;
        self.output.flush()?;

        Ok(SessionOutcome {
            approach,
            materialized,
            analysis,
        })
    }

    /// Anything other than a valid 1-based index falls back to hybrid.
    fn choose_approach(&mut self) -> io::Result<Approach> {
        let choice = self.prompt("\nSelect an approach (1-4) or press Enter for hybrid: ")?;
        if choice.is_empty() {
            return Ok(Approach::Hybrid);
        }
        let approach = choice
            .parse::<usize>()
            .ok()
            .and_then(Approach::from_index)
            .unwrap_or_else(|| {
                debug!("Invalid approach choice {choice:?}, using hybrid");
                Approach::Hybrid
            });
        Ok(approach)
    }

    fn offer_creation(&mut self, approach: Approach) -> io::Result<Option<MaterializationResult>> {
        if !self.confirm("\nWould you like to create this structure? (y/N): ")? {
            return Ok(None);
        }
        let base = self.prompt("Enter the base path where folders should be created: ")?;
        if base.is_empty() {
            return Ok(None);
        }
        let dry_run = !self.prompt("Dry run first? (Y/n): ")?.eq_ignore_ascii_case("n");

        match materialize(Path::new(&base), approach.template(), dry_run) {
            Ok(result) => {
                output::write_materialization(
                    &mut self.output,
                    &result,
                    self.settings.preview_limit,
                )?;
                Ok(Some(result))
            }
            Err(err) => {
                warn!("Materialization under {base} failed: {err}");
                writeln!(self.output, "\n❌ Error creating folders: {err}")?;
                Ok(None)
            }
        }
    }

    fn offer_analysis(&mut self) -> io::Result<Option<AnalysisReport>> {
        if !self.confirm("\nWould you like to analyze existing unstructured data? (y/N): ")? {
            return Ok(None);
        }
        let data_path = self.prompt("Enter the path to your unstructured data: ")?;
        if data_path.is_empty() {
            return Ok(None);
        }

        let out = &mut self.output;
        let mut write_error = None;
        let analysis = analyze_with(Path::new(&data_path), &self.settings, |progress| {
            if let ScanProgress::Update { files_found, .. } = progress {
                if write_error.is_none() {
                    write_error = writeln!(out, "  ... {files_found} files scanned").err();
                }
            }
        });
        if let Some(err) = write_error {
            return Err(err);
        }
        output::write_analysis(
            &mut self.output,
            &analysis,
            self.settings.large_file_threshold_mb,
        )?;
        Ok(Some(analysis))
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(self.prompt(question)?.eq_ignore_ascii_case("y"))
    }

    /// Print `question`, read one line, and return it trimmed.
    fn prompt(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input at prompt");
        }
        Ok(line.trim().to_string())
    }
}
