/// Non-interactive subcommands.
use crate::args::Command;
use crate::output;
use anyhow::{Context, Result};
use foldersmith_core::analysis::recommended_approach;
use foldersmith_core::export::{write_extension_csv, write_plan, OrganizationPlan};
use foldersmith_core::{
    analyze_with, materialize, suggest, AnalysisReport, Approach, OrganizerSettings,
};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Run one subcommand, writing human-readable output to `out`.
///
/// A missing analysis path is reported in the output, not as an error.
pub fn execute<W: Write>(
    command: &Command,
    settings: &OrganizerSettings,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::List => list(out),
        Command::Show { approach } => show(approach, out),
        Command::Create {
            approach,
            base,
            apply,
        } => create(approach, base, *apply, settings, out),
        Command::Analyze { path, csv } => analyze(path, csv.as_deref(), settings, out),
        Command::Plan {
            path,
            approach,
            output,
        } => plan(path, approach.as_deref(), output.as_deref(), settings, out),
    }
}

fn list<W: Write>(out: &mut W) -> Result<()> {
    for (i, approach) in Approach::ALL.iter().enumerate() {
        writeln!(
            out,
            "{}. {:<16} {:<16} {} folders",
            i + 1,
            approach.title(),
            approach.name(),
            approach.template().node_count()
        )?;
    }
    Ok(())
}

fn show<W: Write>(name: &str, out: &mut W) -> Result<()> {
    let approach: Approach = name.parse()?;
    writeln!(out, "📋 Suggested Structure ({}):", approach.title())?;
    writeln!(out, "{}", "-".repeat(40))?;
    output::write_template(out, approach.template())?;
    Ok(())
}

fn create<W: Write>(
    name: &str,
    base: &Path,
    apply: bool,
    settings: &OrganizerSettings,
    out: &mut W,
) -> Result<()> {
    let template = suggest(name)?;
    let result = materialize(base, template, !apply)
        .with_context(|| format!("Error creating folders under {}", base.display()))?;
    output::write_materialization(out, &result, settings.preview_limit)?;
    if result.dry_run {
        writeln!(out, "\nRe-run with --apply to create these folders.")?;
    }
    Ok(())
}

fn analyze<W: Write>(
    path: &Path,
    csv: Option<&Path>,
    settings: &OrganizerSettings,
    out: &mut W,
) -> Result<()> {
    let analysis = analyze_with(path, settings, |_| {});
    output::write_analysis(out, &analysis, settings.large_file_threshold_mb)?;

    if let (Some(csv), AnalysisReport::Completed(report)) = (csv, &analysis) {
        write_extension_csv(report, csv)?;
        writeln!(out, "\nExtension tally written to {}", csv.display())?;
    }
    Ok(())
}

fn plan<W: Write>(
    path: &Path,
    approach: Option<&str>,
    output: Option<&Path>,
    settings: &OrganizerSettings,
    out: &mut W,
) -> Result<()> {
    let approach = approach.map(str::parse::<Approach>).transpose()?;
    let analysis = analyze_with(path, settings, |_| {});
    let approach = approach.unwrap_or_else(|| match &analysis {
        AnalysisReport::Completed(report) => recommended_approach(report),
        AnalysisReport::Missing { .. } => Approach::default(),
    });
    info!("Planning {} with approach {approach}", path.display());

    let plan = OrganizationPlan::new(path, approach, analysis);
    match output {
        Some(target) => {
            write_plan(&plan, target)?;
            writeln!(out, "📝 Organization plan saved to {}", target.display())?;
        }
        None => writeln!(out, "{}", serde_json::to_string_pretty(&plan)?)?,
    }
    Ok(())
}
