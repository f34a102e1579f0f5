/// Text rendering of templates, materialization results, and reports.
///
/// Every function writes to a caller-supplied `Write` so the same code
/// serves stdout and the tests.
use foldersmith_core::model::size::{format_count, format_mb};
use foldersmith_core::{
    render, AnalysisReport, Approach, FileAnalysisReport, FolderTemplate, MaterializationResult,
};
use std::io::{self, Write};

pub fn write_approach_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nAvailable Organization Approaches:")?;
    for (i, approach) in Approach::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, approach.title())?;
    }
    Ok(())
}

/// One line per folder, two spaces of indent per level.
pub fn write_template<W: Write>(out: &mut W, template: &FolderTemplate) -> io::Result<()> {
    for (depth, name) in render(template) {
        writeln!(out, "{}📁 {name}", "  ".repeat(depth))?;
    }
    Ok(())
}

/// Dry runs list the first `preview_limit` paths; real runs print a count.
pub fn write_materialization<W: Write>(
    out: &mut W,
    result: &MaterializationResult,
    preview_limit: usize,
) -> io::Result<()> {
    if result.dry_run {
        writeln!(out, "\n🔍 Dry run - Would create {} folders:", result.len())?;
        for folder in result.folders.iter().take(preview_limit) {
            writeln!(out, "  📁 {}", folder.display())?;
        }
        if result.len() > preview_limit {
            writeln!(out, "  ... and {} more folders", result.len() - preview_limit)?;
        }
    } else {
        writeln!(
            out,
            "\n✅ Created {} folders successfully! ({} new README markers)",
            result.len(),
            result.markers_written
        )?;
    }
    Ok(())
}

pub fn write_analysis<W: Write>(
    out: &mut W,
    analysis: &AnalysisReport,
    large_threshold_mb: f64,
) -> io::Result<()> {
    match analysis {
        AnalysisReport::Completed(report) => write_report(out, report, large_threshold_mb),
        AnalysisReport::Missing { error } => writeln!(out, "\n❌ {error}"),
    }
}

pub fn write_report<W: Write>(
    out: &mut W,
    report: &FileAnalysisReport,
    large_threshold_mb: f64,
) -> io::Result<()> {
    writeln!(out, "\n📊 Analysis Results:")?;
    writeln!(out, "Total files: {}", format_count(report.total_files))?;
    writeln!(out, "File types found: {}", report.file_types.len())?;
    writeln!(
        out,
        "Large files (>{large_threshold_mb}MB): {}",
        report.large_files.len()
    )?;
    if report.skipped_entries > 0 {
        writeln!(out, "Skipped (unreadable): {}", format_count(report.skipped_entries))?;
    }

    let breakdown = report.category_breakdown();
    if !breakdown.is_empty() {
        writeln!(out, "\nBy category:")?;
        for (category, count) in breakdown {
            let label = category.map_or("Other", |c| c.label());
            writeln!(out, "  {label:<14} {}", format_count(count))?;
        }
    }

    if !report.large_files.is_empty() {
        writeln!(out, "\nLarge files:")?;
        for file in &report.large_files {
            writeln!(out, "  {:>10}  {}", format_mb(file.size_mb), file.path)?;
        }
    }

    writeln!(out, "\n💡 Recommendations:")?;
    for rec in &report.recommendations {
        writeln!(out, "  • {rec}")?;
    }
    Ok(())
}
