/// End-to-end frontend tests.
///
/// Interactive sessions are driven with scripted stdin (`Cursor`) and a
/// captured `Vec<u8>` stdout; subcommands run through `commands::execute`
/// against real temporary directories.
use foldersmith_cli::commands::execute;
use foldersmith_cli::{Command, Session, SessionOutcome};
use foldersmith_core::materialize::MARKER_FILE;
use foldersmith_core::{Approach, OrganizerError, OrganizerSettings};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn session(script: &str) -> (SessionOutcome, String) {
    session_with(script, OrganizerSettings::default())
}

fn session_with(script: &str, settings: OrganizerSettings) -> (SessionOutcome, String) {
    let mut out = Vec::new();
    let outcome = Session::new(Cursor::new(script.to_string()), &mut out, settings)
        .run()
        .unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

fn exec(command: Command) -> anyhow::Result<String> {
    let mut out = Vec::new();
    execute(&command, &OrganizerSettings::default(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

// ── Interactive session ──────────────────────────────────────────────────────

#[test]
fn enter_everywhere_shows_hybrid_and_exits() {
    let (outcome, text) = session("\n\n\n");

    assert_eq!(outcome.approach, Approach::Hybrid);
    assert!(text.contains("1. By Type\n2. By Project\n3. By Date\n4. Hybrid Approach\n"));
    assert!(text.contains("📋 Suggested Structure (Hybrid Approach):"));
    assert!(text.contains("📁 01_Inbox\n  📁 New_Items\n"));
    assert!(text.contains("🎉 Thank you for using the Data Organization Structure Suggester!"));
}

#[test]
fn dry_run_previews_first_ten_paths() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("organized");
    let script = format!("1\ny\n{}\n\nn\n", path_str(&base));

    let (outcome, text) = session(&script);

    let result = outcome.materialized.unwrap();
    assert!(result.dry_run);
    assert_eq!(result.len(), Approach::ByType.template().node_count());
    assert!(text.contains(&format!("🔍 Dry run - Would create {} folders:", result.len())));
    assert!(text.contains(&format!("... and {} more folders", result.len() - 10)));
    assert!(!base.exists());
}

#[test]
fn answering_n_to_dry_run_creates_folders() {
    let tmp = TempDir::new().unwrap();
    let script = format!("3\ny\n{}\nN\n\n", path_str(tmp.path()));

    let (outcome, text) = session(&script);

    let result = outcome.materialized.unwrap();
    assert!(!result.dry_run);
    assert!(text.contains(&format!("✅ Created {} folders successfully!", result.len())));
    assert!(tmp.path().join("2023/Archive").join(MARKER_FILE).is_file());
}

#[test]
fn creation_error_is_printed_and_session_continues() {
    let tmp = TempDir::new().unwrap();
    // A regular file where the first hybrid folder should go.
    fs::write(tmp.path().join("01_Inbox"), b"squatter").unwrap();
    let script = format!("\ny\n{}\nn\ny\n{}\n", path_str(tmp.path()), path_str(tmp.path()));

    let (outcome, text) = session(&script);

    assert!(outcome.materialized.is_none());
    assert!(text.contains("❌ Error creating folders:"));
    assert!(outcome.analysis.is_some(), "analysis prompt must still run");
}

#[test]
fn analysis_of_missing_path_prints_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("gone");
    let script = format!("\nn\ny\n{}\n", path_str(&missing));

    let (outcome, text) = session(&script);

    assert!(outcome.analysis.unwrap().is_error());
    assert!(text.contains(&format!("❌ Path {} does not exist", missing.display())));
}

#[test]
fn analysis_prints_totals_and_recommendations() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.pdf"), b"x").unwrap();
    fs::write(tmp.path().join("b.docx"), b"x").unwrap();
    let script = format!("\nn\ny\n{}\n", path_str(tmp.path()));

    let (_, text) = session(&script);

    assert!(text.contains("📊 Analysis Results:"));
    assert!(text.contains("Total files: 2"));
    assert!(text.contains("File types found: 2"));
    assert!(text.contains("Large files (>100MB): 0"));
    assert!(text.contains("  • Consider using 'by_project' approach - you have many document files"));
}

#[test]
fn preview_limit_comes_from_settings() {
    let tmp = TempDir::new().unwrap();
    let settings = OrganizerSettings {
        preview_limit: 2,
        ..Default::default()
    };
    let script = format!("2\ny\n{}\n\n", path_str(tmp.path()));

    let (outcome, text) = session_with(&script, settings);

    let total = outcome.materialized.unwrap().len();
    assert!(text.contains(&format!("... and {} more folders", total - 2)));
}

// ── Subcommands ──────────────────────────────────────────────────────────────

#[test]
fn list_shows_every_approach_with_counts() {
    let text = exec(Command::List).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("by_type"));
    assert!(text.contains("36 folders"));
    assert!(text.contains("hybrid_approach"));
}

#[test]
fn show_uses_approach_title() {
    let text = exec(Command::Show {
        approach: "by_type".into(),
    })
    .unwrap();
    assert!(text.starts_with("📋 Suggested Structure (By Type):\n"));
    assert!(text.contains("📁 Documents\n  📁 PDFs\n"));
}

#[test]
fn show_unknown_approach_fails() {
    let err = exec(Command::Show {
        approach: "by_size".into(),
    })
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<OrganizerError>(),
        Some(OrganizerError::UnknownApproach(name)) if name == "by_size"
    ));
}

#[test]
fn create_is_dry_run_unless_applied() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("target");

    let text = exec(Command::Create {
        approach: "by_project".into(),
        base: base.clone(),
        apply: false,
    })
    .unwrap();
    assert!(text.contains("--apply"));
    assert!(!base.exists());

    exec(Command::Create {
        approach: "by_project".into(),
        base: base.clone(),
        apply: true,
    })
    .unwrap();
    assert!(base
        .join("Templates_and_Resources/Document_Templates")
        .join(MARKER_FILE)
        .is_file());
}

#[test]
fn analyze_writes_csv_tally() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("one.mp3"), b"x").unwrap();
    let csv = tmp.path().join("tally.csv");

    exec(Command::Analyze {
        path: data,
        csv: Some(csv.clone()),
    })
    .unwrap();

    let text = fs::read_to_string(csv).unwrap();
    assert_eq!(text, "extension,category,count\n.mp3,audio,1\n");
}

#[test]
fn plan_defaults_to_recommended_approach() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("photos");
    fs::create_dir(&data).unwrap();
    for name in ["a.jpg", "b.png", "c.mov"] {
        fs::write(data.join(name), b"x").unwrap();
    }
    let output: PathBuf = tmp.path().join("plan.json");

    exec(Command::Plan {
        path: data,
        approach: None,
        output: Some(output.clone()),
    })
    .unwrap();

    let plan: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
    assert_eq!(plan["approach"], "by_type");
    assert_eq!(plan["analysis"]["total_files"], 3);
    assert!(plan["suggested_structure"]["Media"].is_object());
}

#[test]
fn plan_for_missing_path_prints_json_with_error() {
    let tmp = TempDir::new().unwrap();
    let text = exec(Command::Plan {
        path: tmp.path().join("nowhere"),
        approach: None,
        output: None,
    })
    .unwrap();

    let plan: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(plan["approach"], "hybrid_approach");
    assert!(plan["analysis"]["error"].is_string());
}

/// The approach chosen without `--approach` agrees with the analysis
/// embedded in the same plan.
#[test]
fn plan_approach_matches_embedded_analysis() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("papers");
    fs::create_dir(&data).unwrap();
    for name in ["a.pdf", "b.docx", "c.jpg"] {
        fs::write(data.join(name), b"x").unwrap();
    }

    let text = exec(Command::Plan {
        path: data,
        approach: None,
        output: None,
    })
    .unwrap();

    let plan: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(plan["approach"], "by_project");
    assert_eq!(plan["analysis"]["total_files"], 3);
    assert_eq!(
        plan["analysis"]["recommendations"][0],
        "Consider using 'by_project' approach - you have many document files"
    );
}
