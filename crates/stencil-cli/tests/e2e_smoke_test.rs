use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use stencil::{
    ImportError, ImportSummary,
    geometry::Point,
    identifier::Id,
    store::{DocumentStore, JsonDocumentStore},
};
use stencil_cli::Args;

fn demos_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos")
}

/// Collects all files from a directory
fn collect_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(source: &Path, target: &Path) -> Args {
    Args {
        source: source.to_string_lossy().to_string(),
        target: target.to_string_lossy().to_string(),
        output: None,
        match_mode: None,
        by_name: false,
        config: None,
        log_level: "off".to_string(),
    }
}

/// Copies the demo app document into `dir` so runs never touch the checked-in copy.
fn fresh_target(dir: &Path) -> PathBuf {
    let target = dir.join("app.stencil");
    fs::copy(demos_dir().join("app.stencil"), &target).expect("Failed to copy demo target");
    target
}

#[test]
fn e2e_smoke_test_valid_libraries() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let libraries = collect_files(demos_dir().join("libraries"));

    assert!(
        !libraries.is_empty(),
        "No libraries found in demos/libraries/"
    );

    let mut failed = Vec::new();

    for library in &libraries {
        let target = fresh_target(temp_dir.path());

        if let Err(e) = stencil_cli::run(&args(library, &target)) {
            failed.push((library.clone(), e));
        }
    }

    if !failed.is_empty() {
        eprintln!("\nLibraries that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} library import(s) failed unexpectedly", failed.len());
    }

    println!("✅ All {} libraries imported", libraries.len());
}

#[test]
fn e2e_smoke_test_error_sources() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_sources = collect_files(demos_dir().join("errors"));

    assert!(
        !error_sources.is_empty(),
        "No error sources found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for source in &error_sources {
        let target = fresh_target(temp_dir.path());
        let before = fs::read_to_string(&target).unwrap();

        if stencil_cli::run(&args(source, &target)).is_ok() {
            unexpectedly_succeeded.push(source.clone());
        }

        // Failed runs never write the target
        assert_eq!(fs::read_to_string(&target).unwrap(), before);
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError sources that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error source(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error sources failed as expected",
        error_sources.len()
    );
}

#[test]
fn e2e_controls_update_existing_button() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let target = fresh_target(temp_dir.path());
    let output = temp_dir.path().join("merged.stencil");

    let mut run_args = args(&demos_dir().join("libraries/controls.stencil"), &target);
    run_args.output = Some(output.to_string_lossy().to_string());

    let summary = stencil_cli::run(&run_args).expect("Import failed");
    assert_eq!(summary, ImportSummary::new(2, 1));
    assert_eq!(summary.to_string(), "2 symbols added, 1 updated.");

    let store = JsonDocumentStore::default();
    let merged = store.open(&output).expect("Merged document should open");

    assert!(merged.master(Id::new("old-button")).is_none());
    let (_, button) = merged.master(Id::new("button")).unwrap();
    assert_eq!(button.frame().origin(), Point::new(0.0, 500.0));

    // The instance on Home follows the replaced button.
    assert_eq!(merged.instances_of(Id::new("button")).len(), 2);
    assert!(merged.instances_of(Id::new("old-button")).is_empty());

    assert_eq!(merged.current_page().map(|p| p.name()), Some("Symbols"));
}

#[test]
fn e2e_missing_target_starts_blank_document() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let target = temp_dir.path().join("new.stencil");

    let mut run_args = args(&demos_dir().join("libraries/icons.json"), &target);
    run_args.by_name = true;

    let summary = stencil_cli::run(&run_args).expect("Import failed");
    assert_eq!(summary, ImportSummary::new(2, 0));
    assert_eq!(summary.to_string(), "2 symbols added, 0 updated.");

    let merged = JsonDocumentStore::default().open(&target).unwrap();
    let pages: Vec<_> = merged.pages().iter().map(|p| p.name()).collect();
    assert_eq!(pages, vec!["Icons", "Symbols"]);
}

#[test]
fn e2e_cycle_is_reported() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let target = fresh_target(temp_dir.path());

    let err = stencil_cli::run(&args(&demos_dir().join("errors/cycle.stencil"), &target))
        .unwrap_err();

    assert!(matches!(err, ImportError::Cycle { .. }));
}

#[test]
fn e2e_explicit_config_sets_symbols_page() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let target = temp_dir.path().join("new.stencil");
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[import]\nsymbols_page = \"Library\"\n").unwrap();

    let mut run_args = args(&demos_dir().join("libraries/icons.json"), &target);
    run_args.config = Some(config.to_string_lossy().to_string());

    stencil_cli::run(&run_args).expect("Import failed");

    let merged = JsonDocumentStore::default().open(&target).unwrap();
    assert_eq!(merged.current_page().map(|p| p.name()), Some("Library"));
}
