use std::{fs, path::PathBuf};

use tempfile::tempdir;

use figura_cli::{Args, CliError, run};

/// Collects all .fgm files from a directory
fn collect_markup_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("fgm")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args(input: &PathBuf, output: &PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        config: None,
        line_spacing: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demos = collect_markup_files(demos_dir());
    assert!(!demos.is_empty(), "No demos found in demos/");

    let mut failed = Vec::new();
    for demo in &demos {
        let output = temp_dir
            .path()
            .join(format!("{}.txt", demo.file_stem().unwrap().to_string_lossy()));

        match run(&args(demo, &output)) {
            Ok(()) => {
                let listing = fs::read_to_string(&output).unwrap();
                assert!(!listing.is_empty(), "{} produced no runs", demo.display());
            }
            Err(e) => failed.push((demo.clone(), e)),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demos = collect_markup_files(demos_dir().join("errors"));
    assert!(!demos.is_empty(), "No error demos found in demos/errors/");

    for demo in &demos {
        let output = temp_dir.path().join("out.txt");
        let result = run(&args(demo, &output));

        assert!(
            matches!(result, Err(CliError::Figura(figura::FiguraError::Markup { .. }))),
            "{} should be rejected as markup, got {result:?}",
            demo.display()
        );
        assert!(!output.exists(), "{} wrote a listing", demo.display());
    }
}

#[test]
fn e2e_config_line_spacing_and_defaults() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("in.fgm");
    let output = temp_dir.path().join("out.txt");
    let config = temp_dir.path().join("config.toml");
    fs::write(&input, "one[br]two").unwrap();
    fs::write(
        &config,
        "[text]\nfont_family = \"serif\"\n\n[markup]\nline_spacing = \"1.5em\"\n",
    )
    .unwrap();

    let mut args = args(&input, &output);
    args.config = Some(config.to_string_lossy().to_string());
    run(&args).unwrap();

    let listing = fs::read_to_string(&output).unwrap();
    assert_eq!(
        listing,
        "base: font-family=serif\n\"one\"\n[br] dy=1.5em\n\"two\"\n"
    );

    args.line_spacing = Some("2em".to_string());
    run(&args).unwrap();
    assert!(fs::read_to_string(&output).unwrap().contains("[br] dy=2em"));
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("absent.fgm");
    let output = temp_dir.path().join("out.txt");

    assert!(matches!(run(&args(&input, &output)), Err(CliError::Io(_))));
}
