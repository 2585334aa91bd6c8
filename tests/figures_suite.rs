use std::fs;
use std::path::Path;

use netplots::{Config, OutputConfig, OutputFormat, catalog, run_all, run_with_dump};

const EXPECTED: [&str; 5] = ["star", "tree", "smallworld", "random", "all-graphs"];

fn config(dir: &Path, format: OutputFormat, seed: Option<u64>) -> Config {
    Config {
        output: OutputConfig {
            dir: dir.to_path_buf(),
            format,
        },
        seed,
        ..Config::default()
    }
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read_dir failed")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn expected_names(ext: &str) -> Vec<String> {
    let mut names: Vec<String> = EXPECTED.iter().map(|name| format!("{name}.{ext}")).collect();
    names.sort();
    names
}

#[test]
fn writes_five_pdf_documents() {
    let dir = tempfile::tempdir().expect("tempdir");
    let rendered = run_all(&config(dir.path(), OutputFormat::Pdf, None)).expect("run failed");
    assert_eq!(rendered.len(), 5);
    assert_eq!(listing(dir.path()), expected_names("pdf"));

    for name in EXPECTED {
        let bytes = fs::read(dir.path().join(format!("{name}.pdf"))).expect("figure missing");
        assert!(bytes.starts_with(b"%PDF-"), "{name}: missing header");
        assert!(bytes.ends_with(b"%%EOF\n"), "{name}: missing trailer");
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Type /Page "), "{name}: no page object");
    }
}

#[test]
fn combined_pdf_carries_titles() {
    let dir = tempfile::tempdir().expect("tempdir");
    run_all(&config(dir.path(), OutputFormat::Pdf, Some(1))).expect("run failed");
    let text = fs::read_to_string(dir.path().join("all-graphs.pdf")).expect("combined missing");
    let titles = [
        "(Star \\(simple\\)) Tj",
        "(Tree \\(rather simple\\)) Tj",
        "(Small-world graph \\(rather complex\\)) Tj",
        "(Random graph \\(very complex\\)) Tj",
    ];
    let mut last = 0;
    for title in titles {
        let at = text.find(title).unwrap_or_else(|| panic!("missing {title}"));
        assert!(at > last, "{title} out of order");
        last = at;
    }
    let single = fs::read_to_string(dir.path().join("star.pdf")).expect("star missing");
    assert!(!single.contains(" Tj"));
}

#[test]
fn svg_output_parses() {
    let dir = tempfile::tempdir().expect("tempdir");
    run_all(&config(dir.path(), OutputFormat::Svg, Some(7))).expect("run failed");
    assert_eq!(listing(dir.path()), expected_names("svg"));
    for name in EXPECTED {
        let svg = fs::read_to_string(dir.path().join(format!("{name}.svg"))).expect("figure missing");
        let tree = usvg::Tree::from_str(&svg, &usvg::Options::default());
        assert!(tree.is_ok(), "{name}: invalid svg");
    }
    let combined = fs::read_to_string(dir.path().join("all-graphs.svg")).expect("combined missing");
    assert_eq!(combined.matches("<text").count(), 4);
    assert_eq!(combined.matches("<circle").count(), 10 + 31 + 35 + 25);
}

#[cfg(feature = "png")]
#[test]
fn png_output_has_signature() {
    let dir = tempfile::tempdir().expect("tempdir");
    run_all(&config(dir.path(), OutputFormat::Png, Some(7))).expect("run failed");
    let bytes = fs::read(dir.path().join("star.png")).expect("figure missing");
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[test]
fn seeded_runs_reproduce_graphs() {
    let first = tempfile::tempdir().expect("tempdir");
    let second = tempfile::tempdir().expect("tempdir");
    let dump_a = first.path().join("layout.json");
    let dump_b = second.path().join("layout.json");
    run_with_dump(&config(first.path(), OutputFormat::Pdf, Some(42)), Some(&dump_a)).expect("first run");
    run_with_dump(&config(second.path(), OutputFormat::Pdf, Some(42)), Some(&dump_b)).expect("second run");

    let a: serde_json::Value = serde_json::from_str(&fs::read_to_string(&dump_a).expect("dump a")).expect("json a");
    let b: serde_json::Value = serde_json::from_str(&fs::read_to_string(&dump_b).expect("dump b")).expect("json b");
    assert_eq!(a, b);

    assert_eq!(
        fs::read(first.path().join("random.pdf")).expect("random a"),
        fs::read(second.path().join("random.pdf")).expect("random b")
    );
}

#[test]
fn combined_panel_redraws_random_graphs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dump_path = dir.path().join("layout.json");
    run_with_dump(&config(dir.path(), OutputFormat::Pdf, Some(2024)), Some(&dump_path)).expect("run failed");
    let dump: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&dump_path).expect("dump")).expect("json");

    let single = &dump["figures"][3]["panels"][0]["edges"];
    let combined = &dump["figures"][4]["panels"][3]["edges"];
    assert_eq!(dump["figures"][4]["panels"][3]["nodeCount"], 25);
    // two independent G(25, 0.4) draws agreeing edge for edge is practically impossible
    assert_ne!(single, combined);

    assert_eq!(dump["figures"][0]["panels"][0]["edges"], dump["figures"][4]["panels"][0]["edges"]);
}

#[test]
fn missing_output_directory_produces_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("output");
    assert!(run_all(&config(&missing, OutputFormat::Pdf, None)).is_err());
    assert!(!missing.exists());
    assert!(listing(dir.path()).is_empty());
}

#[cfg(feature = "cli")]
#[test]
fn binary_reports_failure_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_netplots"))
        .arg("-o")
        .arg(dir.path().join("output"))
        .env("NETPLOTS_LOG_FORMAT", "json")
        .env("RUST_LOG", "info")
        .output()
        .expect("run binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("does not exist").count(), 1, "{stderr}");
    assert!(!stderr.contains("error: "));
}

#[test]
fn catalog_matches_outputs() {
    let names: Vec<&str> = catalog().iter().map(|figure| figure.name).collect();
    assert_eq!(names, EXPECTED);
}
