// File: crates/churn-charts/tests/generate.rs
// Purpose: Every chart procedure writes one PNG with the expected pixel size.

use std::path::Path;

use churn_charts::{charts, generate_all, Config, ALL};

fn config_in(dir: &Path) -> Config {
    Config::default().with_out_dir(dir)
}

fn assert_png(path: &Path, width: u32, height: u32) {
    let (w, h) = image::image_dimensions(path).expect("readable png");
    assert_eq!((w, h), (width, height), "{}", path.display());
}

#[test]
fn single_charts_land_in_out_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config_in(dir.path());

    let risk = charts::risk_distribution::render(&cfg).expect("risk chart");
    assert_eq!(risk, dir.path().join("01_risk_distribution.png"));
    assert_png(&risk, 1500, 900);

    let lift = charts::lift_vs_roi::render(&cfg).expect("lift chart");
    assert_png(&lift, 1650, 900);

    let quadrant = charts::quadrant_matrix::render(&cfg).expect("quadrant chart");
    assert_png(&quadrant, 1500, 1200);
}

#[test]
fn output_dir_is_created_on_demand() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config_in(&dir.path().join("nested/viz"));
    let path = charts::ab_test::render(&cfg).expect("ab chart");
    assert!(path.exists());
}

#[test]
fn generate_all_writes_every_chart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = config_in(dir.path());
    // low resolution keeps the full run quick
    cfg.dpi = 36.0;

    let written = generate_all(&cfg).expect("all charts");
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().and_then(|n| n.to_str()).unwrap_or_default().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "01_risk_distribution.png",
            "02_survival_curves.png",
            "03_threshold_analysis.png",
            "04_feature_importance_comparison.png",
            "05_four_quadrant_matrix.png",
            "06_intervention_timing.png",
            "07_revenue_impact.png",
            "08_ab_test_results.png",
            "09_intervention_roi.png",
            "10_lift_vs_roi.png",
            "Executive_summary.png",
        ]
    );
    assert_eq!(ALL.len(), written.len());
    assert_png(&dir.path().join("04_feature_importance_comparison.png"), 504, 216);
    assert_png(&dir.path().join("Executive_summary.png"), 576, 360);

    // a second run overwrites the same files
    let again = generate_all(&cfg).expect("second run");
    assert_eq!(again, written);
}

#[test]
fn out_dir_blocked_by_a_file_fails_before_rendering() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blocker = dir.path().join("viz");
    std::fs::write(&blocker, b"not a directory").expect("write blocker");

    let err = generate_all(&config_in(&blocker)).expect_err("out dir is a file");
    assert!(format!("{err:#}").contains("creating output directory"), "{err:#}");

    let entries: Vec<_> = std::fs::read_dir(dir.path()).expect("read tempdir").collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(std::fs::read(&blocker).expect("blocker intact"), b"not a directory");
}

#[test]
fn first_failing_chart_aborts_the_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = config_in(dir.path());
    cfg.dpi = 36.0;
    // a directory where the first PNG should go makes its write fail
    std::fs::create_dir(dir.path().join(ALL[0].file)).expect("occupy first file");

    let err = generate_all(&cfg).expect_err("first chart cannot be written");
    let chain = format!("{err:#}");
    assert!(chain.contains("rendering risk distribution chart"), "{chain}");
    assert!(chain.contains("01_risk_distribution.png"), "{chain}");

    for job in &ALL[1..] {
        assert!(!dir.path().join(job.file).exists(), "{} written after abort", job.file);
    }
}
