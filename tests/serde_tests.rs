#![cfg(feature = "serde")]

#[allow(dead_code)]
#[path = "../benches/experiments.rs"]
mod experiments;

use pareto_compare::prelude::*;

fn experiment_report() -> ComparisonReport {
    compare(&experiments::all_solvers(), &Sense::minimize_all(3), 0, 0, (1, 2)).unwrap()
}

#[test]
fn round_trip_save_load() {
    let report = experiment_report();

    let dir = tempdir();
    let path = dir.join("report.json");
    report.save(&path).unwrap();
    let loaded = ComparisonReport::load(&path).unwrap();

    assert_eq!(loaded.labels().collect::<Vec<_>>(), vec!["CPLEX", "Greedy", "MOGA"]);
    for (label, summary) in &report {
        let other = &loaded[label.as_str()];
        assert_eq!(other.front_size, summary.front_size);
        assert_eq!(other.front, summary.front);
        assert!((other.volume - summary.volume).abs() < 1e-12);
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn json_field_shape() {
    let json = experiment_report().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let moga = &value["MOGA"];
    assert_eq!(moga["front_size"], 5);
    assert!(moga["volume"].is_f64());
    let front = moga["front"].as_array().unwrap();
    assert_eq!(front.len(), 5);
    assert_eq!(front[0].as_array().unwrap().len(), 3);
    assert_eq!(front[0][0], 15.0);
}

#[test]
fn load_rejects_garbage() {
    let dir = tempdir();
    let path = dir.join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = ComparisonReport::load(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn load_rejects_ragged_front() {
    let dir = tempdir();
    let path = dir.join("ragged.json");
    std::fs::write(
        &path,
        r#"{"MOGA": {"front": [[15.0, 2504.0, 0.05], [16.0, 2294.0]], "volume": 0.0, "front_size": 2}}"#,
    )
    .unwrap();
    let err = ComparisonReport::load(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn failed_save_leaves_no_temp_file() {
    let dir = tempdir();
    // A directory in the way makes the final rename fail.
    let path = dir.join("report.json");
    std::fs::create_dir(&path).unwrap();

    assert!(experiment_report().save(&path).is_err());
    assert!(!dir.join(".report.json.tmp").exists());
    assert!(path.is_dir());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn sense_serializes_by_name() {
    let json = serde_json::to_string(&[Sense::Minimize, Sense::Maximize]).unwrap();
    assert_eq!(json, r#"["Minimize","Maximize"]"#);
}

#[test]
fn duplicate_policy_round_trip() {
    let policy = DuplicatePolicy::Jitter {
        scale: 1e-6,
        seed: 3,
    };
    let json = serde_json::to_string(&policy).unwrap();
    let back: DuplicatePolicy = serde_json::from_str(&json).unwrap();
    assert_eq!(back, policy);
}

fn tempdir() -> std::path::PathBuf {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!(
        "pareto_compare_serde_test_{}_{id}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
