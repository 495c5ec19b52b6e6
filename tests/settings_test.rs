use beatlane::config::EngineSettings;
use beatlane::game::JudgeWindows;

#[test]
fn test_settings_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let settings = EngineSettings {
        judge: JudgeWindows {
            hit_window_s: 0.12,
            miss_window_s: 0.19,
        },
        travel_time_s: 1.8,
        trail_window_s: 0.25,
    };
    settings.save(&path).unwrap();

    let loaded = EngineSettings::load(&path);
    assert_eq!(loaded, settings);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.json");

    let loaded = EngineSettings::load(&path);
    assert_eq!(loaded, EngineSettings::default());
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let loaded = EngineSettings::load(&path);
    assert_eq!(loaded, EngineSettings::default());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deep").join("settings.json");

    EngineSettings::default().save(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_default_windows_are_asymmetric() {
    let settings = EngineSettings::default();
    assert!(settings.judge.miss_window_s > settings.judge.hit_window_s);
    assert!(settings.travel_time_s > 0.0);
    assert!(settings.trail_window_s > 0.0);
}
