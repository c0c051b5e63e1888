use fault_core::fault::MAX_ADJUSTMENT;
use fault_core::{CancelToken, GenerationStatus, TerrainConfig, TerrainEngine, generate};
use std::thread;
use std::time::Duration;

#[test]
fn test_end_to_end_small_terrain() {
    let faults = 50;
    let terrain = generate(10, 10, 4, faults).expect("generation failed");

    assert_eq!(terrain.grid.len(), 100);
    assert_eq!(terrain.faults_applied, faults);
    assert!(terrain.is_complete());

    let total_mass: u64 = terrain.grid.points().iter().map(|p| p.height()).sum();
    assert!(total_mass > 0, "50 faults raised nothing");
    assert!(terrain.grid.max_height() > 0);
    assert!(terrain.grid.max_height() <= faults as u64 * MAX_ADJUSTMENT);

    // Each fault raises at most every point once, by at most MAX_ADJUSTMENT
    assert!(total_mass <= faults as u64 * MAX_ADJUSTMENT * 100);
}

#[test]
fn test_grid_stable_after_generate() {
    let terrain = generate(32, 24, 8, 200).expect("generation failed");
    assert!(terrain.is_complete());
    assert_eq!(terrain.faults_applied, terrain.config.faults);

    let min = terrain.grid.min_height();
    let max = terrain.grid.max_height();
    let snapshot = terrain.grid.to_height_map();

    // Nothing can still be writing once generate has returned
    thread::sleep(Duration::from_millis(20));
    assert_eq!(terrain.grid.min_height(), min);
    assert_eq!(terrain.grid.max_height(), max);
    assert_eq!(terrain.grid.to_height_map(), snapshot);
}

#[test]
fn test_fault_count_exact_across_thread_counts() {
    for threads in [1, 2, 3, 7, 16] {
        let engine = TerrainEngine::new(TerrainConfig::new(16, 16, threads, 97)).unwrap();
        let terrain = engine.generate().unwrap();
        assert_eq!(terrain.faults_applied, 97, "threads = {threads}");
    }
}

#[test]
fn test_cancel_mid_run_reports_partial() {
    let engine = TerrainEngine::new(TerrainConfig::new(256, 256, 2, 1_000_000)).unwrap();
    let cancel = CancelToken::new();

    let terrain = thread::scope(|s| {
        let run = s.spawn(|| engine.generate_with_cancel(&cancel));
        thread::sleep(Duration::from_millis(50));
        cancel.cancel();
        run.join().unwrap()
    })
    .expect("generation failed");

    match terrain.status {
        GenerationStatus::Cancelled { remaining } => {
            assert!(remaining > 0);
            assert_eq!(terrain.faults_applied + remaining, 1_000_000);
        }
        GenerationStatus::Complete => panic!("a million faults finished in 50 ms"),
    }
    assert!(!terrain.is_complete());
}

#[test]
fn test_default_config_is_valid() {
    let engine = TerrainEngine::new(TerrainConfig::default()).unwrap();
    assert_eq!(engine.config().width, 512);
    assert_eq!(engine.config().faults, 1000);
}
