use rubig::output::MemorySink;
use rubig::sink::{NullSink, ResultSink, WarningSink};
use rubig::{CancelFlag, DirRecord, RankOrder, ScanConfig, find_big_directories};
use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

fn config(filter: u64, top: usize) -> ScanConfig {
    ScanConfig {
        filter,
        top,
        order: RankOrder::Largest,
    }
}

#[test]
fn test_end_to_end_single_snapshot() {
    // Create test directory structure:
    // temp/
    // ├── x/   files totalling 12_000 bytes
    // └── y/   files totalling 5_000 bytes
    //
    // With filter = 10_000: x qualifies at 12_000 and is zeroed out of the
    // root, so the root's attributed size is 0 + 5_000 and never qualifies.
    // Exactly one snapshot is published, containing only x.
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    let x = root.join("x");
    let y = root.join("y");

    fs::create_dir(&x).expect("Failed to create x");
    fs::create_dir(&y).expect("Failed to create y");
    fs::write(x.join("big.bin"), vec![0u8; 12_000]).expect("Failed to write x/big.bin");
    fs::write(y.join("small.bin"), vec![0u8; 5_000]).expect("Failed to write y/small.bin");

    let sink = Arc::new(MemorySink::new());
    let ranked = find_big_directories(
        root,
        &config(10_000, 10),
        sink.clone(),
        &NullSink,
        &CancelFlag::new(),
    )
    .expect("scan should succeed");

    let snapshots = sink.snapshots();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].len(), 1);
    assert_eq!(snapshots[0][0].path(), &x);
    assert_eq!(snapshots[0][0].size(), 12_000);
    assert_eq!(snapshots[0][0].size_display().trim_start(), "12,000");

    // The final list matches the last snapshot.
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].path(), &x);
}

#[test]
fn test_reported_subtrees_are_disjoint() {
    // a/ (20_000 total) contains b/ (15_000). b is reported at 15_000 and a
    // is attributed only its remaining 5_000, so a must not appear at 20_000.
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let a = temp_dir.path().join("a");
    let b = a.join("b");
    fs::create_dir_all(&b).expect("Failed to create a/b");
    fs::write(a.join("own.bin"), vec![0u8; 5_000]).expect("Failed to write a/own.bin");
    fs::write(b.join("bulk.bin"), vec![0u8; 15_000]).expect("Failed to write b/bulk.bin");

    let ranked = find_big_directories(
        temp_dir.path(),
        &config(10_000, 10),
        Arc::new(NullSink),
        &NullSink,
        &CancelFlag::new(),
    )
    .expect("scan should succeed");

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].path(), &b);
    assert_eq!(ranked[0].size(), 15_000);
}

#[test]
fn test_tie_break_is_deterministic_across_runs() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    for name in ["zebra", "alpha", "mango"] {
        let dir = root.join(name);
        fs::create_dir(&dir).expect("Failed to create dir");
        fs::write(dir.join("f.bin"), vec![0u8; 8_000]).expect("Failed to write f.bin");
    }

    let run = || -> Vec<String> {
        find_big_directories(
            root,
            &config(5_000, 10),
            Arc::new(NullSink),
            &NullSink,
            &CancelFlag::new(),
        )
        .expect("scan should succeed")
        .iter()
        .map(|r| r.path().display().to_string())
        .collect()
    };

    let first = run();
    assert_eq!(first.len(), 3);
    // Equal sizes rank by the formatted "size, path" string, ascending.
    assert!(first[0].ends_with("alpha"));
    assert!(first[1].ends_with("mango"));
    assert!(first[2].ends_with("zebra"));
    for _ in 0..5 {
        assert_eq!(run(), first);
    }
}

#[test]
fn test_capacity_limits_a_wide_tree() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    for i in 0..20usize {
        let dir = root.join(format!("d{i:02}"));
        fs::create_dir(&dir).expect("Failed to create dir");
        fs::write(dir.join("f.bin"), vec![0u8; 1_000 + i * 100])
            .expect("Failed to write f.bin");
    }

    let ranked = find_big_directories(
        root,
        &config(500, 5),
        Arc::new(NullSink),
        &NullSink,
        &CancelFlag::new(),
    )
    .expect("scan should succeed");

    let sizes: Vec<u64> = ranked.iter().map(|r| r.size()).collect();
    assert_eq!(sizes, vec![2_900, 2_800, 2_700, 2_600, 2_500]);
}

/// A result sink that raises the cancellation flag as soon as the first
/// snapshot arrives, and counts every publication it sees.
struct CancelOnFirstPublish {
    cancel: CancelFlag,
    published: AtomicUsize,
}

impl ResultSink for CancelOnFirstPublish {
    fn publish(&self, _ranked: &[DirRecord]) {
        self.published.fetch_add(1, Ordering::SeqCst);
        self.cancel.trigger();
    }
}

#[test]
fn test_mid_scan_cancellation_stops_publishing() {
    // A wide tree of qualifying directories; cancelling on the first
    // publish must leave only a bounded number of further publications
    // (subtrees already past their cancel check may still report).
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    for i in 0..30 {
        let dir = root.join(format!("d{i}"));
        fs::create_dir(&dir).expect("Failed to create dir");
        fs::write(dir.join("f.bin"), vec![0u8; 5_000]).expect("Failed to write f.bin");
    }

    let cancel = CancelFlag::new();
    let sink = Arc::new(CancelOnFirstPublish {
        cancel: cancel.clone(),
        published: AtomicUsize::new(0),
    });

    let ranked = find_big_directories(
        root,
        &config(1_000, 30),
        sink.clone(),
        &NullSink,
        &cancel,
    )
    .expect("cancelled scan is not an error");

    assert!(cancel.is_triggered());
    let published = sink.published.load(Ordering::SeqCst);
    assert!(published >= 1);
    // The partial result is whatever made it in before the unwinding.
    assert_eq!(ranked.len(), published.min(30));
}

#[test]
fn test_unreadable_sibling_does_not_stop_the_scan() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    let locked = root.join("locked");
    let open = root.join("open");
    fs::create_dir(&locked).expect("Failed to create locked");
    fs::create_dir(&open).expect("Failed to create open");
    fs::write(locked.join("hidden.bin"), vec![0u8; 50_000])
        .expect("Failed to write hidden.bin");
    fs::write(open.join("visible.bin"), vec![0u8; 20_000])
        .expect("Failed to write visible.bin");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))
            .expect("Failed to chmod locked");
    }
    // When running as root (or off unix) the chmod has no effect; the scan
    // must work either way, so only the unreadable-specific assertions are
    // conditional.
    let enumeration_fails = fs::read_dir(&locked).is_err();

    let warnings = Arc::new(MemorySink::new());
    let ranked = find_big_directories(
        root,
        &config(10_000, 10),
        Arc::new(NullSink),
        warnings.as_ref(),
        &CancelFlag::new(),
    )
    .expect("per-node failures never abort the scan");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
            .expect("Failed to restore permissions");
    }

    // The accessible sibling is always found.
    assert!(ranked.iter().any(|r| r.path() == &open && r.size() == 20_000));

    if enumeration_fails {
        assert!(!ranked.iter().any(|r| r.path() == &locked));
        assert!(
            warnings
                .warnings()
                .iter()
                .any(|w| w.contains("failed to enumerate"))
        );
    }
}

#[test]
fn test_deep_nesting_aggregates_bottom_up() {
    // temp/l1/l2/l3 with one 4_000-byte file at each level plus one in the
    // root. Sizes roll up bottom-first, so l1 is the first directory to
    // cross a 10_000 filter (4_000 own + 8_000 from l2/l3 = 12_000). Once
    // l1 is reported it is zeroed, leaving the root at 4_000, unreported.
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut dir = temp_dir.path().to_path_buf();
    fs::write(dir.join("f.bin"), vec![0u8; 4_000]).expect("Failed to write f.bin");
    for level in 1..=3 {
        dir = dir.join(format!("l{level}"));
        fs::create_dir(&dir).expect("Failed to create level");
        fs::write(dir.join("f.bin"), vec![0u8; 4_000]).expect("Failed to write f.bin");
    }

    let ranked = find_big_directories(
        temp_dir.path(),
        &config(10_000, 10),
        Arc::new(NullSink),
        &NullSink,
        &CancelFlag::new(),
    )
    .expect("scan should succeed");

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].path(), &temp_dir.path().join("l1"));
    assert_eq!(ranked[0].size(), 12_000);
}

#[test]
fn test_smallest_order_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    for (name, size) in [("big", 30_000usize), ("mid", 20_000), ("small", 12_000)] {
        let dir = root.join(name);
        fs::create_dir(&dir).expect("Failed to create dir");
        fs::write(dir.join("f.bin"), vec![0u8; size]).expect("Failed to write f.bin");
    }

    let ranked = find_big_directories(
        root,
        &ScanConfig {
            filter: 10_000,
            top: 2,
            order: RankOrder::Smallest,
        },
        Arc::new(NullSink),
        &NullSink,
        &CancelFlag::new(),
    )
    .expect("scan should succeed");

    let sizes: Vec<u64> = ranked.iter().map(|r| r.size()).collect();
    assert_eq!(sizes, vec![12_000, 20_000]);
}

#[test]
fn test_warnings_never_affect_results() {
    struct CountingWarnings(AtomicUsize);
    impl WarningSink for CountingWarnings {
        fn warn(&self, _message: &str) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("never-created");
    let warnings = CountingWarnings(AtomicUsize::new(0));

    let ranked = find_big_directories(
        &missing,
        &config(0, 10),
        Arc::new(NullSink),
        &warnings,
        &CancelFlag::new(),
    )
    .expect("inaccessible root is tolerated");

    assert!(ranked.is_empty());
    assert_eq!(warnings.0.load(Ordering::SeqCst), 1);
}
