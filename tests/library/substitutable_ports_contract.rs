use chrono::{NaiveDate, NaiveDateTime};
use dayspace::app::commands::{create, prune};
use dayspace::{AppContext, Clock, MemoryFilesystem, PruneOptions, RetentionPolicy};
use std::path::Path;

struct PinnedClock(NaiveDateTime);

impl Clock for PinnedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

fn pinned(year: i32, month: u32, day: u32) -> PinnedClock {
    PinnedClock(NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(12, 0, 0).unwrap())
}

#[test]
fn create_on_memory_filesystem_contract() {
    let ctx = AppContext::new(MemoryFilesystem::new(), pinned(2023, 6, 15));

    let outcome = create::execute(&ctx, Path::new("/tmp/ws")).unwrap();

    assert_eq!(outcome.name, "2023-06-15");
    assert!(ctx.filesystem().is_dir("/tmp/ws/2023-06-15"));
}

#[test]
fn prune_scenario_on_memory_filesystem_contract() {
    let fs = MemoryFilesystem::new()
        .with_dir("/ws/2021-01-01")
        .with_dir("/ws/2021-01-05")
        .with_dir("/ws/2021-01-09");
    let ctx = AppContext::new(fs, pinned(2021, 1, 10));
    let options = PruneOptions { retention: RetentionPolicy::MaxAgeDays(7), dry_run: false };

    let outcome = prune::execute(&ctx, Path::new("/ws"), options).unwrap();

    assert_eq!(outcome.count, 1);
    assert!(!ctx.filesystem().is_dir("/ws/2021-01-01"));
    assert!(ctx.filesystem().is_dir("/ws/2021-01-05"));
    assert!(ctx.filesystem().is_dir("/ws/2021-01-09"));
}
