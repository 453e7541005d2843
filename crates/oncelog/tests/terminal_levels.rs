//! Fatal and panic levels through the facade, with the exit substituted.

mod common;

use std::panic::catch_unwind;
use std::sync::Arc;

use parking_lot::Mutex;

#[test]
fn records_are_flushed_before_terminating() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fatal.log");

    // The hook stands in for process exit and snapshots the file at that moment.
    let seen_at_exit = Arc::new(Mutex::new(None::<Vec<String>>));
    let hook = {
        let seen_at_exit = Arc::clone(&seen_at_exit);
        let path = path.clone();
        oncelog::FatalHook::custom(move |_| {
            *seen_at_exit.lock() = Some(common::read_lines(&path));
        })
    };

    oncelog::configure([
        oncelog::with_output([path.to_string_lossy().into_owned()]),
        oncelog::with_fatal_hook(hook),
    ]);

    oncelog::fatalf!("cannot bind {}", "0.0.0.0:80");

    let snapshot = seen_at_exit.lock().take().unwrap();
    assert_eq!(snapshot.len(), 1);
    let record: serde_json::Value = serde_json::from_str(&snapshot[0]).unwrap();
    assert_eq!(record["level"], "ERROR");
    assert_eq!(record["severity"], "fatal");
    assert_eq!(record["message"], "cannot bind 0.0.0.0:80");

    let result = catch_unwind(|| oncelog::panicw!("corrupt index", "segment", 12));
    let payload = result.unwrap_err();
    assert_eq!(payload.downcast_ref::<String>().unwrap(), "corrupt index");

    let records = common::read_records(&path);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["severity"], "panic");
    assert_eq!(records[1]["segment"], 12);

    // Production mode: dpanic only logs.
    oncelog::dpanicf!("unexpected {}", "state");
    assert_eq!(common::read_records(&path)[2]["severity"], "dpanic");
}
