//! A logger that cannot be built is a fatal startup defect, reported at the
//! line that asked for it.

use std::panic;
use std::sync::Arc;

use parking_lot::Mutex;

fn bad_output() -> oncelog::LogOption {
    oncelog::with_output(["ftp://collector:21/logs"])
}

fn message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap()
}

#[test]
fn invalid_output_panics_at_the_call_site() {
    let locations = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&locations);
    panic::set_hook(Box::new(move |info| {
        if let Some(location) = info.location() {
            seen.lock().push((location.file().to_string(), location.line()));
        }
    }));

    let configure_line = line!() + 1;
    let configured = panic::catch_unwind(|| oncelog::configure([bad_output()]));
    let logger_line = line!() + 1;
    let fetched = panic::catch_unwind(|| oncelog::logger([bad_output()]).level());
    drop(panic::take_hook());

    let payload = configured.unwrap_err();
    assert!(message(payload.as_ref()).starts_with("oncelog: failed to build logger"));
    let payload = fetched.unwrap_err();
    assert!(message(payload.as_ref()).starts_with("oncelog: failed to build logger"));
    assert!(!oncelog::is_configured());

    let locations = locations.lock();
    assert_eq!(locations.len(), 2);
    for ((file, line), expected) in locations.iter().zip([configure_line, logger_line]) {
        assert!(file.ends_with("construction_failure.rs"), "{file}");
        assert_eq!(*line, expected);
    }
}
