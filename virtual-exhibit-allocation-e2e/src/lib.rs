//! Shared fixtures and drivers for the full-flow integration tests: a
//! gallery catalog that can be written to disk, a builder wired to a
//! recording notifier and one-time logging setup for the test binary.

use std::path::{Path, PathBuf};
use std::sync::Once;

use tracing_subscriber::EnvFilter;
use virtual_exhibit_allocation_builder::{ExhibitBuilder, RecordingNotifier};
use virtual_exhibit_allocation_config::Limits;
use virtual_exhibit_allocation_engine::{Catalog, Participant, Session};

/// Catalog wire payload the way a gallery's listing endpoint returns it.
pub const GALLERY_CATALOG: &str = r#"[
    { "id": 1, "image": "rooms/atrium.jpg", "slots": 4 },
    { "id": 2, "image": "rooms/long-hall.jpg", "slots": 7 },
    { "id": 3, "image": "rooms/rooftop.jpg", "slots": 12 }
]"#;

pub fn write_gallery_catalog(dir: &Path) -> std::io::Result<PathBuf> {
    let path = dir.join("catalog.json");
    std::fs::write(&path, GALLERY_CATALOG)?;
    Ok(path)
}

#[must_use]
pub fn curator() -> Session {
    Session::new(Participant::new("100", "Mara"))
}

/// A builder over the given catalog with every toast captured.
#[must_use]
pub fn recording_gallery_builder(
    catalog: Catalog,
    max_collaborators: u32,
) -> (ExhibitBuilder, RecordingNotifier) {
    let recorder = RecordingNotifier::new();
    let builder = ExhibitBuilder::with_notifier(
        curator(),
        catalog,
        Limits { max_collaborators },
        Box::new(recorder.clone()),
    );
    (builder, recorder)
}

/// Install the fmt subscriber once for the whole test binary. `RUST_LOG`
/// overrides the default `info` filter.
pub fn init_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_test_writer()
            .init();
    });
}
