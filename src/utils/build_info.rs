//! Commit hash and build date, embedded by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `flapper <date> (<commit>)`, as printed by `--version`.
pub fn version_string() -> String {
    format!("flapper {} ({})", BUILD_DATE, BUILD_COMMIT)
}
