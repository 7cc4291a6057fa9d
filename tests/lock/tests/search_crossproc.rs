//! Cross-process determinism test.
//!
//! Spawns the `search_fixture` binary under several environment variants
//! and asserts that all produce identical output. This proves that search
//! reports are not influenced by process-level state such as hash seeds,
//! working directory or locale.

use std::path::Path;
use std::process::Command;

/// Resolve the path to the compiled `search_fixture` binary.
fn binary_path() -> String {
    env!("CARGO_BIN_EXE_search_fixture").to_string()
}

/// Resolve the workspace root.
fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

/// Run the binary with the given cwd and environment overrides.
fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    // Sanity: 4 families x 3 algorithms x 3-4 queries.
    assert_eq!(baseline.lines().count(), 3 * (4 + 3 + 3 + 3));
    assert!(baseline.contains("roads.ucs a->f success=true cost=13.000000"));
    assert!(baseline.contains("digest=sha256:"));

    // Variant 2: different cwd.
    let alt_cwd = std::env::temp_dir();
    let alt_cwd = alt_cwd.to_string_lossy();
    let variant_cwd = run_variant(&alt_cwd, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    // Variant 3: different locale env.
    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    // Variant 4: spurious env vars.
    let variant_noise = run_variant(
        &root,
        &[
            ("PATHFINDER_NOISE", "should_not_matter"),
            ("TZ", "America/New_York"),
            ("HOME", "/nonexistent"),
        ],
    );
    assert_eq!(
        baseline, variant_noise,
        "output differs with spurious env vars (PATHFINDER_NOISE, TZ, HOME)"
    );
}
