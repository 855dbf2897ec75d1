//! Cross-process determinism: spawns the `search_fixture` binary under
//! several environment variants and asserts identical output.

use std::path::Path;
use std::process::Command;

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("search_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
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
fn crossproc_determinism_across_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(baseline.contains("digest=sha256:"), "missing digest lines");
    assert!(baseline.contains("corpus_size=8"), "missing corpus_size");
    assert!(
        baseline.lines().next().is_some_and(|l| l.contains("flips= ")),
        "first corpus entry is already sorted and has no flips"
    );

    let tmp = std::env::temp_dir();
    let variants: [(&str, &[(&str, &str)]); 3] = [
        (tmp.to_str().expect("utf-8 temp dir"), &[]),
        (root.as_str(), &[("LC_ALL", "C")]),
        (root.as_str(), &[("RUST_LOG", "trace"), ("TZ", "UTC")]),
    ];
    for (dir, env) in variants {
        assert_eq!(
            run_variant(dir, env),
            baseline,
            "output diverged for dir={dir} env={env:?}"
        );
    }
}
