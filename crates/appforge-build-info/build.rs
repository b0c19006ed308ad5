use std::env;
use std::path::Path;

use vergen_gix::{Emitter, GixBuilder};

/// Variable read by `src/lib.rs` through `env!`.
const SHA_ENV: &str = "APPFORGE_GIT_SHA_SHORT";

/// Packaging override; skips git entirely.
const OVERRIDE_ENV: &str = "APPFORGE_BUILD_SHA_SHORT";

const SHORT_LEN: usize = 7;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={OVERRIDE_ENV}");

    let sha = env::var(OVERRIDE_ENV)
        .ok()
        .and_then(|raw| shorten(&raw))
        .or_else(head_sha);

    println!(
        "cargo:rustc-env={SHA_ENV}={}",
        sha.as_deref().unwrap_or("unknown")
    );
}

/// HEAD commit of the enclosing repository, cut to `SHORT_LEN` hex digits.
///
/// vergen-gix reports the full SHA and the cut happens here. Its rerun
/// triggers are forwarded; its `VERGEN_*` variables are not.
fn head_sha() -> Option<String> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").ok()?;
    let repo_root = Path::new(&manifest_dir)
        .ancestors()
        .find(|dir| dir.join(".git").exists())?
        .to_path_buf();

    let git = match GixBuilder::default()
        .repo_path(Some(repo_root))
        .sha(false)
        .build()
    {
        Ok(git) => git,
        Err(err) => {
            println!("cargo:warning=appforge-build-info: git probe failed: {err}");
            return None;
        }
    };

    let mut instructions = Vec::new();
    if let Err(err) = Emitter::default()
        .add_instructions(&git)
        .and_then(|e| e.emit_to(&mut instructions))
    {
        println!("cargo:warning=appforge-build-info: git probe failed: {err}");
        return None;
    }

    let mut sha = None;
    for line in String::from_utf8_lossy(&instructions).lines() {
        let Some(instruction) = line
            .strip_prefix("cargo::")
            .or_else(|| line.strip_prefix("cargo:"))
        else {
            continue;
        };
        if instruction.starts_with("rerun-if-") {
            println!("cargo:{instruction}");
        } else if let Some(full) = instruction.strip_prefix("rustc-env=VERGEN_GIT_SHA=") {
            sha = shorten(full);
        }
    }
    sha
}

fn shorten(raw: &str) -> Option<String> {
    let candidate = raw.trim().get(..SHORT_LEN)?;
    candidate
        .chars()
        .all(|c| c.is_ascii_hexdigit())
        .then(|| candidate.to_ascii_lowercase())
}
