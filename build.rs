//! Build script for mediastrip - embeds git commit hash and build date
//!
//! When the `release` feature is NOT set (default dev builds):
//! - Emits `VERGEN_GIT_SHA` with the commit hash (or `unknown` outside git)
//!
//! When the `release` feature IS set (CI/official builds):
//! - Emits `VERGEN_GIT_SHA=release` for a clean version string
//!
//! `MEDIASTRIP_BUILD_DATE` is always emitted.

use std::process::Command;

/// Get the current date in YYYY-MM-DD format
fn get_build_date() -> String {
    if let Ok(output) = Command::new("date").args(["+%Y-%m-%d"]).output() {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    "unknown".to_string()
}

fn main() {
    println!("cargo:rustc-env=MEDIASTRIP_BUILD_DATE={}", get_build_date());

    #[cfg(feature = "release")]
    {
        println!("cargo:rustc-env=VERGEN_GIT_SHA=release");
    }

    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let git_result = GitclBuilder::default().sha(true).build();

        let emit_result = match git_result {
            Ok(git) => Emitter::default()
                .add_instructions(&git)
                .and_then(|emitter| emitter.emit()),
            Err(e) => {
                eprintln!("cargo:warning=Failed to configure git info: {}", e);
                println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
                return;
            }
        };

        if let Err(e) = emit_result {
            eprintln!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
