//! Shared fixtures for integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub const LARAVEL_COMPOSER: &str = r#"{
    "name": "laravel/laravel",
    "require": {
        "php": "^8.2",
        "laravel/framework": "^11.0"
    }
}"#;

/// Binary invocation isolated to `data_dir` for its catalog and config.
pub fn laravel_sweeper(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("laravel-sweeper").unwrap();
    cmd.arg("--data-dir")
        .arg(data_dir)
        .env("XDG_CONFIG_HOME", data_dir.join("config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Create a Laravel application at `dir`, optionally with an installed vendor tree.
pub fn make_laravel(dir: &Path, with_vendor: bool) -> PathBuf {
    fs::create_dir_all(dir.join("app/Http")).unwrap();
    fs::write(dir.join("artisan"), "#!/usr/bin/env php\n<?php\n").unwrap();
    fs::write(dir.join("composer.json"), LARAVEL_COMPOSER).unwrap();
    fs::write(dir.join("app/Http/Kernel.php"), "<?php\n").unwrap();

    if with_vendor {
        let pkg = dir.join("vendor/laravel/framework");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("artisan"), "").unwrap();
        fs::write(pkg.join("composer.json"), LARAVEL_COMPOSER).unwrap();
        fs::write(dir.join("vendor/autoload.php"), "x".repeat(4096)).unwrap();
    }

    dir.canonicalize().unwrap()
}
