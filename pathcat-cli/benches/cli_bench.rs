use std::fs;
use std::process::{Command, Stdio};

use assert_cmd::prelude::*;
use clap::Parser;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pathcat_cli::Cli;
use tempfile::TempDir;

fn write_listing(dir: &TempDir, lines: usize) -> std::path::PathBuf {
    let listing: Vec<String> = (0..lines)
        .map(|i| format!("C:\\Projects\\p{}\\src\\module{i}.rs", i % 40))
        .collect();
    let path = dir.path().join("listing.txt");
    fs::write(&path, listing.join("\r\n")).expect("failed to write listing");
    path
}

fn pathcat(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pathcat").expect("failed to locate pathcat binary");
    cmd.current_dir(dir.path())
        .arg("--data-dir")
        .arg(dir.path())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    cmd
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("pathcat").expect("failed to locate pathcat binary");
            let output = cmd.arg("--version").output().expect("failed to run pathcat");
            black_box(output);
        });
    });
}

fn bench_cli_parse(c: &mut Criterion) {
    c.bench_function("cli_parse_process", |b| {
        b.iter(|| {
            let cli = Cli::try_parse_from(black_box([
                "pathcat",
                "process",
                "listing.txt",
                "--filter-files",
                "--format",
                "tsv",
                "--output",
                "out.tsv",
            ]));
            black_box(cli.is_ok())
        });
    });
}

fn bench_cli_process(c: &mut Criterion) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let input = write_listing(&dir, 5_000);

    let mut group = c.benchmark_group("cli_process");
    for format in ["csv", "json", "table"] {
        group.bench_function(format, |b| {
            b.iter(|| {
                let status = pathcat(&dir)
                    .arg("process")
                    .arg(&input)
                    .args(["--format", format])
                    .status()
                    .expect("failed to execute pathcat process");
                assert!(status.success(), "pathcat process failed");
            });
        });
    }
    group.finish();
}

fn bench_cli_detect(c: &mut Criterion) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let input = write_listing(&dir, 5_000);

    c.bench_function("cli_detect", |b| {
        b.iter(|| {
            let status = pathcat(&dir)
                .arg("detect")
                .arg(&input)
                .status()
                .expect("failed to execute pathcat detect");
            assert!(status.success(), "pathcat detect failed");
        });
    });
}

criterion_group!(
    benches,
    bench_cli_startup,
    bench_cli_parse,
    bench_cli_process,
    bench_cli_detect
);
criterion_main!(benches);
