use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dirhash::{output, review_tree, ReviewConfig, Style};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn create_test_directory_structure(dir: &Path, depth: usize, files_per_dir: usize) {
    if depth == 0 {
        return;
    }

    for i in 0..files_per_dir {
        let file_path = dir.join(format!("file_{}.txt", i));
        fs::write(&file_path, format!("Content of file {} at depth {}", i, depth)).unwrap();
    }

    for i in 0..3 {
        let subdir_path = dir.join(format!("subdir_{}", i));
        fs::create_dir_all(&subdir_path).unwrap();
        create_test_directory_structure(&subdir_path, depth - 1, files_per_dir);
    }
}

fn bench_review(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    create_test_directory_structure(temp_dir.path(), 4, 10);
    let config = ReviewConfig::default();

    c.bench_function("review_tree depth 4", |b| {
        b.iter(|| review_tree(black_box(temp_dir.path()), &config).unwrap())
    });

    let limited = ReviewConfig::default().with_depth_limit(Some(2));
    c.bench_function("review_tree depth-limited", |b| {
        b.iter(|| review_tree(black_box(temp_dir.path()), &limited).unwrap())
    });
}

fn bench_render(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    create_test_directory_structure(temp_dir.path(), 4, 10);
    let config = ReviewConfig::default();
    let entry = review_tree(temp_dir.path(), &config).unwrap();

    c.bench_function("render tree", |b| {
        b.iter(|| output::render(temp_dir.path(), black_box(&entry), &config))
    });

    let flat = ReviewConfig::default().with_style(Style::Flat);
    c.bench_function("render flat", |b| {
        b.iter(|| output::render(temp_dir.path(), black_box(&entry), &flat))
    });
}

criterion_group!(benches, bench_review, bench_render);
criterion_main!(benches);
