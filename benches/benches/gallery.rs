// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use vitrine_gallery::{ALL, Project, ProjectCatalog, TechEntry, filter, workflow_path, workflow_points};

const CATEGORIES: [&str; 4] = ["web", "exp", "ecommerce", "tools"];

fn projects(count: u32) -> Vec<Project> {
    (0..count)
        .map(|id| Project {
            id,
            category: CATEGORIES[id as usize % CATEGORIES.len()].to_string(),
            title: format!("Project {id}"),
            description: String::new(),
            thumbnail: String::new(),
            technologies: vec!["Rust".into(), "TypeScript".into()],
            tech_stack: (0..4)
                .map(|t| TechEntry {
                    id: t,
                    name: format!("Area {t}"),
                    icon: String::new(),
                    description: String::new(),
                    document_url: format!("/docs/{id}/{t}.pdf"),
                })
                .collect(),
            live_link: String::new(),
            github_link: String::new(),
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery/filter");
    for count in [16_u32, 256, 4_096] {
        let catalog = ProjectCatalog::from_projects(projects(count)).unwrap();
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(BenchmarkId::new("all", count), &catalog, |b, catalog| {
            b.iter(|| black_box(filter(catalog.projects(), ALL)));
        });
        group.bench_with_input(BenchmarkId::new("category", count), &catalog, |b, catalog| {
            b.iter(|| black_box(filter(catalog.projects(), black_box("ecommerce"))));
        });
    }
    group.finish();
}

fn bench_catalog_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery/catalog");
    for count in [16_u32, 256, 4_096] {
        let input = projects(count);
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(BenchmarkId::new("from_projects", count), &input, |b, input| {
            b.iter(|| black_box(ProjectCatalog::from_projects(input.clone())));
        });
    }
    group.finish();
}

fn bench_workflow(c: &mut Criterion) {
    c.bench_function("gallery/workflow_path/8", |b| {
        b.iter(|| black_box(workflow_path(&workflow_points(black_box(8)))));
    });
}

criterion_group!(benches, bench_filter, bench_catalog_validation, bench_workflow);
criterion_main!(benches);
