//! Benchmarks for the layout engine's hot paths.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vantage_config::{LayoutAlgorithm, LayoutConfig};
use vantage_layout::{LayoutEngine, resolve_overlaps};
use vantage_scene::{Artifact, ArtifactId};

fn scene(n: usize) -> Vec<Artifact> {
    (0..n)
        .map(|i| {
            let mut artifact = Artifact::new(
                format!("artifact{i}"),
                format!("/src/module{}/artifact{i}.rs", i / 8),
            );
            if i > 0 {
                artifact.dependencies = vec![ArtifactId::from(format!("artifact{}", i / 2))];
            }
            artifact
        })
        .collect()
}

fn bench_force_layout(c: &mut Criterion) {
    let config = LayoutConfig {
        algorithm: LayoutAlgorithm::ForceDirected,
        iterations: 50,
        ..LayoutConfig::default()
    };
    c.bench_function("force_directed_200", |b| {
        b.iter(|| {
            let mut engine = LayoutEngine::new(config.clone());
            let mut artifacts = scene(200);
            engine.position(black_box(&mut artifacts));
        });
    });
}

fn bench_overlap_resolution(c: &mut Criterion) {
    c.bench_function("resolve_overlaps_300", |b| {
        b.iter(|| {
            let mut artifacts = scene(300);
            let config = LayoutConfig {
                algorithm: LayoutAlgorithm::Grid,
                spacing: 1.0,
                ..LayoutConfig::default()
            };
            let mut engine = LayoutEngine::new(config);
            engine.position(&mut artifacts);
            resolve_overlaps(black_box(&mut artifacts), 2.4);
        });
    });
}

criterion_group!(benches, bench_force_layout, bench_overlap_resolution);
criterion_main!(benches);
