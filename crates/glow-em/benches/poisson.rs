//! Poisson solve benchmark: one cold solve and one warm-started solve
//! on a discharge-sized grid.

use criterion::{criterion_group, criterion_main, Criterion};
use glow_em::{DomainProp, Region, StructPoissonSolver};
use glow_space::{GridProp, ScalarGrid};
use std::hint::black_box;

fn discharge_regions(nx: usize, ny: usize) -> Vec<Region> {
    let (i1, j1) = (nx as i32 - 1, ny as i32 - 1);
    vec![
        Region::fixed((0, 0), (i1, 0), 100.0),
        Region::fixed((0, j1), (i1, j1), 0.0),
        Region::zero_gradient((0, 0), (0, j1)),
        Region::zero_gradient((i1, 0), (i1, j1)),
    ]
}

fn bench_poisson(c: &mut Criterion) {
    let (nx, ny) = (65, 65);
    let prop = GridProp::new(nx, ny, 0.067, 0.067).unwrap();
    let domain = DomainProp {
        prop,
        source_scale: 1.0,
    };
    let solver = StructPoissonSolver::new(domain, discharge_regions(nx, ny)).unwrap();

    let mut rho = ScalarGrid::new(prop);
    for (k, v) in rho.data_mut().iter_mut().enumerate() {
        *v = ((k % 17) as f64 - 8.0) * 1e-3;
    }

    c.bench_function("poisson_cold_65x65", |b| {
        b.iter(|| {
            let mut phi = ScalarGrid::new(prop);
            solver.solve(&mut phi, black_box(&rho), 0.0).unwrap();
            black_box(phi);
        })
    });

    c.bench_function("poisson_warm_65x65", |b| {
        let mut phi = ScalarGrid::new(prop);
        solver.solve(&mut phi, &rho, 0.0).unwrap();
        b.iter(|| {
            solver.solve(&mut phi, black_box(&rho), 0.0).unwrap();
        })
    });
}

criterion_group!(benches, bench_poisson);
criterion_main!(benches);
