//! Criterion benchmarks for plantecon_core
//!
//! Run with: cargo bench -p plantecon_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use plantecon_core::model::{DistributionSpec, Parameter, ProjectParameters};
use plantecon_core::{analyze_profitability, monte_carlo_analysis_seeded, sensitivity_analysis};

fn create_params(project_lifetime: u32) -> ProjectParameters {
    ProjectParameters {
        capital_investment: 10_000_000.0,
        annual_revenue: 5_000_000.0,
        annual_operating_costs: 3_000_000.0,
        project_lifetime,
        discount_rate: 0.12,
        tax_rate: 0.30,
        salvage_value: 1_000_000.0,
    }
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_profitability");
    for lifetime in [10u32, 20, 50] {
        let params = create_params(lifetime);
        group.bench_with_input(
            BenchmarkId::from_parameter(lifetime),
            &params,
            |b, params| b.iter(|| analyze_profitability(black_box(params)).unwrap()),
        );
    }
    group.finish();
}

fn bench_sensitivity(c: &mut Criterion) {
    let params = create_params(20);
    let ranges = vec![
        (Parameter::AnnualRevenue, vec![-20.0, -10.0, 0.0, 10.0, 20.0]),
        (
            Parameter::AnnualOperatingCosts,
            vec![-20.0, -10.0, 0.0, 10.0, 20.0],
        ),
        (
            Parameter::CapitalInvestment,
            vec![-20.0, -10.0, 0.0, 10.0, 20.0],
        ),
    ];

    c.bench_function("sensitivity_15_rows", |b| {
        b.iter(|| sensitivity_analysis(black_box(&params), black_box(&ranges)).unwrap());
    });
}

fn bench_monte_carlo(c: &mut Criterion) {
    let params = create_params(20);
    let distributions = vec![
        (
            Parameter::AnnualRevenue,
            DistributionSpec::Normal {
                mean: 5_000_000.0,
                std_dev: 500_000.0,
            },
        ),
        (
            Parameter::AnnualOperatingCosts,
            DistributionSpec::Triangular {
                min: 2_500_000.0,
                mode: 3_000_000.0,
                max: 4_000_000.0,
            },
        ),
    ];

    c.bench_function("monte_carlo_1000", |b| {
        b.iter(|| {
            monte_carlo_analysis_seeded(
                black_box(&params),
                black_box(&distributions),
                1000,
                42,
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, bench_analyze, bench_sensitivity, bench_monte_carlo);
criterion_main!(benches);
