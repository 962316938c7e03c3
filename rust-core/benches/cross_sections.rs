use criterion::{criterion_group, criterion_main, Criterion};
use qed_xsec::cross_section::{compton_energy, CrossSectionEngine};
use qed_xsec::kinematics::FourVector;
use qed_xsec::particles::{Lepton, Photon, SpinDensityMatrix};
use std::hint::black_box;

const MASS: f64 = 0.5;

fn lepton(energy: f64, theta: f64, phi: f64) -> Lepton {
    let p = (energy * energy - MASS * MASS).sqrt();
    Lepton::new(
        FourVector::new(
            energy,
            p * theta.sin() * phi.cos(),
            p * theta.sin() * phi.sin(),
            p * theta.cos(),
        ),
        MASS,
    )
    .with_sdm(SpinDensityMatrix::identity())
}

fn photon(energy: f64, theta: f64, phi: f64) -> Photon {
    Photon::new(FourVector::new(
        energy,
        energy * theta.sin() * phi.cos(),
        energy * theta.sin() * phi.sin(),
        energy * theta.cos(),
    ))
}

/// One call per process; the momenta need not conserve energy for timing purposes
fn bench_processes(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_sections");
    let engine = CrossSectionEngine::default();

    let k = 2.0;
    let k_out = compton_energy(k, 0.8_f64.cos(), MASS);
    let g_in = photon(k, 0.0, 0.0);
    let e_rest = Lepton::at_rest(MASS);
    let g_out = photon(k_out, 0.8, 0.0).with_sdm(SpinDensityMatrix::identity());
    let e_out = Lepton::new(
        FourVector::new(MASS + k - k_out, -k_out * 0.8_f64.sin(), 0.0, k - k_out * 0.8_f64.cos()),
        MASS,
    );

    group.bench_function("compton", |b| {
        b.iter(|| engine.compton(black_box(&g_in), black_box(&e_rest), black_box(&g_out), black_box(&e_out)))
    });

    let e_beam = lepton(10.0, 0.0, 0.0);
    let e_scattered = lepton(6.0, 0.03, 2.5);
    let g_brems = photon(4.0, 0.05, 0.3).with_sdm(SpinDensityMatrix::identity());
    group.bench_function("bremsstrahlung", |b| {
        b.iter(|| engine.bremsstrahlung(black_box(&e_beam), black_box(&e_scattered), black_box(&g_brems)))
    });

    let g_beam = photon(20.0, 0.0, 0.0);
    let pair_lepton = lepton(9.0, 0.04, 0.2);
    let pair_antilepton = lepton(11.0, 0.06, 3.0);
    group.bench_function("pair_production", |b| {
        b.iter(|| {
            engine.pair_production(black_box(&g_beam), black_box(&pair_lepton), black_box(&pair_antilepton))
        })
    });

    let t1 = lepton(7.0, 0.1, 0.4);
    let t2 = lepton(8.0, 0.05, 2.0);
    let t3 = lepton(4.5, 0.2, -1.5);
    group.bench_function("triplet_production", |b| {
        b.iter(|| {
            engine.triplet_production(
                black_box(&g_beam),
                black_box(&e_rest),
                black_box(&t1),
                black_box(&t2),
                black_box(&t3),
            )
        })
    });

    let g_soft = photon(1.5, 0.3, 1.0).with_sdm(SpinDensityMatrix::identity());
    group.bench_function("ee_bremsstrahlung", |b| {
        b.iter(|| {
            engine.ee_bremsstrahlung(
                black_box(&e_beam),
                black_box(&e_rest),
                black_box(&t1),
                black_box(&t3),
                black_box(&g_soft),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_processes);
criterion_main!(benches);
