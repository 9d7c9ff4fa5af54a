//! Integration test: end-to-end sampling scenarios.
//!
//! Checks the concrete cases every implementation must reproduce:
//! 1. A regular unit circle at four points lands on the compass points
//! 2. A 3x3 grid enumerates in lexicographic order
//! 3. A noise-free random plane stays inside its bounds with z exactly 0
//!
//! plus count and determinism properties across both strategies.

use std::f64::consts::TAU;

use approx::assert_abs_diff_eq;
use cloudgen_core::config::{ManifoldSpec, Strategy};
use cloudgen_manifolds::Manifold;
use cloudgen_sampler::prelude::*;
use cloudgen_sampler::{Bounds, Embedding, Point};
use cloudgen_test_utils::fixtures::{plane_xy, unit_circle};
use cloudgen_test_utils::seeded_rng;

fn collect<I, E>(points: I) -> Vec<Point>
where
    I: Iterator<Item = Result<Point, SampleError<E>>>,
    E: std::fmt::Debug,
{
    points.collect::<Result<_, _>>().unwrap()
}

fn random<E>(embedding: E, count: usize, bounds: &Bounds, stddev: f64, seed: u64) -> Vec<Point>
where
    E: Embedding,
    E::Error: std::fmt::Debug,
{
    let points = generate_random(embedding, count, bounds, stddev, seeded_rng(seed));
    collect(points.unwrap())
}

fn regular<E>(embedding: E, count: usize, bounds: &Bounds, stddev: f64, seed: u64) -> Vec<Point>
where
    E: Embedding,
    E::Error: std::fmt::Debug,
{
    let points = generate_regular(embedding, count, bounds, stddev, seeded_rng(seed));
    collect(points.unwrap())
}

fn unit_square() -> Bounds {
    Bounds::from_pairs(&[(0.0, 1.0), (0.0, 1.0)]).unwrap()
}

// -- Scenarios --

#[test]
fn scenario_a_regular_circle_hits_compass_points() {
    let bounds = Bounds::from_pairs(&[(0.0, TAU)]).unwrap();
    let points = regular(unit_circle(), 4, &bounds, 0.0, 0);
    let expected = [
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, -1.0, 0.0],
    ];
    assert_eq!(points.len(), 4);
    for (p, want) in points.iter().zip(expected) {
        for d in 0..3 {
            assert_abs_diff_eq!(p[d], want[d], epsilon = 1e-12);
        }
    }
}

#[test]
fn scenario_b_three_by_three_grid() {
    let tuples: Vec<Vec<usize>> = enumerate_grid(2, 3).unwrap().collect();
    let expected: Vec<Vec<usize>> = (0..3)
        .flat_map(|i| (0..3).map(move |j| vec![i, j]))
        .collect();
    assert_eq!(tuples, expected);
}

#[test]
fn scenario_c_random_plane_in_bounds() {
    let points = random(plane_xy(), 5, &unit_square(), 0.0, 11);
    assert_eq!(points.len(), 5);
    for p in &points {
        assert!((0.0..=1.0).contains(&p[0]));
        assert!((0.0..=1.0).contains(&p[1]));
        assert!(p[2] == 0.0);
    }
}

// -- Properties --

#[test]
fn noise_free_random_points_lie_on_image() {
    // Replaying the rng reproduces the parameter draws, so each point must
    // equal the embedding at those parameters.
    let bounds = Bounds::from_pairs(&[(-1.0, 2.0), (3.0, 4.0)]).unwrap();
    let points = random(plane_xy(), 50, &bounds, 0.0, 3);
    let mut replay = seeded_rng(3);
    for p in &points {
        let params = bounds.sample(&mut replay);
        assert_eq!(*p, plane_xy().embed(&params).unwrap());
    }
}

#[test]
fn grid_tuples_distinct_in_range_and_counted() {
    for dim in 1..=4 {
        for resolution in 0..=4 {
            let tuples: Vec<Vec<usize>> = enumerate_grid(dim, resolution).unwrap().collect();
            let expected = resolution.pow(u32::try_from(dim).unwrap());
            assert_eq!(tuples.len(), expected, "dim={dim} resolution={resolution}");
            assert!(tuples.windows(2).all(|w| w[0] < w[1]));
            assert!(tuples.iter().flatten().all(|&i| i < resolution));
        }
    }
}

#[test]
fn regular_count_is_floor_root_power() {
    let cube = cloudgen_core::traits::from_array_fn(|[x, y, z]: [f64; 3]| [x, y, z]);
    let bounds = Bounds::from_upper(&[1.0, 1.0, 1.0]).unwrap();
    let cases = [(0, 0), (7, 1), (8, 8), (26, 8), (27, 27), (100, 64), (125, 125)];
    for (count, expected) in cases {
        let points = regular(&cube, count, &bounds, 0.0, 0);
        assert_eq!(points.len(), expected, "count={count}");
    }
}

#[test]
fn regular_runs_are_structurally_identical() {
    let square = unit_square();
    let clean_a = regular(plane_xy(), 30, &square, 0.0, 1);
    let clean_b = regular(plane_xy(), 30, &square, 0.0, 99);
    assert_eq!(clean_a, clean_b);

    let noisy_a = regular(plane_xy(), 30, &square, 0.05, 1);
    let noisy_b = regular(plane_xy(), 30, &square, 0.05, 2);
    assert_eq!(noisy_a.len(), clean_a.len());
    assert_eq!(noisy_b.len(), clean_a.len());
    assert_ne!(noisy_a, noisy_b);
}

#[test]
fn zero_count_is_empty_for_both_strategies() {
    for strategy in [Strategy::Random, Strategy::Regular] {
        let mut points = generate(strategy, plane_xy(), 0, &unit_square(), 0.3, seeded_rng(0))
            .unwrap();
        assert!(points.next().is_none(), "{strategy}");
    }
}

#[test]
fn widest_bounds_yield_finite_points() {
    let wide = Bounds::from_pairs(&[(-4e307, 4e307), (0.0, 1.0)]).unwrap();
    let points = random(plane_xy(), 50, &wide, 0.0, 4);
    assert!(points.iter().flatten().all(|c| c.is_finite()));

    let points = regular(plane_xy(), 16, &wide, 0.0, 4);
    assert_eq!(points.len(), 16);
    assert!(points.iter().flatten().all(|c| c.is_finite()));
    assert_abs_diff_eq!(points[0][0], -4e307);
}

#[test]
fn overflowing_bounds_rejected_before_sampling() {
    assert!(Bounds::from_pairs(&[(-1e308, 1e308), (0.0, 1.0)]).is_err());
}

// -- Manifolds --

#[test]
fn every_manifold_samples_with_default_bounds() {
    for kind in ["circle", "sphere", "torus", "two_circles"] {
        let spec = ManifoldSpec::from_kind(kind).unwrap();
        let manifold = Manifold::from_spec(&spec).unwrap();
        let bounds = manifold.default_bounds();
        for strategy in [Strategy::Random, Strategy::Regular] {
            let points = generate(strategy, &manifold, 64, &bounds, 0.01, seeded_rng(5));
            let points = collect(points.unwrap());
            assert!(!points.is_empty(), "{kind} {strategy}");
            assert!(points.iter().all(|p| p.dim() == 3));
        }
    }
}

#[test]
fn noise_free_sphere_points_have_unit_norm() {
    let spec = ManifoldSpec::from_kind("sphere").unwrap();
    let manifold = Manifold::from_spec(&spec).unwrap();
    let points = random(&manifold, 200, &manifold.default_bounds(), 0.0, 8);
    for p in &points {
        let norm = p.iter().map(|c| c * c).sum::<f64>().sqrt();
        assert_abs_diff_eq!(norm, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn sampler_types_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Manifold>();
    assert_send_sync::<GridIndices>();
    assert_send_sync::<SampleError<cloudgen_core::error::ParamCountError>>();
    assert_send_sync::<RandomPoints<Manifold, rand_chacha::ChaCha8Rng>>();
    assert_send_sync::<RegularPoints<Manifold, rand_chacha::ChaCha8Rng>>();
}
