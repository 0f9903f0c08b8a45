use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use salesman::data::{is_permutation, CityCatalog, Position, Tour};
use salesman::objectives::{DistanceCache, FitnessEvaluator};
use salesman::operators::default::{order_crossover, swap_mutation, DefaultOperators};
use salesman::optimizers::reproduction::reproduce;
use salesman::optimizers::selection::{select, FitnessKey, MatingPool};

fn random_catalog(cities: usize, rng: &mut StdRng) -> CityCatalog {
    (0..cities)
        .map(|_| Position::new(rng.random_range(0.0..20.0), rng.random_range(0.0..20.0)))
        .collect()
}

fn square() -> CityCatalog {
    let corners: Vec<(f64, f64)> = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
    corners.into_iter().collect()
}

#[test]
fn distances_are_symmetric_and_memoized() {
    let mut rng = StdRng::seed_from_u64(7);
    let catalog = random_catalog(25, &mut rng);
    let mut cache = DistanceCache::new();
    for (a, b) in catalog.ids().tuple_combinations() {
        let forward = cache.distance(&catalog, a, b);
        let size = cache.len();
        let backward = cache.distance(&catalog, b, a);
        assert_eq!(forward, backward);
        assert_eq!(cache.len(), size);
        assert_eq!(forward, catalog[a].distance(&catalog[b]));
    }
    assert_eq!(cache.len(), 25 * 24 / 2);
    for (a, b) in catalog.ids().tuple_combinations() {
        cache.distance(&catalog, b, a);
    }
    assert_eq!(cache.len(), 25 * 24 / 2);
}

#[test]
fn same_city_distance_is_not_cached() {
    let catalog = square();
    let mut cache = DistanceCache::new();
    assert_eq!(cache.distance(&catalog, 2, 2), 0.0);
    assert!(cache.is_empty());
}

#[test]
fn tour_length_closes_the_cycle() {
    let catalog = square();
    let mut cache = DistanceCache::new();
    let mut evaluator = FitnessEvaluator::new(&catalog, &mut cache);
    assert_eq!(evaluator.tour_length(&[0, 1, 2, 3]), 40.0);
    assert_eq!(evaluator.tour_length(&[2, 1, 0, 3]), 40.0);
    let crossing = evaluator.tour_length(&[0, 2, 1, 3]);
    assert!((crossing - (20.0 + 2.0 * 200f64.sqrt())).abs() < 1e-9);
    assert_eq!(cache.len(), 6);
}

#[test]
fn order_crossover_keeps_permutations() {
    let mut rng = StdRng::seed_from_u64(11);
    for cities in [2, 3, 5, 10, 100] {
        for _ in 0..50 {
            let mut first: Tour = (0..cities).collect();
            let mut second: Tour = (0..cities).collect();
            first.shuffle(&mut rng);
            second.shuffle(&mut rng);
            let child = order_crossover(&first, &second, &mut rng);
            assert!(is_permutation(&child, cities), "{child:?}");
            // 至少保留了第一个亲本切片中的一个城市在原位
            assert!(child.iter().zip(&first).any(|(a, b)| a == b));
        }
    }
}

#[test]
fn order_crossover_of_identical_parents_is_a_copy() {
    let mut rng = StdRng::seed_from_u64(3);
    let parent: Tour = vec![4, 2, 0, 3, 1];
    for _ in 0..20 {
        assert_eq!(order_crossover(&parent, &parent, &mut rng), parent);
    }
}

#[test]
fn swap_mutation_moves_exactly_two_cities() {
    let mut rng = StdRng::seed_from_u64(5);
    for cities in [2, 7, 100] {
        let original: Tour = (0..cities).collect();
        let mut tour = original.clone();
        let (i, j) = swap_mutation(&mut tour, &mut rng).expect("至少有两个城市");
        assert_ne!(i, j);
        assert!(is_permutation(&tour, cities));
        let moved = tour.iter().zip(&original).filter(|(a, b)| a != b).count();
        assert_eq!(moved, 2);
    }
    let mut single = vec![0];
    assert_eq!(swap_mutation(&mut single, &mut rng), None);
}

#[test]
fn selection_groups_by_exact_length() {
    let catalog = square();
    let mut cache = DistanceCache::new();
    let population: Vec<Tour> = vec![
        vec![0, 2, 1, 3],
        vec![0, 1, 2, 3],
        vec![0, 2, 1, 3],
        vec![0, 1, 2, 3],
    ];
    let (length, pool) = select(&population, &mut cache, &catalog);
    assert_eq!(length, 40.0);
    assert_eq!(pool.len(), 2);
    assert_eq!(pool.total(), 4);
    let (key, tours) = pool.best().unwrap();
    assert_eq!(key, FitnessKey::new(40.0));
    assert_eq!(tours, &[vec![0, 1, 2, 3], vec![0, 1, 2, 3]]);
    // 输入的种群保持不变
    assert_eq!(population[0], vec![0, 2, 1, 3]);
}

#[test]
fn nearly_equal_lengths_stay_in_separate_groups() {
    let mut pool = MatingPool::new();
    pool.push(0.1 + 0.2, vec![0, 1]);
    pool.push(0.3, vec![1, 0]);
    pool.push(0.3, vec![0, 1]);
    assert_eq!(pool.len(), 2);
    assert_eq!(pool.get(FitnessKey::new(0.3)).unwrap().len(), 2);
    let keys: Vec<f64> = pool.iter().map(|(key, _)| key.length()).collect();
    assert_eq!(keys, vec![0.3, 0.1 + 0.2]);
}

#[test]
fn extending_a_group_skips_tours_already_in_it() {
    let mut pool = MatingPool::new();
    pool.push(4.0, vec![0, 1, 2]);
    pool.push(4.0, vec![0, 1, 2]);
    let key = FitnessKey::new(4.0);
    pool.extend_group(key, vec![vec![0, 1, 2], vec![2, 1, 0], vec![2, 1, 0]]);
    assert_eq!(
        pool.get(key).unwrap(),
        &[vec![0, 1, 2], vec![0, 1, 2], vec![2, 1, 0]]
    );
    pool.extend_group(FitnessKey::new(5.0), vec![vec![1, 0, 2]]);
    assert_eq!(pool.len(), 2);
    assert_eq!(pool.total(), 4);
}

#[test]
fn reproduction_keeps_permutations() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut operators = DefaultOperators {
        crossover_rate: 1.0,
        mutation_rate: 1.0,
    };
    for cities in [2, 4, 30, 100] {
        let catalog = random_catalog(cities, &mut rng);
        let mut cache = DistanceCache::new();
        let mut population: Vec<Tour> = (0..10)
            .map(|_| {
                let mut tour: Tour = catalog.ids().collect();
                tour.shuffle(&mut rng);
                tour
            })
            .collect();
        for _ in 0..20 {
            let (_, pool) = select(&population, &mut cache, &catalog);
            population = reproduce(&pool, 10, &mut operators, &mut rng);
            assert_eq!(population.len(), 10);
            for tour in &population {
                assert!(catalog.is_tour(tour));
            }
        }
    }
}

#[test]
fn single_tour_pool_still_fills_the_population() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut pool = MatingPool::new();
    pool.push(12.5, vec![3, 1, 0, 2]);
    let mut operators = DefaultOperators::default();
    let children = reproduce(&pool, 10, &mut operators, &mut rng);
    assert_eq!(children.len(), 10);
    for child in &children {
        assert!(is_permutation(child, 4));
    }
}

#[test]
fn catalog_from_positions() {
    let catalog: CityCatalog = vec![Position::new(1.0, 2.0), Position::new(3.0, 4.0)]
        .into_iter()
        .collect();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.position(1), Some(&Position::new(3.0, 4.0)));
    assert_eq!(catalog.position(2), None);
    assert!(catalog.is_tour(&[1, 0]));
    assert!(!catalog.is_tour(&[1, 1]));
    assert!(!catalog.is_tour(&[0, 2]));
    assert!(!catalog.is_tour(&[0]));
}
