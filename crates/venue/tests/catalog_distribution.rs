//! Statistical validation of the weighted event draw
//!
//! Verifies the empirical frequency of each kind converges to
//! weight / Σ weights using a chi-square goodness-of-fit test.

use hermes_venue::{EventCatalog, EventKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;

const N_SAMPLES: usize = 100_000;

/// Chi-square critical value for 6 degrees of freedom at p = 0.001
const CHI_SQUARE_CRITICAL_6DF: f64 = 22.458;

/// Chi-square critical value for 1 degree of freedom at p = 0.001
const CHI_SQUARE_CRITICAL_1DF: f64 = 10.828;

fn chi_square(catalog: &EventCatalog, counts: &HashMap<EventKind, usize>, n: usize) -> f64 {
    catalog
        .kinds()
        .map(|kind| {
            let expected = catalog.probability(kind) * n as f64;
            let observed = *counts.get(&kind).unwrap_or(&0) as f64;
            (observed - expected).powi(2) / expected
        })
        .sum()
}

fn draw_counts(catalog: &EventCatalog, seed: u64) -> HashMap<EventKind, usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts = HashMap::new();
    for _ in 0..N_SAMPLES {
        *counts.entry(catalog.next(&mut rng)).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_default_weights_pass_chi_square() {
    let catalog = EventCatalog::default();
    let counts = draw_counts(&catalog, 42);

    let statistic = chi_square(&catalog, &counts, N_SAMPLES);

    println!("Event kind frequencies over {} draws:", N_SAMPLES);
    for kind in catalog.kinds() {
        println!(
            "  {:<20} expected {:.4}, observed {:.4}",
            kind.name(),
            catalog.probability(kind),
            counts[&kind] as f64 / N_SAMPLES as f64
        );
    }
    println!("  chi-square = {:.3}", statistic);

    assert_eq!(counts.len(), 7, "every kind should be drawn");
    assert!(
        statistic < CHI_SQUARE_CRITICAL_6DF,
        "chi-square {:.3} exceeds critical value {}",
        statistic,
        CHI_SQUARE_CRITICAL_6DF
    );
}

#[test]
fn test_fractional_weights_pass_chi_square() {
    let catalog = EventCatalog::new([(EventKind::Auth, 0.3), (EventKind::System, 0.7)]).unwrap();
    let counts = draw_counts(&catalog, 7);

    let statistic = chi_square(&catalog, &counts, N_SAMPLES);
    assert!(
        statistic < CHI_SQUARE_CRITICAL_1DF,
        "chi-square {:.3} exceeds critical value {}",
        statistic,
        CHI_SQUARE_CRITICAL_1DF
    );
}

#[test]
fn test_each_frequency_within_tolerance() {
    let catalog = EventCatalog::default();
    let counts = draw_counts(&catalog, 1234);

    for kind in catalog.kinds() {
        let observed = counts[&kind] as f64 / N_SAMPLES as f64;
        // five standard errors of a binomial proportion
        let p = catalog.probability(kind);
        let tolerance = 5.0 * (p * (1.0 - p) / N_SAMPLES as f64).sqrt();
        approx::assert_abs_diff_eq!(observed, p, epsilon = tolerance);
    }
}
