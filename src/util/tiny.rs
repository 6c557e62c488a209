use rand::SeedableRng;
use rand_xoshiro::Xoroshiro64StarStar;

/// The rng used by the binaries: seeded when a seed is given, from entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> Xoroshiro64StarStar {
    match seed {
        Some(seed) => Xoroshiro64StarStar::seed_from_u64(seed),
        None => Xoroshiro64StarStar::from_entropy(),
    }
}

/// A fixed-seed rng, for reproducible tests.
pub fn consistent_rng() -> Xoroshiro64StarStar {
    seeded_rng(Some(0))
}
