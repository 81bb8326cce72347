pub mod primes;
pub mod rng;
