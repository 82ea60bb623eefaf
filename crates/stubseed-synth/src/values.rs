use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Random scalar provider consumed by the synthesizer.
pub trait ValueFaker: Send {
    /// Random text of at most `max_len` bytes.
    fn text(&mut self, max_len: usize) -> String;
    /// Syntactically valid random email address.
    fn email(&mut self) -> String;
    /// Uniformly random boolean.
    fn boolean(&mut self) -> bool;
    /// Random image URL.
    fn image_url(&mut self) -> String;
    /// Uniformly random integer in `[0, max]`.
    fn integer(&mut self, max: i64) -> i64;
}

/// [`ValueFaker`] backed by the `fake` crate over an injected RNG.
#[derive(Debug, Clone)]
pub struct FakeValues<R: Rng> {
    rng: R,
}

impl FakeValues<ChaCha8Rng> {
    /// Deterministic provider for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Provider seeded from process entropy.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }
}

impl<R: Rng> FakeValues<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> ValueFaker for FakeValues<R> {
    fn text(&mut self, max_len: usize) -> String {
        let mut value: String = Sentence(3..8).fake_with_rng(&mut self.rng);
        truncate_on_boundary(&mut value, max_len);
        value
    }

    fn email(&mut self) -> String {
        SafeEmail().fake_with_rng(&mut self.rng)
    }

    fn boolean(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    fn image_url(&mut self) -> String {
        format!(
            "https://picsum.photos/seed/{}/640/480",
            self.rng.random::<u32>()
        )
    }

    fn integer(&mut self, max: i64) -> i64 {
        self.rng.random_range(0..=max)
    }
}

fn truncate_on_boundary(value: &mut String, max_len: usize) {
    if value.len() <= max_len {
        return;
    }
    let mut end = max_len;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    value.truncate(end);
}

/// Deterministic credential hasher for password placeholder columns.
pub trait CredentialHasher: Send {
    fn hash(&self, plaintext: &str) -> String;
}

/// SHA-256 hasher with a fixed salt.
///
/// Same plaintext and salt always produce the same digest, which keeps
/// password columns reproducible and never plaintext.
#[derive(Debug, Clone)]
pub struct Sha256Hasher {
    salt: String,
}

impl Sha256Hasher {
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new("stubseed")
    }
}

impl CredentialHasher for Sha256Hasher {
    fn hash(&self, plaintext: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.salt.as_bytes());
        hasher.update(b"$");
        hasher.update(plaintext.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_yields_identical_values() {
        let mut a = FakeValues::from_seed(42);
        let mut b = FakeValues::from_seed(42);

        assert_eq!(a.email(), b.email());
        assert_eq!(a.text(50), b.text(50));
        assert_eq!(a.integer(9999), b.integer(9999));
    }

    #[test]
    fn text_respects_length_bound() {
        let mut faker = FakeValues::from_seed(7);
        for _ in 0..20 {
            assert!(faker.text(50).len() <= 50);
        }
    }

    #[test]
    fn integer_stays_in_range() {
        let mut faker = FakeValues::from_seed(3);
        for _ in 0..200 {
            let value = faker.integer(9999);
            assert!((0..=9999).contains(&value));
        }
    }

    #[test]
    fn hasher_is_deterministic_and_salted() {
        let hasher = Sha256Hasher::default();
        assert_eq!(hasher.hash("secret"), hasher.hash("secret"));
        assert_ne!(hasher.hash("secret"), hasher.hash("other"));
        assert_ne!(
            hasher.hash("secret"),
            Sha256Hasher::new("pepper").hash("secret")
        );
    }
}
