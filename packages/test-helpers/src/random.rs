use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// Returns a random alphanumeric string of a certain size.
#[must_use]
pub fn string(size: usize) -> String {
    thread_rng().sample_iter(&Alphanumeric).take(size).map(char::from).collect()
}

/// Returns a random e-mail address in the `example.com` domain.
#[must_use]
pub fn email() -> String {
    format!("{}@example.com", string(12).to_lowercase())
}
