mod groq;

pub use groq::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GroqProvider};
