//! Configuration access port trait.
//!
//! Numeric trade fields are fetched as raw strings so the form layer can
//! distinguish an absent value from zero and strip thousands separators.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool;
}
