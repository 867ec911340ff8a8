// Library exports for testing
// The binaries in src/bin import these as well

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;
