pub mod normalizer;
pub mod response_common;

#[cfg(test)]
mod tests;
