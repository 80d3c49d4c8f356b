pub mod limit;
pub mod parse;

#[cfg(test)]
pub mod fixture;
