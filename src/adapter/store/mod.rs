#[cfg(test)]
pub mod memory;
pub mod pg;
