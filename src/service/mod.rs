pub mod controller;
pub mod operation;
pub mod system;

#[cfg(test)]
pub mod fake;
