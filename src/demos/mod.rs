//! Demonstration corpus. Each module exposes an entry function registered
//! in the runner's artifact table; the bodies only print what the pattern
//! does and are free to fail like any other example code.

pub mod behavioral;
pub mod creational;
