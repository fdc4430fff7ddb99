//! Integration tests, compiled as a single test binary.


mod cli_test;
mod targeted_test;
