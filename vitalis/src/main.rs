//! Check the health of the repositories behind your Python and JavaScript dependencies.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::Write;
use std::io::{stderr, stdout};
use vitalis_lib::{Host, run};

/// Default host that writes to the real standard streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }
}

#[tokio::main]
#[cfg_attr(coverage_nightly, coverage(off))]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}
