//! Bundled greeting program: prints the greeting and exits 0

use hello_smoke_core::application::constants::DEFAULT_GREETING;

fn main() {
    println!("{}", DEFAULT_GREETING);
}
