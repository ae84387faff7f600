// Smoke check constants (ADR: No magic values)

/// Greeting the bundled `hello` program prints and the default expectation
pub const DEFAULT_GREETING: &str = "안녕하세요";

/// Name of the bundled greeting program (without platform suffix)
pub const DEFAULT_PROGRAM_NAME: &str = "hello";

/// Process exit code when the expectation is met
pub const EXIT_PASS: u8 = 0;

/// Process exit code when the program ran but stdout missed the expectation
pub const EXIT_ASSERTION_FAILURE: u8 = 1;

/// Process exit code when the program could not be run or input was invalid
pub const EXIT_EXECUTION_FAILURE: u8 = 2;
