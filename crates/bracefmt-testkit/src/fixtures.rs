//! Argument fixtures shared by integration tests

use bracefmt_core::{Args, NamedArgs};

/// `["Hello", "world"]`
pub fn greeting_args() -> Args {
    Args::new().with("Hello").with("world")
}

/// `["string", 1, 3.3]`: one value of every kind
pub fn mixed_args() -> Args {
    Args::new().with("string").with(1).with(3.3)
}

/// `{first: "string", second: 1, third: 3.3}`
pub fn mixed_named() -> NamedArgs {
    NamedArgs::new()
        .with("first", "string")
        .with("second", 1)
        .with("third", 3.3)
}
