// mezzpress-cli/src/config.rs
//
// Built-in defaults for the command-line surface. The core library takes
// its configuration explicitly; these constants exist only to fill in
// omitted arguments.

/// Directory scanned when no root argument is given.
pub const DEFAULT_INPUT_DIR: &str = "./videos";
