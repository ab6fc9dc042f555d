//! Classroom demonstrations of three classic AI search algorithms behind
//! plain-data APIs: depth-limited minimax with alpha-beta pruning playing the
//! Caro board game, A* pathfinding over a grid map and greedy
//! largest-degree-first graph coloring. For more information, see [README].
//!
//! [README]: https://github.com/searchlab-demos/searchlab/blob/main/README.md

pub mod caro;
pub mod coloring;
pub mod pathfind;

mod shell;
pub use shell::Shell;
use shadow_rs::shadow;

shadow!(build);

/// Returns the full crate version that can be used to identify how the binary
/// was built in the first place.
fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints information about the crate version and the build type on shell
/// startup.
pub fn print_info() {
    println!("searchlab {}", version());
    println!("<https://github.com/searchlab-demos/searchlab>");
    println!("Release build: {}", !shadow_rs::is_debug());
    println!();
}
