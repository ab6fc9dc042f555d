//! Retrieves information about the version of the crate from Git and the build
//! environment so it can be reported at runtime by the demo shell.

fn main() -> shadow_rs::SdResult<()> {
    shadow_rs::new()
}
