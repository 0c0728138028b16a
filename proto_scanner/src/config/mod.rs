//! Configuration: compile-time limits and runtime preferences
//!
//! Hard limits (maximum line length, symbol table capacity, nesting
//! depth) are baked in at build time from `config/<profile>.toml` by the
//! build script and exposed under [`compile_time`]. Behavior toggles that
//! may vary per run live in [`runtime`].

// Generated by build.rs from the selected build profile
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod runtime;

pub mod build_info {
    /// Name of the TOML profile the limits were generated from
    pub fn build_profile() -> &'static str {
        option_env!("PROTOSCAN_BUILD_PROFILE").unwrap_or("development")
    }
}
