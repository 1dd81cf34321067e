//! Environment variables read by kwscan.

/// Variable names, generated by the build script.
pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

/// True when `name` is set to any value, including empty.
pub fn is_set(name: &str) -> bool {
    std::env::var_os(name).is_some()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
