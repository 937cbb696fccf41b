//! Literate background reading, built only for `cargo doc`.

pub mod shacrypt;
