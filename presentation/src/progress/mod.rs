//! Progress reporting while result lists are fetched

pub mod reporter;
