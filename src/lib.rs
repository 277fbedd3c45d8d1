#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

pub mod history;

mod location;
mod matcher;
mod navigator;
mod router;
mod routes;

pub use location::{Location, LocationStore, LocationSubscription};
pub use matcher::{match_path, ExtractedParam, MatchResult};
pub use navigator::Navigator;
pub use router::Router;
pub use routes::{Route, RouteSet, ViewFn};

/// A collection of useful items most applications might need.
pub mod prelude {
    pub use crate::history::*;
    pub use crate::{
        match_path, ExtractedParam, Location, LocationStore, LocationSubscription, MatchResult,
        Navigator, Route, RouteSet, Router, ViewFn,
    };
}
