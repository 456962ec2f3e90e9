//! `gw-route` — visit every must-visit cell once, then stop at the cheapest
//! terminal.
//!
//! # Pipeline
//!
//! ```text
//! RouteOptimizer::optimize(query, oracle, observer)
//!   ① Preconditions — terminals non-empty, every point inside the grid.
//!   ② Direct        — empty must-visit set: one multi-target search.
//!   ③ Prime         — oracle computes all ordered pairs of interest.
//!   ④ Order         — exact bitmask DP (k ≤ threshold) or greedy (k > threshold).
//!   ⑤ Stitch        — concatenate cached legs into one continuous Path.
//!   ⑥ Check         — path covers the must-visit set and ends on a terminal.
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`config`]    | `RouteConfig`                                          |
//! | [`query`]     | `RouteQuery`                                           |
//! | [`optimizer`] | `RouteOptimizer`, `RoutePlan`, `Strategy`              |
//! | [`observer`]  | `RouteObserver`, `NoopObserver`, `TracingObserver`     |
//! | [`error`]     | `RouteError`, `RouteResult<T>`                         |

pub mod config;
pub mod error;
pub mod observer;
pub mod optimizer;
pub mod query;

mod exact;
mod greedy;
mod legs;


pub use config::RouteConfig;
pub use error::{RouteError, RouteResult};
pub use observer::{NoopObserver, RouteObserver, TracingObserver};
pub use optimizer::{RouteOptimizer, RoutePlan, Strategy};
pub use query::RouteQuery;
