//! Host-agnostic CORS policy evaluation.
//!
//! The engine turns a frozen [`CorsOptions`] plus a borrowed [`RequestContext`]
//! into a [`CorsDecision`]: either headers to merge into the downstream
//! response, or a terminal `204` preflight response the host must apply before
//! routing continues.

pub mod constants;

mod allowed_headers;
mod allowed_methods;
mod context;
mod cors;
mod exposed_headers;
mod header_builder;
mod headers;
mod options;
mod origin;
mod result;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::{HeaderNameView, RequestContext};
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use options::CorsOptions;
pub use origin::{
    AsyncOriginPredicateFn, MatchOutcome, Origin, OriginPredicateFn, OriginRule, PatternError,
};
pub use result::{CorsDecision, PreflightResult, SimpleResult};
