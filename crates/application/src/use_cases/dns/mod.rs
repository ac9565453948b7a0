mod resolve_query;
mod zone_candidates;

pub use resolve_query::{ResolveQueryUseCase, ZoneResolution};
pub use zone_candidates::zone_candidates;
