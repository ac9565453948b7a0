mod builders;
mod mock_lookup;

pub use builders::*;
pub use mock_lookup::*;
