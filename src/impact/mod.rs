pub mod loader;
pub mod numeric;
pub mod types;

pub use loader::{load_candidates, parse_candidates, InputFormat};
pub use numeric::{is_numeric, numeric_value};
pub use types::{Candidate, ImpactBundle};
