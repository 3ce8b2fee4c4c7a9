pub mod catalog;
pub mod criteria;
pub mod index;
pub mod model;
pub mod normalize;
pub mod persist;
pub mod scorer;
pub mod search;
pub mod similarity;
pub mod voice;

pub use catalog::Catalog;
pub use criteria::{CriteriaError, RawCriteria, SearchCriteria};
pub use index::CatalogIndex;
pub use model::{PropertyId, PropertyRecord, PropertyType, ScoredProperty};
pub use search::{search, SearchEngine};
