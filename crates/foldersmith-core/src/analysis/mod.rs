/// Analysis modules — extension categories and recommendation heuristics.

pub mod file_types;
pub mod recommend;

pub use file_types::{extension_key, ExtensionCategoryMap, FileCategory};
pub use recommend::{generate_recommendations, recommended_approach, Recommendation};
