pub mod classification;
pub mod compose;
pub mod recipe;

pub use classification::ProjectClassification;
pub use compose::OrchestrationDocument;
pub use recipe::RecipeParameters;
