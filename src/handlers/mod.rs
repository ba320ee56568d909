pub mod nutrition;

pub use nutrition::NutritionHandler;
