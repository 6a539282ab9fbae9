pub mod abstract_factory;
pub mod builder;
pub mod factory;
pub mod lazy_evaluation;
pub mod pool;
pub mod prototype;
pub mod singleton;
