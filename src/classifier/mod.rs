pub mod model;
pub mod selector;

pub use model::{GestureModel, ModelError};
pub use selector::{select, SelectionError};
