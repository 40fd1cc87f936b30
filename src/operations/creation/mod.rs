mod make_catenary;

pub use make_catenary::{generate, MakeCatenary};
