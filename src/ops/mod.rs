pub mod form;
pub mod sections;
