pub mod canonicalize;
pub mod resolve;
pub mod validate;
pub mod vocabularies;
