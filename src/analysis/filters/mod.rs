pub mod trimmer;
pub mod stopword;
pub mod stemmer;
