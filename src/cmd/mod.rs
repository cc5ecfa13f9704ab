pub mod corpus;
pub mod encrypt;
pub mod score;
pub mod solve;
