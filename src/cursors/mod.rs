pub mod text;
pub mod token;

pub use text::TextCursor;
pub use token::TokenCursor;
