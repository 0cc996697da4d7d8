mod guild;
pub use guild::Guild;
