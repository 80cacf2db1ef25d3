// Pokebattle Schema - Shared record definitions
// This crate holds the plain data handed across the engine boundary: which
// side a combatant fights for, and the records roster population feeds in.

// Re-export the main types
pub use records::*;
pub use side::*;

pub mod records;
pub mod side;
