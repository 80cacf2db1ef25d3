pub mod mediator;
pub mod render;
pub mod state;
pub mod timers;

#[cfg(test)]
mod tests;
