mod user_actor;
#[cfg(test)]
mod tests;

pub use user_actor::{ActorReport, UserActor};
