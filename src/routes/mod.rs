pub mod health;
pub mod trpc;
