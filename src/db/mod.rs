pub mod catalog;
pub mod mongo;
pub mod sales;
