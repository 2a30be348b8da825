pub mod check;
pub mod grouping;
pub mod links;
pub mod task_ops;
