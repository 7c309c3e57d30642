//! Task commands

mod add;
mod delete;
mod get;
mod update;

pub use add::AddTask;
pub use delete::DeleteTask;
pub use get::GetTask;
pub use update::UpdateTask;
