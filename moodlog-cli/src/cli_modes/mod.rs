mod add_mode;
mod charts_mode;
mod clear_mode;
mod cli_mode;
mod dates;
mod delete_mode;
mod export_mode;
mod list_mode;

pub use add_mode::add_mode;
pub use charts_mode::charts_mode;
pub use clear_mode::clear_mode;
pub use cli_mode::CliModeResult;
pub use delete_mode::delete_mode;
pub use export_mode::export_mode;
pub use list_mode::list_mode;
