mod config_field;
mod query;

pub use config_field::{run_get_field, run_set_field};
pub use query::{run_info, run_list};
