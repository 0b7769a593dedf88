pub mod detail;
pub mod list;
pub mod login;

pub use detail::{DeleteRequest, DetailError, DetailState, DetailView, SaveRequest};
pub use list::ListView;
pub use login::{LoginField, LoginForm};
