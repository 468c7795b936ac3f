mod filter;
mod form;
mod form_error;
mod user;

pub use filter::UserFilter;
pub use form::{SearchForm, UserForm};
pub use form_error::FormError;
pub use user::{NewUser, UserRecord};
