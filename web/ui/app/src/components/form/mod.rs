mod email_input;
mod line_list;
mod password_input;
mod text_input;

pub use email_input::EmailInput;
pub use line_list::LineList;
pub use password_input::PasswordInput;
pub use text_input::TextInput;
