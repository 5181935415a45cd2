mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod account;
pub use account::Account;
