pub mod history;
pub mod inspect;
pub mod prove;
