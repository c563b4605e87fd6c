//! Landing page components

mod contact_form;
mod toast;

pub use contact_form::ContactForm;
pub use toast::{provide_toasts, Toaster, Toasts};
