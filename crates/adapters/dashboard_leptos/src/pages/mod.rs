mod not_found;
mod payment_cancel;
mod payment_success;
mod services;

pub use not_found::NotFound;
pub use payment_cancel::PaymentCancel;
pub use payment_success::PaymentSuccess;
pub use services::Services;
