mod loading;
mod notice;
mod service_card;
mod toast;

pub use loading::Loading;
pub use notice::Notice;
pub use service_card::ServiceCard;
pub use toast::{ToastContainer, use_toasts};
