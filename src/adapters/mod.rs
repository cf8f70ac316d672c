// Adapters layer: concrete implementations of the domain ports.

pub mod emailjs;
pub mod notify;

pub use emailjs::EmailJsClient;
pub use notify::TracingNotifier;
