//! Custom widget components

mod content;
mod footer;
mod header;
mod toast;
mod toc;

pub use content::ContentView;
pub use footer::Footer;
pub use header::Header;
pub use toast::ToastView;
pub use toc::Toc;
