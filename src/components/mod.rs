pub mod copy_panel;
pub mod icons;
pub mod payment_list;
pub mod qr_panel;
pub mod theme_toggle;
pub mod toast;

pub use payment_list::PaymentList;
pub use theme_toggle::ThemeToggle;
pub use toast::use_toast;
