//! UI Components
//!
//! Presenters for the catalog shell. They hold no business state and
//! report user actions through callbacks.

mod delete_confirm_button;
mod notice_banner;
mod product_card;
mod product_form;
mod product_list;
mod search_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use notice_banner::NoticeBanner;
pub use product_card::ProductCard;
pub use product_form::ProductForm;
pub use product_list::ProductList;
pub use search_bar::SearchBar;
