//! Reusable UI components

pub mod brand;
pub mod chat_input;
pub mod chat_message;
pub mod chat_widget;
pub mod history_bar;
pub mod loading;
pub mod result_card;

pub use brand::{BrandPanel, Footer};
pub use chat_input::ChatInput;
pub use chat_message::ChatMessage;
pub use chat_widget::ChatWidget;
pub use history_bar::HistoryBar;
pub use loading::{LoadingDots, SearchingIndicator};
pub use result_card::ResultCard;
