pub mod card;
pub mod collapsible_card;
pub mod common;
pub mod data;
pub mod header;
pub mod icon;
pub mod layout;
pub mod page;
pub mod status;
pub mod table_view;
pub mod toast;
