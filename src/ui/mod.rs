/// UI module exports
pub mod components;
pub mod popup;
pub mod rank;
pub mod search;
pub mod settings;
pub mod track;
