pub mod clipboard;
pub mod components;
pub mod pages;
pub mod shell;
pub mod templates;
pub mod theme;
