pub mod app;
pub mod bridge;
pub mod config;
pub mod dto;
pub mod routes;
pub mod store;

pub mod components {
    pub mod app_shell;
    pub mod not_found;
    pub mod symbol_sidebar;
}

pub mod pages {
    pub mod home;
}
