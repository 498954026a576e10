//! Static site generator for the Northgate school website.

mod assets;
pub mod components;
mod config;
pub mod content;
pub mod nav;
pub mod pages;
mod site;
mod util;

pub use assets::{ASSETS, write_assets};
pub use config::Config;
pub use nav::{
    MenuEvent, MenuState, NavLink, active_links, close_menu, compute_active, toggle_menu,
};
pub use site::{SiteOptions, SiteReport, generate_site, render_route};
pub use util::{href, route_file, validate_route};
