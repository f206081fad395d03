// Landing page sections

mod about;
mod contact;
mod footer;
mod heading;
mod hero;
mod icons;
mod nav;
mod services;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use services::Services;
