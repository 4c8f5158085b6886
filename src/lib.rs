pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod library;
}
pub mod pricing;
pub mod utils {
    pub mod date;
    pub mod logging;
}
