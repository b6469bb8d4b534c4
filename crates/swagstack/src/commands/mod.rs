pub mod check;
pub mod plan;
pub mod site;
pub mod smoke;
pub mod state;
pub mod up;
pub mod validate;
