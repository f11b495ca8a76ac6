pub mod mojang;
pub mod ranked;
pub mod report;
pub mod settings;
pub mod splits;
pub mod stats;
pub mod time;
