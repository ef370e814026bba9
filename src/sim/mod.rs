pub mod export;
pub mod heat_transfer;
pub mod materials;
pub mod observer;
pub mod progress;
pub mod recorder;
