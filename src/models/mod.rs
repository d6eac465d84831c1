pub mod appointment;
pub mod cart;
pub mod doctor;
pub mod enums;
pub mod history;
pub mod medicine;

pub use appointment::*;
pub use cart::*;
pub use doctor::*;
pub use enums::*;
pub use history::*;
pub use medicine::*;
