#![deny(warnings)]

pub mod clock;
pub mod fixed;
pub mod fps;
pub mod game_loop;
pub mod interpolated;
pub mod variable;
