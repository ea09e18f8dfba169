pub mod othello;
pub mod score_server;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::{
            cell::RefCell,
            ops::Add,
            rc::Rc
        };
    }
}

pub mod prelude {
    pub use super::othello::prelude::*;
    pub use super::score_server::*;
    pub use super::utils::prelude::*;
}
