pub mod distribute;
pub mod output;
