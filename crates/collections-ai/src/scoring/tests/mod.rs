mod common;

mod prediction;
mod recommend;
mod recovery;
