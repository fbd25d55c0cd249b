pub mod ghost;
