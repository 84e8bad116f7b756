pub mod a001_standard;
