pub mod p001_standards_view;
