pub mod u501_load_files;
