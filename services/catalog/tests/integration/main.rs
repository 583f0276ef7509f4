mod helpers;

mod shelf_test;
mod vinyl_test;
