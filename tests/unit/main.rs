//! Unit test suite mirroring the src module layout

mod mosaic;
